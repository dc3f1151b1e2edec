// Utility functions

pub mod xml_extractor;

use crate::types::*;

/// Validates a value against a constraint and returns an error if it fails
pub fn validate<T, F>(
    value: T,
    constraint: F,
    error_message: impl Into<String>,
) -> NamecheapResult<T>
where
    F: FnOnce(&T) -> bool,
{
    if constraint(&value) {
        Ok(value)
    } else {
        Err(NamecheapError::ValidationError(error_message.into()))
    }
}

/// Validates a range constraint for numeric values
pub fn validate_range<T>(
    value: T,
    min: T,
    max: T,
    param_name: &str,
) -> NamecheapResult<T>
where
    T: PartialOrd + Copy + std::fmt::Display,
{
    validate(
        value,
        |&v| v >= min && v <= max,
        format!("{} must be between {} and {}, but got {}", param_name, min, max, value),
    )
}

/// Validates a string against common constraints
pub struct StringValidator;

impl StringValidator {
    /// Validates that a string is not empty or whitespace
    pub fn not_empty(value: impl Into<String>, param_name: &str) -> NamecheapResult<String> {
        let value = value.into();
        validate(
            value,
            |s| !s.trim().is_empty(),
            format!("{} cannot be empty", param_name),
        )
    }
}

/// A domain name split into its second-level and top-level parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainParts {
    pub sld: String,
    pub tld: String,
}

impl std::fmt::Display for DomainParts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.sld, self.tld)
    }
}

/// Split `example.co.uk` into `example` and `co.uk`.
///
/// The split happens at the first dot, which is how Namecheap expects
/// multi-label TLDs to be addressed.
pub fn split_domain(domain: &str) -> NamecheapResult<DomainParts> {
    let domain = StringValidator::not_empty(domain.trim(), "domain")?;
    let domain = domain.trim_end_matches('.');
    match domain.split_once('.') {
        Some((sld, tld)) if !sld.is_empty() && !tld.is_empty() => Ok(DomainParts {
            sld: sld.to_string(),
            tld: tld.to_string(),
        }),
        _ => Err(NamecheapError::ValidationError(format!(
            "domain '{}' must have the form <sld>.<tld>",
            domain
        ))),
    }
}
