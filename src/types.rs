// Core types and errors

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;
use thiserror::Error;

/// The result type used throughout the Namecheap SDK
pub type NamecheapResult<T> = Result<T, NamecheapError>;

/// Convert reqwest::Error to our NamecheapError
///
/// The request URL carries the API key in its query string, so it is
/// stripped from the source error before it is stored.
impl From<reqwest::Error> for NamecheapError {
    fn from(err: reqwest::Error) -> Self {
        let err = err.without_url();
        NamecheapError::RequestError {
            message: sanitize_error_message(&err.to_string()),
            status: err.status().map(|s| s.as_u16()),
            location: None,
            source: Some(Arc::new(err) as Arc<dyn std::error::Error + Send + Sync>),
        }
    }
}

/// A secure container for API keys that automatically zeroes memory when dropped
pub struct SecureApiKey {
    key: String,
}

impl SecureApiKey {
    /// Create a new secure API key
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Get a reference to the underlying key
    pub fn as_str(&self) -> &str {
        &self.key
    }
}

impl Deref for SecureApiKey {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.key
    }
}

// Implement Drop to zero memory when the key is dropped
impl Drop for SecureApiKey {
    fn drop(&mut self) {
        // Overwrite the string with zeros to remove sensitive data from memory
        unsafe {
            let bytes = self.key.as_bytes_mut();
            bytes.iter_mut().for_each(|b| *b = 0);
        }
    }
}

// Prevent accidental printing of API keys in logs/debug output
impl fmt::Debug for SecureApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecureApiKey([REDACTED])")
    }
}

impl fmt::Display for SecureApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED API KEY]")
    }
}

impl Clone for SecureApiKey {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
        }
    }
}

impl<'de> Deserialize<'de> for SecureApiKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(SecureApiKey::new)
    }
}

/// One `<Error Number="...">message</Error>` entry of a failed command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorEntry {
    /// Numeric error code, `None` if the API omitted or garbled it
    pub code: Option<u32>,
    pub message: String,
}

impl ApiErrorEntry {
    pub fn new(code: Option<u32>, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for ApiErrorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "[{}] {}", code, self.message),
            None => f.write_str(&self.message),
        }
    }
}

fn join_entries(errors: &[ApiErrorEntry]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Error, Clone)]
pub enum NamecheapError {
    /// Network failure or an HTTP error status without an API envelope
    #[error("API request failed: {message}")]
    RequestError {
        message: String,
        status: Option<u16>,
        location: Option<String>,
        source: Option<Arc<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Command {command} was cancelled")]
    Cancelled { command: String },

    /// The API answered `Status="ERROR"`
    #[error("API returned error for {command}: {}", join_entries(.errors))]
    ApiError {
        command: String,
        errors: Vec<ApiErrorEntry>,
        location: Option<String>,
    },

    /// The envelope was OK but the expected result element was missing or unreadable
    #[error("Malformed response to {command}: {message}")]
    MalformedResponse {
        command: String,
        message: String,
        location: Option<String>,
    },

    #[error("Failed to parse API response: {message}")]
    ParseError {
        message: String,
        source_text: Option<String>,
        location: Option<String>,
    },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Error numbers documented by Namecheap for the commands this crate wraps.
pub mod codes {
    pub const INVALID_USERNAME: u32 = 2011166;
    pub const TOO_MANY_DOMAINS_IN_CHECK: u32 = 2011169;
    pub const INVALID_PROMOTION_CODE: u32 = 2011170;
    pub const INVALID_TLD: u32 = 2011280;
    pub const INVALID_YEARS: u32 = 2015167;
    pub const INVALID_PHONE: u32 = 2015182;
    pub const INVALID_LOCK_ACTION: u32 = 2015278;
    pub const DOMAIN_NOT_ASSOCIATED: u32 = 2016166;
    pub const DOMAIN_NOT_FOUND: u32 = 2019166;
    pub const DOMAIN_EXPIRED: u32 = 2020166;
    pub const EDIT_PERMISSION_NOT_SUPPORTED: u32 = 2030166;
    pub const NOT_USING_PROPER_DNS: u32 = 2030288;
    pub const INVALID_NAMESERVER: u32 = 3011288;
    pub const TOO_MANY_RECORDS: u32 = 3013288;
    pub const DOMAIN_NOT_AVAILABLE: u32 = 3019166;
    pub const PROVIDER_ERROR: u32 = 3031510;
    pub const UNKNOWN_PROVIDER_ERROR: u32 = 3050900;
    pub const TOO_MANY_RECORDS_DB: u32 = 4013288;
    pub const DOMAIN_NOT_AVAILABLE_DB: u32 = 4019166;
    pub const UNABLE_TO_GET_NAMESERVERS: u32 = 4022288;
    pub const UNABLE_TO_GET_EMAIL_FORWARDING: u32 = 4022328;
    pub const UNABLE_TO_GET_DNS_HOSTS: u32 = 4023330;
    pub const UNHANDLED_EXCEPTION: u32 = 5050900;
}

impl NamecheapError {
    pub fn request_error<T: Into<String>>(
        message: T,
        status: Option<u16>,
        source: Option<impl std::error::Error + Send + Sync + 'static>,
        location: Option<&str>,
    ) -> Self {
        let error = Self::RequestError {
            message: sanitize_error_message(&message.into()),
            status,
            location: location.map(String::from),
            source: source.map(|e| Arc::new(e) as Arc<dyn std::error::Error + Send + Sync>),
        };
        error.log();
        error
    }

    pub fn api_error(
        command: impl Into<String>,
        errors: Vec<ApiErrorEntry>,
        location: Option<&str>,
    ) -> Self {
        let error = Self::ApiError {
            command: command.into(),
            errors,
            location: location.map(String::from),
        };
        error.log();
        error
    }

    pub fn malformed_response(
        command: impl Into<String>,
        message: impl Into<String>,
        location: Option<&str>,
    ) -> Self {
        let error = Self::MalformedResponse {
            command: command.into(),
            message: message.into(),
            location: location.map(String::from),
        };
        error.log();
        error
    }

    pub fn parse_error<T: Into<String>>(
        message: T,
        source_text: Option<String>,
        location: Option<&str>,
    ) -> Self {
        let error = Self::ParseError {
            message: message.into(),
            source_text,
            location: location.map(String::from),
        };
        error.log();
        error
    }

    pub fn cancelled(command: impl Into<String>) -> Self {
        Self::Cancelled {
            command: command.into(),
        }
    }

    fn log(&self) {
        if let Some(loc) = self.location() {
            log::error!("{} at {}", self, loc);
        } else {
            log::error!("{}", self);
        }
    }

    pub fn location(&self) -> Option<&str> {
        match self {
            Self::RequestError { location, .. } => location.as_deref(),
            Self::ApiError { location, .. } => location.as_deref(),
            Self::MalformedResponse { location, .. } => location.as_deref(),
            Self::ParseError { location, .. } => location.as_deref(),
            _ => None,
        }
    }

    pub fn source_error(&self) -> Option<&(dyn std::error::Error + Send + Sync)> {
        match self {
            Self::RequestError { source, .. } => source.as_ref().map(|s| s.as_ref()),
            _ => None,
        }
    }

    /// The structured error list of an `ApiError`, empty for every other variant
    pub fn api_errors(&self) -> &[ApiErrorEntry] {
        match self {
            Self::ApiError { errors, .. } => errors,
            _ => &[],
        }
    }

    pub fn codes(&self) -> Vec<u32> {
        self.api_errors().iter().filter_map(|e| e.code).collect()
    }

    pub fn has_code(&self, code: u32) -> bool {
        self.api_errors().iter().any(|e| e.code == Some(code))
    }

    pub fn is_not_found(&self) -> bool {
        self.has_code(codes::DOMAIN_NOT_FOUND)
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }
}

/// Create a request error with location info
#[macro_export]
macro_rules! request_error {
    ($message:expr) => {
        $crate::NamecheapError::request_error($message, None, None::<std::io::Error>, Some(concat!(file!(), ":", line!())))
    };
    ($message:expr, $status:expr) => {
        $crate::NamecheapError::request_error($message, $status, None::<std::io::Error>, Some(concat!(file!(), ":", line!())))
    };
}

/// Create a malformed-response error with location info
#[macro_export]
macro_rules! malformed_response {
    ($command:expr, $message:expr) => {
        $crate::NamecheapError::malformed_response($command, $message, Some(concat!(file!(), ":", line!())))
    };
}

lazy_static! {
    static ref API_KEY_PARAM: Regex = Regex::new(r"(?i)(ApiKey=)[^&\s]*").unwrap();
}

/// Helper function to sanitize error messages to prevent leaking the API key
pub fn sanitize_error_message(message: &str) -> String {
    API_KEY_PARAM.replace_all(message, "${1}[REDACTED]").into_owned()
}
