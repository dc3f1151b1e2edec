//! Utilities for reading Namecheap XML responses.
//!
//! Every response is an `ApiResponse` envelope in the
//! `http://api.namecheap.com/xml.response` namespace. This module parses the
//! envelope, turns `Status="ERROR"` into [`NamecheapError::ApiError`], and
//! hands the `CommandResponse` subtree to a [`FromXml`] decoder.

use crate::malformed_response;
use crate::types::*;
use roxmltree::{Document, Node};
use std::str::FromStr;

/// Namespace of every element in an API response
pub const API_NAMESPACE: &str = "http://api.namecheap.com/xml.response";

const MAX_SOURCE_TEXT: usize = 512;

/// Typed decoder for one command's result element.
pub trait FromXml: Sized {
    /// Local name of the element under `CommandResponse`
    const ELEMENT: &'static str;

    /// Decode the result element itself
    fn from_xml(element: &XmlElement<'_, '_>) -> NamecheapResult<Self>;

    /// Locate and decode the result inside `CommandResponse`.
    ///
    /// Override when a result spans several elements.
    fn from_command_response(response: &XmlElement<'_, '_>) -> NamecheapResult<Self> {
        let element = response.required_child(Self::ELEMENT)?;
        Self::from_xml(&element)
    }
}

/// A response element plus the command it belongs to, for error reporting.
#[derive(Clone, Copy)]
pub struct XmlElement<'a, 'input: 'a> {
    node: Node<'a, 'input>,
    command: &'a str,
}

fn has_local_name(node: &Node<'_, '_>, name: &str) -> bool {
    node.is_element()
        && node.tag_name().name() == name
        && node
            .tag_name()
            .namespace()
            .map_or(true, |ns| ns == API_NAMESPACE)
}

impl<'a, 'input: 'a> XmlElement<'a, 'input> {
    pub fn new(node: Node<'a, 'input>, command: &'a str) -> Self {
        Self { node, command }
    }

    pub fn command(&self) -> &str {
        self.command
    }

    pub fn name(&self) -> &str {
        self.node.tag_name().name()
    }

    pub fn is(&self, name: &str) -> bool {
        has_local_name(&self.node, name)
    }

    /// Trimmed text content, empty when the element has none
    pub fn text(&self) -> &str {
        self.node.text().map(str::trim).unwrap_or("")
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.node.attribute(name)
    }

    /// Attribute lookup trying several spellings in order
    pub fn attr_any(&self, names: &[&str]) -> Option<&str> {
        names.iter().find_map(|name| self.node.attribute(*name))
    }

    pub fn required_attr(&self, name: &str) -> NamecheapResult<&str> {
        self.attr(name).ok_or_else(|| {
            malformed_response!(
                self.command,
                format!("missing attribute {} on {}", name, self.name())
            )
        })
    }

    pub fn bool_attr(&self, name: &str) -> NamecheapResult<bool> {
        let raw = self.required_attr(name)?;
        parse_bool(raw).ok_or_else(|| {
            malformed_response!(
                self.command,
                format!("attribute {} on {} is not a boolean: {}", name, self.name(), raw)
            )
        })
    }

    /// Optional boolean; absent means `false`, garbage is still an error
    pub fn flag_attr(&self, name: &str) -> NamecheapResult<bool> {
        match self.attr(name) {
            Some(_) => self.bool_attr(name),
            None => Ok(false),
        }
    }

    pub fn parse_attr<T: FromStr>(&self, name: &str) -> NamecheapResult<T> {
        let raw = self.required_attr(name)?;
        raw.trim().parse::<T>().map_err(|_| {
            malformed_response!(
                self.command,
                format!("attribute {} on {} has an invalid value: {}", name, self.name(), raw)
            )
        })
    }

    pub fn opt_parse_attr<T: FromStr>(&self, name: &str) -> NamecheapResult<Option<T>> {
        match self.attr(name).map(str::trim) {
            None | Some("") => Ok(None),
            Some(_) => self.parse_attr(name).map(Some),
        }
    }

    pub fn string_attr(&self, name: &str) -> Option<String> {
        self.attr(name)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(String::from)
    }

    pub fn child(&self, name: &str) -> Option<XmlElement<'a, 'input>> {
        self.node
            .children()
            .find(|n| has_local_name(n, name))
            .map(|node| XmlElement::new(node, self.command))
    }

    pub fn required_child(&self, name: &str) -> NamecheapResult<XmlElement<'a, 'input>> {
        self.child(name).ok_or_else(|| {
            malformed_response!(
                self.command,
                format!("expected element {} under {}", name, self.name())
            )
        })
    }

    pub fn children(&self, name: &str) -> Vec<XmlElement<'a, 'input>> {
        self.node
            .children()
            .filter(|n| has_local_name(n, name))
            .map(|node| XmlElement::new(node, self.command))
            .collect()
    }

    /// Text of a direct child, `None` when missing or blank
    pub fn child_text(&self, name: &str) -> Option<String> {
        self.child(name)
            .map(|c| c.text().to_string())
            .filter(|t| !t.is_empty())
    }

    /// Element sharing this element's parent
    pub fn sibling(&self, name: &str) -> Option<XmlElement<'a, 'input>> {
        self.node
            .parent()
            .and_then(|parent| parent.children().find(|n| has_local_name(n, name)))
            .map(|node| XmlElement::new(node, self.command))
    }
}

/// Namecheap mixes `true`, `True` and `TRUE`
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

fn truncated(body: &str) -> String {
    body.chars().take(MAX_SOURCE_TEXT).collect()
}

/// Parse a response body into a document tree
pub fn parse_document(body: &str) -> NamecheapResult<Document<'_>> {
    Document::parse(body).map_err(|e| {
        NamecheapError::parse_error(
            format!("response is not well-formed XML: {}", e),
            Some(truncated(body)),
            Some(concat!(file!(), ":", line!())),
        )
    })
}

/// Check the envelope status and return the `ApiResponse` root.
///
/// `Status` is compared case-insensitively; anything other than `ERROR`
/// counts as success.
pub fn check_envelope<'a, 'input>(
    command: &'a str,
    doc: &'a Document<'input>,
) -> NamecheapResult<XmlElement<'a, 'input>> {
    let root = XmlElement::new(doc.root_element(), command);
    if !root.is("ApiResponse") {
        return Err(malformed_response!(
            command,
            format!("expected ApiResponse root, found {}", root.name())
        ));
    }

    let status = root.required_attr("Status")?;
    if status.trim().eq_ignore_ascii_case("ERROR") {
        let mut errors: Vec<ApiErrorEntry> = root
            .child("Errors")
            .map(|errors| {
                errors
                    .children("Error")
                    .iter()
                    .map(|e| {
                        ApiErrorEntry::new(
                            e.attr("Number").and_then(|n| n.trim().parse::<u32>().ok()),
                            e.text(),
                        )
                    })
                    .collect()
            })
            .unwrap_or_default();
        if errors.is_empty() {
            errors.push(ApiErrorEntry::new(None, "API reported an error without details"));
        }
        return Err(NamecheapError::api_error(
            command,
            errors,
            Some(concat!(file!(), ":", line!())),
        ));
    }

    Ok(root)
}

/// Parse a full response body and decode the command's result
pub fn decode_response<T: FromXml>(command: &str, body: &str) -> NamecheapResult<T> {
    let doc = parse_document(body)?;
    let root = check_envelope(command, &doc)?;
    let response = root.required_child("CommandResponse")?;
    T::from_command_response(&response)
}

/// Acknowledgement returned by the `set*` commands.
///
/// Namecheap spells the success flag differently per command (`IsSuccess`,
/// `Updated`, `Update`); a missing flag on a present element counts as
/// success since the envelope already reported `OK`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CommandAck {
    pub domain: Option<String>,
    pub success: bool,
}

impl CommandAck {
    pub(crate) fn from_element(element: &XmlElement<'_, '_>) -> NamecheapResult<Self> {
        let success = match element.attr_any(&["IsSuccess", "Updated", "Update"]) {
            Some(raw) => parse_bool(raw).ok_or_else(|| {
                malformed_response!(
                    element.command(),
                    format!("success flag on {} is not a boolean: {}", element.name(), raw)
                )
            })?,
            None => true,
        };
        Ok(Self {
            domain: element.string_attr("Domain"),
            success,
        })
    }
}

/// Declare a [`FromXml`] acknowledgement type for a `set*` command
macro_rules! ack_result {
    ($(#[$meta:meta])* $name:ident, $element:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
        pub struct $name(pub $crate::utils::xml_extractor::CommandAck);

        impl $crate::utils::xml_extractor::FromXml for $name {
            const ELEMENT: &'static str = $element;

            fn from_xml(
                element: &$crate::utils::xml_extractor::XmlElement<'_, '_>,
            ) -> $crate::types::NamecheapResult<Self> {
                $crate::utils::xml_extractor::CommandAck::from_element(element).map($name)
            }
        }
    };
}

pub(crate) use ack_result;

#[cfg(test)]
mod tests {
    use super::*;

    const COMMAND: &str = "namecheap.test";

    #[derive(Debug)]
    struct Probe {
        flag: bool,
        count: u32,
    }

    impl FromXml for Probe {
        const ELEMENT: &'static str = "ProbeResult";

        fn from_xml(element: &XmlElement<'_, '_>) -> NamecheapResult<Self> {
            Ok(Self {
                flag: element.bool_attr("Flag")?,
                count: element.parse_attr("Count")?,
            })
        }
    }

    fn envelope(status: &str, inner: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="utf-8"?>
<ApiResponse Status="{}" xmlns="http://api.namecheap.com/xml.response">
  <Errors />
  <RequestedCommand>namecheap.test</RequestedCommand>
  <CommandResponse Type="namecheap.test">{}</CommandResponse>
</ApiResponse>"#,
            status, inner
        )
    }

    #[test]
    fn decodes_result_under_command_response() {
        let body = envelope("OK", r#"<ProbeResult Flag="True" Count="7" />"#);
        let probe: Probe = decode_response(COMMAND, &body).unwrap();
        assert!(probe.flag);
        assert_eq!(probe.count, 7);
    }

    #[test]
    fn status_is_case_insensitive() {
        let body = r#"<ApiResponse Status="error" xmlns="http://api.namecheap.com/xml.response">
  <Errors><Error Number="2019166">Domain not found</Error><Error Number="x">Second</Error></Errors>
</ApiResponse>"#;
        let err = decode_response::<Probe>(COMMAND, body).unwrap_err();
        assert_eq!(
            err.api_errors(),
            &[
                ApiErrorEntry::new(Some(2019166), "Domain not found"),
                ApiErrorEntry::new(None, "Second"),
            ]
        );
    }

    #[test]
    fn missing_result_element_is_malformed() {
        let body = envelope("OK", "");
        let err = decode_response::<Probe>(COMMAND, &body).unwrap_err();
        assert!(matches!(err, NamecheapError::MalformedResponse { ref message, .. } if message.contains("ProbeResult")));
    }

    #[test]
    fn bad_attribute_value_is_malformed() {
        let body = envelope("OK", r#"<ProbeResult Flag="maybe" Count="7" />"#);
        let err = decode_response::<Probe>(COMMAND, &body).unwrap_err();
        assert!(matches!(err, NamecheapError::MalformedResponse { .. }));
    }

    #[test]
    fn non_xml_body_is_a_parse_error() {
        let err = decode_response::<Probe>(COMMAND, "<html><body>502 Bad Gateway").unwrap_err();
        assert!(matches!(err, NamecheapError::ParseError { .. }));
    }

    #[test]
    fn foreign_namespace_elements_are_ignored() {
        let body = r#"<ApiResponse Status="OK" xmlns="http://api.namecheap.com/xml.response" xmlns:x="urn:other">
  <CommandResponse><x:ProbeResult Flag="true" Count="1" /></CommandResponse>
</ApiResponse>"#;
        let err = decode_response::<Probe>(COMMAND, body).unwrap_err();
        assert!(matches!(err, NamecheapError::MalformedResponse { .. }));
    }
}
