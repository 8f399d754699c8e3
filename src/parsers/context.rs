//! JSON-LD `@context` extraction.

use crate::error::Result;
use crate::model::OPENVEX_CONTEXT;
use serde_json::Value;

/// Return the top-level `@context` string of a JSON document.
///
/// A missing (or non-string) `@context` yields an empty string. Only input
/// that is not JSON at all is an error.
pub fn parse_context(data: &[u8]) -> Result<String> {
    let value: Value = serde_json::from_slice(data)?;
    Ok(value
        .get("@context")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string())
}

/// True when `context` names the OpenVEX vocabulary, versioned or not.
#[must_use]
pub fn is_openvex_context(context: &str) -> bool {
    context
        .strip_prefix(OPENVEX_CONTEXT)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// Like [`parse_context`], but only returns OpenVEX contexts.
///
/// Any other JSON-LD context comes back as an empty string.
pub fn parse_openvex_context(data: &[u8]) -> Result<String> {
    let context = parse_context(data)?;
    if is_openvex_context(&context) {
        Ok(context)
    } else {
        Ok(String::new())
    }
}
