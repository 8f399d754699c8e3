//! OpenVEX JSON documents.
//!
//! Reads and writes standalone OpenVEX JSON into the [`Document`] model.
//! See <https://github.com/openvex/spec> for the format.

use super::context::is_openvex_context;
use crate::error::{EncodingErrorKind, ErrorContext, ParseErrorKind, Result, VexError};
use crate::model::Document;
use std::io::Write;
use std::path::Path;

/// Parse an OpenVEX document from raw JSON bytes.
///
/// Status and justification strings outside the OpenVEX vocabulary are
/// rejected with [`ParseErrorKind::InvalidValue`], and a statement without
/// its `vulnerability` or `status` with [`ParseErrorKind::MissingField`].
/// A document declaring a non-OpenVEX `@context` (CSAF, CycloneDX, ...) is
/// refused with [`ParseErrorKind::UnsupportedContext`].
pub fn parse_document(data: &[u8]) -> Result<Document> {
    let doc: Document = serde_json::from_slice(data)
        .map_err(classify_json_error)
        .context("parsing OpenVEX JSON")?;

    if doc.context.is_empty() {
        tracing::warn!("OpenVEX document has no @context, assuming OpenVEX");
    } else if !is_openvex_context(&doc.context) {
        return Err(VexError::parse(
            "reading OpenVEX document",
            ParseErrorKind::UnsupportedContext(doc.context),
        ));
    }

    tracing::debug!(
        id = %doc.id,
        statements = doc.statements.len(),
        "parsed OpenVEX document"
    );
    Ok(doc)
}

/// Map serde data errors onto the matching [`ParseErrorKind`].
///
/// serde_json only exposes the rendered message, so the known shapes are
/// recognised by prefix. Anything else stays [`ParseErrorKind::InvalidJson`].
fn classify_json_error(err: serde_json::Error) -> VexError {
    if !err.is_data() {
        return err.into();
    }

    let position = format!(" at line {} column {}", err.line(), err.column());
    let rendered = err.to_string();
    let message = rendered.strip_suffix(&position).unwrap_or(&rendered);

    if let Some(field) = message
        .strip_prefix("missing field `")
        .and_then(|rest| rest.strip_suffix('`'))
    {
        return VexError::missing_field(field, format!("OpenVEX document{position}"));
    }
    if let Some((field, detail)) = message
        .strip_prefix("Invalid field value for '")
        .and_then(|rest| rest.split_once("': "))
    {
        return VexError::invalid_value(field, detail);
    }
    err.into()
}

/// Parse an OpenVEX document from a file path.
pub fn load_document(path: &Path) -> Result<Document> {
    let data = std::fs::read(path).map_err(|err| VexError::io(path, err))?;
    parse_document(&data).with_context(|| format!("loading {}", path.display()))
}

impl Document {
    /// Parse an OpenVEX document from JSON bytes.
    pub fn parse(data: &[u8]) -> Result<Self> {
        parse_document(data)
    }

    /// Parse an OpenVEX document from a JSON string.
    pub fn from_json_str(content: &str) -> Result<Self> {
        parse_document(content.as_bytes())
    }

    /// Load an OpenVEX document from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        load_document(path.as_ref())
    }

    /// Pretty-printed OpenVEX JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|err| {
            VexError::encoding(
                "serializing OpenVEX document",
                EncodingErrorKind::Serialization(err.to_string()),
            )
        })
    }

    /// Write pretty-printed OpenVEX JSON to `writer`.
    pub fn to_writer<W: Write>(&self, mut writer: W) -> Result<()> {
        let json = self.to_json()?;
        writer.write_all(json.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Justification, Status};

    const SAMPLE_VEX: &str = r#"{
        "@context": "https://openvex.dev/ns/v0.2.0",
        "@id": "https://openvex.dev/docs/example/vex-9fb3463de1b57",
        "author": "Wolfi J Inkinson",
        "role": "Document Creator",
        "timestamp": "2023-01-08T18:02:03.647787998-06:00",
        "version": 1,
        "statements": [
            {
                "vulnerability": { "name": "CVE-2021-44228", "aliases": ["GHSA-jfh8-c2jp-5v3q"] },
                "status": "not_affected",
                "products": [
                    { "@id": "pkg:maven/org.apache.logging.log4j/log4j-core@2.17.0" }
                ],
                "justification": "vulnerable_code_not_present",
                "impact_statement": "log4j-core 2.17.0 removed the JNDI lookup feature"
            },
            {
                "vulnerability": { "@id": "CVE-2023-1234" },
                "timestamp": "2023-02-01T00:00:00Z",
                "status": "affected",
                "products": [
                    { "@id": "pkg:npm/lodash@4.17.20", "identifiers": { "purl": "pkg:npm/lodash@4.17.20" } }
                ],
                "action_statement": "Upgrade to lodash@4.17.21"
            },
            {
                "vulnerability": { "name": "CVE-2024-0001" },
                "status": "under_investigation"
            }
        ]
    }"#;

    #[test]
    fn test_parse_valid_openvex() {
        let doc = parse_document(SAMPLE_VEX.as_bytes()).expect("should parse");
        assert_eq!(doc.statements.len(), 3);
        assert_eq!(doc.metadata.author, "Wolfi J Inkinson");
        assert_eq!(doc.metadata.version, 1);
        assert!(doc.timestamp().is_some());

        let first = &doc.statements[0];
        assert_eq!(first.vulnerability.name, "CVE-2021-44228");
        assert!(first.vulnerability.aliases.contains("GHSA-jfh8-c2jp-5v3q"));
        assert_eq!(first.status, Status::NotAffected);
        assert_eq!(first.justification, Some(Justification::VulnerableCodeNotPresent));
        assert!(first.timestamp.is_none());

        assert_eq!(doc.statements[1].vulnerability.id, "CVE-2023-1234");
        assert!(doc.statements[1].timestamp.is_some());
        assert!(doc.statements[2].products.is_empty());
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let json = r#"{"@context": "https://openvex.dev/ns", "statements": [
            {"vulnerability": {"name": "CVE-1"}, "status": "maybe"}
        ]}"#;
        match parse_document(json.as_bytes()) {
            Err(VexError::Parse {
                source: ParseErrorKind::InvalidValue { field, message },
                ..
            }) => {
                assert_eq!(field, "status");
                assert_eq!(message, "unknown status 'maybe'");
            }
            other => panic!("Expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_justification_is_rejected() {
        let json = r#"{"@context": "https://openvex.dev/ns", "statements": [
            {"vulnerability": {"name": "CVE-1"}, "status": "not_affected",
             "justification": "because"}
        ]}"#;
        assert!(matches!(
            parse_document(json.as_bytes()),
            Err(VexError::Parse {
                source: ParseErrorKind::InvalidValue { ref field, .. },
                ..
            }) if field == "justification"
        ));
    }

    #[test]
    fn test_statement_without_status_is_missing_field() {
        let json = r#"{"@context": "https://openvex.dev/ns", "statements": [
            {"vulnerability": {"name": "CVE-1"}}
        ]}"#;
        match parse_document(json.as_bytes()) {
            Err(VexError::Parse {
                source: ParseErrorKind::MissingField { field, context },
                ..
            }) => {
                assert_eq!(field, "status");
                assert!(context.starts_with("OpenVEX document"), "{context}");
            }
            other => panic!("Expected MissingField, got {other:?}"),
        }

        let json = r#"{"statements": [{"status": "fixed"}]}"#;
        assert!(matches!(
            parse_document(json.as_bytes()),
            Err(VexError::Parse {
                source: ParseErrorKind::MissingField { ref field, .. },
                ..
            }) if field == "vulnerability"
        ));
    }

    #[test]
    fn test_malformed_json_stays_invalid_json() {
        assert!(matches!(
            parse_document(b"{\"statements\": ["),
            Err(VexError::Parse {
                source: ParseErrorKind::InvalidJson(_),
                ..
            })
        ));
    }

    #[test]
    fn test_foreign_context_is_rejected() {
        let json = r#"{"@context": "https://spdx.dev/", "statements": []}"#;
        assert!(matches!(
            parse_document(json.as_bytes()),
            Err(VexError::Parse {
                source: ParseErrorKind::UnsupportedContext(_),
                ..
            })
        ));
    }

    #[test]
    fn test_missing_context_is_accepted() {
        let doc = parse_document(br#"{"statements": []}"#).unwrap();
        assert!(doc.context.is_empty());
        assert!(doc.statements.is_empty());
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = parse_document(b"not json").unwrap_err();
        assert!(err.to_string().contains("parsing OpenVEX JSON"), "{err}");
    }

    #[test]
    fn test_json_roundtrip_preserves_hash() {
        let doc = parse_document(SAMPLE_VEX.as_bytes()).unwrap();
        let json = doc.to_json().unwrap();
        let again = Document::from_json_str(&json).unwrap();
        assert_eq!(doc, again);
        assert_eq!(doc.canonical_hash().unwrap(), again.canonical_hash().unwrap());
    }

    #[test]
    fn test_to_writer() {
        let doc = parse_document(SAMPLE_VEX.as_bytes()).unwrap();
        let mut out = Vec::new();
        doc.to_writer(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\"@context\": \"https://openvex.dev/ns/v0.2.0\""));
        assert!(text.contains("\"role\": \"Document Creator\""));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Document::load("/nonexistent/vex.json").unwrap_err();
        match err {
            VexError::Io { path, .. } => {
                assert_eq!(path.as_deref(), Some(Path::new("/nonexistent/vex.json")));
            }
            other => panic!("Expected Io error, got {other:?}"),
        }
    }
}
