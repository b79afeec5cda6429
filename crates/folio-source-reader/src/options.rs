/*
 * options.rs
 * Copyright (c) 2025 Folio Contributors
 */

//! Reader configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Prefix for the names of documents given without a name.
pub const DEFAULT_DOCUMENT_NAME_PREFIX: &str = "document";

/// Characters that end a line unless configured otherwise.
pub const DEFAULT_LINE_ENDERS: &str = "\n";

/// Errors that can occur while loading reader options.
#[derive(Debug, Error)]
pub enum OptionsError {
    /// The options text is not valid TOML or has fields of the wrong type.
    #[error("Invalid reader options: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Options controlling how a [`crate::SourceReader`] names documents and
/// counts lines.
///
/// # Example
///
/// ```
/// use folio_source_reader::ReaderOptions;
///
/// let options = ReaderOptions::from_toml_str(r#"line-enders = "\r\n""#).unwrap();
/// assert_eq!(options.line_enders, "\r\n");
/// assert_eq!(options.default_document_name_prefix, "document");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ReaderOptions {
    /// Every character in this string ends a line.
    pub line_enders: String,

    /// Unnamed documents are called `<prefix><1-based index>`.
    pub default_document_name_prefix: String,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        ReaderOptions {
            line_enders: DEFAULT_LINE_ENDERS.to_string(),
            default_document_name_prefix: DEFAULT_DOCUMENT_NAME_PREFIX.to_string(),
        }
    }
}

impl ReaderOptions {
    /// Options with the given line enders and the default name prefix.
    pub fn with_line_enders(line_enders: impl Into<String>) -> Self {
        ReaderOptions {
            line_enders: line_enders.into(),
            ..Self::default()
        }
    }

    /// Parse options from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, OptionsError> {
        Ok(toml::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ReaderOptions::default();
        assert_eq!(options.line_enders, "\n");
        assert_eq!(options.default_document_name_prefix, "document");
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(ReaderOptions::from_toml_str("").unwrap(), ReaderOptions::default());
    }

    #[test]
    fn test_toml_overrides() {
        let options = ReaderOptions::from_toml_str(
            r#"
            line-enders = ";"
            default-document-name-prefix = "chapter"
            "#,
        )
        .unwrap();
        assert_eq!(options.line_enders, ";");
        assert_eq!(options.default_document_name_prefix, "chapter");
    }

    #[test]
    fn test_toml_wrong_type() {
        let error = ReaderOptions::from_toml_str("line-enders = 3").unwrap_err();
        assert!(error.to_string().starts_with("Invalid reader options"));
    }
}
