/*
 * error.rs
 * Copyright (c) 2025 Folio Contributors
 */

//! Error types for the source reader.
//!
//! Errors carry a stable catalog code and structured interpolation data.
//! Their text is produced by the process-wide translator when they are
//! displayed, never here.

use crate::position::SourcePosition;
use folio_error_reporting::{
    DiagnosticKind, DiagnosticLocation, DiagnosticMessage, DiagnosticMessageBuilder,
    Interpolations, translate,
};
use thiserror::Error;

/// What went wrong, with the data the message template needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceErrorKind {
    /// The reader was given no documents at all.
    NoInput,

    /// A document-scoped query was made on the unknown position.
    InvalidOperationAtUnknownPosition { operation: &'static str },

    /// A document-scoped query was made on the end-of-input position.
    InvalidOperationAtEndOfInput { operation: &'static str },

    /// A character was requested at the end of a document.
    AtEndOfDocument {
        operation: &'static str,
        document: String,
    },

    /// A character was requested after all input was consumed.
    AtEndOfInput { operation: &'static str },

    /// Two positions from different readers were combined.
    MismatchedInputs { operation: &'static str },

    /// A character already skipped with one silence setting was skipped
    /// again with the other.
    IncompatibleSilentSkip {
        document: String,
        line: usize,
        column: usize,
        silent: bool,
    },
}

impl SourceErrorKind {
    /// The catalog code for this kind of error.
    pub fn code(&self) -> &'static str {
        match self {
            SourceErrorKind::NoInput => "F-1-1",
            SourceErrorKind::InvalidOperationAtUnknownPosition { .. } => "F-1-2",
            SourceErrorKind::InvalidOperationAtEndOfInput { .. } => "F-1-3",
            SourceErrorKind::AtEndOfDocument { .. } => "F-1-4",
            SourceErrorKind::AtEndOfInput { .. } => "F-1-5",
            SourceErrorKind::MismatchedInputs { .. } => "F-1-6",
            SourceErrorKind::IncompatibleSilentSkip { .. } => "F-1-7",
        }
    }

    /// The values substituted into the message template.
    pub fn interpolations(&self) -> Interpolations {
        let mut values = Interpolations::new();
        let mut set = |name: &str, value: String| {
            values.insert(name.to_string(), value);
        };

        match self {
            SourceErrorKind::NoInput => {}
            SourceErrorKind::InvalidOperationAtUnknownPosition { operation }
            | SourceErrorKind::InvalidOperationAtEndOfInput { operation }
            | SourceErrorKind::AtEndOfInput { operation }
            | SourceErrorKind::MismatchedInputs { operation } => {
                set("operation", operation.to_string());
            }
            SourceErrorKind::AtEndOfDocument {
                operation,
                document,
            } => {
                set("operation", operation.to_string());
                set("document", document.clone());
            }
            SourceErrorKind::IncompatibleSilentSkip {
                document,
                line,
                column,
                silent,
            } => {
                set("document", document.clone());
                set("line", line.to_string());
                set("column", column.to_string());
                set("silent", silent.to_string());
                set("previous", (!silent).to_string());
            }
        }

        values
    }
}

fn render(kind: &SourceErrorKind) -> String {
    translate(kind.code(), &kind.interpolations())
}

/// An error raised by a [`crate::SourceReader`] or a [`SourcePosition`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", render(.kind))]
pub struct SourceError {
    kind: SourceErrorKind,
}

/// Result type for source reader operations.
pub type SourceResult<T> = Result<T, SourceError>;

impl SourceError {
    pub fn new(kind: SourceErrorKind) -> Self {
        SourceError { kind }
    }

    pub fn kind(&self) -> &SourceErrorKind {
        &self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub(crate) fn unknown_position(operation: &'static str) -> Self {
        Self::new(SourceErrorKind::InvalidOperationAtUnknownPosition { operation })
    }

    pub(crate) fn end_of_input_position(operation: &'static str) -> Self {
        Self::new(SourceErrorKind::InvalidOperationAtEndOfInput { operation })
    }

    pub(crate) fn mismatched_inputs(operation: &'static str) -> Self {
        Self::new(SourceErrorKind::MismatchedInputs { operation })
    }

    /// Convert into a diagnostic, titled and worded from the catalog.
    pub fn to_diagnostic(&self) -> DiagnosticMessage {
        DiagnosticMessageBuilder::from_code(
            DiagnosticKind::Error,
            self.code(),
            &self.kind.interpolations(),
        )
        .build()
    }

    /// Convert into a diagnostic located at `position`.
    ///
    /// Positions without a line and column (unknown, end of input) leave the
    /// diagnostic unlocated.
    pub fn to_diagnostic_at(&self, position: &SourcePosition) -> DiagnosticMessage {
        let mut diagnostic = self.to_diagnostic();
        if let (Ok(document), Ok(line), Ok(column)) =
            (position.document_name(), position.line(), position.column())
        {
            diagnostic.location = Some(DiagnosticLocation {
                document: document.to_string(),
                line,
                column,
            });
        }
        diagnostic
    }
}

impl From<SourceErrorKind> for SourceError {
    fn from(kind: SourceErrorKind) -> Self {
        SourceError::new(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct() {
        let kinds = [
            SourceErrorKind::NoInput,
            SourceErrorKind::InvalidOperationAtUnknownPosition { operation: "line" },
            SourceErrorKind::InvalidOperationAtEndOfInput { operation: "line" },
            SourceErrorKind::AtEndOfDocument {
                operation: "peek",
                document: "d".to_string(),
            },
            SourceErrorKind::AtEndOfInput { operation: "peek" },
            SourceErrorKind::MismatchedInputs { operation: "compare" },
            SourceErrorKind::IncompatibleSilentSkip {
                document: "d".to_string(),
                line: 1,
                column: 1,
                silent: true,
            },
        ];
        let mut codes: Vec<_> = kinds.iter().map(|k| k.code()).collect();
        codes.dedup();
        assert_eq!(codes.len(), kinds.len());
    }

    #[test]
    fn test_display_uses_catalog_template() {
        let error = SourceError::new(SourceErrorKind::AtEndOfDocument {
            operation: "peek",
            document: "document1".to_string(),
        });
        assert_eq!(
            error.to_string(),
            "Operation 'peek' needs a character, but document 'document1' has none left."
        );
    }

    #[test]
    fn test_silent_skip_interpolations() {
        let kind = SourceErrorKind::IncompatibleSilentSkip {
            document: "main".to_string(),
            line: 3,
            column: 4,
            silent: false,
        };
        let values = kind.interpolations();
        assert_eq!(values["silent"], "false");
        assert_eq!(values["previous"], "true");
        assert_eq!(values["line"], "3");
        assert_eq!(
            SourceError::from(kind).to_string(),
            "The character at main:3:4 was already skipped with silent=true; \
             it cannot be skipped again with silent=false."
        );
    }

    #[test]
    fn test_to_diagnostic() {
        let diagnostic = SourceError::new(SourceErrorKind::NoInput).to_diagnostic();
        assert_eq!(diagnostic.code.as_deref(), Some("F-1-1"));
        assert_eq!(diagnostic.title, "No Input");
        assert!(diagnostic.location.is_none());
    }

    #[test]
    fn test_to_diagnostic_at_unknown_position_is_unlocated() {
        let error = SourceError::unknown_position("line");
        let diagnostic = error.to_diagnostic_at(&SourcePosition::UNKNOWN);
        assert!(diagnostic.location.is_none());
        assert_eq!(
            diagnostic.problem.unwrap().as_str(),
            "Operation 'line' is not available at an unknown source position."
        );
    }
}
