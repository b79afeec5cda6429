/*
 * builder.rs
 * Copyright (c) 2025 Folio Contributors
 */

//! Builder API for diagnostic messages.

use crate::diagnostic::{
    DetailItem, DetailKind, DiagnosticKind, DiagnosticLocation, DiagnosticMessage, MessageContent,
};
use crate::translate::{Interpolations, translate};

/// Builder for [`DiagnosticMessage`].
///
/// # Example
///
/// ```
/// use folio_error_reporting::DiagnosticMessageBuilder;
///
/// let warning = DiagnosticMessageBuilder::warning("Unclosed region")
///     .problem("Region 'block' was still open at the end of the document.")
///     .add_info("Regions are closed when the reader enters the next document")
///     .add_hint("Call `end_region()` before the document ends?")
///     .build();
/// assert_eq!(warning.details.len(), 1);
/// assert_eq!(warning.hints.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct DiagnosticMessageBuilder {
    message: DiagnosticMessage,
}

impl DiagnosticMessageBuilder {
    fn new(kind: DiagnosticKind, title: impl Into<String>) -> Self {
        Self {
            message: DiagnosticMessage::new(kind, title),
        }
    }

    /// Start an error diagnostic.
    pub fn error(title: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Error, title)
    }

    /// Start a warning diagnostic.
    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Warning, title)
    }

    /// Start an info diagnostic.
    pub fn info(title: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Info, title)
    }

    /// Start a diagnostic for a catalog code.
    ///
    /// The title comes from the catalog and the problem statement is the
    /// translated message for `code`.
    pub fn from_code(kind: DiagnosticKind, code: &str, interpolations: &Interpolations) -> Self {
        let title = crate::catalog::get_title(code).unwrap_or(code);
        Self::new(kind, title)
            .with_code(code)
            .problem(MessageContent::Plain(translate(code, interpolations)))
    }

    /// Set the error code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.message.code = Some(code.into());
        self
    }

    /// Set the location the diagnostic refers to.
    pub fn with_location(mut self, location: DiagnosticLocation) -> Self {
        self.message.location = Some(location);
        self
    }

    /// Set the problem statement.
    pub fn problem(mut self, problem: impl Into<MessageContent>) -> Self {
        self.message.problem = Some(problem.into());
        self
    }

    fn push_detail(
        mut self,
        kind: DetailKind,
        content: impl Into<MessageContent>,
        location: Option<DiagnosticLocation>,
    ) -> Self {
        self.message.details.push(DetailItem {
            kind,
            content: content.into(),
            location,
        });
        self
    }

    /// Add an error detail (✖).
    pub fn add_detail(self, content: impl Into<MessageContent>) -> Self {
        self.push_detail(DetailKind::Error, content, None)
    }

    /// Add an error detail pointing at a location.
    pub fn add_detail_at(
        self,
        content: impl Into<MessageContent>,
        location: DiagnosticLocation,
    ) -> Self {
        self.push_detail(DetailKind::Error, content, Some(location))
    }

    /// Add an info detail (ℹ).
    pub fn add_info(self, content: impl Into<MessageContent>) -> Self {
        self.push_detail(DetailKind::Info, content, None)
    }

    /// Add a note detail (•).
    pub fn add_note(self, content: impl Into<MessageContent>) -> Self {
        self.push_detail(DetailKind::Note, content, None)
    }

    /// Add a hint.
    pub fn add_hint(mut self, hint: impl Into<MessageContent>) -> Self {
        self.message.hints.push(hint.into());
        self
    }

    /// Finish building.
    pub fn build(self) -> DiagnosticMessage {
        self.message
    }
}
