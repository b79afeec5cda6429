/*
 * diagnostic.rs
 * Copyright (c) 2025 Folio Contributors
 */

//! Diagnostics built from library errors.
//!
//! A diagnostic is what a tool shows a person: a titled message with an
//! optional code and location, a problem statement, bulleted details and
//! hints. It renders to terminal text or to JSON.

use serde::{Deserialize, Serialize};
use serde_json::json;

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// The operation could not complete
    Error,
    /// The operation completed, but something looks wrong
    Warning,
    Info,
    /// Extra context attached to another diagnostic
    Note,
}

impl DiagnosticKind {
    fn label(self) -> &'static str {
        match self {
            DiagnosticKind::Error => "Error",
            DiagnosticKind::Warning => "Warning",
            DiagnosticKind::Info => "Info",
            DiagnosticKind::Note => "Note",
        }
    }
}

/// Bullet style of a detail line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetailKind {
    /// `✖`
    Error,
    /// `ℹ`
    Info,
    /// `•`
    Note,
}

impl DetailKind {
    fn bullet(self) -> &'static str {
        match self {
            DetailKind::Error => "✖",
            DetailKind::Info => "ℹ",
            DetailKind::Note => "•",
        }
    }

    fn name(self) -> &'static str {
        match self {
            DetailKind::Error => "error",
            DetailKind::Info => "info",
            DetailKind::Note => "note",
        }
    }
}

/// Text of a problem, detail or hint. Strings convert to `Markdown`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageContent {
    Plain(String),
    Markdown(String),
}

impl MessageContent {
    /// The text, whatever its markup.
    pub fn as_str(&self) -> &str {
        match self {
            MessageContent::Plain(text) | MessageContent::Markdown(text) => text,
        }
    }

    /// `{"type": "plain" | "markdown", "content": <text>}`
    pub fn to_json(&self) -> serde_json::Value {
        let markup = match self {
            MessageContent::Plain(_) => "plain",
            MessageContent::Markdown(_) => "markdown",
        };
        json!({ "type": markup, "content": self.as_str() })
    }
}

impl From<String> for MessageContent {
    fn from(text: String) -> Self {
        MessageContent::Markdown(text)
    }
}

impl From<&str> for MessageContent {
    fn from(text: &str) -> Self {
        MessageContent::Markdown(text.to_string())
    }
}

/// A 1-indexed line and column in a named document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticLocation {
    pub document: String,
    pub line: usize,
    /// Counted in characters
    pub column: usize,
}

impl std::fmt::Display for DiagnosticLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.document, self.line, self.column)
    }
}

/// One bulleted line under the problem statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailItem {
    pub kind: DetailKind,
    pub content: MessageContent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<DiagnosticLocation>,
}

impl DetailItem {
    fn to_text(&self) -> String {
        let mut line = format!("{} {}", self.kind.bullet(), self.content.as_str());
        if let Some(location) = &self.location {
            line.push_str(&format!(" ({location})"));
        }
        line
    }

    fn to_json(&self) -> serde_json::Value {
        let mut value = json!({
            "kind": self.kind.name(),
            "content": self.content.to_json(),
        });
        if let Some(location) = &self.location {
            value["location"] = json!(location);
        }
        value
    }
}

/// A message for a person, in the order it is printed:
///
/// ```text
/// Error [F-1-4]: At End of Document      kind, code, title
///   at document1:3:7                     location
/// Operation 'peek' needs a character...  problem
/// ✖ ...                                  details
/// ? ...                                  hints
/// ```
///
/// The code is the stable part. Titles and wording may change between
/// releases or be translated; codes do not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub title: String,
    pub kind: DiagnosticKind,
    pub problem: Option<MessageContent>,
    pub details: Vec<DetailItem>,
    pub hints: Vec<MessageContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<DiagnosticLocation>,
}

impl DiagnosticMessage {
    /// A bare message. [`crate::DiagnosticMessageBuilder`] fills in the rest.
    pub fn new(kind: DiagnosticKind, title: impl Into<String>) -> Self {
        Self {
            code: None,
            title: title.into(),
            kind,
            problem: None,
            details: Vec::new(),
            hints: Vec::new(),
            location: None,
        }
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Error, title)
    }

    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Warning, title)
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Info, title)
    }

    /// Attach a catalog code such as `F-1-1`.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Catalog subsystem of the code, if the code is in the catalog.
    pub fn subsystem(&self) -> Option<&'static str> {
        self.code
            .as_deref()
            .and_then(crate::catalog::get_subsystem)
    }

    /// Plain terminal rendering, one element per line.
    ///
    /// # Example
    ///
    /// ```
    /// use folio_error_reporting::DiagnosticMessageBuilder;
    ///
    /// let text = DiagnosticMessageBuilder::warning("Unclosed region")
    ///     .problem("Region 'block' was never ended.")
    ///     .add_hint("End it first?")
    ///     .build()
    ///     .to_text();
    /// assert_eq!(
    ///     text,
    ///     "Warning: Unclosed region\nRegion 'block' was never ended.\n? End it first?"
    /// );
    /// ```
    pub fn to_text(&self) -> String {
        let header = match &self.code {
            Some(code) => format!("{} [{code}]: {}", self.kind.label(), self.title),
            None => format!("{}: {}", self.kind.label(), self.title),
        };

        let mut lines = vec![header];
        lines.extend(self.location.iter().map(|location| format!("  at {location}")));
        lines.extend(self.problem.iter().map(|problem| problem.as_str().to_string()));
        lines.extend(self.details.iter().map(DetailItem::to_text));
        lines.extend(self.hints.iter().map(|hint| format!("? {}", hint.as_str())));
        lines.join("\n")
    }

    /// Machine-readable rendering. Empty parts are left out.
    pub fn to_json(&self) -> serde_json::Value {
        let mut value = json!({
            "kind": self.kind.label().to_lowercase(),
            "title": self.title,
        });

        if let Some(code) = &self.code {
            value["code"] = json!(code);
        }
        if let Some(problem) = &self.problem {
            value["problem"] = problem.to_json();
        }
        if !self.details.is_empty() {
            value["details"] = self.details.iter().map(DetailItem::to_json).collect();
        }
        if !self.hints.is_empty() {
            value["hints"] = self.hints.iter().map(MessageContent::to_json).collect();
        }
        if let Some(location) = &self.location {
            value["location"] = json!(location);
        }

        value
    }
}
