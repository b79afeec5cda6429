/*
 * input.rs
 * Copyright (c) 2025 Folio Contributors
 */

//! Reader input and its normalization into named documents.

use crate::error::{SourceError, SourceErrorKind, SourceResult};
use indexmap::IndexMap;

/// The documents a reader consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceInput {
    /// A single unnamed document
    Text(String),
    /// Unnamed documents, in reading order
    List(Vec<String>),
    /// Named documents, in reading order
    Named(IndexMap<String, String>),
}

impl SourceInput {
    /// Normalize into `(name, contents)` pairs.
    ///
    /// Unnamed documents are called `<prefix><n>`, counting from 1. Fails
    /// with `NoInput` when there are no documents; empty documents are fine.
    ///
    /// # Example
    ///
    /// ```
    /// use folio_source_reader::SourceInput;
    ///
    /// let docs = SourceInput::from(vec!["a", ""]).into_documents("document").unwrap();
    /// assert_eq!(docs[0], ("document1".to_string(), "a".to_string()));
    /// assert_eq!(docs[1], ("document2".to_string(), "".to_string()));
    /// ```
    pub fn into_documents(self, default_name_prefix: &str) -> SourceResult<Vec<(String, String)>> {
        let documents: Vec<(String, String)> = match self {
            SourceInput::Text(text) => vec![(format!("{default_name_prefix}1"), text)],
            SourceInput::List(texts) => texts
                .into_iter()
                .enumerate()
                .map(|(index, text)| (format!("{default_name_prefix}{}", index + 1), text))
                .collect(),
            SourceInput::Named(named) => named.into_iter().collect(),
        };

        if documents.is_empty() {
            return Err(SourceError::new(SourceErrorKind::NoInput));
        }
        Ok(documents)
    }
}

impl From<&str> for SourceInput {
    fn from(text: &str) -> Self {
        SourceInput::Text(text.to_string())
    }
}

impl From<String> for SourceInput {
    fn from(text: String) -> Self {
        SourceInput::Text(text)
    }
}

impl From<Vec<String>> for SourceInput {
    fn from(texts: Vec<String>) -> Self {
        SourceInput::List(texts)
    }
}

impl From<Vec<&str>> for SourceInput {
    fn from(texts: Vec<&str>) -> Self {
        SourceInput::List(texts.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for SourceInput {
    fn from(texts: &[&str]) -> Self {
        SourceInput::List(texts.iter().map(|t| t.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for SourceInput {
    fn from(texts: [&str; N]) -> Self {
        SourceInput::List(texts.iter().map(|t| t.to_string()).collect())
    }
}

impl From<IndexMap<String, String>> for SourceInput {
    fn from(named: IndexMap<String, String>) -> Self {
        SourceInput::Named(named)
    }
}

impl From<Vec<(String, String)>> for SourceInput {
    fn from(named: Vec<(String, String)>) -> Self {
        SourceInput::Named(named.into_iter().collect())
    }
}

impl From<Vec<(&str, &str)>> for SourceInput {
    fn from(named: Vec<(&str, &str)>) -> Self {
        SourceInput::Named(
            named
                .into_iter()
                .map(|(name, text)| (name.to_string(), text.to_string()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(input: impl Into<SourceInput>) -> Vec<String> {
        input
            .into()
            .into_documents("document")
            .unwrap()
            .into_iter()
            .map(|(name, _)| name)
            .collect()
    }

    #[test]
    fn test_single_string_is_first_document() {
        assert_eq!(names("hello"), vec!["document1"]);
    }

    #[test]
    fn test_list_names_are_one_based() {
        assert_eq!(names(["a", "b", "c"]), vec!["document1", "document2", "document3"]);
    }

    #[test]
    fn test_named_input_keeps_order() {
        let input = vec![("zeta", "z"), ("alpha", "a")];
        assert_eq!(names(input), vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_custom_prefix() {
        let docs = SourceInput::from(vec!["x".to_string()])
            .into_documents("chapter-")
            .unwrap();
        assert_eq!(docs[0].0, "chapter-1");
    }

    #[test]
    fn test_empty_inputs_fail() {
        let empty_list = SourceInput::List(Vec::new()).into_documents("document");
        assert_eq!(empty_list.unwrap_err().kind(), &SourceErrorKind::NoInput);

        let empty_map = SourceInput::Named(IndexMap::new()).into_documents("document");
        assert_eq!(empty_map.unwrap_err().kind(), &SourceErrorKind::NoInput);
    }

    #[test]
    fn test_empty_string_is_a_document() {
        let docs = SourceInput::from("").into_documents("document").unwrap();
        assert_eq!(docs, vec![("document1".to_string(), String::new())]);
    }
}
