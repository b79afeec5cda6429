/*
 * extract.rs
 * Copyright (c) 2025 Folio Contributors
 */

//! Text extraction between two locations of the same reader.

use crate::document::DocumentSet;

/// Which text of a document to extract from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TextKind {
    /// Everything, including silently skipped characters
    Full,
    /// Silently skipped characters removed
    Visible,
}

/// A point in the concatenated input.
///
/// Ordered by document, then by character. The end of input is the point
/// `(document_count, 0)`, after every character of every document. A
/// document's end is `(document, char_len)`, after its last character and
/// before the first character of the next document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Bound {
    pub(crate) document: usize,
    pub(crate) char_index: usize,
    /// Offset into the document's visible text; it grows with `char_index`,
    /// so including it in the ordering changes nothing.
    pub(crate) visible_index: usize,
}

impl Bound {
    pub(crate) fn end_of_input(input: &DocumentSet) -> Self {
        Bound {
            document: input.len(),
            char_index: 0,
            visible_index: 0,
        }
    }
}

/// The text from `start` up to `end`, joining whole documents in between.
///
/// Empty when `end` is not after `start`.
pub(crate) fn contents_between(
    input: &DocumentSet,
    start: Bound,
    end: Bound,
    kind: TextKind,
) -> String {
    let mut result = String::new();
    if start >= end {
        return result;
    }

    let last_document = end.document.min(input.len().saturating_sub(1));
    for index in start.document..=last_document {
        let from_start = index == start.document;
        let to_end = index == end.document;

        match kind {
            TextKind::Full => {
                let document = input.document(index);
                let from = if from_start { start.char_index } else { 0 };
                let to = if to_end { end.char_index } else { document.char_len() };
                result.push_str(document.slice(from, to));
            }
            TextKind::Visible => {
                let visible = input.visible_contents(index);
                let from = if from_start { start.visible_index } else { 0 };
                let to = if to_end { end.visible_index } else { usize::MAX };
                result.extend(visible.chars().skip(from).take(to.saturating_sub(from)));
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Document, LineEnders};

    fn documents(texts: &[&str]) -> DocumentSet {
        let enders = LineEnders::new("\n");
        DocumentSet::new(
            texts
                .iter()
                .enumerate()
                .map(|(i, t)| Document::new(format!("d{i}"), t.to_string(), &enders))
                .collect(),
        )
    }

    fn at(document: usize, char_index: usize) -> Bound {
        Bound {
            document,
            char_index,
            visible_index: char_index,
        }
    }

    #[test]
    fn test_same_document() {
        let input = documents(&["hello world"]);
        assert_eq!(contents_between(&input, at(0, 6), at(0, 11), TextKind::Full), "world");
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let input = documents(&["hello"]);
        assert_eq!(contents_between(&input, at(0, 3), at(0, 1), TextKind::Full), "");
        assert_eq!(contents_between(&input, at(0, 3), at(0, 3), TextKind::Full), "");
    }

    #[test]
    fn test_across_documents_joins_whole_documents() {
        let input = documents(&["abc", "def", "ghi"]);
        assert_eq!(
            contents_between(&input, at(0, 1), at(2, 2), TextKind::Full),
            "bcdefgh"
        );
    }

    #[test]
    fn test_to_end_of_input() {
        let input = documents(&["abc", "", "xy"]);
        let end = Bound::end_of_input(&input);
        assert_eq!(contents_between(&input, at(0, 2), end, TextKind::Full), "cxy");
    }

    #[test]
    fn test_end_of_document_does_not_cross_seam() {
        let input = documents(&["abc", "def"]);
        assert_eq!(contents_between(&input, at(0, 0), at(0, 3), TextKind::Full), "abc");
        assert_eq!(contents_between(&input, at(0, 3), at(1, 0), TextKind::Full), "");
    }

    #[test]
    fn test_visible_skips_silent_characters() {
        let input = documents(&["xyz"]);
        input.record_silence(0, 0, true);
        input.record_silence(0, 1, true);
        input.record_silence(0, 2, false);

        let start = Bound {
            document: 0,
            char_index: 0,
            visible_index: 0,
        };
        let end = Bound {
            document: 0,
            char_index: 3,
            visible_index: 1,
        };
        assert_eq!(contents_between(&input, start, end, TextKind::Visible), "z");
        assert_eq!(contents_between(&input, start, end, TextKind::Full), "xyz");
    }
}
