/*
 * document.rs
 * Copyright (c) 2025 Folio Contributors
 */

//! Document storage shared between a reader and its positions.
//!
//! Documents are indexed by character (Unicode scalar value), not by byte.
//! Each document precomputes the byte offset of every character and the
//! character index at which every line starts, so that slicing and line
//! lookups never rescan the text.

use std::cell::RefCell;

/// The set of characters that end a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineEnders(Vec<char>);

impl LineEnders {
    pub fn new(chars: &str) -> Self {
        let mut enders: Vec<char> = chars.chars().collect();
        enders.sort_unstable();
        enders.dedup();
        LineEnders(enders)
    }

    pub fn contains(&self, ch: char) -> bool {
        self.0.binary_search(&ch).is_ok()
    }

    pub fn as_string(&self) -> String {
        self.0.iter().collect()
    }
}

/// One named document with character and line indexes.
#[derive(Debug)]
pub(crate) struct Document {
    name: String,
    contents: String,
    /// Byte offset of each character, followed by the total byte length
    char_offsets: Vec<usize>,
    /// Character index of the first character of each line
    line_starts: Vec<usize>,
}

impl Document {
    pub(crate) fn new(name: String, contents: String, line_enders: &LineEnders) -> Self {
        let mut char_offsets = Vec::with_capacity(contents.len() + 1);
        let mut line_starts = vec![0];

        for (char_index, (byte_offset, ch)) in contents.char_indices().enumerate() {
            char_offsets.push(byte_offset);
            if line_enders.contains(ch) {
                line_starts.push(char_index + 1);
            }
        }
        char_offsets.push(contents.len());

        Document {
            name,
            contents,
            char_offsets,
            line_starts,
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn contents(&self) -> &str {
        &self.contents
    }

    /// Length in characters
    pub(crate) fn char_len(&self) -> usize {
        self.char_offsets.len() - 1
    }

    pub(crate) fn char_at(&self, index: usize) -> Option<char> {
        if index >= self.char_len() {
            return None;
        }
        self.contents[self.char_offsets[index]..].chars().next()
    }

    /// The text between two character indexes, clamped to the document.
    pub(crate) fn slice(&self, start: usize, end: usize) -> &str {
        let len = self.char_len();
        let end = end.min(len);
        let start = start.min(end);
        &self.contents[self.char_offsets[start]..self.char_offsets[end]]
    }

    pub(crate) fn rest_from(&self, index: usize) -> &str {
        self.slice(index, self.char_len())
    }

    pub(crate) fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// The text of a 0-indexed line, without its line ender.
    pub(crate) fn line_text(&self, line_index: usize) -> &str {
        let start = self.line_starts[line_index];
        self.slice(start, self.line_content_end(line_index))
    }

    /// The 0-indexed line holding a character index. The end of the document
    /// belongs to the last line.
    pub(crate) fn line_index_of(&self, char_index: usize) -> usize {
        self.line_starts.partition_point(|&start| start <= char_index) - 1
    }

    pub(crate) fn line_start(&self, line_index: usize) -> usize {
        self.line_starts[line_index]
    }

    /// Character index just past the last non-ender character of a line.
    pub(crate) fn line_content_end(&self, line_index: usize) -> usize {
        match self.line_starts.get(line_index + 1) {
            Some(next_start) => next_start - 1,
            None => self.char_len(),
        }
    }
}

/// The documents of one reader together with the visibility record.
///
/// The visibility record grows as the reader skips characters: entry `i` of
/// a document's record says whether character `i` was skipped silently.
/// Characters the reader has not reached yet have no entry and count as
/// visible.
#[derive(Debug)]
pub(crate) struct DocumentSet {
    documents: Vec<Document>,
    silence: RefCell<Vec<Vec<bool>>>,
}

impl DocumentSet {
    pub(crate) fn new(documents: Vec<Document>) -> Self {
        let silence = RefCell::new(vec![Vec::new(); documents.len()]);
        DocumentSet { documents, silence }
    }

    pub(crate) fn len(&self) -> usize {
        self.documents.len()
    }

    pub(crate) fn document(&self, index: usize) -> &Document {
        &self.documents[index]
    }

    pub(crate) fn get(&self, index: usize) -> Option<&Document> {
        self.documents.get(index)
    }

    /// How the character was first skipped, if it has been skipped at all.
    pub(crate) fn silence_at(&self, document: usize, char_index: usize) -> Option<bool> {
        self.silence.borrow()[document].get(char_index).copied()
    }

    /// Fix the visibility of the next undecided character of a document.
    ///
    /// Characters are decided in order, so only the first undecided index
    /// can be recorded; already decided characters are left alone.
    pub(crate) fn record_silence(&self, document: usize, char_index: usize, silent: bool) {
        let mut silence = self.silence.borrow_mut();
        let record = &mut silence[document];
        if record.len() == char_index {
            record.push(silent);
        }
    }

    /// The document's text with silently skipped characters removed.
    pub(crate) fn visible_contents(&self, document: usize) -> String {
        let silence = self.silence.borrow();
        let record = &silence[document];
        self.documents[document]
            .contents()
            .chars()
            .enumerate()
            .filter(|(index, _)| !record.get(*index).copied().unwrap_or(false))
            .map(|(_, ch)| ch)
            .collect()
    }
}
