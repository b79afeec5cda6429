/*
 * reader.rs
 * Copyright (c) 2025 Folio Contributors
 */

//! The stateful reader over a sequence of documents.
//!
//! The cursor moves one unit at a time. A unit consumes one character of the
//! current document. When that leaves the cursor at the end of a document
//! that is not the last, the same unit carries it on to the start of the next
//! document with characters (or to the last document). The last document's
//! end is a stop of its own, and one more unit moves from there to the end of
//! input. Skipping `n` units is exactly `n` single-unit skips, so the boundary
//! model has no special cases for large skips.

use crate::document::{Document, DocumentSet, LineEnders};
use crate::error::{SourceError, SourceErrorKind, SourceResult};
use crate::input::SourceInput;
use crate::options::ReaderOptions;
use crate::position::{Cursor, InputHandle, OpenRegion, RegionSpan, Snapshot, SourcePosition};
use std::rc::Rc;

/// How far a skip moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipAmount<'a> {
    /// A number of units. Zero and negative counts skip nothing.
    Chars(i64),
    /// As many units as the text has characters. The text itself is not
    /// compared with the input.
    Text(&'a str),
}

impl SkipAmount<'_> {
    pub fn unit_count(&self) -> u64 {
        match self {
            SkipAmount::Chars(count) => (*count).max(0).unsigned_abs(),
            SkipAmount::Text(text) => text.chars().count() as u64,
        }
    }
}

impl From<i64> for SkipAmount<'_> {
    fn from(count: i64) -> Self {
        SkipAmount::Chars(count)
    }
}

impl<'a> From<&'a str> for SkipAmount<'a> {
    fn from(text: &'a str) -> Self {
        SkipAmount::Text(text)
    }
}

/// Reads one or more named documents in order, tracking line, column,
/// visibility and open regions.
///
/// # Example
///
/// ```
/// use folio_source_reader::SourceReader;
///
/// let mut reader = SourceReader::new("let x = 1;\nlet y = 2;", "\n").unwrap();
/// reader.skip_str("let x = 1;\n").unwrap();
/// assert_eq!(reader.line(), 2);
/// assert!(reader.starts_with("let y"));
///
/// let start = reader.position();
/// reader.skip(5).unwrap();
/// assert_eq!(start.full_contents_to(&reader.position()).unwrap(), "let y");
/// ```
#[derive(Debug)]
pub struct SourceReader {
    input: Rc<DocumentSet>,
    cursor: Cursor,
    regions: Vec<OpenRegion>,
    line_enders: LineEnders,
}

impl SourceReader {
    /// Create a reader whose lines end at any character of `line_enders`.
    pub fn new(input: impl Into<SourceInput>, line_enders: &str) -> SourceResult<Self> {
        Self::with_options(input, &ReaderOptions::with_line_enders(line_enders))
    }

    pub fn with_options(
        input: impl Into<SourceInput>,
        options: &ReaderOptions,
    ) -> SourceResult<Self> {
        let line_enders = LineEnders::new(&options.line_enders);
        let documents: Vec<Document> = input
            .into()
            .into_documents(&options.default_document_name_prefix)?
            .into_iter()
            .map(|(name, contents)| Document::new(name, contents, &line_enders))
            .collect();

        tracing::debug!(
            documents = documents.len(),
            line_enders = ?line_enders.as_string(),
            "Created source reader"
        );

        Ok(SourceReader {
            input: Rc::new(DocumentSet::new(documents)),
            cursor: Cursor::document_start(0),
            regions: Vec::new(),
            line_enders,
        })
    }

    fn current_document(&self) -> Option<&Document> {
        self.input.get(self.cursor.document_index)
    }

    /// The character under the cursor.
    pub fn peek(&self) -> SourceResult<char> {
        let Some(document) = self.current_document() else {
            return Err(SourceErrorKind::AtEndOfInput { operation: "peek" }.into());
        };
        document.char_at(self.cursor.char_index).ok_or_else(|| {
            SourceErrorKind::AtEndOfDocument {
                operation: "peek",
                document: document.name().to_string(),
            }
            .into()
        })
    }

    /// Whether the rest of the current document starts with `text`.
    pub fn starts_with(&self, text: &str) -> bool {
        match self.current_document() {
            Some(document) => document.rest_from(self.cursor.char_index).starts_with(text),
            None => text.is_empty(),
        }
    }

    pub fn skip(&mut self, count: i64) -> SourceResult<()> {
        self.skip_with(SkipAmount::Chars(count), false)
    }

    /// Skip characters, leaving them out of the visible text.
    pub fn skip_silently(&mut self, count: i64) -> SourceResult<()> {
        self.skip_with(SkipAmount::Chars(count), true)
    }

    pub fn skip_str(&mut self, text: &str) -> SourceResult<()> {
        self.skip_with(SkipAmount::Text(text), false)
    }

    pub fn skip_str_silently(&mut self, text: &str) -> SourceResult<()> {
        self.skip_with(SkipAmount::Text(text), true)
    }

    /// Move the cursor forward by `amount` units.
    ///
    /// Skipping past the end of input stops there. Fails only when a
    /// character that was already skipped (before a [`Self::rewind_to`]) is
    /// skipped again with a different `silent`; the cursor is then left
    /// where it was.
    pub fn skip_with<'a>(
        &mut self,
        amount: impl Into<SkipAmount<'a>>,
        silent: bool,
    ) -> SourceResult<()> {
        let units = amount.into().unit_count();

        let mut probe = self.cursor;
        for _ in 0..units {
            match self.step(probe, silent)? {
                Some(next) => probe = next,
                None => break,
            }
        }

        for _ in 0..units {
            let Some(next) = self.step(self.cursor, silent)? else {
                break;
            };
            self.advance_to(next, silent);
        }
        Ok(())
    }

    /// The cursor one unit after `cursor`, or `None` at the end of input.
    fn step(&self, cursor: Cursor, silent: bool) -> SourceResult<Option<Cursor>> {
        let Some(document) = self.input.get(cursor.document_index) else {
            return Ok(None);
        };
        let Some(ch) = document.char_at(cursor.char_index) else {
            return Ok(Some(self.next_document_start(cursor.document_index)));
        };

        if let Some(previous) = self.input.silence_at(cursor.document_index, cursor.char_index)
            && previous != silent
        {
            return Err(SourceErrorKind::IncompatibleSilentSkip {
                document: document.name().to_string(),
                line: cursor.line,
                column: cursor.column,
                silent,
            }
            .into());
        }

        let (line, column) = if self.line_enders.contains(ch) {
            (cursor.line + 1, 1)
        } else {
            (cursor.line, cursor.column + 1)
        };
        let char_index = cursor.char_index + 1;
        if char_index == document.char_len() && cursor.document_index + 1 < self.input.len() {
            return Ok(Some(self.next_document_start(cursor.document_index)));
        }
        Ok(Some(Cursor {
            document_index: cursor.document_index,
            char_index,
            visible_char_index: cursor.visible_char_index + usize::from(!silent),
            line,
            column,
        }))
    }

    /// Start of the first document after `index` that has characters. Empty
    /// documents before the last one are passed over; past the last document
    /// this is the end of input.
    fn next_document_start(&self, index: usize) -> Cursor {
        let last = self.input.len().saturating_sub(1);
        let mut next = index + 1;
        while next < last && self.input.get(next).is_some_and(|d| d.char_len() == 0) {
            next += 1;
        }
        Cursor::document_start(next)
    }

    fn advance_to(&mut self, next: Cursor, silent: bool) {
        let from = self.cursor;
        if self
            .input
            .get(from.document_index)
            .is_some_and(|document| from.char_index < document.char_len())
        {
            self.input.record_silence(from.document_index, from.char_index, silent);
        }
        if next.document_index != from.document_index {
            self.regions.clear();
            match self.input.get(next.document_index) {
                Some(document) => tracing::trace!(document = document.name(), "Entered document"),
                None => tracing::trace!("Reached end of input"),
            }
        }
        self.cursor = next;
    }

    fn position_at(&self, cursor: Cursor, regions: Rc<[OpenRegion]>) -> SourcePosition {
        let Some(document) = self.input.get(cursor.document_index) else {
            return SourcePosition::EndOfInput(InputHandle(Rc::clone(&self.input)));
        };
        let snapshot = Snapshot {
            input: Rc::clone(&self.input),
            cursor,
            regions,
        };
        if cursor.char_index >= document.char_len() {
            SourcePosition::EndOfDocument(snapshot)
        } else {
            SourcePosition::Document(snapshot)
        }
    }

    /// A snapshot of the current position.
    pub fn position(&self) -> SourcePosition {
        self.position_at(self.cursor, Rc::from(self.regions.as_slice()))
    }

    /// The end-of-input position of this reader, wherever the cursor is.
    pub fn end_of_input(&self) -> SourcePosition {
        SourcePosition::EndOfInput(InputHandle(Rc::clone(&self.input)))
    }

    /// Open a region named `name` and return the position just after opening
    /// it.
    pub fn begin_region(&mut self, name: impl Into<String>) -> SourcePosition {
        let name = name.into();
        tracing::trace!(region = %name, depth = self.regions.len() + 1, "Began region");
        self.regions.push(OpenRegion {
            name,
            start: self.cursor,
        });
        self.position()
    }

    /// Close the innermost open region.
    ///
    /// Returns `None`, and changes nothing, when no region is open.
    pub fn end_region(&mut self) -> Option<RegionSpan> {
        let open_at_start: Rc<[OpenRegion]> = Rc::from(self.regions.as_slice());
        let region = self.regions.pop()?;
        tracing::trace!(region = %region.name, depth = open_at_start.len(), "Ended region");

        let start = self.position_at(region.start, open_at_start);
        Some(RegionSpan {
            name: region.name,
            start,
            end: self.position(),
        })
    }

    /// Whether the cursor is at the end of its document. Also true at the end
    /// of input.
    pub fn at_end_of_document(&self) -> bool {
        match self.current_document() {
            Some(document) => self.cursor.char_index >= document.char_len(),
            None => true,
        }
    }

    pub fn at_end_of_input(&self) -> bool {
        self.cursor.document_index >= self.input.len()
    }

    /// Move the cursor back to a position this reader reported earlier.
    ///
    /// Line, column and open regions are restored with it. Characters
    /// skipped after `target` keep the visibility they were first skipped
    /// with.
    pub fn rewind_to(&mut self, target: &SourcePosition) -> SourceResult<()> {
        if target.is_unknown() {
            return Err(SourceError::unknown_position("rewind_to"));
        }
        if !target.is_from(&self.input) {
            return Err(SourceError::mismatched_inputs("rewind_to"));
        }

        match target {
            SourcePosition::Document(snapshot) | SourcePosition::EndOfDocument(snapshot) => {
                self.cursor = snapshot.cursor;
                self.regions = snapshot.regions.to_vec();
            }
            SourcePosition::EndOfInput(_) => {
                self.cursor = Cursor::document_start(self.input.len());
                self.regions.clear();
            }
            SourcePosition::Unknown => {}
        }
        tracing::trace!(position = %target, "Rewound reader");
        Ok(())
    }

    pub fn document_count(&self) -> usize {
        self.input.len()
    }

    pub fn document_name(&self, index: usize) -> Option<&str> {
        self.input.get(index).map(Document::name)
    }

    /// `None` at the end of input.
    pub fn current_document_name(&self) -> Option<&str> {
        self.current_document().map(Document::name)
    }

    pub fn line(&self) -> usize {
        self.cursor.line
    }

    pub fn column(&self) -> usize {
        self.cursor.column
    }

    /// Names of the open regions, outermost first.
    pub fn regions(&self) -> Vec<&str> {
        self.regions.iter().map(|r| r.name.as_str()).collect()
    }

    pub fn line_enders(&self) -> &LineEnders {
        &self.line_enders
    }
}
