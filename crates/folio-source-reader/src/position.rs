/*
 * position.rs
 * Copyright (c) 2025 Folio Contributors
 */

//! Immutable position snapshots.
//!
//! A [`SourcePosition`] records where a reader was when the snapshot was
//! taken. Known positions keep a shared handle to the reader's documents, so
//! they can extract text long after the reader has moved on; they never
//! mutate the reader.
//!
//! Which queries are legal depends on the variant:
//!
//! | Query                                   | Unknown | Document | EndOfDocument | EndOfInput |
//! |-----------------------------------------|---------|----------|---------------|------------|
//! | `is_end_of_input`                       | error   | false    | false         | true       |
//! | `is_end_of_document`                    | error   | false    | true          | error      |
//! | `line`, `column`, `regions`, contents…  | error   | ok       | ok            | error      |
//! | `*_contents_from` / `*_contents_to`     | error   | ok       | ok            | ok         |

use crate::document::DocumentSet;
use crate::error::{SourceError, SourceResult};
use crate::extract::{Bound, TextKind, contents_between};
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

/// Where a reader's cursor is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cursor {
    pub(crate) document_index: usize,
    pub(crate) char_index: usize,
    pub(crate) visible_char_index: usize,
    pub(crate) line: usize,
    pub(crate) column: usize,
}

impl Cursor {
    pub(crate) fn document_start(document_index: usize) -> Self {
        Cursor {
            document_index,
            char_index: 0,
            visible_char_index: 0,
            line: 1,
            column: 1,
        }
    }
}

/// A region that has been begun but not yet ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OpenRegion {
    pub(crate) name: String,
    pub(crate) start: Cursor,
}

/// The captured state behind `Document` and `EndOfDocument` positions.
#[derive(Clone)]
pub struct Snapshot {
    pub(crate) input: Rc<DocumentSet>,
    pub(crate) cursor: Cursor,
    pub(crate) regions: Rc<[OpenRegion]>,
}

impl Snapshot {
    fn document_name(&self) -> &str {
        self.input.document(self.cursor.document_index).name()
    }

    fn region_names(&self) -> Vec<&str> {
        self.regions.iter().map(|r| r.name.as_str()).collect()
    }

    fn bound(&self) -> Bound {
        Bound {
            document: self.cursor.document_index,
            char_index: self.cursor.char_index,
            visible_index: self.cursor.visible_char_index,
        }
    }
}

impl fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Snapshot")
            .field("document", &self.document_name())
            .field("char_index", &self.cursor.char_index)
            .field("visible_char_index", &self.cursor.visible_char_index)
            .field("line", &self.cursor.line)
            .field("column", &self.cursor.column)
            .field("regions", &self.region_names())
            .finish()
    }
}

/// A handle to the input of the reader that produced an end-of-input position.
#[derive(Clone)]
pub struct InputHandle(pub(crate) Rc<DocumentSet>);

impl fmt::Debug for InputHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputHandle")
            .field("documents", &self.0.len())
            .finish()
    }
}

/// A snapshot of a reader's position.
#[derive(Debug, Clone)]
pub enum SourcePosition {
    /// The position cannot be determined.
    Unknown,
    /// On a character of a document.
    Document(Snapshot),
    /// Just past the last character of a document.
    EndOfDocument(Snapshot),
    /// Past the end of the last document.
    EndOfInput(InputHandle),
}

impl SourcePosition {
    /// The unknown position.
    pub const UNKNOWN: SourcePosition = SourcePosition::Unknown;

    fn snapshot(&self, operation: &'static str) -> SourceResult<&Snapshot> {
        match self {
            SourcePosition::Unknown => Err(SourceError::unknown_position(operation)),
            SourcePosition::Document(snapshot) | SourcePosition::EndOfDocument(snapshot) => {
                Ok(snapshot)
            }
            SourcePosition::EndOfInput(_) => Err(SourceError::end_of_input_position(operation)),
        }
    }

    fn input(&self) -> Option<&Rc<DocumentSet>> {
        match self {
            SourcePosition::Unknown => None,
            SourcePosition::Document(snapshot) | SourcePosition::EndOfDocument(snapshot) => {
                Some(&snapshot.input)
            }
            SourcePosition::EndOfInput(handle) => Some(&handle.0),
        }
    }

    fn bound(&self) -> Option<Bound> {
        match self {
            SourcePosition::Unknown => None,
            SourcePosition::Document(snapshot) | SourcePosition::EndOfDocument(snapshot) => {
                Some(snapshot.bound())
            }
            SourcePosition::EndOfInput(handle) => Some(Bound::end_of_input(&handle.0)),
        }
    }

    /// Resolve both positions to bounds in a shared input, or explain why not.
    fn paired_bounds(
        &self,
        other: &SourcePosition,
        operation: &'static str,
    ) -> SourceResult<(&Rc<DocumentSet>, Bound, Bound)> {
        let (Some(input), Some(other_input)) = (self.input(), other.input()) else {
            return Err(SourceError::unknown_position(operation));
        };
        if !Rc::ptr_eq(input, other_input) {
            return Err(SourceError::mismatched_inputs(operation));
        }
        match (self.bound(), other.bound()) {
            (Some(own), Some(theirs)) => Ok((input, own, theirs)),
            _ => Err(SourceError::unknown_position(operation)),
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, SourcePosition::Unknown)
    }

    pub fn is_end_of_input(&self) -> SourceResult<bool> {
        match self {
            SourcePosition::Unknown => Err(SourceError::unknown_position("is_end_of_input")),
            SourcePosition::EndOfInput(_) => Ok(true),
            _ => Ok(false),
        }
    }

    pub fn is_end_of_document(&self) -> SourceResult<bool> {
        self.snapshot("is_end_of_document")?;
        Ok(matches!(self, SourcePosition::EndOfDocument(_)))
    }

    /// Line number, starting at 1.
    pub fn line(&self) -> SourceResult<usize> {
        Ok(self.snapshot("line")?.cursor.line)
    }

    /// Column number, starting at 1.
    pub fn column(&self) -> SourceResult<usize> {
        Ok(self.snapshot("column")?.cursor.column)
    }

    /// Regions open at this position, outermost first.
    pub fn regions(&self) -> SourceResult<Vec<&str>> {
        Ok(self.snapshot("regions")?.region_names())
    }

    pub fn document_name(&self) -> SourceResult<&str> {
        Ok(self.snapshot("document_name")?.document_name())
    }

    /// Index of the document, in reading order.
    pub fn document_index(&self) -> SourceResult<usize> {
        Ok(self.snapshot("document_index")?.cursor.document_index)
    }

    /// Offset into the document's full contents, in characters.
    pub fn char_index(&self) -> SourceResult<usize> {
        Ok(self.snapshot("char_index")?.cursor.char_index)
    }

    /// Offset into the document's visible contents, in characters.
    pub fn visible_char_index(&self) -> SourceResult<usize> {
        Ok(self.snapshot("visible_char_index")?.cursor.visible_char_index)
    }

    pub fn full_document_contents(&self) -> SourceResult<&str> {
        let snapshot = self.snapshot("full_document_contents")?;
        Ok(snapshot.input.document(snapshot.cursor.document_index).contents())
    }

    /// The document's text with every character skipped silently so far
    /// removed.
    pub fn visible_document_contents(&self) -> SourceResult<String> {
        let snapshot = self.snapshot("visible_document_contents")?;
        Ok(snapshot.input.visible_contents(snapshot.cursor.document_index))
    }

    /// Up to `lines` whole lines before this position's line, followed by the
    /// start of this position's line up to the position.
    ///
    /// Never reaches into other documents.
    pub fn document_context_before(&self, lines: usize) -> SourceResult<Vec<&str>> {
        let snapshot = self.snapshot("document_context_before")?;
        let document = snapshot.input.document(snapshot.cursor.document_index);
        let char_index = snapshot.cursor.char_index;
        let line_index = document.line_index_of(char_index);

        let mut context: Vec<&str> = (line_index.saturating_sub(lines)..line_index)
            .map(|index| document.line_text(index))
            .collect();
        context.push(document.slice(document.line_start(line_index), char_index));
        Ok(context)
    }

    /// The rest of this position's line from the position, followed by up to
    /// `lines` whole lines after it.
    ///
    /// Never reaches into other documents.
    pub fn document_context_after(&self, lines: usize) -> SourceResult<Vec<&str>> {
        let snapshot = self.snapshot("document_context_after")?;
        let document = snapshot.input.document(snapshot.cursor.document_index);
        let char_index = snapshot.cursor.char_index;
        let line_index = document.line_index_of(char_index);

        let mut context = vec![document.slice(char_index, document.line_content_end(line_index))];
        let last_line = (line_index + lines).min(document.line_count() - 1);
        context.extend((line_index + 1..=last_line).map(|index| document.line_text(index)));
        Ok(context)
    }

    fn contents(
        &self,
        other: &SourcePosition,
        operation: &'static str,
        kind: TextKind,
        from_other: bool,
    ) -> SourceResult<String> {
        let (input, own, theirs) = self.paired_bounds(other, operation)?;
        let (start, end) = if from_other { (theirs, own) } else { (own, theirs) };
        Ok(contents_between(input, start, end, kind))
    }

    /// The full text read going from `other` up to this position.
    ///
    /// Empty when `other` is not before this position.
    pub fn full_contents_from(&self, other: &SourcePosition) -> SourceResult<String> {
        self.contents(other, "full_contents_from", TextKind::Full, true)
    }

    /// The full text read going from this position up to `other`.
    ///
    /// Empty when `other` is not after this position.
    pub fn full_contents_to(&self, other: &SourcePosition) -> SourceResult<String> {
        self.contents(other, "full_contents_to", TextKind::Full, false)
    }

    /// Like [`Self::full_contents_from`], without silently skipped characters.
    pub fn visible_contents_from(&self, other: &SourcePosition) -> SourceResult<String> {
        self.contents(other, "visible_contents_from", TextKind::Visible, true)
    }

    /// Like [`Self::full_contents_to`], without silently skipped characters.
    pub fn visible_contents_to(&self, other: &SourcePosition) -> SourceResult<String> {
        self.contents(other, "visible_contents_to", TextKind::Visible, false)
    }

    /// Order two known positions of the same reader.
    pub fn compare(&self, other: &SourcePosition) -> SourceResult<Ordering> {
        let (_, own, theirs) = self.paired_bounds(other, "compare")?;
        Ok(own.cmp(&theirs))
    }

    /// Whether both positions are known and come from the same reader.
    pub fn same_reader(&self, other: &SourcePosition) -> bool {
        match (self.input(), other.input()) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    pub(crate) fn is_from(&self, input: &Rc<DocumentSet>) -> bool {
        self.input().is_some_and(|own| Rc::ptr_eq(own, input))
    }
}

/// Positions are equal when they come from the same reader and mark the same
/// place: same variant, document, character and visible character. The open
/// regions they carry are not compared, so this agrees with the ordering.
impl PartialEq for SourcePosition {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (SourcePosition::Unknown, SourcePosition::Unknown) => true,
            (SourcePosition::Document(_), SourcePosition::Document(_))
            | (SourcePosition::EndOfDocument(_), SourcePosition::EndOfDocument(_))
            | (SourcePosition::EndOfInput(_), SourcePosition::EndOfInput(_)) => {
                self.same_reader(other) && self.bound() == other.bound()
            }
            _ => false,
        }
    }
}

impl PartialOrd for SourcePosition {
    /// `None` for unknown positions and for positions of different readers.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other).ok()
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourcePosition::Unknown => write!(f, "@<unknown>"),
            SourcePosition::Document(snapshot) | SourcePosition::EndOfDocument(snapshot) => write!(
                f,
                "@<{}:{},{}>",
                snapshot.document_name(),
                snapshot.cursor.line,
                snapshot.cursor.column
            ),
            SourcePosition::EndOfInput(_) => write!(f, "@<EOI>"),
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
enum PositionRecord<'a> {
    Unknown,
    Document {
        document: &'a str,
        line: usize,
        column: usize,
        regions: Vec<&'a str>,
    },
    EndOfDocument {
        document: &'a str,
        line: usize,
        column: usize,
        regions: Vec<&'a str>,
    },
    EndOfInput,
}

impl Serialize for SourcePosition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let record = match self {
            SourcePosition::Unknown => PositionRecord::Unknown,
            SourcePosition::Document(snapshot) => PositionRecord::Document {
                document: snapshot.document_name(),
                line: snapshot.cursor.line,
                column: snapshot.cursor.column,
                regions: snapshot.region_names(),
            },
            SourcePosition::EndOfDocument(snapshot) => PositionRecord::EndOfDocument {
                document: snapshot.document_name(),
                line: snapshot.cursor.line,
                column: snapshot.cursor.column,
                regions: snapshot.region_names(),
            },
            SourcePosition::EndOfInput(_) => PositionRecord::EndOfInput,
        };
        record.serialize(serializer)
    }
}

/// A region that was begun and ended, with the positions bounding it.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionSpan {
    pub name: String,
    /// Where `begin_region` was called
    pub start: SourcePosition,
    /// Where `end_region` was called
    pub end: SourcePosition,
}

impl RegionSpan {
    pub fn full_contents(&self) -> SourceResult<String> {
        self.start.full_contents_to(&self.end)
    }

    pub fn visible_contents(&self) -> SourceResult<String> {
        self.start.visible_contents_to(&self.end)
    }
}
