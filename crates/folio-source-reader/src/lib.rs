//! Source position tracking for Folio
//!
//! This crate provides a cursor over one or more named text documents. As a
//! parser consumes input through a [`SourceReader`], the reader tracks the
//! line and column, the visibility of every consumed character, and a stack
//! of named regions. At any point it can hand out an immutable
//! [`SourcePosition`] that can later be compared with other positions, shown
//! in error messages, or used to extract the text between two points.
//!
//! # Overview
//!
//! The core types are:
//! - [`SourceReader`]: The stateful cursor
//! - [`SourcePosition`]: A frozen snapshot of the cursor
//! - [`RegionSpan`]: A closed region with its start and end positions
//! - [`SourceError`]: Errors with stable catalog codes
//!
//! Characters skipped "silently" (comments, escapes) stay in the full text
//! but are removed from the visible text.
//!
//! # Example
//!
//! ```rust
//! use folio_source_reader::*;
//!
//! let mut reader = SourceReader::new(vec!["a /* note */ b"], "\n").unwrap();
//! let start = reader.position();
//! reader.skip_str("a ").unwrap();
//! reader.skip_str_silently("/* note */").unwrap();
//! reader.skip_str(" b").unwrap();
//!
//! let end = reader.position();
//! assert!(end.is_end_of_document().unwrap());
//! assert_eq!(end.full_contents_from(&start).unwrap(), "a /* note */ b");
//! assert_eq!(end.visible_contents_from(&start).unwrap(), "a  b");
//! assert_eq!(end.to_string(), "@<document1:1,15>");
//! ```

mod document;
pub mod error;
mod extract;
pub mod input;
pub mod options;
pub mod position;
pub mod reader;

// Re-export main types
pub use document::LineEnders;
pub use error::{SourceError, SourceErrorKind, SourceResult};
pub use input::SourceInput;
pub use options::{DEFAULT_DOCUMENT_NAME_PREFIX, DEFAULT_LINE_ENDERS, OptionsError, ReaderOptions};
pub use position::{InputHandle, RegionSpan, Snapshot, SourcePosition};
pub use reader::{SkipAmount, SourceReader};
