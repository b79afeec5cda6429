/*
 * lib.rs
 * Copyright (c) 2025 Folio Contributors
 */

//! Error reporting and message localization for Folio.
//!
//! # Architecture
//!
//! - [`catalog`]: the embedded error code catalog (code → title, subsystem,
//!   message template)
//! - [`translate`]: the [`Translator`] seam that turns a key plus
//!   interpolations into text, and the process-wide translator slot
//! - [`DiagnosticMessage`]: structured diagnostics callers build from errors,
//!   rendered as text or JSON
//! - [`DiagnosticMessageBuilder`]: tidyverse-style builder methods
//!   (`.problem()`, `.add_detail()`, `.add_hint()`)
//!
//! Libraries raising errors carry only a code and structured data. Text is
//! produced at display time by [`translate::translator`], so an application
//! can localize every message by installing its own translator once at
//! startup.

pub mod builder;
pub mod catalog;
pub mod diagnostic;
pub mod translate;

pub use builder::DiagnosticMessageBuilder;
pub use catalog::{ERROR_CATALOG, ErrorCodeInfo, get_error_info, get_subsystem};
pub use diagnostic::{
    DetailItem, DetailKind, DiagnosticKind, DiagnosticLocation, DiagnosticMessage, MessageContent,
};
pub use translate::{
    CatalogTranslator, Interpolations, Translator, install_translator, translate, translator,
};
