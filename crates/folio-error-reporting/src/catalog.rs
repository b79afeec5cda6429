/*
 * catalog.rs
 * Copyright (c) 2025 Folio Contributors
 */

//! The error code catalog.
//!
//! `error_catalog.json` is compiled into the crate and maps each code
//! (`F-<subsystem>-<number>`) to a title and an English message template.
//! The templates are the only place the default wording of an error lives;
//! code that raises errors carries just the code and the values to fill in.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Catalog entry for one code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorCodeInfo {
    /// e.g. `source-reader`
    pub subsystem: String,
    pub title: String,
    /// English text with `{name}` placeholders
    pub message_template: String,
    /// First release that could raise this code
    pub since_version: String,
}

/// All catalog entries by code, parsed on first use.
///
/// # Panics
///
/// On first access, if `error_catalog.json` does not parse. The file is
/// embedded at compile time, so this is caught by the catalog tests.
pub static ERROR_CATALOG: Lazy<HashMap<String, ErrorCodeInfo>> = Lazy::new(|| {
    serde_json::from_str(include_str!("../error_catalog.json"))
        .expect("error_catalog.json is not a valid catalog")
});

/// # Example
///
/// ```
/// use folio_error_reporting::catalog::get_error_info;
///
/// let info = get_error_info("F-1-1").unwrap();
/// assert_eq!(info.title, "No Input");
/// assert!(get_error_info("F-9-9").is_none());
/// ```
pub fn get_error_info(code: &str) -> Option<&'static ErrorCodeInfo> {
    ERROR_CATALOG.get(code)
}

pub fn get_title(code: &str) -> Option<&'static str> {
    get_error_info(code).map(|info| info.title.as_str())
}

pub fn get_message_template(code: &str) -> Option<&'static str> {
    get_error_info(code).map(|info| info.message_template.as_str())
}

pub fn get_subsystem(code: &str) -> Option<&'static str> {
    get_error_info(code).map(|info| info.subsystem.as_str())
}
