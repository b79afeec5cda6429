/*
 * translate.rs
 * Copyright (c) 2025 Folio Contributors
 */

//! Message localization.
//!
//! Libraries never format user-facing error text themselves. They hand a
//! stable key (an error code) plus named interpolation values to a
//! [`Translator`], which produces the final string.
//!
//! A process uses one translator for its whole lifetime. The composition root
//! may install one with [`install_translator`] before any message is rendered;
//! when nothing is installed, [`translator`] falls back to
//! [`CatalogTranslator`], which renders the English templates from the error
//! catalog.

use once_cell::sync::OnceCell;
use std::collections::BTreeMap;

/// Named values substituted into a message template.
pub type Interpolations = BTreeMap<String, String>;

/// Produces human-readable text for a message key.
pub trait Translator: Send + Sync {
    /// Render the message for `key`, substituting `interpolations`.
    fn translate(&self, key: &str, interpolations: &Interpolations) -> String;
}

/// Translator backed by the embedded error catalog.
///
/// Unknown keys render as the key itself, followed by the interpolation
/// values, so that nothing is lost when the catalog lags behind the code.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogTranslator;

impl Translator for CatalogTranslator {
    fn translate(&self, key: &str, interpolations: &Interpolations) -> String {
        match crate::catalog::get_message_template(key) {
            Some(template) => interpolate(template, interpolations),
            None if interpolations.is_empty() => key.to_string(),
            None => {
                let pairs: Vec<String> = interpolations
                    .iter()
                    .map(|(name, value)| format!("{name}={value}"))
                    .collect();
                format!("{key} ({})", pairs.join(", "))
            }
        }
    }
}

/// Any `Fn(&str, &Interpolations) -> String` closure can act as a translator.
impl<F> Translator for F
where
    F: Fn(&str, &Interpolations) -> String + Send + Sync,
{
    fn translate(&self, key: &str, interpolations: &Interpolations) -> String {
        self(key, interpolations)
    }
}

static INSTALLED: OnceCell<Box<dyn Translator>> = OnceCell::new();
static FALLBACK: CatalogTranslator = CatalogTranslator;

/// Install the process-wide translator.
///
/// Succeeds only once. A second call hands the rejected translator back so
/// the caller can decide what to do with it.
pub fn install_translator(translator: Box<dyn Translator>) -> Result<(), Box<dyn Translator>> {
    INSTALLED.set(translator)
}

/// The process-wide translator, or the catalog translator if none was installed.
pub fn translator() -> &'static dyn Translator {
    match INSTALLED.get() {
        Some(installed) => installed.as_ref(),
        None => &FALLBACK,
    }
}

/// Translate `key` with the process-wide translator.
pub fn translate(key: &str, interpolations: &Interpolations) -> String {
    translator().translate(key, interpolations)
}

/// Replace `{name}` placeholders in `template` with values from `interpolations`.
///
/// Placeholders without a value are left untouched. `{{` and `}}` produce
/// literal braces.
///
/// # Example
///
/// ```
/// use folio_error_reporting::translate::{interpolate, Interpolations};
///
/// let mut values = Interpolations::new();
/// values.insert("operation".to_string(), "peek".to_string());
/// assert_eq!(interpolate("Cannot {operation} here", &values), "Cannot peek here");
/// ```
pub fn interpolate(template: &str, interpolations: &Interpolations) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find(['{', '}']) {
        result.push_str(&rest[..open]);
        let tail = &rest[open..];

        if tail.starts_with("{{") || tail.starts_with("}}") {
            result.push_str(&tail[..1]);
            rest = &tail[2..];
            continue;
        }

        if tail.starts_with('{') {
            if let Some(close) = tail.find('}') {
                let name = &tail[1..close];
                match interpolations.get(name) {
                    Some(value) => result.push_str(value),
                    None => result.push_str(&tail[..=close]),
                }
                rest = &tail[close + 1..];
                continue;
            }
        }

        result.push_str(&tail[..1]);
        rest = &tail[1..];
    }

    result.push_str(rest);
    result
}
