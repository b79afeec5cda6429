/*
 * localization.rs
 * Copyright (c) 2025 Folio Contributors
 *
 * Installs a process-wide translator, so it lives in its own test binary.
 */

use folio_error_reporting::{CatalogTranslator, Interpolations, Translator, install_translator};
use folio_source_reader::{SourceErrorKind, SourcePosition, SourceReader};

fn french(key: &str, values: &Interpolations) -> String {
    match key {
        "F-1-2" => format!(
            "L'opération « {} » est impossible à une position inconnue.",
            values["operation"]
        ),
        "F-1-4" => format!(
            "Le document « {} » n'a plus de caractère pour « {} ».",
            values["document"], values["operation"]
        ),
        _ => CatalogTranslator.translate(key, values),
    }
}

#[test]
fn test_installed_translator_renders_errors() {
    assert!(install_translator(Box::new(french)).is_ok());
    assert!(install_translator(Box::new(CatalogTranslator)).is_err());

    let error = SourcePosition::UNKNOWN.column().unwrap_err();
    assert_eq!(
        error.to_string(),
        "L'opération « column » est impossible à une position inconnue."
    );

    let mut reader = SourceReader::new(vec![("intro.md", "")], "\n").unwrap();
    let error = reader.peek().unwrap_err();
    assert_eq!(
        error.kind(),
        &SourceErrorKind::AtEndOfDocument {
            operation: "peek",
            document: "intro.md".to_string()
        }
    );
    assert_eq!(
        error.to_string(),
        "Le document « intro.md » n'a plus de caractère pour « peek »."
    );

    // Codes without a translation fall through to the catalog
    reader.skip(1).unwrap();
    assert_eq!(
        reader.peek().unwrap_err().to_string(),
        "Operation 'peek' needs a character, but the reader has consumed all of its input."
    );
}
