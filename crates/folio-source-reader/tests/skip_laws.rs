/*
 * skip_laws.rs
 * Copyright (c) 2025 Folio Contributors
 *
 * Property-based tests for skipping and extraction.
 *
 * Each case builds a reader over a few generated documents, drives it with a
 * generated script of skips, and checks that the cursor and the extracted
 * text obey the skip and extraction laws.
 */

use folio_source_reader::{SkipAmount, SourcePosition, SourceReader};
use proptest::prelude::*;

// =============================================================================
// Helpers
// =============================================================================

/// Everything observable about a reader's cursor.
#[derive(Debug, PartialEq, Eq)]
struct CursorState {
    end_of_input: bool,
    end_of_document: bool,
    document: Option<String>,
    char_index: Option<usize>,
    visible_char_index: Option<usize>,
    line: usize,
    column: usize,
    regions: Vec<String>,
}

fn cursor_state(reader: &SourceReader) -> CursorState {
    let position = reader.position();
    CursorState {
        end_of_input: reader.at_end_of_input(),
        end_of_document: reader.at_end_of_document(),
        document: reader.current_document_name().map(str::to_string),
        char_index: position.char_index().ok(),
        visible_char_index: position.visible_char_index().ok(),
        line: reader.line(),
        column: reader.column(),
        regions: reader.regions().into_iter().map(str::to_string).collect(),
    }
}

fn gen_documents() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[ab é\n]{0,8}", 1..4)
}

/// A skip script: unit counts with a silence flag.
fn gen_script() -> impl Strategy<Value = Vec<(i64, bool)>> {
    prop::collection::vec((-2i64..6, any::<bool>()), 0..12)
}

fn reader_after(documents: &[String], script: &[(i64, bool)]) -> SourceReader {
    let mut reader = SourceReader::new(documents.to_vec(), "\n").unwrap();
    for &(count, silent) in script {
        reader.skip_with(SkipAmount::Chars(count), silent).unwrap();
    }
    reader
}

// =============================================================================
// Skip laws
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// skip(n) lands where n calls of skip(1) land
    #[test]
    fn test_skip_equivalence(
        documents in gen_documents(),
        script in gen_script(),
        count in 0i64..30,
        silent in any::<bool>(),
    ) {
        let mut bulk = reader_after(&documents, &script);
        let mut single = reader_after(&documents, &script);

        bulk.skip_with(SkipAmount::Chars(count), silent).unwrap();
        for _ in 0..count {
            single.skip_with(SkipAmount::Chars(1), silent).unwrap();
        }

        prop_assert_eq!(cursor_state(&bulk), cursor_state(&single));
    }

    /// skip_str(s) lands where skip(s.chars().count()) lands, whatever s says
    #[test]
    fn test_skip_str_is_skip_by_length(
        documents in gen_documents(),
        script in gen_script(),
        text in "[a-zé\n]{0,10}",
    ) {
        let mut by_text = reader_after(&documents, &script);
        let mut by_count = reader_after(&documents, &script);

        by_text.skip_str(&text).unwrap();
        by_count.skip(text.chars().count() as i64).unwrap();

        prop_assert_eq!(cursor_state(&by_text), cursor_state(&by_count));
    }

    /// Zero and negative skips change nothing
    #[test]
    fn test_empty_skip(
        documents in gen_documents(),
        script in gen_script(),
        count in -20i64..=0,
        silent in any::<bool>(),
    ) {
        let mut reader = reader_after(&documents, &script);
        let before = cursor_state(&reader);
        reader.skip_with(SkipAmount::Chars(count), silent).unwrap();
        prop_assert_eq!(cursor_state(&reader), before);
    }

    /// begin_region then end_region restores the region stack
    #[test]
    fn test_region_round_trip(
        documents in gen_documents(),
        script in gen_script(),
        outer in prop::collection::vec("[a-z]{1,6}", 0..3),
        name in "[a-z]{1,6}",
    ) {
        let mut reader = reader_after(&documents, &script);
        for region in &outer {
            reader.begin_region(region.as_str());
        }
        let before = cursor_state(&reader);

        reader.begin_region(name.as_str());
        let span = reader.end_region();

        prop_assert_eq!(span.map(|s| s.name), Some(name));
        prop_assert_eq!(cursor_state(&reader), before);
    }
}

// =============================================================================
// Extraction laws
// =============================================================================

/// Positions taken after each step of a script, starting with the start.
fn checkpoints(
    documents: &[String],
    script: &[(i64, bool)],
) -> (SourceReader, Vec<SourcePosition>) {
    let mut reader = SourceReader::new(documents.to_vec(), "\n").unwrap();
    let mut positions = vec![reader.position()];
    for &(count, silent) in script {
        reader.skip_with(SkipAmount::Chars(count), silent).unwrap();
        positions.push(reader.position());
    }
    (reader, positions)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A.to(B) equals B.from(A), and A.to(B) + B.to(C) equals A.to(C)
    #[test]
    fn test_extraction_complementarity(
        documents in gen_documents(),
        script in gen_script(),
        picks in prop::array::uniform3(any::<prop::sample::Index>()),
    ) {
        let (_reader, positions) = checkpoints(&documents, &script);
        let mut indexes = [
            picks[0].index(positions.len()),
            picks[1].index(positions.len()),
            picks[2].index(positions.len()),
        ];
        indexes.sort_unstable();
        let (a, b, c) = (&positions[indexes[0]], &positions[indexes[1]], &positions[indexes[2]]);

        prop_assert!(a <= b && b <= c);
        prop_assert_eq!(a.full_contents_to(b).unwrap(), b.full_contents_from(a).unwrap());
        prop_assert_eq!(a.visible_contents_to(b).unwrap(), b.visible_contents_from(a).unwrap());
        prop_assert_eq!(
            a.full_contents_to(b).unwrap() + &b.full_contents_to(c).unwrap(),
            a.full_contents_to(c).unwrap()
        );
        prop_assert_eq!(
            a.visible_contents_to(b).unwrap() + &b.visible_contents_to(c).unwrap(),
            a.visible_contents_to(c).unwrap()
        );
    }

    /// The whole input reads back verbatim, and the visible text is the full
    /// text minus exactly the silently skipped spans
    #[test]
    fn test_visible_subset(
        documents in gen_documents(),
        script in gen_script(),
    ) {
        let (reader, positions) = checkpoints(&documents, &script);
        let start = &positions[0];
        let end = reader.end_of_input();

        let full = start.full_contents_to(&end).unwrap();
        let visible = start.visible_contents_to(&end).unwrap();
        prop_assert_eq!(&full, &documents.concat());
        prop_assert!(visible.chars().count() <= full.chars().count());

        let mut expected = String::new();
        for (step, &(_, silent)) in script.iter().enumerate() {
            if !silent {
                expected += &positions[step].full_contents_to(&positions[step + 1]).unwrap();
            }
        }
        let last = &positions[positions.len() - 1];
        expected += &last.full_contents_to(&end).unwrap();
        prop_assert_eq!(visible, expected);
    }
}
