use std::path::PathBuf;

use isbn_ranges::domain::{Prefix, Range, RangeSource, RangeWarning};
use isbn_ranges::isbn;
use isbn_ranges::ranges::{RangeDocumentParser, SourceResolver};

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("RangeMessage.xml")
}

#[test]
fn test_fixture_parses_with_metadata() {
    let outcome = RangeDocumentParser::parse_file(&fixture()).expect("fixture should parse");
    let table = &outcome.table;

    assert_eq!(table.metadata().source, RangeSource::File(fixture()));
    assert_eq!(
        table.metadata().serial.as_deref(),
        Some("0f6b2e0c-7d1a-4f3e-b5a9-3c2d1e0f9a88")
    );
    assert_eq!(
        table.metadata().message_date(),
        chrono::NaiveDate::from_ymd_opt(2025, 10, 14)
    );
    assert_eq!(table.len(), 8);
    assert_eq!(table.max_group_len(), 5);
}

#[test]
fn test_fixture_group_without_prefix_is_reported() {
    let outcome = RangeDocumentParser::parse_file(&fixture()).unwrap();
    assert_eq!(outcome.warnings.len(), 1);
    assert!(matches!(
        outcome.warnings[0],
        RangeWarning::GroupSkipped { index: 4, .. }
    ));
}

#[test]
fn test_fixture_entries_are_well_formed_and_prefix_free() {
    let table = RangeDocumentParser::parse_file(&fixture()).unwrap().table;
    for prefix in Prefix::ALL {
        for (code, entry) in table.groups(prefix) {
            assert!(!entry.agency.is_empty(), "{}-{}", prefix, code);
            for range in &entry.ranges {
                assert_eq!(range.low.len(), range.high.len());
                assert!(range.low <= range.high);
            }
        }
    }
    assert!(table.prefix_collisions().is_empty());
}

#[test]
fn test_fixture_zero_length_rules_and_truncation() {
    let table = RangeDocumentParser::parse_file(&fixture()).unwrap().table;
    assert_eq!(table.publisher_ranges(Prefix::Isbn978, "99902"), Some(&[][..]));
    assert_eq!(
        table.publisher_ranges(Prefix::Isbn978, "9928"),
        Some(
            &[
                Range::new("00", "09"),
                Range::new("100", "399"),
                Range::new("4000", "4999"),
            ][..]
        )
    );
    assert_eq!(
        table.publisher_ranges(Prefix::Isbn979, "12"),
        Some(
            &[
                Range::new("200", "299"),
                Range::new("5450", "5999"),
                Range::new("80000", "84999"),
                Range::new("985000", "999999"),
            ][..]
        )
    );
    // EAN.UCC prefix rules are not registration groups
    assert_eq!(table.agency_name(Prefix::Isbn978, "978"), None);
}

#[test]
fn test_split_against_parsed_table() {
    let table = RangeDocumentParser::parse_file(&fixture()).unwrap().table;

    let parts = isbn::split(&table, "978-0-306-40615-7").unwrap();
    assert_eq!(parts.registrant, "306");
    assert_eq!(parts.agency, "English language");

    let parts = isbn::split(&table, "9791020000002").unwrap();
    assert_eq!(parts.hyphenated(), "979-10-200-0000-2");

    let parts = isbn::split(&table, "9789642500123").unwrap();
    assert_eq!(parts.hyphenated(), "978-964-2500-12-3");
    assert_eq!(parts.agency, "Iran");

    // Group 3 exists in the built-in data but not in the fixture
    assert!(matches!(
        isbn::split(&table, "978-3-16-148410-0"),
        Err(isbn::IsbnError::UnknownGroup(_))
    ));
}

#[test]
fn test_resolver_uses_fixture_as_override() {
    let empty = tempfile::tempdir().unwrap();
    let resolved =
        SourceResolver::new(Some(fixture()), empty.path(), empty.path()).resolve();
    assert_eq!(resolved.table.metadata().source, RangeSource::File(fixture()));
    assert_eq!(resolved.warnings.len(), 1);
}
