//! Range message parser
//!
//! Reads the ISBN International `RangeMessage.xml` layout:
//!
//! ```text
//! ISBNRangeMessage
//!   MessageSerialNumber, MessageDate
//!   RegistrationGroups
//!     Group
//!       Prefix   "978-2", "979-12" or bare "05"
//!       Agency
//!       Rules / Rule { Range "0000000-1999999", Length "2" }
//! ```
//!
//! Only the fields above are extracted. Other sections (`EAN.UCCPrefixes`,
//! `MessageSource`, ...) are skipped. A broken group is dropped on its own;
//! only a missing `RegistrationGroups` section fails the whole document.

use quick_xml::events::Event;
use quick_xml::reader::Reader;
use std::path::Path;

use crate::domain::{
    GroupEntry, Prefix, Range, RangeError, RangeMetadata, RangeSource, RangeTable, RangeWarning,
};

/// A parsed table plus everything that was dropped on the way.
#[derive(Debug)]
pub struct ParseOutcome {
    pub table: RangeTable,
    pub warnings: Vec<RangeWarning>,
}

/// Element whose text is currently being collected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Serial,
    Date,
    Prefix,
    Agency,
    Range,
    Length,
}

#[derive(Debug, Default)]
struct GroupBlock {
    prefix: Option<String>,
    agency: String,
    rules: Vec<RuleBlock>,
}

#[derive(Debug, Default)]
struct RuleBlock {
    range: String,
    length: String,
}

pub struct RangeDocumentParser {
    source: RangeSource,
}

impl RangeDocumentParser {
    pub fn new(source: RangeSource) -> Self {
        Self { source }
    }

    /// Read and parse a document from disk.
    pub fn parse_file(path: &Path) -> Result<ParseOutcome, RangeError> {
        let text = std::fs::read_to_string(path).map_err(|e| RangeError::SourceUnavailable {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::new(RangeSource::File(path.to_path_buf())).parse(&text)
    }

    pub fn parse(&self, text: &str) -> Result<ParseOutcome, RangeError> {
        let source_name = self.source.to_string();
        let mut table = RangeTable::new(RangeMetadata::new(self.source.clone()));
        let mut warnings = Vec::new();

        let mut reader = Reader::from_str(text);
        reader.trim_text(true);
        let mut buf = Vec::new();

        let mut serial = String::new();
        let mut date = String::new();
        let mut seen_groups_section = false;
        let mut in_groups_section = false;
        let mut group_index = 0usize;
        let mut group: Option<GroupBlock> = None;
        let mut rule: Option<RuleBlock> = None;
        let mut field: Option<Field> = None;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => {
                    let qname = e.local_name();
                    let name = std::str::from_utf8(qname.as_ref()).unwrap_or("");
                    match name {
                        "RegistrationGroups" if !seen_groups_section => {
                            seen_groups_section = true;
                            in_groups_section = true;
                        }
                        "Group" if in_groups_section => group = Some(GroupBlock::default()),
                        "Rule" if group.is_some() => rule = Some(RuleBlock::default()),
                        "Prefix" if group.is_some() && rule.is_none() => {
                            field = Some(Field::Prefix);
                        }
                        "Agency" if group.is_some() && rule.is_none() => {
                            field = Some(Field::Agency);
                        }
                        "Range" if rule.is_some() => field = Some(Field::Range),
                        "Length" if rule.is_some() => field = Some(Field::Length),
                        "MessageSerialNumber" if !in_groups_section && serial.is_empty() => {
                            field = Some(Field::Serial);
                        }
                        "MessageDate" if !in_groups_section && date.is_empty() => {
                            field = Some(Field::Date);
                        }
                        _ => {}
                    }
                }
                Ok(Event::Empty(e)) => {
                    let qname = e.local_name();
                    let name = std::str::from_utf8(qname.as_ref()).unwrap_or("");
                    match name {
                        "RegistrationGroups" if !seen_groups_section => seen_groups_section = true,
                        "Group" if in_groups_section => {
                            finish_group(group_index, GroupBlock::default(), &mut table, &mut warnings);
                            group_index += 1;
                        }
                        _ => {}
                    }
                }
                Ok(Event::Text(e)) => {
                    if let Some(current) = field {
                        match e.unescape() {
                            Ok(text) => collect(current, &text, &mut serial, &mut date, &mut group, &mut rule),
                            Err(err) => tracing::debug!("Unreadable text in {}: {}", source_name, err),
                        }
                    }
                }
                Ok(Event::CData(e)) => {
                    if let Some(current) = field {
                        let text = String::from_utf8_lossy(&e);
                        collect(current, &text, &mut serial, &mut date, &mut group, &mut rule);
                    }
                }
                Ok(Event::End(e)) => {
                    let qname = e.local_name();
                    let name = std::str::from_utf8(qname.as_ref()).unwrap_or("");
                    match name {
                        "RegistrationGroups" if in_groups_section => in_groups_section = false,
                        "Group" => {
                            if let Some(block) = group.take() {
                                finish_group(group_index, block, &mut table, &mut warnings);
                                group_index += 1;
                            }
                        }
                        "Rule" => {
                            if let (Some(block), Some(finished)) = (group.as_mut(), rule.take()) {
                                block.rules.push(finished);
                            }
                        }
                        _ => {}
                    }
                    field = None;
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    if !seen_groups_section {
                        return Err(RangeError::structure(
                            source_name,
                            format!("XML error before RegistrationGroups: {}", e),
                        ));
                    }
                    tracing::warn!(
                        "XML error in {} at byte {}, keeping {} groups read so far: {}",
                        source_name,
                        reader.buffer_position(),
                        table.len(),
                        e
                    );
                    break;
                }
                _ => (),
            }
            buf.clear();
        }

        if !seen_groups_section {
            return Err(RangeError::structure(
                source_name,
                "missing RegistrationGroups section",
            ));
        }

        let metadata = table.metadata_mut();
        metadata.serial = non_empty(serial);
        metadata.date = non_empty(date);

        tracing::debug!(
            "Parsed {} registration groups from {} ({} warnings)",
            table.len(),
            source_name,
            warnings.len()
        );

        Ok(ParseOutcome { table, warnings })
    }
}

fn collect(
    field: Field,
    text: &str,
    serial: &mut String,
    date: &mut String,
    group: &mut Option<GroupBlock>,
    rule: &mut Option<RuleBlock>,
) {
    match field {
        Field::Serial => serial.push_str(text),
        Field::Date => date.push_str(text),
        Field::Prefix => {
            if let Some(block) = group.as_mut() {
                block.prefix.get_or_insert_with(String::new).push_str(text);
            }
        }
        Field::Agency => {
            if let Some(block) = group.as_mut() {
                block.agency.push_str(text);
            }
        }
        Field::Range => {
            if let Some(block) = rule.as_mut() {
                block.range.push_str(text);
            }
        }
        Field::Length => {
            if let Some(block) = rule.as_mut() {
                block.length.push_str(text);
            }
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Split a `Prefix` value into the GS1 prefix and the group code.
/// `"979-12"` → (979, "12"), `"978-0"` and `"0"` → (978, "0").
pub fn split_prefix(value: &str) -> Option<(Prefix, &str)> {
    let value = value.trim();
    let (prefix, code) = match value.split_once('-') {
        Some(("979", code)) => (Prefix::Isbn979, code),
        Some((_, code)) => (Prefix::Isbn978, code),
        None => (Prefix::Isbn978, value),
    };
    let code = code.trim();
    if code.is_empty() || !code.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((prefix, code))
}

fn skip(warnings: &mut Vec<RangeWarning>, warning: RangeWarning) {
    tracing::warn!("{}", warning);
    warnings.push(warning);
}

fn finish_group(
    index: usize,
    block: GroupBlock,
    table: &mut RangeTable,
    warnings: &mut Vec<RangeWarning>,
) {
    let Some(raw_prefix) = block.prefix.as_deref() else {
        skip(
            warnings,
            RangeWarning::GroupSkipped {
                index,
                reason: "missing Prefix".to_string(),
            },
        );
        return;
    };

    let Some((prefix, code)) = split_prefix(raw_prefix) else {
        skip(
            warnings,
            RangeWarning::GroupSkipped {
                index,
                reason: format!("unusable Prefix '{}'", raw_prefix.trim()),
            },
        );
        return;
    };

    let agency = block.agency.trim();
    if agency.is_empty() {
        skip(
            warnings,
            RangeWarning::GroupSkipped {
                index,
                reason: format!("group {}-{} has no Agency", prefix, code),
            },
        );
        return;
    }

    let label = format!("{}-{}", prefix, code);
    let ranges = block
        .rules
        .iter()
        .filter_map(|rule| match parse_rule(rule) {
            Ok(range) => range,
            Err(reason) => {
                skip(
                    warnings,
                    RangeWarning::RuleDiscarded {
                        group: label.clone(),
                        reason,
                    },
                );
                None
            }
        })
        .collect();

    let entry = GroupEntry {
        agency: agency.to_string(),
        ranges,
    };
    if table.insert(prefix, code, entry).is_some() {
        tracing::debug!("Group {} listed more than once, keeping the later entry", label);
    }
}

/// `Ok(None)` for a zero-length rule, which assigns no publisher range.
fn parse_rule(rule: &RuleBlock) -> Result<Option<Range>, String> {
    let length_text = rule.length.trim();
    let length: usize = length_text
        .parse()
        .map_err(|_| format!("invalid Length '{}'", length_text))?;
    if length == 0 {
        return Ok(None);
    }

    let range_text = rule.range.trim();
    let (low, high) = range_text
        .split_once('-')
        .ok_or_else(|| format!("Range '{}' has no separator", range_text))?;

    let low: String = low.trim().chars().take(length).collect();
    let high: String = high.trim().chars().take(length).collect();
    if low.len() != length || high.len() != length {
        return Err(format!(
            "Range '{}' is shorter than Length {}",
            range_text, length
        ));
    }
    if low > high {
        return Err(format!("Range '{}' is inverted", range_text));
    }
    Ok(Some(Range { low, high }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(xml: &str) -> ParseOutcome {
        RangeDocumentParser::new(RangeSource::BuiltIn)
            .parse(xml)
            .expect("document should parse")
    }

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<ISBNRangeMessage>
  <MessageSource>International ISBN Agency</MessageSource>
  <MessageSerialNumber>4e4a1a06-3c2b-4c4e-9a7f-1f0a7d8b2c11</MessageSerialNumber>
  <MessageDate>Mon, 6 Oct 2025 12:16:52 CEST</MessageDate>
  <EAN.UCCPrefixes>
    <EAN.UCC>
      <Prefix>978</Prefix>
      <Agency>International ISBN Agency</Agency>
      <Rules>
        <Rule><Range>0000000-5999999</Range><Length>1</Length></Rule>
      </Rules>
    </EAN.UCC>
  </EAN.UCCPrefixes>
  <RegistrationGroups>
    <Group>
      <Prefix>978-2</Prefix>
      <Agency> French language </Agency>
      <Rules>
        <Rule><Range>0000000-1999999</Range><Length>2</Length></Rule>
        <Rule><Range>2000000-3499999</Range><Length>3</Length></Rule>
        <Rule><Range>9990000-9999999</Range><Length>0</Length></Rule>
      </Rules>
    </Group>
    <Group>
      <Prefix>979-12</Prefix>
      <Agency>Italy</Agency>
      <Rules>
        <Rule><Range>0000000-1999999</Range><Length>0</Length></Rule>
        <Rule><Range>2000000-2009999</Range><Length>3</Length></Rule>
      </Rules>
    </Group>
    <Group>
      <Prefix>05</Prefix>
      <Agency>Test &amp; Sample</Agency>
      <Rules>
        <Rule><Range>0000000-0000999</Range><Length>2</Length></Rule>
      </Rules>
    </Group>
  </RegistrationGroups>
</ISBNRangeMessage>
"#;

    #[test]
    fn test_parse_sample_document() {
        let outcome = parse(SAMPLE);
        let table = &outcome.table;
        assert!(outcome.warnings.is_empty(), "{:?}", outcome.warnings);
        assert_eq!(table.len(), 3);
        assert_eq!(
            table.metadata().serial.as_deref(),
            Some("4e4a1a06-3c2b-4c4e-9a7f-1f0a7d8b2c11")
        );
        assert_eq!(
            table.metadata().date.as_deref(),
            Some("Mon, 6 Oct 2025 12:16:52 CEST")
        );
        assert_eq!(table.agency_name(Prefix::Isbn978, "2"), Some("French language"));
        assert_eq!(
            table.publisher_ranges(Prefix::Isbn978, "2"),
            Some(&[Range::new("00", "19"), Range::new("200", "349")][..])
        );
        // EAN.UCC rules never leak into the group map
        assert_eq!(table.agency_name(Prefix::Isbn978, "978"), None);
    }

    #[test]
    fn test_prefix_forms() {
        let table = parse(SAMPLE).table;
        assert_eq!(table.agency_name(Prefix::Isbn979, "12"), Some("Italy"));
        assert_eq!(table.agency_name(Prefix::Isbn978, "12"), None);
        assert_eq!(table.agency_name(Prefix::Isbn978, "05"), Some("Test & Sample"));

        assert_eq!(split_prefix("979-12"), Some((Prefix::Isbn979, "12")));
        assert_eq!(split_prefix("05"), Some((Prefix::Isbn978, "05")));
        assert_eq!(split_prefix("978-0"), Some((Prefix::Isbn978, "0")));
        assert_eq!(split_prefix("979-"), None);
        assert_eq!(split_prefix("978-x1"), None);
    }

    #[test]
    fn test_bounds_truncated_to_length() {
        let table = parse(SAMPLE).table;
        assert_eq!(
            table.publisher_ranges(Prefix::Isbn978, "05"),
            Some(&[Range::new("00", "00")][..])
        );
    }

    #[test]
    fn test_zero_length_rules_excluded() {
        let table = parse(SAMPLE).table;
        assert_eq!(
            table.publisher_ranges(Prefix::Isbn979, "12"),
            Some(&[Range::new("200", "200")][..])
        );

        let only_zero = parse(
            r#"<ISBNRangeMessage><RegistrationGroups>
                <Group><Prefix>978-99936</Prefix><Agency>Bhutan</Agency>
                  <Rules><Rule><Range>0000000-9999999</Range><Length>0</Length></Rule></Rules>
                </Group>
            </RegistrationGroups></ISBNRangeMessage>"#,
        )
        .table;
        assert_eq!(only_zero.publisher_ranges(Prefix::Isbn978, "99936"), Some(&[][..]));
    }

    #[test]
    fn test_missing_registration_groups_is_structure_error() {
        let result = RangeDocumentParser::new(RangeSource::BuiltIn).parse(
            "<ISBNRangeMessage><MessageSerialNumber>1</MessageSerialNumber></ISBNRangeMessage>",
        );
        assert!(matches!(result, Err(RangeError::Structure { .. })));

        let result = RangeDocumentParser::new(RangeSource::BuiltIn).parse("not xml at all");
        assert!(matches!(result, Err(RangeError::Structure { .. })));
    }

    #[test]
    fn test_group_without_prefix_is_skipped() {
        let outcome = parse(
            r#"<ISBNRangeMessage><RegistrationGroups>
                <Group><Agency>Nowhere</Agency></Group>
                <Group/>
                <Group><Prefix>978-3</Prefix><Agency>German language</Agency><Rules/></Group>
            </RegistrationGroups></ISBNRangeMessage>"#,
        );
        assert_eq!(outcome.table.len(), 1);
        assert_eq!(outcome.table.publisher_ranges(Prefix::Isbn978, "3"), Some(&[][..]));
        assert_eq!(outcome.warnings.len(), 2);
        assert!(matches!(
            outcome.warnings[0],
            RangeWarning::GroupSkipped { index: 0, .. }
        ));
        assert!(matches!(
            outcome.warnings[1],
            RangeWarning::GroupSkipped { index: 1, .. }
        ));
    }

    #[test]
    fn test_metadata_is_optional() {
        let table = parse("<ISBNRangeMessage><RegistrationGroups/></ISBNRangeMessage>").table;
        assert!(table.is_empty());
        assert_eq!(table.metadata().serial, None);
        assert_eq!(table.metadata().date, None);
    }

    #[test]
    fn test_malformed_rules_are_discarded() {
        let outcome = parse(
            r#"<ISBNRangeMessage><RegistrationGroups>
                <Group><Prefix>978-4</Prefix><Agency>Japan</Agency><Rules>
                  <Rule><Range>0000000-1999999</Range><Length>two</Length></Rule>
                  <Rule><Range>2000000</Range><Length>3</Length></Rule>
                  <Rule><Range>70-69</Range><Length>2</Length></Rule>
                  <Rule><Range>2000000-6999999</Range><Length>3</Length></Rule>
                </Rules></Group>
            </RegistrationGroups></ISBNRangeMessage>"#,
        );
        assert_eq!(
            outcome.table.publisher_ranges(Prefix::Isbn978, "4"),
            Some(&[Range::new("200", "699")][..])
        );
        assert_eq!(outcome.warnings.len(), 3);
        assert!(
            outcome
                .warnings
                .iter()
                .all(|w| matches!(w, RangeWarning::RuleDiscarded { .. }))
        );
    }

    #[test]
    fn test_duplicate_group_last_write_wins() {
        let table = parse(
            r#"<ISBNRangeMessage><RegistrationGroups>
                <Group><Prefix>978-7</Prefix><Agency>First</Agency><Rules/></Group>
                <Group><Prefix>7</Prefix><Agency>Second</Agency><Rules/></Group>
            </RegistrationGroups></ISBNRangeMessage>"#,
        )
        .table;
        assert_eq!(table.len(), 1);
        assert_eq!(table.agency_name(Prefix::Isbn978, "7"), Some("Second"));
    }

    #[test]
    fn test_truncated_document_keeps_finished_groups() {
        let outcome = parse(
            r#"<ISBNRangeMessage><RegistrationGroups>
                <Group><Prefix>978-0</Prefix><Agency>English language</Agency><Rules/></Group>
                <Group><Prefix>978-1</Prefix><Agency>English language</Agency></Rules>"#,
        );
        assert_eq!(outcome.table.agency_name(Prefix::Isbn978, "0"), Some("English language"));
        assert_eq!(outcome.table.agency_name(Prefix::Isbn978, "1"), None);
    }

    #[test]
    fn test_parse_file_missing_is_source_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let result = RangeDocumentParser::parse_file(&dir.path().join("RangeMessage.xml"));
        assert!(matches!(result, Err(RangeError::SourceUnavailable { .. })));
    }
}
