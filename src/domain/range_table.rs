//! In-memory ISBN range table
//!
//! Two-level lookup: GS1 prefix (978/979) → registration group code →
//! agency label plus the publisher (registrant) ranges of that group.
//! Built once by the range parser or the built-in dataset, read-only after.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Top-level ISBN-13 prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Prefix {
    #[serde(rename = "978")]
    Isbn978,
    #[serde(rename = "979")]
    Isbn979,
}

impl Prefix {
    pub const ALL: [Prefix; 2] = [Prefix::Isbn978, Prefix::Isbn979];

    pub fn as_str(&self) -> &'static str {
        match self {
            Prefix::Isbn978 => "978",
            Prefix::Isbn979 => "979",
        }
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Prefix {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "978" => Ok(Prefix::Isbn978),
            "979" => Ok(Prefix::Isbn979),
            other => Err(format!("Unknown ISBN prefix: {}", other)),
        }
    }
}

/// Publisher range of a fixed digit width. `low` and `high` have equal length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Range {
    pub low: String,
    pub high: String,
}

impl Range {
    pub fn new(low: impl Into<String>, high: impl Into<String>) -> Self {
        Self {
            low: low.into(),
            high: high.into(),
        }
    }

    /// Number of digits a registrant takes when it falls in this range
    pub fn width(&self) -> usize {
        self.low.len()
    }

    /// True if the leading `width()` digits of `digits` fall within the range.
    pub fn contains(&self, digits: &str) -> bool {
        let width = self.width();
        match digits.get(..width) {
            Some(head) if width > 0 => self.low.as_str() <= head && head <= self.high.as_str(),
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupEntry {
    pub agency: String,
    pub ranges: Vec<Range>,
}

impl GroupEntry {
    /// Registrant length for the digits that follow the group code, if any
    /// range of this group covers them.
    pub fn registrant_len(&self, digits: &str) -> Option<usize> {
        self.ranges
            .iter()
            .find(|range| range.contains(digits))
            .map(Range::width)
    }
}

pub type GroupMap = BTreeMap<String, GroupEntry>;

/// Where a table came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeSource {
    File(PathBuf),
    BuiltIn,
}

impl fmt::Display for RangeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeSource::File(path) => write!(f, "{}", path.display()),
            RangeSource::BuiltIn => f.write_str("built-in"),
        }
    }
}

impl Serialize for RangeSource {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Provenance of a table. Not used for validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeMetadata {
    pub source: RangeSource,
    pub serial: Option<String>,
    pub date: Option<String>,
}

impl RangeMetadata {
    pub fn new(source: RangeSource) -> Self {
        Self {
            source,
            serial: None,
            date: None,
        }
    }

    /// Calendar date of the message, read from stamps such as
    /// `"Mon, 6 Oct 2025 12:16:52 CEST"`.
    pub fn message_date(&self) -> Option<NaiveDate> {
        let date = self.date.as_deref()?;
        let day_part: String = date.split_whitespace().take(4).collect::<Vec<_>>().join(" ");
        NaiveDate::parse_from_str(&day_part, "%a, %d %b %Y").ok()
    }
}

#[derive(Debug, Clone)]
pub struct RangeTable {
    prefixes: BTreeMap<Prefix, GroupMap>,
    metadata: RangeMetadata,
    // Longest code ever inserted; keys are never removed.
    max_group_len: usize,
}

impl RangeTable {
    pub fn new(metadata: RangeMetadata) -> Self {
        Self {
            prefixes: BTreeMap::new(),
            metadata,
            max_group_len: 0,
        }
    }

    pub fn metadata(&self) -> &RangeMetadata {
        &self.metadata
    }

    pub(crate) fn metadata_mut(&mut self) -> &mut RangeMetadata {
        &mut self.metadata
    }

    /// Store a group, replacing any previous entry for the same key.
    /// Returns the replaced entry.
    pub(crate) fn insert(
        &mut self,
        prefix: Prefix,
        code: impl Into<String>,
        entry: GroupEntry,
    ) -> Option<GroupEntry> {
        let code = code.into();
        self.max_group_len = self.max_group_len.max(code.len());
        self.prefixes.entry(prefix).or_default().insert(code, entry)
    }

    pub fn group(&self, prefix: Prefix, code: &str) -> Option<&GroupEntry> {
        self.prefixes.get(&prefix)?.get(code)
    }

    pub fn agency_name(&self, prefix: Prefix, code: &str) -> Option<&str> {
        self.group(prefix, code).map(|entry| entry.agency.as_str())
    }

    /// `None` if the group is not registered, an empty slice if it is
    /// registered without any assigned ranges.
    pub fn publisher_ranges(&self, prefix: Prefix, code: &str) -> Option<&[Range]> {
        self.group(prefix, code).map(|entry| entry.ranges.as_slice())
    }

    pub fn groups(&self, prefix: Prefix) -> impl Iterator<Item = (&str, &GroupEntry)> {
        self.prefixes
            .get(&prefix)
            .into_iter()
            .flat_map(|map| map.iter().map(|(code, entry)| (code.as_str(), entry)))
    }

    /// Longest registration group code present under any prefix
    pub fn max_group_len(&self) -> usize {
        self.max_group_len
    }

    /// Number of registered groups across both prefixes
    pub fn len(&self) -> usize {
        self.prefixes.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Find the group whose code is a prefix of `digits` (the digits after
    /// the 978/979 prefix). Codes are tried shortest first.
    pub fn find_group<'a>(&'a self, prefix: Prefix, digits: &str) -> Option<(&'a str, &'a GroupEntry)> {
        let map = self.prefixes.get(&prefix)?;
        let limit = self.max_group_len.min(digits.len());
        (1..=limit).find_map(|len| {
            let code = digits.get(..len)?;
            map.get_key_value(code)
                .map(|(code, entry)| (code.as_str(), entry))
        })
    }

    /// Pairs `(shorter, longer)` of group codes where one is a prefix of the
    /// other within the same prefix. Empty for a well-formed table.
    pub fn prefix_collisions(&self) -> Vec<(Prefix, String, String)> {
        let mut collisions = Vec::new();
        for (prefix, map) in &self.prefixes {
            // Sorted keys put every code right before the codes it prefixes.
            let codes: Vec<&String> = map.keys().collect();
            for (i, short) in codes.iter().enumerate() {
                for long in codes[i + 1..].iter().take_while(|c| c.starts_with(short.as_str())) {
                    collisions.push((*prefix, (*short).clone(), (*long).clone()));
                }
            }
        }
        collisions
    }
}
