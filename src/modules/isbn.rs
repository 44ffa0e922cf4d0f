//! ISBN normalisation and decomposition on top of a [`RangeTable`]
//!
//! Accepts ISBN-10 or ISBN-13 with or without hyphens, checks the check
//! digit, and splits the number into prefix, registration group,
//! registrant, publication and check digit.

use serde::Serialize;
use std::fmt;

use crate::domain::{Prefix, RangeTable};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IsbnError {
    /// Digit count after cleanup is neither 10 nor 13
    InvalidLength(usize),
    InvalidCharacter(char),
    Checksum { expected: char, found: char },
    UnknownPrefix(String),
    /// No registration group in the table matches
    UnknownGroup(String),
    /// The group exists but no publisher range covers the registrant
    NoRegistrantRange { prefix: Prefix, group: String },
}

impl fmt::Display for IsbnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IsbnError::InvalidLength(len) => {
                write!(f, "ISBN must have 10 or 13 digits, found {}", len)
            }
            IsbnError::InvalidCharacter(c) => write!(f, "Invalid character '{}' in ISBN", c),
            IsbnError::Checksum { expected, found } => write!(
                f,
                "Check digit mismatch: expected {}, found {}",
                expected, found
            ),
            IsbnError::UnknownPrefix(prefix) => write!(f, "Unknown ISBN prefix {}", prefix),
            IsbnError::UnknownGroup(digits) => {
                write!(f, "No registration group matches {}", digits)
            }
            IsbnError::NoRegistrantRange { prefix, group } => write!(
                f,
                "No publisher range of group {}-{} covers this ISBN",
                prefix, group
            ),
        }
    }
}

impl std::error::Error for IsbnError {}

impl IsbnError {
    /// True when the input itself is malformed, as opposed to merely not
    /// being covered by the loaded ranges.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            IsbnError::InvalidLength(_) | IsbnError::InvalidCharacter(_) | IsbnError::Checksum { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IsbnParts {
    pub prefix: Prefix,
    pub group: String,
    pub registrant: String,
    pub publication: String,
    pub check_digit: char,
    pub agency: String,
}

impl IsbnParts {
    pub fn isbn13(&self) -> String {
        format!(
            "{}{}{}{}{}",
            self.prefix, self.group, self.registrant, self.publication, self.check_digit
        )
    }

    /// `978-2-07-036002-4` style
    pub fn hyphenated(&self) -> String {
        format!(
            "{}-{}-{}-{}-{}",
            self.prefix, self.group, self.registrant, self.publication, self.check_digit
        )
    }

    /// ISBN-10 form; only numbers in the 978 space have one.
    pub fn isbn10(&self) -> Option<String> {
        if self.prefix != Prefix::Isbn978 {
            return None;
        }
        let body = format!("{}{}{}", self.group, self.registrant, self.publication);
        let check = isbn10_check_digit(&body);
        Some(format!("{}{}", body, check))
    }

    pub fn hyphenated10(&self) -> Option<String> {
        let isbn10 = self.isbn10()?;
        let check = isbn10.chars().last()?;
        Some(format!(
            "{}-{}-{}-{}",
            self.group, self.registrant, self.publication, check
        ))
    }
}

fn digit_values(digits: &str) -> impl Iterator<Item = u32> + '_ {
    digits.chars().filter_map(|c| c.to_digit(10))
}

/// Check digit for the first nine digits of an ISBN-10 (`'X'` stands for 10).
pub fn isbn10_check_digit(first9: &str) -> char {
    let sum: u32 = digit_values(first9)
        .zip((2..=10).rev())
        .map(|(d, w)| d * w)
        .sum();
    match (11 - sum % 11) % 11 {
        10 => 'X',
        n => char::from_digit(n, 10).unwrap_or('0'),
    }
}

/// Check digit for the first twelve digits of an ISBN-13.
pub fn isbn13_check_digit(first12: &str) -> char {
    let sum: u32 = digit_values(first12)
        .enumerate()
        .map(|(i, d)| if i % 2 == 0 { d } else { d * 3 })
        .sum();
    char::from_digit((10 - sum % 10) % 10, 10).unwrap_or('0')
}

/// Drop a leading `ISBN`, `ISBN:`, `ISBN-13:` or `ISBN-10 ` style label.
fn strip_label(input: &str) -> &str {
    let Some(rest) = input
        .strip_prefix("ISBN")
        .or_else(|| input.strip_prefix("isbn"))
    else {
        return input;
    };
    // Only a "-13"/"-10" that ends the label, so "ISBN-1032..." keeps its digits
    let rest = ["-13", "-10"]
        .iter()
        .find_map(|tag| rest.strip_prefix(*tag).filter(|r| r.starts_with([':', ' '])))
        .unwrap_or(rest);
    rest.trim_start_matches([':', ' '])
}

/// Strip decoration and return the 13-digit form, verifying the check digit.
/// ISBN-10 input is converted to its 978 equivalent.
pub fn normalize(input: &str) -> Result<String, IsbnError> {
    let body = strip_label(input.trim());

    let mut cleaned = String::with_capacity(13);
    for c in body.chars() {
        match c {
            '-' | ' ' => {}
            '0'..='9' => cleaned.push(c),
            'X' | 'x' => cleaned.push('X'),
            other => return Err(IsbnError::InvalidCharacter(other)),
        }
    }

    match cleaned.len() {
        10 => {
            let (first9, found) = cleaned.split_at(9);
            if let Some(x) = first9.chars().find(|c| *c == 'X') {
                return Err(IsbnError::InvalidCharacter(x));
            }
            let found = found.chars().next().unwrap_or('?');
            let expected = isbn10_check_digit(first9);
            if found != expected {
                return Err(IsbnError::Checksum { expected, found });
            }
            let first12 = format!("978{}", first9);
            let check = isbn13_check_digit(&first12);
            Ok(format!("{}{}", first12, check))
        }
        13 => {
            if cleaned.contains('X') {
                return Err(IsbnError::InvalidCharacter('X'));
            }
            let (first12, found) = cleaned.split_at(12);
            let found = found.chars().next().unwrap_or('?');
            let expected = isbn13_check_digit(first12);
            if found != expected {
                return Err(IsbnError::Checksum { expected, found });
            }
            Ok(cleaned)
        }
        len => Err(IsbnError::InvalidLength(len)),
    }
}

/// Decompose an ISBN using the registration groups and publisher ranges of
/// `table`.
pub fn split(table: &RangeTable, input: &str) -> Result<IsbnParts, IsbnError> {
    let isbn13 = normalize(input)?;
    let (head, tail) = isbn13.split_at(3);
    let prefix: Prefix = head
        .parse()
        .map_err(|_| IsbnError::UnknownPrefix(head.to_string()))?;
    let (body, check) = tail.split_at(tail.len() - 1);

    let (group, entry) = table
        .find_group(prefix, body)
        .ok_or_else(|| IsbnError::UnknownGroup(format!("{}-{}", prefix, body)))?;
    let rest = &body[group.len()..];

    let no_range = || IsbnError::NoRegistrantRange {
        prefix,
        group: group.to_string(),
    };
    let registrant_len = entry.registrant_len(rest).ok_or_else(no_range)?;
    if registrant_len >= rest.len() {
        return Err(no_range());
    }
    let (registrant, publication) = rest.split_at(registrant_len);

    Ok(IsbnParts {
        prefix,
        group: group.to_string(),
        registrant: registrant.to_string(),
        publication: publication.to_string(),
        check_digit: check.chars().next().unwrap_or('0'),
        agency: entry.agency.clone(),
    })
}
