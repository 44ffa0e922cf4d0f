//! Range loading error and warning types
//!
//! Errors stop a single document from being used; warnings are collected
//! while loading and never stop anything.

use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum RangeError {
    /// Document could not be opened or read
    SourceUnavailable { path: PathBuf, source: io::Error },
    /// Document was read but lacks a mandatory section
    Structure { source_name: String, reason: String },
}

impl RangeError {
    pub fn structure(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        RangeError::Structure {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeError::SourceUnavailable { path, source } => {
                write!(f, "Range document {} unavailable: {}", path.display(), source)
            }
            RangeError::Structure {
                source_name,
                reason,
            } => write!(f, "Range document {} is malformed: {}", source_name, reason),
        }
    }
}

impl std::error::Error for RangeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RangeError::SourceUnavailable { source, .. } => Some(source),
            RangeError::Structure { .. } => None,
        }
    }
}

/// Non-fatal events raised while resolving and parsing a range document.
#[derive(Debug)]
pub enum RangeWarning {
    /// The configured override path does not exist
    MissingOverride(PathBuf),
    /// A `Group` block was dropped; `index` counts groups from zero
    GroupSkipped { index: usize, reason: String },
    /// A `Rule` inside a kept group was dropped
    RuleDiscarded { group: String, reason: String },
    /// The chosen document failed and the built-in data was used instead
    Fallback(RangeError),
}

impl fmt::Display for RangeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeWarning::MissingOverride(path) => write!(
                f,
                "Configured range document {} does not exist",
                path.display()
            ),
            RangeWarning::GroupSkipped { index, reason } => {
                write!(f, "Skipped group #{}: {}", index, reason)
            }
            RangeWarning::RuleDiscarded { group, reason } => {
                write!(f, "Discarded rule in group {}: {}", group, reason)
            }
            RangeWarning::Fallback(err) => write!(f, "Using built-in ranges: {}", err),
        }
    }
}
