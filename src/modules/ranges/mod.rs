// ISBN range data sources
// Range message parser, built-in snapshot, and the resolver choosing between them

pub mod builtin;
pub mod parser;
pub mod resolver;

pub use builtin::builtin_table;
pub use parser::{ParseOutcome, RangeDocumentParser};
pub use resolver::{CandidateKind, Resolved, SourceResolver};

use crate::infrastructure::config::Config;

/// Resolve the range table for this process from configuration.
pub fn load(config: &Config) -> Resolved {
    SourceResolver::from_config(config).resolve()
}
