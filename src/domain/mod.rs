//! Domain layer - range table model and its error types
//!
//! No I/O here. Parsing and source selection live in `modules::ranges`.

pub mod errors;
pub mod range_table;

pub use errors::{RangeError, RangeWarning};
pub use range_table::{
    GroupEntry, GroupMap, Prefix, Range, RangeMetadata, RangeSource, RangeTable,
};
