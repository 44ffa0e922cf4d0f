pub mod isbn;
pub mod ranges;
