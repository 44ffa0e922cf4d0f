pub mod api;
pub mod domain;
pub mod infrastructure;
pub mod modules;

pub use domain::{Prefix, Range, RangeTable};
pub use infrastructure::config;
pub use infrastructure::server;
pub use modules::{isbn, ranges};
