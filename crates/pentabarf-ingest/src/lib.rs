//! Loading of flat event records from JSON.

pub mod json_records;

pub use json_records::{load_records, parse_records};
