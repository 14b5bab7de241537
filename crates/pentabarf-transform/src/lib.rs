//! Schedule transformation.
//!
//! - **grouping**: distinct day/room discovery and the empty day tree
//! - **mapping**: record to event field mapping and attachment under days and rooms

pub mod grouping;
pub mod mapping;

pub use grouping::{DayKey, build_schedule, distinct_days, distinct_rooms};
pub use mapping::{build_event, convert, map_records};
