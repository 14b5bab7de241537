//! Data model for the pentabarf schedule converter.

pub mod config;
pub mod error;
pub mod record;
pub mod schedule;

pub use config::{ConferenceConfig, RoomLabels, ScheduleConfig};
pub use error::{ErrorStage, Result, ScheduleError};
pub use record::{EventRecord, RECORD_FIELDS, char_prefix, strip_first_char};
pub use schedule::{DayGroup, Link, OutputEvent, Person, RoomContainer, RoomSlot, Schedule};
