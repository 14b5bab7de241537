//! Schedule report generation.
//!
//! Serializes a grouped [`pentabarf_model::Schedule`] as a pentabarf-style
//! XML document: a `<conference>` block followed by one `<day>` per group,
//! each with its two `<room>`s and their `<event>`s.

mod common;
mod pentabarf_xml;

pub use pentabarf_xml::{XmlOptions, render_schedule_xml, write_schedule_file, write_schedule_xml};
