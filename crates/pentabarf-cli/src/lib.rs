//! Library components of the `json2pentabarf` command.

pub mod logging;
pub mod pipeline;
pub mod settings;
