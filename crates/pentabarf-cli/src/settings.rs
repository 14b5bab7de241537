//! TOML configuration file.
//!
//! Any key may be omitted; missing keys keep the built-in ESC 2016 values.
//!
//! ```toml
//! input = "esc16.json"
//! output = "output.xml"
//! xml_declaration = true
//!
//! [conference]
//! title = "ESC 2016"
//! city = "FORTE BAZZERA (VE)"
//! start = "2016-09-01"
//! end = "2016-09-04"
//! days = 4
//!
//! [rooms]
//! first = "Casetta"
//! second = "Tendone Mickey Mouse"
//! ```

use std::fs;
use std::path::Path;

use tracing::debug;

use pentabarf_model::{Result, ScheduleConfig, ScheduleError};

/// Load a configuration file, or the defaults when `path` is `None`.
pub fn load_config(path: Option<&Path>) -> Result<ScheduleConfig> {
    let Some(path) = path else {
        debug!("no config file given, using defaults");
        return Ok(ScheduleConfig::default());
    };
    let content = fs::read_to_string(path).map_err(|error| ScheduleError::read(path, error))?;
    let config = parse_config(&content).map_err(|error| match error {
        ScheduleError::Config { message } => ScheduleError::Config {
            message: format!("{}: {message}", path.display()),
        },
        other => other,
    })?;
    debug!(path = %path.display(), "loaded config file");
    Ok(config)
}

/// Parse configuration from TOML text.
pub fn parse_config(content: &str) -> Result<ScheduleConfig> {
    toml::from_str(content).map_err(|error| ScheduleError::Config {
        message: error.to_string(),
    })
}

/// Render a configuration as TOML.
pub fn render_config(config: &ScheduleConfig) -> Result<String> {
    toml::to_string_pretty(config).map_err(|error| ScheduleError::Config {
        message: error.to_string(),
    })
}
