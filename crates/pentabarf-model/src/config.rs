//! Run configuration: paths, conference metadata and room labels.
//!
//! Defaults reproduce the ESC 2016 schedule. Every struct is
//! `#[serde(default)]`, so a config file only needs the keys it changes.

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// Complete configuration of one conversion run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// JSON record list to read.
    pub input: PathBuf,
    /// Schedule document to write.
    pub output: PathBuf,
    /// Emit an `<?xml ...?>` declaration before the root element.
    pub xml_declaration: bool,
    pub conference: ConferenceConfig,
    pub rooms: RoomLabels,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("esc16.json"),
            output: PathBuf::from("output.xml"),
            xml_declaration: true,
            conference: ConferenceConfig::default(),
            rooms: RoomLabels::default(),
        }
    }
}

impl ScheduleConfig {
    /// Validates the conference block and fills derived values.
    pub fn resolve(mut self) -> Result<Self> {
        self.conference = self.conference.validate()?;
        if self.rooms.first.trim().is_empty() || self.rooms.second.trim().is_empty() {
            return Err(ScheduleError::Config {
                message: "room labels must not be empty".to_string(),
            });
        }
        Ok(self)
    }
}

/// Static metadata written to the `<conference>` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConferenceConfig {
    pub title: String,
    pub subtitle: String,
    pub venue: String,
    pub city: String,
    /// First day, `YYYY-MM-DD`.
    pub start: String,
    /// Last day, `YYYY-MM-DD`.
    pub end: String,
    /// Number of days; 0 derives it from `start` and `end`.
    pub days: u32,
    pub day_change: String,
    pub timeslot_duration: String,
}

impl Default for ConferenceConfig {
    fn default() -> Self {
        Self {
            title: "ESC 2016".to_string(),
            subtitle: String::new(),
            venue: String::new(),
            city: "FORTE BAZZERA (VE)".to_string(),
            start: "2016-09-01".to_string(),
            end: "2016-09-04".to_string(),
            days: 4,
            day_change: "09:00:00".to_string(),
            timeslot_duration: "00:05:00".to_string(),
        }
    }
}

impl ConferenceConfig {
    /// Checks the date range and derives `days` when it is 0.
    pub fn validate(mut self) -> Result<Self> {
        let start = parse_date("start", &self.start)?;
        let end = parse_date("end", &self.end)?;
        if end < start {
            return Err(ScheduleError::Config {
                message: format!("conference end {} is before start {}", self.end, self.start),
            });
        }
        if self.days == 0 {
            let span = (end - start).num_days() + 1;
            self.days = u32::try_from(span).map_err(|_| ScheduleError::Config {
                message: format!("conference spans too many days ({span})"),
            })?;
        }
        Ok(self)
    }
}

fn parse_date(key: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|error| ScheduleError::Config {
        message: format!("conference {key} {value:?} is not a YYYY-MM-DD date: {error}"),
    })
}

/// Fixed labels of the two rooms every day carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomLabels {
    pub first: String,
    pub second: String,
}

impl Default for RoomLabels {
    fn default() -> Self {
        Self {
            first: "Casetta".to_string(),
            second: "Tendone Mickey Mouse".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_dates_match_day_count() {
        let derived = ConferenceConfig {
            days: 0,
            ..ConferenceConfig::default()
        }
        .validate()
        .unwrap();
        assert_eq!(derived.days, ConferenceConfig::default().days);
    }

    #[test]
    fn explicit_day_count_is_kept() {
        let conference = ConferenceConfig {
            days: 7,
            ..ConferenceConfig::default()
        }
        .validate()
        .unwrap();
        assert_eq!(conference.days, 7);
    }

    #[test]
    fn reversed_range_is_rejected() {
        let conference = ConferenceConfig {
            start: "2016-09-04".to_string(),
            end: "2016-09-01".to_string(),
            ..ConferenceConfig::default()
        };
        assert!(matches!(
            conference.validate(),
            Err(ScheduleError::Config { .. })
        ));
    }

    #[test]
    fn malformed_date_is_rejected() {
        let conference = ConferenceConfig {
            start: "01/09/2016".to_string(),
            ..ConferenceConfig::default()
        };
        let error = conference.validate().unwrap_err();
        assert!(error.to_string().contains("start"));
    }

    #[test]
    fn blank_room_label_is_rejected() {
        let config = ScheduleConfig {
            rooms: RoomLabels {
                first: " ".to_string(),
                ..RoomLabels::default()
            },
            ..ScheduleConfig::default()
        };
        assert!(config.resolve().is_err());
    }
}
