//! Day and room discovery.
//!
//! Days are unique by the `(giorno, date)` pair, while events are later
//! attached by `giorno` alone. When the same `giorno` shows up with two date
//! prefixes both days are created and the later one (in date order) receives
//! every event for that key.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use pentabarf_model::{DayGroup, EventRecord, RoomLabels, Schedule};

/// Grouping key of a day. Ordered by date first so the tree is sorted by date.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey {
    pub date: String,
    pub giorno: String,
}

impl DayKey {
    pub fn of(record: &EventRecord) -> Self {
        Self {
            date: record.date_prefix().to_string(),
            giorno: record.giorno.clone(),
        }
    }
}

/// Distinct `(giorno, data[:10])` pairs found in `records`.
pub fn distinct_days(records: &[EventRecord]) -> BTreeSet<DayKey> {
    records.iter().map(DayKey::of).collect()
}

/// Distinct `linea` values found in `records`.
pub fn distinct_rooms(records: &[EventRecord]) -> BTreeSet<&str> {
    records.iter().map(|record| record.linea.as_str()).collect()
}

/// Build one empty day per distinct key, each with both labelled rooms.
pub fn build_schedule(records: &[EventRecord], labels: &RoomLabels) -> Schedule {
    let days = distinct_days(records);
    debug!(
        rooms = ?distinct_rooms(records),
        days = days.len(),
        "discovered days and room selectors"
    );

    let mut schedule = Schedule::new();
    for key in days {
        let giorno = key.giorno.clone();
        if let Some(shadowed) = schedule.insert_day(DayGroup::new(key.giorno, key.date, labels)) {
            warn!(
                giorno = %giorno,
                shadowed_date = %schedule.days()[shadowed].date,
                "day key appears with more than one date; events attach to the latest"
            );
        }
    }
    schedule
}
