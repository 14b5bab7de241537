//! Record to event mapping.
//!
//! Field rules:
//!
//! | event field | source |
//! |---|---|
//! | `id` | `uid` without its first character |
//! | `start` | first five characters of `orario` |
//! | `duration` | `"00:"` followed by `durata`, verbatim |
//! | `room` | label of the room selected by `linea` |
//! | `title`, `language`, `abstract` | `titolo`, `lingua`, `abstract` |
//! | `persons` | one entry named `autore`, with the event id as its id |
//!
//! `durata` is minutes but is not converted, so `"90"` becomes `"00:90"`.
//! There is no speaker id in the input, which is why the person reuses the
//! event id.

use tracing::{debug, trace};

use pentabarf_model::{
    EventRecord, OutputEvent, Person, Result, RoomLabels, RoomSlot, Schedule, ScheduleError,
    char_prefix, strip_first_char,
};

use crate::grouping::build_schedule;

const DURATION_PREFIX: &str = "00:";

/// Build the output event for `record`, the `index`-th input record.
pub fn build_event(record: &EventRecord, index: usize, labels: &RoomLabels) -> Result<OutputEvent> {
    let id = strip_first_char(&record.uid).ok_or_else(|| ScheduleError::MalformedId {
        index,
        uid: record.uid.clone(),
    })?;
    let slot = RoomSlot::from_linea(&record.linea);

    Ok(OutputEvent {
        id: id.to_string(),
        start: char_prefix(&record.orario, 5).to_string(),
        duration: format!("{DURATION_PREFIX}{}", record.durata),
        room: slot.label(labels).to_string(),
        title: record.titolo.clone(),
        language: record.lingua.clone(),
        abstract_text: record.abstract_text.clone(),
        persons: vec![Person {
            id: id.to_string(),
            name: record.autore.clone(),
        }],
        ..OutputEvent::default()
    })
}

/// Attach one event per record under its day and room, in input order.
pub fn map_records(
    schedule: &mut Schedule,
    records: &[EventRecord],
    labels: &RoomLabels,
) -> Result<()> {
    for (index, record) in records.iter().enumerate() {
        let event = build_event(record, index, labels)?;
        let slot = RoomSlot::from_linea(&record.linea);
        let day = schedule
            .day_mut(&record.giorno)
            .ok_or_else(|| ScheduleError::UnknownDay {
                index,
                giorno: record.giorno.clone(),
            })?;
        trace!(index, id = %event.id, day = %day.index, room = %event.room, "attach event");
        day.room_mut(slot).push(event);
    }
    Ok(())
}

/// Group `records` into days and attach every event.
pub fn convert(records: &[EventRecord], labels: &RoomLabels) -> Result<Schedule> {
    let mut schedule = build_schedule(records, labels);
    map_records(&mut schedule, records, labels)?;
    debug!(
        days = schedule.days().len(),
        events = schedule.event_count(),
        "schedule built"
    );
    Ok(schedule)
}
