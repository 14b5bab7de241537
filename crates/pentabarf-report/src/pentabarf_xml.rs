//! Pentabarf schedule XML output.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesStart, Event};
use tracing::debug;

use pentabarf_model::{
    ConferenceConfig, DayGroup, OutputEvent, Result, RoomContainer, Schedule, ScheduleError,
};

use crate::common::{end_element, start_element, write_text_element, write_text_element_with_attrs};

/// Options for schedule XML output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XmlOptions {
    /// Write an `<?xml version="1.0" encoding="UTF-8"?>` declaration.
    pub xml_declaration: bool,
    /// Spaces per nesting level; 0 writes everything on one line.
    pub indent: usize,
}

impl Default for XmlOptions {
    fn default() -> Self {
        Self {
            xml_declaration: true,
            indent: 2,
        }
    }
}

/// Serialize `schedule` to `out`.
pub fn write_schedule_xml<W: Write>(
    out: W,
    schedule: &Schedule,
    conference: &ConferenceConfig,
    options: &XmlOptions,
) -> io::Result<()> {
    let mut xml = if options.indent > 0 {
        Writer::new_with_indent(out, b' ', options.indent)
    } else {
        Writer::new(out)
    };

    if options.xml_declaration {
        xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    }
    start_element(&mut xml, "schedule", &[])?;
    write_conference(&mut xml, conference)?;
    for day in schedule.days() {
        write_day(&mut xml, day)?;
    }
    end_element(&mut xml, "schedule")?;
    xml.into_inner().flush()
}

/// Serialize `schedule` into memory.
pub fn render_schedule_xml(
    schedule: &Schedule,
    conference: &ConferenceConfig,
    options: &XmlOptions,
) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    write_schedule_xml(&mut buffer, schedule, conference, options)?;
    Ok(buffer)
}

/// Render the whole document, then replace the file at `path` with it.
///
/// Nothing is written when rendering fails.
pub fn write_schedule_file(
    path: &Path,
    schedule: &Schedule,
    conference: &ConferenceConfig,
    options: &XmlOptions,
) -> Result<()> {
    let document = render_schedule_xml(schedule, conference, options)
        .map_err(|error| ScheduleError::write(path, error))?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|error| ScheduleError::write(parent, error))?;
        }
    }
    fs::write(path, &document).map_err(|error| ScheduleError::write(path, error))?;
    debug!(path = %path.display(), bytes = document.len(), "wrote schedule");
    Ok(())
}

fn write_conference<W: Write>(xml: &mut Writer<W>, conference: &ConferenceConfig) -> io::Result<()> {
    let days = conference.days.to_string();
    start_element(xml, "conference", &[])?;
    write_text_element(xml, "title", &conference.title)?;
    write_text_element(xml, "subtitle", &conference.subtitle)?;
    write_text_element(xml, "venue", &conference.venue)?;
    write_text_element(xml, "city", &conference.city)?;
    write_text_element(xml, "start", &conference.start)?;
    write_text_element(xml, "end", &conference.end)?;
    write_text_element(xml, "days", &days)?;
    write_text_element(xml, "day_change", &conference.day_change)?;
    write_text_element(xml, "timeslot_duration", &conference.timeslot_duration)?;
    end_element(xml, "conference")
}

fn write_day<W: Write>(xml: &mut Writer<W>, day: &DayGroup) -> io::Result<()> {
    start_element(
        xml,
        "day",
        &[("index", day.index.as_str()), ("date", day.date.as_str())],
    )?;
    for room in &day.rooms {
        write_room(xml, room)?;
    }
    end_element(xml, "day")
}

fn write_room<W: Write>(xml: &mut Writer<W>, room: &RoomContainer) -> io::Result<()> {
    let mut start = BytesStart::new("room");
    start.push_attribute(("name", room.name.as_str()));
    if room.is_empty() {
        return xml.write_event(Event::Empty(start));
    }
    xml.write_event(Event::Start(start))?;
    for event in &room.events {
        write_event(xml, event)?;
    }
    end_element(xml, "room")
}

fn write_event<W: Write>(xml: &mut Writer<W>, event: &OutputEvent) -> io::Result<()> {
    start_element(xml, "event", &[("id", event.id.as_str())])?;
    write_text_element(xml, "start", &event.start)?;
    write_text_element(xml, "duration", &event.duration)?;
    write_text_element(xml, "room", &event.room)?;
    write_text_element(xml, "slug", &event.slug)?;
    write_text_element(xml, "title", &event.title)?;
    write_text_element(xml, "subtitle", &event.subtitle)?;
    write_text_element(xml, "track", &event.track)?;
    write_text_element(xml, "type", &event.event_type)?;
    write_text_element(xml, "language", &event.language)?;
    write_text_element(xml, "abstract", &event.abstract_text)?;
    write_text_element(xml, "description", &event.description)?;

    if event.persons.is_empty() {
        xml.write_event(Event::Empty(BytesStart::new("persons")))?;
    } else {
        start_element(xml, "persons", &[])?;
        for person in &event.persons {
            write_text_element_with_attrs(xml, "person", &[("id", person.id.as_str())], &person.name)?;
        }
        end_element(xml, "persons")?;
    }

    if event.links.is_empty() {
        xml.write_event(Event::Empty(BytesStart::new("links")))?;
    } else {
        start_element(xml, "links", &[])?;
        for link in &event.links {
            write_text_element_with_attrs(xml, "link", &[("href", link.href.as_str())], &link.title)?;
        }
        end_element(xml, "links")?;
    }

    end_element(xml, "event")
}
