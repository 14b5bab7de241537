//! In-memory schedule tree: days, rooms and events.

use std::collections::BTreeMap;

use crate::config::RoomLabels;

/// Selects one of the two rooms of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RoomSlot {
    First,
    Second,
}

impl RoomSlot {
    /// Routes a record's `linea` value: `"1"` is the first room, anything else the second.
    pub fn from_linea(linea: &str) -> Self {
        if linea == "1" {
            RoomSlot::First
        } else {
            RoomSlot::Second
        }
    }

    pub fn position(self) -> usize {
        match self {
            RoomSlot::First => 0,
            RoomSlot::Second => 1,
        }
    }

    pub fn label(self, rooms: &RoomLabels) -> &str {
        match self {
            RoomSlot::First => &rooms.first,
            RoomSlot::Second => &rooms.second,
        }
    }
}

/// Speaker entry of an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: String,
    pub name: String,
}

/// External resource attached to an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub href: String,
    pub title: String,
}

/// One event in the output schedule.
///
/// `slug`, `subtitle`, `track`, `event_type` and `description` are slots of
/// the target schema with no source field; they are written out empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputEvent {
    pub id: String,
    /// `HH:MM`.
    pub start: String,
    pub duration: String,
    pub room: String,
    pub slug: String,
    pub title: String,
    pub subtitle: String,
    pub track: String,
    pub event_type: String,
    pub language: String,
    pub abstract_text: String,
    pub description: String,
    pub persons: Vec<Person>,
    pub links: Vec<Link>,
}

/// Events held by one room of one day, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomContainer {
    pub name: String,
    pub events: Vec<OutputEvent>,
}

impl RoomContainer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            events: Vec::new(),
        }
    }

    pub fn push(&mut self, event: OutputEvent) {
        self.events.push(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// A conference day with its two rooms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGroup {
    /// Day key (`giorno`).
    pub index: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    pub rooms: [RoomContainer; 2],
}

impl DayGroup {
    pub fn new(index: impl Into<String>, date: impl Into<String>, labels: &RoomLabels) -> Self {
        Self {
            index: index.into(),
            date: date.into(),
            rooms: [
                RoomContainer::new(labels.first.clone()),
                RoomContainer::new(labels.second.clone()),
            ],
        }
    }

    pub fn room(&self, slot: RoomSlot) -> &RoomContainer {
        &self.rooms[slot.position()]
    }

    pub fn room_mut(&mut self, slot: RoomSlot) -> &mut RoomContainer {
        &mut self.rooms[slot.position()]
    }

    pub fn event_count(&self) -> usize {
        self.rooms.iter().map(RoomContainer::len).sum()
    }
}

/// Ordered day groups plus the `giorno` lookup used when attaching events.
///
/// Days are kept in creation order. The lookup holds one position per
/// `giorno`: inserting a second day with the same key re-points the lookup at
/// the newer day, while the older one stays in the tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    days: Vec<DayGroup>,
    by_index: BTreeMap<String, usize>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a day and returns the position of the day it shadows, if any.
    pub fn insert_day(&mut self, day: DayGroup) -> Option<usize> {
        let position = self.days.len();
        let shadowed = self.by_index.insert(day.index.clone(), position);
        self.days.push(day);
        shadowed
    }

    pub fn days(&self) -> &[DayGroup] {
        &self.days
    }

    pub fn day(&self, giorno: &str) -> Option<&DayGroup> {
        self.by_index.get(giorno).map(|&position| &self.days[position])
    }

    pub fn day_mut(&mut self, giorno: &str) -> Option<&mut DayGroup> {
        let position = *self.by_index.get(giorno)?;
        self.days.get_mut(position)
    }

    pub fn event_count(&self) -> usize {
        self.days.iter().map(DayGroup::event_count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
