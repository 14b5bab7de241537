//! Tests for pentabarf-model types.

use pentabarf_model::{
    DayGroup, ErrorStage, OutputEvent, RoomLabels, RoomSlot, Schedule, ScheduleConfig,
    ScheduleError,
};

#[test]
fn day_group_always_has_both_rooms() {
    let day = DayGroup::new("1", "2016-09-01", &RoomLabels::default());
    assert_eq!(day.rooms.len(), 2);
    assert_eq!(day.room(RoomSlot::First).name, "Casetta");
    assert_eq!(day.room(RoomSlot::Second).name, "Tendone Mickey Mouse");
    assert!(day.room(RoomSlot::First).is_empty());
    assert_eq!(day.event_count(), 0);
}

#[test]
fn events_keep_insertion_order() {
    let mut schedule = Schedule::new();
    schedule.insert_day(DayGroup::new("1", "2016-09-01", &RoomLabels::default()));
    for id in ["3", "1", "2"] {
        let day = schedule.day_mut("1").expect("day 1");
        day.room_mut(RoomSlot::Second).push(OutputEvent {
            id: id.to_string(),
            ..OutputEvent::default()
        });
    }
    let room = schedule.day("1").unwrap().room(RoomSlot::Second);
    let ids: Vec<&str> = room.events.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["3", "1", "2"]);
    assert_eq!(schedule.event_count(), 3);
}

#[test]
fn unknown_day_lookup_is_none() {
    let mut schedule = Schedule::new();
    assert!(schedule.is_empty());
    assert!(schedule.day_mut("9").is_none());
}

#[test]
fn error_stages_are_distinct() {
    let missing = ScheduleError::MissingField {
        index: 3,
        field: "uid",
    };
    assert_eq!(missing.stage(), ErrorStage::Load);
    assert_eq!(missing.to_string(), "record 3: missing field `uid`");

    let unknown = ScheduleError::UnknownDay {
        index: 0,
        giorno: "5".to_string(),
    };
    assert_eq!(unknown.stage(), ErrorStage::Map);

    let write = ScheduleError::write(
        "out/schedule.xml",
        std::io::Error::other("disk full"),
    );
    assert_eq!(write.stage(), ErrorStage::Emit);
    assert!(write.to_string().contains("out/schedule.xml"));
}

#[test]
fn partial_toml_falls_back_per_field() {
    let config: ScheduleConfig = toml::from_str(
        r#"
        output = "fosdem.xml"

        [conference]
        title = "Test Conf"
        days = 0

        [rooms]
        second = "Main Hall"
        "#,
    )
    .expect("parse config");
    let config = config.resolve().expect("resolve config");

    assert_eq!(config.input, std::path::PathBuf::from("esc16.json"));
    assert_eq!(config.output, std::path::PathBuf::from("fosdem.xml"));
    assert_eq!(config.conference.title, "Test Conf");
    assert_eq!(config.conference.city, "FORTE BAZZERA (VE)");
    assert_eq!(config.conference.days, 4);
    assert_eq!(config.rooms.first, "Casetta");
    assert_eq!(config.rooms.second, "Main Hall");
    assert!(config.xml_declaration);
}
