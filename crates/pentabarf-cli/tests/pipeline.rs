//! Integration tests for the conversion pipeline.

use std::fs;
use std::path::Path;

use pentabarf_cli::pipeline::{OutputTarget, run};
use pentabarf_cli::settings::load_config;
use pentabarf_model::{ErrorStage, ScheduleConfig, ScheduleError};

const WELCOME: &str = r##"[{"uid":"#10","linea":"1","orario":"09:30:00","durata":"25","titolo":"Welcome","lingua":"en","abstract":"Hi","autore":"Staff","giorno":"1","data":"2016-09-01T00:00"}]"##;

fn config_for(dir: &Path, input: &str) -> ScheduleConfig {
    let input_path = dir.join("esc16.json");
    fs::write(&input_path, input).expect("write input");
    ScheduleConfig {
        input: input_path,
        output: dir.join("output.xml"),
        ..ScheduleConfig::default()
    }
}

fn schedule_error(error: &anyhow::Error) -> &ScheduleError {
    error
        .downcast_ref::<ScheduleError>()
        .expect("pipeline error wraps a ScheduleError")
}

#[test]
fn welcome_record_is_written() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = config_for(dir.path(), WELCOME);

    let outcome = run(&config, OutputTarget::File(config.output.clone())).expect("run");
    assert_eq!(outcome.records, 1);
    assert_eq!(outcome.schedule.event_count(), 1);

    let xml = fs::read_to_string(&config.output).expect("read output");
    assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(xml.contains(r#"<day index="1" date="2016-09-01">"#));
    assert!(xml.contains(r#"<event id="10">"#));
    assert!(xml.contains("<start>09:30</start>"));
    assert!(xml.contains("<duration>00:25</duration>"));
    assert!(xml.contains(r#"<person id="10">Staff</person>"#));
    assert!(xml.contains(r#"<room name="Tendone Mickey Mouse"/>"#));
}

#[test]
fn missing_uid_writes_no_output() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = config_for(dir.path(), &WELCOME.replace(r##""uid":"#10","##, ""));

    let error = run(&config, OutputTarget::File(config.output.clone())).unwrap_err();
    let inner = schedule_error(&error);
    assert!(matches!(
        inner,
        ScheduleError::MissingField {
            index: 0,
            field: "uid"
        }
    ));
    assert_eq!(inner.stage(), ErrorStage::Load);
    assert!(!config.output.exists());
}

#[test]
fn malformed_uid_keeps_previous_output() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = config_for(dir.path(), &WELCOME.replace("#10", ""));
    fs::write(&config.output, "previous run").expect("seed output");

    let error = run(&config, OutputTarget::File(config.output.clone())).unwrap_err();
    assert_eq!(schedule_error(&error).stage(), ErrorStage::Map);
    assert_eq!(
        fs::read_to_string(&config.output).expect("read output"),
        "previous run"
    );
}

#[test]
fn missing_input_file_is_fatal() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = ScheduleConfig {
        input: dir.path().join("absent.json"),
        output: dir.path().join("output.xml"),
        ..ScheduleConfig::default()
    };

    let error = run(&config, OutputTarget::File(config.output.clone())).unwrap_err();
    assert!(matches!(schedule_error(&error), ScheduleError::Read { .. }));
    assert!(format!("{error:#}").contains("absent.json"));
}

#[test]
fn config_file_changes_metadata_and_rooms() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("talks.json");
    fs::write(&input, WELCOME.replace(r#""linea":"1""#, r#""linea":"2""#)).expect("write input");
    let config_path = dir.path().join("schedule.toml");
    fs::write(
        &config_path,
        format!(
            "input = {input:?}\noutput = {output:?}\nxml_declaration = false\n\n\
             [conference]\ntitle = \"ESC 2017\"\nstart = \"2017-08-31\"\nend = \"2017-09-03\"\ndays = 0\n\n\
             [rooms]\nsecond = \"Tendone\"\n",
            input = input.display().to_string(),
            output = dir.path().join("out").join("esc17.xml").display().to_string(),
        ),
    )
    .expect("write config");

    let config = load_config(Some(&config_path))
        .expect("load config")
        .resolve()
        .expect("resolve config");
    run(&config, OutputTarget::File(config.output.clone())).expect("run");

    let xml = fs::read_to_string(&config.output).expect("read output");
    assert!(xml.starts_with("<schedule>"));
    assert!(xml.contains("<title>ESC 2017</title>"));
    assert!(xml.contains("<days>4</days>"));
    assert!(xml.contains("<room>Tendone</room>"));
    assert!(xml.contains(r#"<room name="Casetta"/>"#));
}
