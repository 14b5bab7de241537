//! JSON record list loader.
//!
//! The input is a top-level array of objects. Required keys are checked in
//! the order of [`pentabarf_model::RECORD_FIELDS`] and the first problem
//! aborts the load.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, trace};

use pentabarf_model::{EventRecord, Result, ScheduleError};

/// Read and parse the record list stored at `path`.
pub fn load_records(path: &Path) -> Result<Vec<EventRecord>> {
    let text = fs::read_to_string(path).map_err(|error| ScheduleError::read(path, error))?;
    let records = parse_records(&text)?;
    debug!(path = %path.display(), records = records.len(), "loaded records");
    Ok(records)
}

/// Parse a JSON record list.
pub fn parse_records(text: &str) -> Result<Vec<EventRecord>> {
    let document: Value =
        serde_json::from_str(text).map_err(|error| ScheduleError::InvalidDocument {
            message: error.to_string(),
        })?;
    let items = match document {
        Value::Array(items) => items,
        other => {
            return Err(ScheduleError::InvalidDocument {
                message: format!("expected a list of records, found {}", value_kind(&other)),
            });
        }
    };

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let Value::Object(object) = item else {
            return Err(ScheduleError::InvalidDocument {
                message: format!("record {index} is {}, not an object", value_kind(item)),
            });
        };
        let record = record_from_object(index, object)?;
        trace!(index, uid = %record.uid, giorno = %record.giorno, linea = %record.linea, "record");
        records.push(record);
    }
    Ok(records)
}

fn record_from_object(index: usize, object: &Map<String, Value>) -> Result<EventRecord> {
    let field = |name: &'static str| string_field(index, object, name);
    Ok(EventRecord {
        uid: field("uid")?,
        linea: field("linea")?,
        orario: field("orario")?,
        durata: field("durata")?,
        titolo: field("titolo")?,
        lingua: field("lingua")?,
        abstract_text: field("abstract")?,
        autore: field("autore")?,
        giorno: field("giorno")?,
        data: field("data")?,
    })
}

fn string_field(index: usize, object: &Map<String, Value>, field: &'static str) -> Result<String> {
    match object.get(field) {
        None => Err(ScheduleError::MissingField { index, field }),
        Some(Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(ScheduleError::InvalidField { index, field }),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELCOME: &str = r##"[{"uid":"#10","linea":"1","orario":"09:30:00","durata":"25",
        "titolo":"Welcome","lingua":"en","abstract":"Hi","autore":"Staff",
        "giorno":"1","data":"2016-09-01T00:00"}]"##;

    #[test]
    fn parses_all_fields() {
        let records = parse_records(WELCOME).unwrap();
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.uid, "#10");
        assert_eq!(record.linea, "1");
        assert_eq!(record.orario, "09:30:00");
        assert_eq!(record.durata, "25");
        assert_eq!(record.titolo, "Welcome");
        assert_eq!(record.lingua, "en");
        assert_eq!(record.abstract_text, "Hi");
        assert_eq!(record.autore, "Staff");
        assert_eq!(record.giorno, "1");
        assert_eq!(record.date_prefix(), "2016-09-01");
    }

    #[test]
    fn first_missing_field_in_lookup_order_is_reported() {
        let error = parse_records(r#"[{"linea":"1"}]"#).unwrap_err();
        assert!(matches!(
            error,
            ScheduleError::MissingField {
                index: 0,
                field: "uid"
            }
        ));
    }

    #[test]
    fn every_required_field_is_checked() {
        for field in pentabarf_model::RECORD_FIELDS {
            let mut object: serde_json::Value = serde_json::from_str(WELCOME).unwrap();
            object[0].as_object_mut().unwrap().remove(field);
            let error = parse_records(&object.to_string()).unwrap_err();
            match error {
                ScheduleError::MissingField { index, field: got } => {
                    assert_eq!(index, 0);
                    assert_eq!(got, field);
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn non_string_value_is_invalid() {
        let text = WELCOME.replace(r#""durata":"25""#, r#""durata":25"#);
        let error = parse_records(&text).unwrap_err();
        assert!(matches!(
            error,
            ScheduleError::InvalidField {
                index: 0,
                field: "durata"
            }
        ));
    }

    #[test]
    fn top_level_must_be_a_list() {
        let error = parse_records(r##"{"uid":"#1"}"##).unwrap_err();
        assert!(error.to_string().contains("an object"));
        let error = parse_records("[1]").unwrap_err();
        assert!(error.to_string().contains("record 0 is a number"));
    }

    #[test]
    fn empty_list_loads_no_records() {
        assert!(parse_records("[]").unwrap().is_empty());
    }
}
