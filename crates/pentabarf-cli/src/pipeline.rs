//! Conversion pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Load**: Read the JSON record list
//! 2. **Group/Map**: Build the day/room tree and attach one event per record
//! 3. **Emit**: Serialize the schedule to the output file or stdout
//!
//! Every stage is fatal on error. The output file is only touched once the
//! whole document has been rendered.

use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use pentabarf_ingest::load_records;
use pentabarf_model::{EventRecord, RoomLabels, Schedule, ScheduleConfig};
use pentabarf_report::{XmlOptions, write_schedule_file, write_schedule_xml};
use pentabarf_transform::convert;

/// Where the emit stage writes the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    File(PathBuf),
    Stdout,
}

/// Result of a complete run.
#[derive(Debug)]
pub struct RunOutcome {
    pub input: PathBuf,
    pub output: OutputTarget,
    pub records: usize,
    pub schedule: Schedule,
}

// ============================================================================
// Stage 1: Load
// ============================================================================

pub fn load(config: &ScheduleConfig) -> Result<Vec<EventRecord>> {
    let span = info_span!("load", input = %config.input.display());
    let _guard = span.enter();
    let start = Instant::now();
    let records = load_records(&config.input)
        .with_context(|| format!("load records from {}", config.input.display()))?;
    info!(
        records = records.len(),
        duration_ms = start.elapsed().as_millis(),
        "load complete"
    );
    Ok(records)
}

// ============================================================================
// Stage 2: Group and map
// ============================================================================

pub fn group_and_map(records: &[EventRecord], rooms: &RoomLabels) -> Result<Schedule> {
    let span = info_span!("group_map", records = records.len());
    let _guard = span.enter();
    let start = Instant::now();
    let schedule = convert(records, rooms).context("build schedule")?;
    info!(
        days = schedule.days().len(),
        events = schedule.event_count(),
        duration_ms = start.elapsed().as_millis(),
        "group/map complete"
    );
    Ok(schedule)
}

// ============================================================================
// Stage 3: Emit
// ============================================================================

pub fn emit(schedule: &Schedule, config: &ScheduleConfig, target: &OutputTarget) -> Result<()> {
    let span = info_span!("emit", output = ?target);
    let _guard = span.enter();
    let start = Instant::now();
    let options = XmlOptions {
        xml_declaration: config.xml_declaration,
        ..XmlOptions::default()
    };
    match target {
        OutputTarget::File(path) => {
            write_schedule_file(path, schedule, &config.conference, &options)
                .with_context(|| format!("write schedule to {}", path.display()))?;
        }
        OutputTarget::Stdout => {
            let stdout = io::stdout();
            write_schedule_xml(stdout.lock(), schedule, &config.conference, &options)
                .context("write schedule to stdout")?;
            println!();
        }
    }
    info!(duration_ms = start.elapsed().as_millis(), "emit complete");
    Ok(())
}

/// Run all stages for `config`.
pub fn run(config: &ScheduleConfig, target: OutputTarget) -> Result<RunOutcome> {
    let records = load(config)?;
    let schedule = group_and_map(&records, &config.rooms)?;
    emit(&schedule, config, &target)?;
    Ok(RunOutcome {
        input: config.input.clone(),
        output: target,
        records: records.len(),
        schedule,
    })
}
