use anyhow::{Context, Result};
use tracing::info_span;

use pentabarf_cli::pipeline::{OutputTarget, RunOutcome, run};
use pentabarf_cli::settings::{load_config, render_config};
use pentabarf_model::ScheduleConfig;

use crate::cli::{ConfigArgs, ConvertArgs};

pub fn run_convert(args: &ConvertArgs) -> Result<RunOutcome> {
    let config = resolve_convert_config(args)?;
    let target = if args.stdout {
        OutputTarget::Stdout
    } else {
        OutputTarget::File(config.output.clone())
    };
    let span = info_span!("convert", input = %config.input.display());
    let _guard = span.enter();
    run(&config, target)
}

pub fn run_config(args: &ConfigArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())
        .context("load configuration")?
        .resolve()
        .context("resolve configuration")?;
    print!("{}", render_config(&config)?);
    Ok(())
}

/// Config file values with command-line overrides applied.
fn resolve_convert_config(args: &ConvertArgs) -> Result<ScheduleConfig> {
    let mut config = load_config(args.config.as_deref()).context("load configuration")?;
    if let Some(input) = &args.input {
        config.input = input.clone();
    }
    if let Some(output) = &args.output {
        config.output = output.clone();
    }
    if args.no_xml_declaration {
        config.xml_declaration = false;
    }
    config.resolve().context("resolve configuration")
}
