//! CLI argument definitions for the schedule converter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "json2pentabarf",
    version,
    about = "Convert a JSON list of conference talks into a pentabarf schedule XML",
    long_about = "Convert a flat JSON list of conference talks into a pentabarf-style schedule.\n\n\
                  Talks are grouped by day (giorno/data) and by room (linea), and written\n\
                  as <day>/<room>/<event> elements after a static <conference> block."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a record list into a schedule document.
    Convert(ConvertArgs),

    /// Print the effective configuration as TOML.
    Config(ConfigArgs),
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// JSON record list (default: the config file's `input`, else esc16.json).
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Output file (default: the config file's `output`, else output.xml).
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// TOML configuration file with conference metadata and room labels.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write the document to stdout instead of the output file.
    #[arg(long = "stdout", conflicts_with = "output")]
    pub stdout: bool,

    /// Omit the `<?xml ...?>` declaration.
    #[arg(long = "no-xml-declaration")]
    pub no_xml_declaration: bool,
}

#[derive(Parser)]
pub struct ConfigArgs {
    /// TOML configuration file to resolve (default: built-in values).
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
