//! CLI argument definitions for `icm`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "icm",
    version,
    about = "Validate and generate intermodal container markings",
    long_about = "Validate and generate intermodal container markings.\n\n\
                  Checks owner codes, equipment category ids, serial numbers, check digits\n\
                  and size/type codes, and generates batches of unique valid codes."
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

    /// Directory with replacement lookup tables (overrides ICM_DATA_DIR).
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate container markings given as arguments or on stdin.
    Validate(ValidateArgs),

    /// Generate unique container codes with valid check digits.
    Generate(GenerateArgs),

    /// Print a lookup table.
    List(ListArgs),
}

#[derive(Args)]
pub struct ValidateArgs {
    /// Markings to validate; reads one per line from stdin when omitted.
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<String>,

    /// Restrict validation to a single input shape.
    #[arg(long = "pattern", value_enum, default_value = "auto")]
    pub pattern: PatternArg,

    /// Output format.
    #[arg(long = "output", value_enum, default_value = "table")]
    pub output: ValidateOutputArg,
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Number of codes (default 1, or the whole range with --start/--end).
    #[arg(short = 'c', long = "count", value_name = "N")]
    pub count: Option<usize>,

    /// Owner code to use; repeat for a pool. Defaults to one random registered owner.
    #[arg(short = 'o', long = "owner", value_name = "CODE")]
    pub owners: Vec<String>,

    /// Equipment category id.
    #[arg(long = "category", default_value = "U")]
    pub category: String,

    /// First serial number of a sequential range.
    #[arg(long = "start", value_name = "SERIAL", requires = "end")]
    pub start: Option<String>,

    /// Last serial number (inclusive) of a sequential range.
    #[arg(long = "end", value_name = "SERIAL", requires = "start")]
    pub end: Option<String>,

    /// Skip serials whose check digit value is 10.
    #[arg(long = "exclude-check-digit-10")]
    pub exclude_check_digit_10: bool,

    /// Skip serials for which an adjacent transposition also passes the check digit.
    #[arg(long = "exclude-transposition-errors")]
    pub exclude_transposition_errors: bool,

    /// Seed for reproducible random generation.
    #[arg(long = "seed")]
    pub seed: Option<u64>,

    /// Separator between owner code and equipment category id.
    #[arg(long = "sep-owner-equip", default_value = "")]
    pub sep_owner_equip: String,

    /// Separator between equipment category id and serial number.
    #[arg(long = "sep-equip-serial", default_value = " ")]
    pub sep_equip_serial: String,

    /// Separator between serial number and check digit.
    #[arg(long = "sep-serial-check", default_value = " ")]
    pub sep_serial_check: String,

    /// Separator between check digit and size code.
    #[arg(long = "sep-check-size", default_value = " ")]
    pub sep_check_size: String,

    /// Separator between size code and type code.
    #[arg(long = "sep-size-type", default_value = " ")]
    pub sep_size_type: String,

    /// Write CSV (owner, category, serial, check digit) instead of text.
    #[arg(long = "csv")]
    pub csv: bool,
}

#[derive(Args)]
pub struct ListArgs {
    #[arg(value_enum)]
    pub table: ListTableArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PatternArg {
    Auto,
    ContainerCode,
    Owner,
    SizeType,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ValidateOutputArg {
    Table,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ListTableArg {
    Owners,
    Categories,
    Lengths,
    HeightWidths,
    Types,
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
