//! CLI argument definitions for the hub depth calculator.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use hubs_model::InputField;

#[derive(Parser)]
#[command(
    name = "hubs",
    version,
    about = "Hub depth calculator for road grading",
    long_about = "Compute how deep to drive a grade stake (hub) below a string line.\n\n\
                  Lift, crown slope and road width are remembered between runs.\n\
                  The cross-section can be exported as SVG or JSON primitives."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// State file holding the saved input values.
    #[arg(long = "state", value_name = "PATH", global = true)]
    pub state: Option<PathBuf>,

    /// Settings file (default: platform configuration folder).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
    /// Show the saved inputs and the hub depth.
    Show,

    /// Move a slider to a value (clamped to the field's range).
    Set(SetArgs),

    /// Type into a field's text box, one text change per argument.
    Enter(EnterArgs),

    /// Restore every input to its default.
    Reset,

    /// Export the cross-section diagram.
    Diagram(DiagramArgs),

    /// Tabulate the hub depth across one field's slider stops as CSV.
    Sweep(SweepArgs),

    /// List field ranges and slider steps.
    Ranges,
}

#[derive(Args)]
pub struct SetArgs {
    /// Field to change (lift, slope, width).
    #[arg(value_name = "FIELD")]
    pub field: InputField,

    /// New value.
    #[arg(value_name = "VALUE", allow_negative_numbers = true)]
    pub value: f32,
}

#[derive(Args)]
pub struct EnterArgs {
    /// Field to type into (lift, slope, width).
    #[arg(value_name = "FIELD")]
    pub field: InputField,

    /// Successive buffer contents, e.g. `1` `12` `12.` `12.5`.
    #[arg(value_name = "TEXT", required = true, allow_hyphen_values = true)]
    pub texts: Vec<String>,

    /// Treat each argument as keystrokes typed after focusing the field,
    /// so the first one replaces the selected text.
    #[arg(long = "keys")]
    pub keys: bool,
}

#[derive(Args)]
pub struct DiagramArgs {
    /// Canvas width in pixels (default from settings).
    #[arg(long = "width", value_name = "PX")]
    pub width: Option<f32>,

    /// Canvas height in pixels (default from settings).
    #[arg(long = "height", value_name = "PX")]
    pub height: Option<f32>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "svg")]
    pub format: DiagramFormatArg,

    /// Write to a file instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Omit the depth caption.
    #[arg(long = "no-caption")]
    pub no_caption: bool,
}

#[derive(Args)]
pub struct SweepArgs {
    /// Field to sweep (lift, slope, width).
    #[arg(value_name = "FIELD")]
    pub field: InputField,

    /// Write to a file instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DiagramFormatArg {
    Svg,
    Json,
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
