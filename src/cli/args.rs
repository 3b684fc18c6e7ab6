//! Command line argument parsing for the infographic CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::export::{DEFAULT_FILENAME, ExportFormat};
use crate::visualization::VisualizationKind;

/// Infographic - turn free-form text into chart-ready data
#[derive(Parser, Debug, Clone)]
#[command(name = "infographic")]
#[command(about = "Analyze Russian text and render it as infographic data")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct InfographicArgs {
    /// Increase logging (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl InfographicArgs {
    /// Effective verbosity: 0 quiet, 1 default, 2 verbose, 3+ debug.
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose.saturating_add(1)
        }
    }

    /// Default log filter for the effective verbosity. `RUST_LOG` wins over it.
    pub fn log_filter(&self) -> &'static str {
        match self.verbosity() {
            0 => "error",
            1 => "warn",
            2 => "info",
            _ => "debug",
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Analyze text and print the analysis result
    Analyze(InputArgs),

    /// Render one infographic template from a text
    Render(RenderArgs),

    /// Render a template and write it to a file
    Export(ExportArgs),

    /// Run the HTTP analysis service
    Serve(ServeArgs),

    /// Show or change the saved style settings
    Style(StyleArgs),
}

/// Where the text to analyze comes from. Standard input is read when
/// neither a file nor `--text` is given.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// File containing the text
    #[arg(value_name = "FILE", conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Text given inline
    #[arg(short, long)]
    pub text: Option<String>,
}

/// Arguments for rendering a template
#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Template to render
    #[arg(short, long)]
    pub kind: VisualizationKind,

    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for exporting a template
#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Template to render
    #[arg(short, long)]
    pub kind: VisualizationKind,

    /// Export format (json or text)
    #[arg(long = "as", default_value = "json")]
    pub export_format: ExportFormat,

    /// Output path (defaults to FILENAME.EXT in the current directory)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// File name recorded in the export and used for the default path
    #[arg(long, default_value = DEFAULT_FILENAME)]
    pub filename: String,

    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for the HTTP service
#[derive(Args, Debug, Clone, Default)]
pub struct ServeArgs {
    /// Address to bind (overrides configuration)
    #[arg(long)]
    pub bind: Option<String>,

    /// Port to listen on (overrides configuration)
    #[arg(short, long)]
    pub port: Option<u16>,
}

#[derive(Args, Debug, Clone)]
pub struct StyleArgs {
    #[command(subcommand)]
    pub command: StyleCommand,
}

/// Style preference commands
#[derive(Subcommand, Debug, Clone)]
pub enum StyleCommand {
    /// Print the current settings
    Show,

    /// Change one setting (colorScheme, fontSize, layout, backgroundStyle)
    Set {
        #[arg(value_name = "KEY")]
        key: String,
        #[arg(value_name = "VALUE")]
        value: String,
    },

    /// Restore the default settings
    Reset,
}

/// Output formats available in CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
