use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "cubeio - inspect, convert and query Gaussian CUBE files and the geometry, charge and selection files that accompany them.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output and progress spinners
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S writer.title="Density"
    #[arg(short = 'S', long = "set", global = true, value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a summary of a CUBE file: header, atoms and integrated density.
    Info(InfoArgs),
    /// Read a CUBE file and write it back in the canonical layout.
    Convert(ConvertArgs),
    /// Expand a compact selection such as '3-7,9' (or a file holding one) to zero-based indices.
    Select(SelectArgs),
    /// Load a '<symbol> <x> <y> <z>' geometry file (angstrom) and print it in bohr.
    Geometry(GeometryArgs),
    /// Load a numeric charge table and print its shape and column sums.
    Charges(ChargesArgs),
}

/// Arguments for the `info` subcommand.
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Path to the input CUBE file.
    #[arg(value_name = "CUBE")]
    pub input: PathBuf,

    /// Also integrate the field inside a sphere, given as center and radius in bohr.
    #[arg(long, num_args = 4, value_names = ["X", "Y", "Z", "RADIUS"], allow_negative_numbers = true)]
    pub sphere: Option<Vec<f64>>,
}

/// Arguments for the `convert` subcommand.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Path to the input CUBE file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the output CUBE file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Override the first comment line of the output.
    #[arg(long, value_name = "TEXT")]
    pub title: Option<String>,

    /// Override the second comment line of the output.
    #[arg(long, value_name = "TEXT")]
    pub comment: Option<String>,

    /// Copy the comment lines of the input instead of writing the configured banner.
    #[arg(long)]
    pub keep_comments: bool,

    /// Multiply every sample by this factor before writing.
    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub scale: Option<f64>,
}

/// Arguments for the `select` subcommand.
#[derive(Args, Debug)]
pub struct SelectArgs {
    /// Selection fragments (joined with commas) or the path of a file holding them.
    #[arg(required = true, value_name = "EXPR")]
    pub expression: Vec<String>,
}

/// Arguments for the `geometry` subcommand.
#[derive(Args, Debug)]
pub struct GeometryArgs {
    /// Path to the geometry file.
    #[arg(value_name = "PATH")]
    pub input: PathBuf,

    /// Truncate atom symbols to this many characters.
    #[arg(long, value_name = "INT")]
    pub symbol_width: Option<usize>,
}

/// Arguments for the `charges` subcommand.
#[derive(Args, Debug)]
pub struct ChargesArgs {
    /// Path to the charge table.
    #[arg(value_name = "PATH")]
    pub input: PathBuf,
}
