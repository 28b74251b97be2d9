use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "forcegen - Compile force-field parameter files and molecular topologies into force-field descriptions.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile a parameter file for a system and report the resulting force field.
    Compile(CompileArgs),
    /// Parse a parameter file and list its sections without compiling.
    Check(CheckArgs),
    /// List the registered generators and the commands they accept.
    Generators,
}

/// Arguments for the `compile` subcommand.
#[derive(Args, Debug)]
pub struct CompileArgs {
    /// Path to the force-field parameter file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub pars: PathBuf,

    /// Path to the system description in TOML format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub system: PathBuf,

    /// Path to a run configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the real-space cutoff from the config file.
    #[arg(long, value_name = "FLOAT")]
    pub rcut: Option<f64>,

    /// Unit expression of the cutoff value (e.g. 'angstrom'); atomic units by default.
    #[arg(long, value_name = "UNIT", requires = "rcut")]
    pub rcut_unit: Option<String>,

    /// Disable smooth truncation of pair potentials at the cutoff.
    #[arg(long)]
    pub no_smooth: bool,

    /// Write every valence term to a CSV file.
    #[arg(long, value_name = "PATH")]
    pub terms_csv: Option<PathBuf>,
}

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the force-field parameter file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub pars: PathBuf,
}
