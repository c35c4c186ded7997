//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};

#[derive(Parser)]
#[command(
    name = "siteinv",
    version,
    about = "Inspect and batch-edit an in-memory location inventory",
    long_about = "Load a location forest (the built-in seed or a JSON file),\n\
                  optionally apply a batch of tree and equipment operations,\n\
                  and print the resulting state as JSON. Nothing is persisted."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the forest as pretty JSON.
    Show(ShowArgs),

    /// Apply a JSON batch of operations and print the resulting state.
    Apply(ApplyArgs),
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Forest JSON file to load instead of the built-in seed.
    #[arg(long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ApplyArgs {
    /// JSON file holding the operation batch.
    #[arg(value_name = "OPS_FILE")]
    pub ops: PathBuf,

    /// Forest JSON file to load instead of the built-in seed.
    #[arg(long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,
}
