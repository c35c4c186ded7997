//! Location inventory CLI.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod ops;

use crate::cli::{Cli, Command};
use crate::commands::{run_apply, run_show};

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    let exit_code = match cli.command {
        Command::Show(args) => match run_show(&args) {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Apply(args) => match run_apply(&args) {
            Ok(outcome) => match serde_json::to_string_pretty(&outcome) {
                Ok(json) => {
                    println!("{json}");
                    if outcome.failed > 0 { 1 } else { 0 }
                }
                Err(error) => {
                    eprintln!("error: {error}");
                    1
                }
            },
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

/// Route logs to stderr so stdout stays clean JSON.
fn init_logging(cli: &Cli) {
    let filter = EnvFilter::builder()
        .with_default_directive(cli.verbosity.tracing_level_filter().into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
