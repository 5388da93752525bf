mod classify_cmd;
mod cli;
mod config;
mod evaluate_cmd;
mod logging;
mod prepare_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Prepare(args) => prepare_cmd::run(args),
        Command::Evaluate(args) => evaluate_cmd::run(args),
        Command::Classify(args) => classify_cmd::run(args),
    }
}
