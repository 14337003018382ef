mod cli;
mod clubs_cmd;
mod config;
mod convert;
mod logging;
mod recommend_cmd;
mod source;
mod visualize_cmd;

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
        Command::Recommend(args) => recommend_cmd::run(args),
        Command::Visualize(args) => visualize_cmd::run(args),
        Command::Clubs(args) => clubs_cmd::run(args),
    }
}
