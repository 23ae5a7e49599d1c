// nexscan/src/main.rs

use anyhow::Result;
use clap::Parser;
use nexscan::cli::{run, Cli};
use std::process::ExitCode;

fn entrypoint() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();
    run(&cli)
}

fn main() -> ExitCode {
    match entrypoint() {
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
        Ok(_) => ExitCode::SUCCESS,
    }
}
