//! nutricare - command-line client for the NutriCare platform

#![allow(missing_docs)]

use clap::Parser;
use nutricare_client::cli::{self, Cli};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Display with context chain, not Debug
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
