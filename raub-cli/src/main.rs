//! Main entry point for the raub CLI.
//!
//! This is the command-line interface for the RAUB Airline reservation
//! system. It provides commands for:
//! - `book` / `package`: Record a new reservation
//! - `fares` / `packages` / `coupons`: Show what is on offer
//! - `list` / `sort` / `search` / `report`: Inspect stored reservations

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Route library logging through our logger
    if let Err(e) = raub::init_logger(cli.verbose, cli.quiet).install() {
        eprintln!("Warning: {e}");
    }

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Book(cmd) => cmd.execute(&global),
        cli::Command::Package(cmd) => cmd.execute(&global),
        cli::Command::Fares(cmd) => cmd.execute(&global),
        cli::Command::Packages(cmd) => cmd.execute(&global),
        cli::Command::Coupons(cmd) => cmd.execute(&global),
        cli::Command::List(cmd) => cmd.execute(&global),
        cli::Command::Sort(cmd) => cmd.execute(&global),
        cli::Command::Search(cmd) => cmd.execute(&global),
        cli::Command::Report(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
