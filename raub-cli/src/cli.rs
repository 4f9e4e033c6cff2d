//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    BookCommand, CouponsCommand, FaresCommand, ListCommand, PackageCommand, PackagesCommand,
    ReportCommand, SearchCommand, SortCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for booking and analysing RAUB Airline reservations.
#[derive(Parser)]
#[command(name = "raub")]
#[command(version, about = "Book and analyse RAUB Airline reservations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "RAUB_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Book seats on a flight
    Book(BookCommand),

    /// Book a family package
    Package(PackageCommand),

    /// Show destinations, fares and departure times
    Fares(FaresCommand),

    /// Show the family packages on offer
    Packages(PackagesCommand),

    /// Show the accepted coupon codes
    Coupons(CouponsCommand),

    /// List stored reservations
    List(ListCommand),

    /// Show reservations ordered by total price
    Sort(SortCommand),

    /// Find a reservation by reference number
    Search(SearchCommand),

    /// Summarise ticket sales and revenue
    Report(ReportCommand),
}
