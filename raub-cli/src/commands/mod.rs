//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `book`: Book a manual reservation
//! - `package`: Book a family package
//! - `fares`: Show destinations, fares and departure slots
//! - `packages`: Show the packages on offer
//! - `coupons`: Show the accepted coupon codes
//! - `list`: List stored reservations
//! - `sort`: Show reservations ordered by price
//! - `search`: Find a reservation by reference number
//! - `report`: Summarise sales

pub mod book;
pub mod coupons;
pub mod fares;
pub mod list;
pub mod package;
pub mod packages;
pub mod report;
pub mod search;
pub mod sort;

pub use book::BookCommand;
pub use coupons::CouponsCommand;
pub use fares::FaresCommand;
pub use list::ListCommand;
pub use package::PackageCommand;
pub use packages::PackagesCommand;
pub use report::ReportCommand;
pub use search::SearchCommand;
pub use sort::SortCommand;
