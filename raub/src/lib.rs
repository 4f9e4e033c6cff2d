#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # raub
//!
//! A library for booking and managing flight reservations for RAUB Airline.
//!
//! This library provides the reservation record model, its pricing and
//! validation rules, a line-oriented persistence format, and sorting,
//! searching and reporting over the stored records.
//!
//! ## Core Types
//!
//! - [`Destination`], [`Fare`] and [`DepartureSlot`]: the fixed fare catalog
//! - [`CouponTable`] and [`Package`]: discounts
//! - [`ManualBooking`] and [`PackageBooking`]: step-by-step booking flows
//! - [`Reservation`] and [`ReservationStore`]: completed bookings and their storage
//! - [`SortAlgorithm`], [`SearchAlgorithm`] and [`Report`]: read-only analysis
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use raub::{Destination, Money, Package, TravelClass, AgeGroup};
//!
//! let fare = Destination::Tokyo.fare();
//! assert_eq!(fare.price_for(AgeGroup::Adult, TravelClass::Business), Money::from_units(2100));
//!
//! assert_eq!(Package::B.final_price(), Money::from_units(3120));
//! ```

pub mod booking;
pub mod catalog;
pub mod config;
pub mod coupon;
pub mod error;
pub mod logging;
pub mod money;
pub mod output;
pub mod package;
pub mod passenger;
pub mod report;
pub mod reservation;
pub mod search;
pub mod sort;
pub mod store;

// Re-export key types at crate root for convenience
pub use booking::{ManualBooking, PackageBooking, TicketCount};
pub use catalog::{fare_for, DepartureSlot, Destination, Fare};
pub use config::{Config, ConfigBuilder};
pub use coupon::{Coupon, CouponTable};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use money::{Money, Percent};
pub use output::{FlightDetails, OutputFormat, OutputFormatter};
pub use package::Package;
pub use passenger::{AgeGroup, Passenger, SeatNumber, TravelClass};
pub use report::Report;
pub use reservation::{ReferenceNumber, Reservation};
pub use search::SearchAlgorithm;
pub use sort::SortAlgorithm;
pub use store::ReservationStore;
