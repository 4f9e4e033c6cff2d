//! Error types for the raub library.
//!
//! This module provides the error hierarchy for every operation in the
//! library, using `thiserror` for ergonomic error handling. Input violations
//! raised while a booking is being assembled are recoverable: the caller can
//! fix the offending value and retry the same step.

use thiserror::Error;

/// Result type alias for operations that may fail with a raub error.
///
/// # Examples
///
/// ```
/// use raub::{Error, Result};
///
/// fn example_operation() -> Result<u8> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the raub library.
#[derive(Debug, Error)]
pub enum Error {
    /// A destination id outside the catalog was supplied.
    #[error("invalid destination {id}: choose 1-7 only")]
    InvalidDestination {
        /// The rejected destination id.
        id: i64,
    },

    /// A ticket count outside 1-4 was supplied.
    #[error("invalid number of tickets {count}: choose 1-4 only")]
    InvalidTicketCount {
        /// The rejected ticket count.
        count: i64,
    },

    /// A passenger name was empty or spanned several lines.
    #[error("invalid passenger name: {reason}")]
    InvalidName {
        /// Why the name was rejected.
        reason: String,
    },

    /// A negative age was supplied.
    #[error("invalid age {age}: must be a non-negative number")]
    InvalidAge {
        /// The rejected age.
        age: i64,
    },

    /// A seat number outside 1-81 was supplied.
    #[error("invalid seat {seat}: available seats for this flight are 1-81 only")]
    InvalidSeat {
        /// The rejected seat number.
        seat: i64,
    },

    /// The seat is already held by another passenger of the same reservation.
    #[error("seat {seat} has been taken")]
    SeatTaken {
        /// The duplicated seat number.
        seat: u8,
    },

    /// Accepting the passenger would break the package's 2 adults / 2 kids mix.
    #[error("package is for 2 adults and 2 kids only (current adults: {adults}, kids: {kids})")]
    PackageMix {
        /// Adults already on the booking.
        adults: usize,
        /// Kids already on the booking.
        kids: usize,
    },

    /// Every ticket of the booking already has a passenger.
    #[error("all {expected} passenger(s) have already been entered")]
    PassengersComplete {
        /// Number of passengers the booking holds.
        expected: usize,
    },

    /// A departure choice other than A, B, C or D.
    #[error("invalid departure choice '{choice}': choose A / B / C / D only")]
    InvalidDeparture {
        /// The rejected choice.
        choice: String,
    },

    /// A package choice other than A, B or C.
    #[error("invalid package choice '{choice}': choose A / B / C only")]
    InvalidPackage {
        /// The rejected choice.
        choice: String,
    },

    /// The coupon code is not in the coupon table.
    #[error("invalid coupon '{code}'")]
    UnknownCoupon {
        /// The rejected code.
        code: String,
    },

    /// A coupon was already applied to this reservation.
    #[error("a coupon has already been applied to this reservation")]
    CouponAlreadyApplied,

    /// A reference number that does not follow the `RB` + 6 characters format.
    #[error("invalid reference number '{value}'")]
    InvalidReference {
        /// The rejected value.
        value: String,
    },

    /// A booking was finished before every required step was completed.
    #[error("reservation is incomplete: {missing}")]
    Incomplete {
        /// What is still missing.
        missing: String,
    },

    /// A persisted reservation block could not be decoded.
    #[error("malformed reservation record at line {line}: {message}")]
    Decode {
        /// One-based line number of the offending line.
        line: usize,
        /// Description of the problem.
        message: String,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if the error is an input violation the caller may retry.
    ///
    /// # Examples
    ///
    /// ```
    /// use raub::Error;
    ///
    /// assert!(Error::SeatTaken { seat: 12 }.is_recoverable());
    /// assert!(!Error::Decode { line: 3, message: "bad price".into() }.is_recoverable());
    /// ```
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidDestination { .. }
                | Self::InvalidTicketCount { .. }
                | Self::InvalidName { .. }
                | Self::InvalidAge { .. }
                | Self::InvalidSeat { .. }
                | Self::SeatTaken { .. }
                | Self::PackageMix { .. }
                | Self::InvalidDeparture { .. }
                | Self::InvalidPackage { .. }
                | Self::UnknownCoupon { .. }
                | Self::CouponAlreadyApplied
        )
    }
}
