//! Passenger details and seat classification.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Passengers this age or older fly on an adult ticket.
pub const ADULT_AGE: u32 = 18;

/// A seat on the aircraft (1-81).
///
/// Seats 1-15 make up the business cabin; 16-81 are economy.
///
/// # Examples
///
/// ```
/// use raub::{SeatNumber, TravelClass};
///
/// let seat = SeatNumber::try_from(15).unwrap();
/// assert_eq!(seat.travel_class(), TravelClass::Business);
/// assert_eq!(SeatNumber::try_from(16).unwrap().travel_class(), TravelClass::Economy);
/// assert!(SeatNumber::try_from(82).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "u8")]
pub struct SeatNumber(u8);

impl SeatNumber {
    /// The first seat number.
    pub const MIN: u8 = 1;

    /// The last seat number.
    pub const MAX: u8 = 81;

    /// The last seat of the business cabin.
    pub const LAST_BUSINESS: u8 = 15;

    /// Returns the underlying seat number.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the class derived from the seat's cabin.
    #[must_use]
    pub const fn travel_class(self) -> TravelClass {
        if self.0 <= Self::LAST_BUSINESS {
            TravelClass::Business
        } else {
            TravelClass::Economy
        }
    }
}

impl TryFrom<i32> for SeatNumber {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self> {
        u8::try_from(value)
            .ok()
            .filter(|seat| (Self::MIN..=Self::MAX).contains(seat))
            .map(Self)
            .ok_or(Error::InvalidSeat {
                seat: i64::from(value),
            })
    }
}

impl From<SeatNumber> for u8 {
    fn from(seat: SeatNumber) -> Self {
        seat.0
    }
}

impl fmt::Display for SeatNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Cabin class, derived from the seat number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TravelClass {
    /// Seats 1-15.
    Business,
    /// Seats 16-81.
    Economy,
}

impl TravelClass {
    /// Returns the display label used on boarding passes and in saved files.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Business => "Business Class",
            Self::Economy => "Economy Class",
        }
    }
}

impl fmt::Display for TravelClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TravelClass {
    type Err = Error;

    /// Accepts both `Business Class` and the bare `Business` form.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let bare = s.strip_suffix(" Class").unwrap_or(s);
        match bare {
            "Business" => Ok(Self::Business),
            "Economy" => Ok(Self::Economy),
            _ => Err(Error::Validation {
                field: "travel_class".into(),
                message: format!("unknown travel class '{s}'"),
            }),
        }
    }
}

/// Ticket category, derived from age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AgeGroup {
    /// 18 and over.
    Adult,
    /// Under 18.
    Kid,
}

impl AgeGroup {
    /// Classifies an age.
    ///
    /// # Examples
    ///
    /// ```
    /// use raub::AgeGroup;
    ///
    /// assert_eq!(AgeGroup::from_age(18), AgeGroup::Adult);
    /// assert_eq!(AgeGroup::from_age(17), AgeGroup::Kid);
    /// ```
    #[must_use]
    pub const fn from_age(age: u32) -> Self {
        if age >= ADULT_AGE {
            Self::Adult
        } else {
            Self::Kid
        }
    }
}

/// One traveller on a reservation.
///
/// Passengers are validated on construction and never change afterwards.
///
/// # Examples
///
/// ```
/// use raub::{AgeGroup, Passenger, TravelClass};
///
/// let p = Passenger::new("  Aisyah  ", 34, 3).unwrap();
/// assert_eq!(p.name(), "Aisyah");
/// assert_eq!(p.age_group(), AgeGroup::Adult);
/// assert_eq!(p.travel_class(), TravelClass::Business);
///
/// assert!(Passenger::new("", 34, 3).is_err());
/// assert!(Passenger::new("Aisyah", -1, 3).is_err());
/// assert!(Passenger::new("Aisyah", 34, 0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Passenger {
    name: String,
    age: u32,
    seat: SeatNumber,
    travel_class: TravelClass,
}

impl Passenger {
    /// Validates raw input and creates a passenger.
    ///
    /// The name is trimmed of surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns a recoverable error if:
    /// - The name is empty after trimming or contains a line break
    /// - The age is negative
    /// - The seat is outside 1-81
    pub fn new(name: &str, age: i64, seat: i32) -> Result<Self> {
        let name = validate_name(name)?;
        let age = u32::try_from(age).map_err(|_| Error::InvalidAge { age })?;
        let seat = SeatNumber::try_from(seat)?;
        Ok(Self::from_parts(name, age, seat))
    }

    pub(crate) fn from_parts(name: String, age: u32, seat: SeatNumber) -> Self {
        Self {
            name,
            age,
            seat,
            travel_class: seat.travel_class(),
        }
    }

    /// Returns the passenger's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the passenger's age.
    #[must_use]
    pub const fn age(&self) -> u32 {
        self.age
    }

    /// Returns the assigned seat.
    #[must_use]
    pub const fn seat(&self) -> SeatNumber {
        self.seat
    }

    /// Returns the cabin class of the assigned seat.
    #[must_use]
    pub const fn travel_class(&self) -> TravelClass {
        self.travel_class
    }

    /// Returns whether the passenger flies on an adult or kid ticket.
    #[must_use]
    pub const fn age_group(&self) -> AgeGroup {
        AgeGroup::from_age(self.age)
    }
}

fn validate_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidName {
            reason: "name must be non-empty".into(),
        });
    }
    if trimmed.chars().any(char::is_control) {
        return Err(Error::InvalidName {
            reason: "name must be a single line of printable characters".into(),
        });
    }
    Ok(trimmed.to_string())
}
