//! Destination fares and departure slots.
//!
//! Every flight leaves from the same origin; the catalog lists the seven
//! destinations it serves with their adult, kid and business-class fares,
//! and the four daily departure slots.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{Error, Result};
use crate::money::Money;
use crate::passenger::{AgeGroup, TravelClass};

/// A destination served from the origin airport.
///
/// # Examples
///
/// ```
/// use raub::Destination;
///
/// let dest = Destination::from_id(3).unwrap();
/// assert_eq!(dest, Destination::Makkah);
/// assert_eq!(dest.to_string(), "MAKKAH");
/// assert!(Destination::from_id(8).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Destination {
    /// Jakarta (id 1).
    Jakarta,
    /// Bangkok (id 2).
    Bangkok,
    /// Makkah (id 3).
    Makkah,
    /// Tokyo (id 4).
    Tokyo,
    /// Paris (id 5).
    Paris,
    /// London (id 6).
    London,
    /// Chicago (id 7).
    Chicago,
}

impl Destination {
    /// All destinations in catalog order.
    pub const ALL: [Self; 7] = [
        Self::Jakarta,
        Self::Bangkok,
        Self::Makkah,
        Self::Tokyo,
        Self::Paris,
        Self::London,
        Self::Chicago,
    ];

    /// Looks up a destination by its menu id (1-7).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDestination`] for ids outside 1-7.
    pub fn from_id(id: i64) -> Result<Self> {
        usize::try_from(id)
            .ok()
            .and_then(|i| i.checked_sub(1))
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(Error::InvalidDestination { id })
    }

    /// Returns the menu id (1-7).
    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8 + 1
    }

    /// Returns the upper-case display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jakarta => "JAKARTA",
            Self::Bangkok => "BANGKOK",
            Self::Makkah => "MAKKAH",
            Self::Tokyo => "TOKYO",
            Self::Paris => "PARIS",
            Self::London => "LONDON",
            Self::Chicago => "CHICAGO",
        }
    }

    /// Returns the fares for this destination.
    #[must_use]
    pub const fn fare(self) -> Fare {
        let (adult, kid, business) = match self {
            Self::Jakarta => (1000, 500, 500),
            Self::Bangkok => (1100, 550, 600),
            Self::Makkah => (1200, 600, 700),
            Self::Tokyo => (1300, 650, 800),
            Self::Paris => (1400, 700, 900),
            Self::London => (1500, 750, 1000),
            Self::Chicago => (1600, 800, 1100),
        };
        Fare {
            adult: Money::from_units(adult),
            kid: Money::from_units(kid),
            business_surcharge: Money::from_units(business),
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Destination {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::Validation {
                field: "destination".into(),
                message: format!("unknown destination '{s}'"),
            })
    }
}

impl Serialize for Destination {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Base fares for one destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fare {
    /// Fare for passengers aged 18 and over.
    pub adult: Money,
    /// Fare for passengers under 18.
    pub kid: Money,
    /// Added to either fare for seats in the business cabin.
    pub business_surcharge: Money,
}

impl Fare {
    /// Returns the ticket price for one passenger.
    ///
    /// # Examples
    ///
    /// ```
    /// use raub::{AgeGroup, Destination, Money, TravelClass};
    ///
    /// let fare = Destination::Jakarta.fare();
    /// assert_eq!(fare.price_for(AgeGroup::Adult, TravelClass::Economy), Money::from_units(1000));
    /// assert_eq!(fare.price_for(AgeGroup::Kid, TravelClass::Business), Money::from_units(1000));
    /// ```
    #[must_use]
    pub fn price_for(&self, group: AgeGroup, class: TravelClass) -> Money {
        let base = match group {
            AgeGroup::Adult => self.adult,
            AgeGroup::Kid => self.kid,
        };
        match class {
            TravelClass::Business => base + self.business_surcharge,
            TravelClass::Economy => base,
        }
    }
}

/// Returns the fares for a destination menu id.
///
/// # Errors
///
/// Returns [`Error::InvalidDestination`] for ids outside 1-7.
pub fn fare_for(destination_id: i64) -> Result<Fare> {
    Destination::from_id(destination_id).map(Destination::fare)
}

/// One of the four daily departure slots.
///
/// # Examples
///
/// ```
/// use raub::DepartureSlot;
///
/// let slot = DepartureSlot::from_choice('c').unwrap();
/// assert_eq!(slot.label(), "5.00PM");
/// assert!(DepartureSlot::from_choice('E').is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepartureSlot {
    /// 8.00AM.
    A,
    /// 1.30PM.
    B,
    /// 5.00PM.
    C,
    /// 10.30PM.
    D,
}

impl DepartureSlot {
    /// All slots in menu order.
    pub const ALL: [Self; 4] = [Self::A, Self::B, Self::C, Self::D];

    /// Maps a menu letter (case-insensitive) to a slot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDeparture`] for anything but A-D.
    pub fn from_choice(choice: char) -> Result<Self> {
        match choice.to_ascii_uppercase() {
            'A' => Ok(Self::A),
            'B' => Ok(Self::B),
            'C' => Ok(Self::C),
            'D' => Ok(Self::D),
            _ => Err(Error::InvalidDeparture {
                choice: choice.to_string(),
            }),
        }
    }

    /// Returns the menu letter.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
        }
    }

    /// Returns the departure time label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "8.00AM",
            Self::B => "1.30PM",
            Self::C => "5.00PM",
            Self::D => "10.30PM",
        }
    }
}

impl fmt::Display for DepartureSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DepartureSlot {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::Validation {
                field: "departure_time".into(),
                message: format!("unknown departure time '{s}'"),
            })
    }
}

impl Serialize for DepartureSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
