//! Fixed-composition holiday packages.
//!
//! A package is always 2 adults and 2 kids to a fixed destination, priced
//! from flat base fares plus destination add-ons, with a fixed discount.

use std::fmt;

use serde::Serialize;

use crate::catalog::Destination;
use crate::error::{Error, Result};
use crate::money::{Money, Percent};

/// Number of adults every package carries.
pub const PACKAGE_ADULTS: usize = 2;

/// Number of kids every package carries.
pub const PACKAGE_KIDS: usize = 2;

const BASE_ADULT: Money = Money::from_units(1000);
const BASE_KID: Money = Money::from_units(500);

/// One of the three packages on offer.
///
/// # Examples
///
/// ```
/// use raub::{Destination, Money, Package};
///
/// let package = Package::from_choice('c').unwrap();
/// assert_eq!(package.destination(), Destination::Makkah);
/// assert_eq!(package.pre_discount_price(), Money::from_units(3600));
/// assert_eq!(package.discount(), Money::from_units(1260));
/// assert_eq!(package.final_price(), Money::from_units(2340));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Package {
    /// KUALA LUMPUR to LONDON, 30% off.
    A,
    /// KUALA LUMPUR to TOKYO, 20% off.
    B,
    /// KUALA LUMPUR to MAKKAH, 35% off.
    C,
}

impl Package {
    /// All packages in menu order.
    pub const ALL: [Self; 3] = [Self::A, Self::B, Self::C];

    /// Maps a menu letter (case-insensitive) to a package.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPackage`] for anything but A-C.
    pub fn from_choice(choice: char) -> Result<Self> {
        match choice.to_ascii_uppercase() {
            'A' => Ok(Self::A),
            'B' => Ok(Self::B),
            'C' => Ok(Self::C),
            _ => Err(Error::InvalidPackage {
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
        }
    }

    /// Returns the package destination.
    #[must_use]
    pub const fn destination(self) -> Destination {
        match self {
            Self::A => Destination::London,
            Self::B => Destination::Tokyo,
            Self::C => Destination::Makkah,
        }
    }

    /// Returns the (adult, kid) add-ons applied on top of the base fares.
    #[must_use]
    pub const fn add_ons(self) -> (Money, Money) {
        match self {
            Self::A => (Money::from_units(500), Money::from_units(250)),
            Self::B => (Money::from_units(300), Money::from_units(150)),
            Self::C => (Money::from_units(200), Money::from_units(100)),
        }
    }

    /// Returns the package discount.
    #[must_use]
    pub const fn discount_percent(self) -> Percent {
        match self {
            Self::A => Percent::of(30),
            Self::B => Percent::of(20),
            Self::C => Percent::of(35),
        }
    }

    /// Price of the whole package before its discount.
    #[must_use]
    pub fn pre_discount_price(self) -> Money {
        let (adult_add, kid_add) = self.add_ons();
        let adult = BASE_ADULT + adult_add;
        let kid = BASE_KID + kid_add;
        adult + adult + kid + kid
    }

    /// Amount taken off by the package discount.
    #[must_use]
    pub fn discount(self) -> Money {
        self.pre_discount_price().percent_of(self.discount_percent())
    }

    /// Price actually charged for the package.
    #[must_use]
    pub fn final_price(self) -> Money {
        self.pre_discount_price().saturating_sub(self.discount())
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
