//! Currency amounts and percentages.
//!
//! Amounts are kept as whole cents so that prices, discounts and their
//! persisted two-decimal form always agree exactly.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

/// A non-negative currency amount with cent precision.
///
/// # Examples
///
/// ```
/// use raub::Money;
///
/// let fare = Money::from_units(1000);
/// assert_eq!(fare.cents(), 100_000);
/// assert_eq!(fare.to_string(), "1000.00");
///
/// let parsed: Money = "850.5".parse().unwrap();
/// assert_eq!(parsed.to_string(), "850.50");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(u64);

impl Money {
    /// The zero amount.
    pub const ZERO: Self = Self(0);

    /// Creates an amount from whole cents.
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Creates an amount from whole currency units.
    #[must_use]
    pub const fn from_units(units: u64) -> Self {
        Self(units * 100)
    }

    /// Returns the amount in cents.
    #[must_use]
    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Returns `percent` of this amount, rounded half-up to the nearest cent.
    ///
    /// # Examples
    ///
    /// ```
    /// use raub::{Money, Percent};
    ///
    /// let total = Money::from_units(1000);
    /// let fifteen = Percent::new(15).unwrap();
    /// assert_eq!(total.percent_of(fifteen), Money::from_units(150));
    /// ```
    #[must_use]
    pub const fn percent_of(self, percent: Percent) -> Self {
        Self((self.0 * percent.value() as u64 + 50) / 100)
    }

    /// Adds `other`, returning `None` on overflow.
    #[must_use]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// Subtracts `other`, clamping at zero.
    #[must_use]
    pub const fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Add for Money {
    type Output = Self;

    // Saturates rather than wrapping.
    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Money {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |message: &str| Error::Validation {
            field: "amount".into(),
            message: format!("'{s}' {message}"),
        };

        let (units, fraction) = match s.split_once('.') {
            Some((units, fraction)) => (units, fraction),
            None => (s, ""),
        };

        if units.is_empty() || !units.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("is not a non-negative amount"));
        }
        if fraction.len() > 2 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("must have at most two decimal digits"));
        }

        let units: u64 = units
            .parse()
            .map_err(|_| invalid("is too large"))?;
        let mut cents: u64 = if fraction.is_empty() {
            0
        } else {
            fraction.parse().map_err(|_| invalid("has a bad fraction"))?
        };
        if fraction.len() == 1 {
            cents *= 10;
        }

        units
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .map(Self)
            .ok_or_else(|| invalid("is too large"))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A whole-number percentage between 0 and 100.
///
/// # Examples
///
/// ```
/// use raub::Percent;
///
/// assert_eq!(Percent::new(35).unwrap().value(), 35);
/// assert!(Percent::new(101).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Percent(u8);

impl Percent {
    /// Creates a percentage.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is greater than 100.
    pub fn new(value: u8) -> Result<Self> {
        if value > 100 {
            return Err(Error::Validation {
                field: "percent".into(),
                message: format!("{value} is greater than 100"),
            });
        }
        Ok(Self(value))
    }

    /// Builds a percentage from a catalog constant known to be in range.
    pub(crate) const fn of(value: u8) -> Self {
        Self(value)
    }

    /// Returns the percentage as a whole number.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
