//! Looking up reservations by reference number.
//!
//! A miss is not an error: every lookup returns `None` when nothing matches.

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::reservation::Reservation;
use crate::sort::sorted_by_reference;

/// Which search algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchAlgorithm {
    /// Scan every record in order.
    Linear,
    /// Half-interval probe over records sorted by reference number.
    Binary,
}

impl SearchAlgorithm {
    /// Finds the reservation with `reference` among `records`.
    ///
    /// `records` may be in any order; the binary variant first takes a copy
    /// sorted by reference number.
    ///
    /// # Examples
    ///
    /// ```
    /// use raub::SearchAlgorithm;
    ///
    /// assert!(SearchAlgorithm::Binary.find(&[], "RB000000").is_none());
    /// ```
    #[must_use]
    pub fn find(self, records: &[Reservation], reference: &str) -> Option<Reservation> {
        log::debug!("Running {self} search for {reference}");
        match self {
            Self::Linear => linear_search(records, reference).map(|i| records[i].clone()),
            Self::Binary => {
                let sorted = sorted_by_reference(records);
                binary_search(&sorted, reference).map(|i| sorted[i].clone())
            }
        }
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "linear"),
            Self::Binary => write!(f, "binary"),
        }
    }
}

impl FromStr for SearchAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "binary" => Ok(Self::Binary),
            _ => Err(Error::Validation {
                field: "algorithm".into(),
                message: format!("unknown search algorithm '{s}'"),
            }),
        }
    }
}

/// Returns the index of the first record with `reference`.
#[must_use]
pub fn linear_search(records: &[Reservation], reference: &str) -> Option<usize> {
    records
        .iter()
        .position(|r| r.reference().as_str() == reference)
}

/// Returns the index of a record with `reference`.
///
/// `sorted` must be ordered ascending by reference number, as produced by
/// [`sorted_by_reference`]. Unsorted input gives unspecified results.
#[must_use]
pub fn binary_search(sorted: &[Reservation], reference: &str) -> Option<usize> {
    let (mut low, mut high) = (0, sorted.len());
    while low < high {
        let mid = low + (high - low) / 2;
        match sorted[mid].reference().as_str().cmp(reference) {
            std::cmp::Ordering::Equal => return Some(mid),
            std::cmp::Ordering::Less => low = mid + 1,
            std::cmp::Ordering::Greater => high = mid,
        }
    }
    None
}
