//! Ordering reservations by price.
//!
//! Two interchangeable algorithms are provided. Both are stable: records with
//! equal keys keep their original relative order, so the two always produce
//! the same sequence for the same input.

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::reservation::Reservation;

/// Which sorting algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortAlgorithm {
    /// Adjacent-swap passes, stopping early once a pass makes no swap.
    Bubble,
    /// Top-down merge sort.
    Merge,
}

impl SortAlgorithm {
    /// Returns a copy of `records` ordered by ascending total price.
    ///
    /// The input is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use raub::SortAlgorithm;
    ///
    /// assert!(SortAlgorithm::Merge.sort_by_price(&[]).is_empty());
    /// ```
    #[must_use]
    pub fn sort_by_price(self, records: &[Reservation]) -> Vec<Reservation> {
        let mut sorted = records.to_vec();
        self.sort_by_key(&mut sorted, Reservation::total_price);
        sorted
    }

    /// Stably sorts `items` in place by the key `f` extracts.
    pub fn sort_by_key<T, K, F>(self, items: &mut [T], f: F)
    where
        T: Clone,
        K: Ord,
        F: Fn(&T) -> K,
    {
        log::debug!("Running {self} sort over {} item(s)", items.len());
        match self {
            Self::Bubble => bubble_sort_by_key(items, f),
            Self::Merge => merge_sort_by_key(items, f),
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bubble => write!(f, "bubble"),
            Self::Merge => write!(f, "merge"),
        }
    }
}

impl FromStr for SortAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "bubble" => Ok(Self::Bubble),
            "merge" => Ok(Self::Merge),
            _ => Err(Error::Validation {
                field: "algorithm".into(),
                message: format!("unknown sort algorithm '{s}'"),
            }),
        }
    }
}

/// Bubble sort that swaps only strictly greater neighbours.
pub fn bubble_sort_by_key<T, K: Ord, F: Fn(&T) -> K>(items: &mut [T], f: F) {
    let len = items.len();
    for pass in 0..len.saturating_sub(1) {
        let mut swapped = false;
        for i in 0..len - 1 - pass {
            if f(&items[i]) > f(&items[i + 1]) {
                items.swap(i, i + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Merge sort; ties are taken from the left half first.
pub fn merge_sort_by_key<T: Clone, K: Ord, F: Fn(&T) -> K>(items: &mut [T], f: F) {
    merge_sort_slice(items, &f);
}

fn merge_sort_slice<T: Clone, K: Ord, F: Fn(&T) -> K>(items: &mut [T], f: &F) {
    if items.len() <= 1 {
        return;
    }
    let mid = items.len() / 2;
    merge_sort_slice(&mut items[..mid], f);
    merge_sort_slice(&mut items[mid..], f);

    let left = items[..mid].to_vec();
    let right = items[mid..].to_vec();
    let (mut i, mut j) = (0, 0);
    for slot in items.iter_mut() {
        let take_left = j >= right.len() || (i < left.len() && f(&left[i]) <= f(&right[j]));
        if take_left {
            *slot = left[i].clone();
            i += 1;
        } else {
            *slot = right[j].clone();
            j += 1;
        }
    }
}

/// Returns a copy of `records` ordered by reference number.
///
/// Binary search expects its input in this order.
#[must_use]
pub fn sorted_by_reference(records: &[Reservation]) -> Vec<Reservation> {
    let mut sorted = records.to_vec();
    merge_sort_by_key(&mut sorted, |r| r.reference().clone());
    sorted
}
