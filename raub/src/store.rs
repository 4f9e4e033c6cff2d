//! Reservation persistence.
//!
//! The store keeps every reservation in insertion order and, when opened
//! from a path, writes them back to that file using the text format in
//! [`codec`].

pub mod codec;

#[cfg(all(test, feature = "property-tests"))]
pub(crate) mod proptests;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub use codec::{decode, decode_strict, encode};

use crate::error::{Error, Result};
use crate::reservation::Reservation;

/// File name used for the reservation store inside the data directory.
pub const DEFAULT_STORE_FILE: &str = "reservations.txt";

/// An ordered collection of reservations, optionally backed by a file.
///
/// # Examples
///
/// ```no_run
/// use raub::ReservationStore;
///
/// let mut store = ReservationStore::open("/tmp/raub/reservations.txt");
/// println!("{} reservation(s) on file", store.len());
/// store.persist().unwrap();
/// ```
#[derive(Debug, Default)]
pub struct ReservationStore {
    records: Vec<Reservation>,
    path: Option<PathBuf>,
    dirty: bool,
}

impl ReservationStore {
    /// Creates an empty in-memory store with no backing file.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an in-memory store holding the given reservations.
    #[must_use]
    pub fn from_records(records: Vec<Reservation>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// Opens the store backed by `path`.
    ///
    /// A missing file yields an empty store. A file that cannot be read is
    /// reported with a warning and also yields an empty store, so a damaged
    /// file never stops the program from starting. Malformed records are
    /// skipped.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let records = match Self::load(&path) {
            Ok(records) => records,
            Err(e) => {
                log::warn!("Could not read reservations from {}: {e}", path.display());
                Vec::new()
            }
        };
        log::debug!(
            "Loaded {} reservation(s) from {}",
            records.len(),
            path.display()
        );
        Self {
            records,
            path: Some(path),
            dirty: false,
        }
    }

    /// Reads the reservations saved at `path`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file exists but cannot be read. A missing
    /// file is not an error.
    pub fn load(path: &Path) -> Result<Vec<Reservation>> {
        match fs::read_to_string(path) {
            Ok(text) => Ok(decode(&text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Appends a reservation.
    pub fn add(&mut self, reservation: Reservation) {
        log::debug!("Adding reservation {}", reservation.reference());
        self.records.push(reservation);
        self.dirty = true;
    }

    /// Returns every reservation in insertion order.
    #[must_use]
    pub fn all(&self) -> &[Reservation] {
        &self.records
    }

    /// Returns the number of reservations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store holds no reservations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns true if a reservation with this reference is present.
    #[must_use]
    pub fn contains_reference(&self, reference: &str) -> bool {
        self.records
            .iter()
            .any(|r| r.reference().as_str() == reference)
    }

    /// Returns the backing file, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns true if reservations were added since the last load or save.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Writes every reservation to the backing file.
    ///
    /// The file is written next to its final location and then renamed over
    /// it, so an interrupted write leaves the previous contents in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the store has no backing file, or if the parent
    /// directory cannot be created or the file cannot be written.
    pub fn persist(&mut self) -> Result<()> {
        let path = self.path.as_deref().ok_or_else(|| Error::Validation {
            field: "store".into(),
            message: "store has no backing file".into(),
        })?;
        write_atomically(path, &encode(&self.records))?;
        log::info!(
            "Saved {} reservation(s) to {}",
            self.records.len(),
            path.display()
        );
        self.dirty = false;
        Ok(())
    }
}

fn write_atomically(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, contents)?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    Ok(())
}
