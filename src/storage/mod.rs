//! Storage layer for daybook
//!
//! Provides the record store: a date-keyed entry collection persisted as a
//! single JSON file with atomic whole-blob writes.

pub mod file_io;

pub use file_io::{read_json, write_json_atomic};

use std::path::PathBuf;

use crate::config::DaybookPaths;
use crate::error::{DaybookError, DaybookResult};
use crate::models::{Entry, EntryInput};

/// Owns the durable entry collection and enforces uniqueness-by-date
///
/// The store is single-actor by design: mutations take `&mut self`, run to
/// completion, and rewrite the whole persisted blob. Positional operations
/// (`remove_at`, `edit_at`) address the current in-memory ordering; indices
/// are not stable identities and must be re-fetched after any mutation.
pub struct RecordStore {
    path: PathBuf,
    entries: Vec<Entry>,
}

impl RecordStore {
    /// Open a record store backed by the given file
    ///
    /// An absent file is the valid first-run empty state, not an error.
    pub fn open(path: PathBuf) -> DaybookResult<Self> {
        let entries: Vec<Entry> = read_json(&path)?;
        Ok(Self { path, entries })
    }

    /// Open the record store at the configured entries file
    pub fn from_paths(paths: &DaybookPaths) -> DaybookResult<Self> {
        paths.ensure_directories()?;
        Self::open(paths.entries_file())
    }

    /// Number of entries in the store
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in stored (insertion) order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Snapshot of all entries, sorted by date descending
    ///
    /// The sort is stable: entries never share a date, but stored relative
    /// order would be preserved for ties. Query-only; stored order is
    /// untouched.
    pub fn all(&self) -> Vec<Entry> {
        let mut entries = self.entries.clone();
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        entries
    }

    /// Validate input and insert a new entry, persisting the collection
    ///
    /// Fails with a validation error if any field is empty or malformed, and
    /// with a duplicate-date error if an entry for the same date already
    /// exists. On any failure the collection is left unchanged.
    pub fn insert(&mut self, input: &EntryInput) -> DaybookResult<Entry> {
        let entry = input.parse()?;

        if self.entries.iter().any(|e| e.date == entry.date) {
            return Err(DaybookError::duplicate_date(entry.date));
        }

        self.entries.push(entry.clone());
        self.persist()?;
        Ok(entry)
    }

    /// Remove the entry at the given position in stored order and persist
    ///
    /// Returns the removed entry. An out-of-range index leaves the
    /// collection unchanged.
    pub fn remove_at(&mut self, index: usize) -> DaybookResult<Entry> {
        if index >= self.entries.len() {
            return Err(DaybookError::index_out_of_range(index, self.entries.len()));
        }

        let removed = self.entries.remove(index);
        self.persist()?;
        Ok(removed)
    }

    /// Pop the entry at the given position for editing
    ///
    /// This is a destructive read: the entry is removed from the store and
    /// persisted as gone before its prior values are returned, so a caller
    /// that abandons the edit flow loses the record. Callers wanting a
    /// non-destructive flow should use [`peek_at`](Self::peek_at) and
    /// [`replace_at`](Self::replace_at) instead.
    pub fn edit_at(&mut self, index: usize) -> DaybookResult<Entry> {
        self.remove_at(index)
    }

    /// Read the entry at the given position without removing it
    pub fn peek_at(&self, index: usize) -> DaybookResult<&Entry> {
        self.entries
            .get(index)
            .ok_or_else(|| DaybookError::index_out_of_range(index, self.entries.len()))
    }

    /// Replace the entry at the given position in one step
    ///
    /// The replacement is validated and its date checked for uniqueness
    /// against every *other* entry before anything is removed, so a rejected
    /// replacement never loses the original record.
    pub fn replace_at(&mut self, index: usize, input: &EntryInput) -> DaybookResult<Entry> {
        if index >= self.entries.len() {
            return Err(DaybookError::index_out_of_range(index, self.entries.len()));
        }

        let entry = input.parse()?;

        let collision = self
            .entries
            .iter()
            .enumerate()
            .any(|(i, e)| i != index && e.date == entry.date);
        if collision {
            return Err(DaybookError::duplicate_date(entry.date));
        }

        let replaced = std::mem::replace(&mut self.entries[index], entry);
        self.persist()?;
        Ok(replaced)
    }

    /// Find the stored position of the entry with the given date
    pub fn position_of_date(&self, date: chrono::NaiveDate) -> Option<usize> {
        self.entries.iter().position(|e| e.date == date)
    }

    /// Write the full collection to disk as one blob
    fn persist(&self) -> DaybookResult<()> {
        write_json_atomic(&self.path, &self.entries)
    }
}
