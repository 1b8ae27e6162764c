//! In-place edit support: load-time row snapshots and the info-list draft.
//!
//! Snapshots are captured once per list load. Cancelling an edit restores
//! the row as it was at load time, no matter how many edits were cancelled
//! before. A successful save discards everything and the list is fetched
//! again, so snapshots are never merged with partial edits.

use crate::error::CoreError;
use crate::listing::{enumerate_in_place, DisplayRow};
use crate::types::DbId;

/// A record with a stable server identity, distinct from its display id.
pub trait Identified {
    fn record_id(&self) -> DbId;
}

// ---------------------------------------------------------------------------
// Row snapshots
// ---------------------------------------------------------------------------

/// Value copies of every row of a freshly loaded list.
#[derive(Debug, Clone)]
pub struct RowSnapshots<T> {
    rows: Vec<T>,
}

impl<T> Default for RowSnapshots<T> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<T: Identified + Clone> RowSnapshots<T> {
    /// Copy every row. Call once per load, never per edit.
    pub fn capture(rows: &[T]) -> Self {
        Self {
            rows: rows.to_vec(),
        }
    }

    pub fn find(&self, record_id: DbId) -> Option<&T> {
        self.rows.iter().find(|row| row.record_id() == record_id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Overwrite `rows[index]` with its load-time snapshot and renumber.
    ///
    /// Returns `false` (and leaves the list untouched) when the index is out
    /// of range or the row has no snapshot, e.g. a row added after load.
    pub fn revert(&self, rows: &mut [T], index: usize) -> bool
    where
        T: DisplayRow,
    {
        let Some(edited) = rows.get(index) else {
            return false;
        };
        let Some(snapshot) = self.find(edited.record_id()) else {
            return false;
        };
        rows[index] = snapshot.clone();
        enumerate_in_place(rows);
        true
    }
}

// ---------------------------------------------------------------------------
// Info list draft
// ---------------------------------------------------------------------------

/// Text of a row appended to a vehicle's info list.
pub const NEW_INFO_ROW: &str = "Новая информация";

/// Editable copy of a vehicle's ordered info list.
///
/// The draft is the single source of truth for what the user typed; the
/// saved list is what the backend last returned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfoListDraft {
    saved: Vec<String>,
    current: Vec<String>,
}

impl InfoListDraft {
    pub fn new(saved: Vec<String>) -> Self {
        Self {
            current: saved.clone(),
            saved,
        }
    }

    pub fn rows(&self) -> &[String] {
        &self.current
    }

    pub fn add_row(&mut self) {
        self.current.push(NEW_INFO_ROW.to_string());
    }

    pub fn remove_last_row(&mut self) -> Option<String> {
        self.current.pop()
    }

    pub fn set_row(&mut self, index: usize, text: impl Into<String>) -> Result<(), CoreError> {
        let len = self.current.len();
        let row = self.current.get_mut(index).ok_or_else(|| {
            CoreError::Validation(format!("Строка {index} вне диапазона (всего {len})"))
        })?;
        *row = text.into();
        Ok(())
    }

    pub fn is_modified(&self) -> bool {
        self.current != self.saved
    }

    /// Discard edits.
    pub fn reset(&mut self) {
        self.current = self.saved.clone();
    }

    /// Adopt the list the backend stored as the new baseline.
    pub fn mark_saved(&mut self, saved: Vec<String>) {
        self.current = saved.clone();
        self.saved = saved;
    }
}
