//! Shared state of the editable per-vehicle tables.

use uavfleet_core::edit::RowSnapshots;
use uavfleet_core::listing::{apply_filter, enumerate, prepend_row, Pager};
use uavfleet_core::models::TableRecord;

/// Full record list, the filtered view and the load-time snapshots.
///
/// Edits are made on `displayed`; the full list is only replaced by a
/// fresh load.
#[derive(Debug, Clone)]
pub struct RecordTable<T> {
    all: Vec<T>,
    displayed: Vec<T>,
    snapshots: RowSnapshots<T>,
    filter: String,
    pub pager: Pager,
}

impl<T> Default for RecordTable<T> {
    fn default() -> Self {
        Self {
            all: Vec::new(),
            displayed: Vec::new(),
            snapshots: RowSnapshots::default(),
            filter: String::new(),
            pager: Pager::default(),
        }
    }
}

impl<T: TableRecord> RecordTable<T> {
    /// Adopt a freshly fetched list: normalise, number, snapshot and
    /// re-apply the current filter.
    pub fn load(&mut self, mut records: Vec<T>) {
        records.iter_mut().for_each(TableRecord::prepare_for_display);
        self.all = enumerate(records);
        self.snapshots = RowSnapshots::capture(&self.all);
        self.displayed = apply_filter(&self.all, &self.filter);
    }

    pub fn all(&self) -> &[T] {
        &self.all
    }

    pub fn rows(&self) -> &[T] {
        &self.displayed
    }

    pub fn row(&self, index: usize) -> Option<&T> {
        self.displayed.get(index)
    }

    pub fn row_mut(&mut self, index: usize) -> Option<&mut T> {
        self.displayed.get_mut(index)
    }

    pub fn set_filter(&mut self, needle: impl Into<String>) {
        self.filter = needle.into();
        self.displayed = apply_filter(&self.all, &self.filter);
        self.pager.reset();
    }

    /// Insert an unsaved row at the top of the view.
    pub fn add_row(&mut self, row: T) {
        prepend_row(&mut self.displayed, row);
        self.pager.reset();
    }

    /// Revert `index` to its load-time state.
    pub fn cancel_edit(&mut self, index: usize) -> bool {
        self.snapshots.revert(&mut self.displayed, index)
    }

    pub fn page(&self) -> &[T] {
        self.pager.page(&self.displayed)
    }
}
