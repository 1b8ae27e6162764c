//! Dense display numbering, substring filtering and paging for tables.
//!
//! Every displayed list carries `id = 1..N` in its current sort order. The
//! numbering is re-derived after every load, filter and edit; it never
//! touches a record's server identity (`recordId`).

use std::cmp::Ordering;

use chrono::NaiveDateTime;

use crate::types::DbId;

// ---------------------------------------------------------------------------
// Row contract
// ---------------------------------------------------------------------------

/// Ordering key of a table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey<'a> {
    /// Date columns sort newest first. Rows whose date does not parse
    /// (e.g. a freshly added, still empty row) sort ahead of everything.
    NewestFirst(Option<NaiveDateTime>),
    /// Name columns (login, vehicle number) sort ascending.
    Ascending(&'a str),
}

/// A record shown as a numbered table row.
pub trait DisplayRow {
    /// Current display sequence number.
    fn display_id(&self) -> DbId;

    fn set_display_id(&mut self, id: DbId);

    fn sort_key(&self) -> SortKey<'_>;

    /// The visible text columns searched by [`apply_filter`].
    fn filter_fields(&self) -> Vec<&str>;
}

fn compare_keys(a: &SortKey<'_>, b: &SortKey<'_>) -> Ordering {
    match (a, b) {
        (SortKey::NewestFirst(a), SortKey::NewestFirst(b)) => match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => b.cmp(a),
        },
        (SortKey::Ascending(a), SortKey::Ascending(b)) => a.cmp(b),
        (SortKey::NewestFirst(_), SortKey::Ascending(_)) => Ordering::Less,
        (SortKey::Ascending(_), SortKey::NewestFirst(_)) => Ordering::Greater,
    }
}

// ---------------------------------------------------------------------------
// Enumeration
// ---------------------------------------------------------------------------

/// Stable-sort `rows` by their [`SortKey`] and renumber them `1..=N`.
pub fn enumerate_in_place<T: DisplayRow>(rows: &mut [T]) {
    rows.sort_by(|a, b| compare_keys(&a.sort_key(), &b.sort_key()));
    for (index, row) in rows.iter_mut().enumerate() {
        row.set_display_id(index as DbId + 1);
    }
}

/// Owned variant of [`enumerate_in_place`].
pub fn enumerate<T: DisplayRow>(mut rows: Vec<T>) -> Vec<T> {
    enumerate_in_place(&mut rows);
    rows
}

/// Insert a new row at the top and renumber.
pub fn prepend_row<T: DisplayRow>(rows: &mut Vec<T>, row: T) {
    rows.insert(0, row);
    enumerate_in_place(rows);
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Case-sensitive substring match against any of the row's filter fields.
pub fn matches_filter<T: DisplayRow>(row: &T, needle: &str) -> bool {
    row.filter_fields().iter().any(|field| field.contains(needle))
}

/// Rows matching `needle`, renumbered densely. An empty needle keeps every
/// row.
pub fn apply_filter<T: DisplayRow + Clone>(rows: &[T], needle: &str) -> Vec<T> {
    let filtered = if needle.is_empty() {
        rows.to_vec()
    } else {
        rows.iter()
            .filter(|row| matches_filter(*row, needle))
            .cloned()
            .collect()
    };
    enumerate(filtered)
}

// ---------------------------------------------------------------------------
// Paging
// ---------------------------------------------------------------------------

/// Default number of table rows per page.
pub const DEFAULT_PAGE_ROWS: usize = 10;

/// Paginator state: offset of the first visible row and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub first: usize,
    pub rows: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self {
            first: 0,
            rows: DEFAULT_PAGE_ROWS,
        }
    }
}

impl Pager {
    pub fn next(&mut self) {
        self.first += self.rows;
    }

    pub fn prev(&mut self) {
        self.first = self.first.saturating_sub(self.rows);
    }

    pub fn reset(&mut self) {
        self.first = 0;
    }

    pub fn page_change(&mut self, first: usize, rows: usize) {
        self.first = first;
        self.rows = rows;
    }

    pub fn is_first_page(&self) -> bool {
        self.first == 0
    }

    pub fn is_last_page(&self, total: usize) -> bool {
        self.first + self.rows >= total
    }

    /// The slice of `rows` on the current page.
    pub fn page<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        let start = self.first.min(rows.len());
        let end = (self.first + self.rows).min(rows.len());
        &rows[start..end]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
