//! Scheduled maintenance (TO) record.

use serde::{Deserialize, Serialize};

use crate::dates::{deserialize_display_date, parse_sort_key, to_iso_date};
use crate::edit::Identified;
use crate::listing::{DisplayRow, SortKey};
use crate::models::{null_as_default, TableRecord};
use crate::statuses::MaintenanceStatus;
use crate::types::{DbId, UNASSIGNED_ID};

/// A planned or completed inspection. `inspection_date` is held as
/// `dd.MM.yyyy` and sent back as `yyyy-MM-dd`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UavMaintenance {
    #[serde(default)]
    pub id: DbId,
    #[serde(default)]
    pub record_id: DbId,
    pub uav_id: String,
    #[serde(default, deserialize_with = "deserialize_display_date")]
    pub inspection_date: String,
    #[serde(default)]
    pub status: MaintenanceStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub note: String,
}

impl UavMaintenance {
    pub fn new_for(uav_id: impl Into<String>) -> Self {
        Self {
            id: UNASSIGNED_ID,
            record_id: UNASSIGNED_ID,
            uav_id: uav_id.into(),
            inspection_date: String::new(),
            status: MaintenanceStatus::Planned,
            note: String::new(),
        }
    }
}

impl DisplayRow for UavMaintenance {
    fn display_id(&self) -> DbId {
        self.id
    }

    fn set_display_id(&mut self, id: DbId) {
        self.id = id;
    }

    fn sort_key(&self) -> SortKey<'_> {
        SortKey::NewestFirst(parse_sort_key(&self.inspection_date))
    }

    fn filter_fields(&self) -> Vec<&str> {
        vec![
            self.inspection_date.as_str(),
            self.status.as_str(),
            self.note.as_str(),
        ]
    }
}

impl Identified for UavMaintenance {
    fn record_id(&self) -> DbId {
        self.record_id
    }
}

impl TableRecord for UavMaintenance {
    /// The backend's `id` is the identity; keep it before renumbering.
    fn prepare_for_display(&mut self) {
        self.record_id = self.id;
    }

    fn to_wire(&self) -> Self {
        Self {
            inspection_date: to_iso_date(&self.inspection_date),
            ..self.clone()
        }
    }
}
