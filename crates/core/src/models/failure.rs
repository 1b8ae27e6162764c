//! Failure log records and their follow-up steps.

use serde::{Deserialize, Serialize};

use crate::dates::{deserialize_display_date, parse_sort_key, to_iso_date};
use crate::edit::Identified;
use crate::listing::{DisplayRow, SortKey};
use crate::models::{null_as_default, TableRecord};
use crate::statuses::FailureSeverity;
use crate::types::{DbId, UNASSIGNED_ID};

/// A failure reported for a vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UavFailure {
    #[serde(default)]
    pub id: DbId,
    #[serde(default)]
    pub record_id: DbId,
    pub uav_id: String,
    #[serde(default, deserialize_with = "deserialize_display_date")]
    pub date: String,
    #[serde(default)]
    pub severity: FailureSeverity,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

impl UavFailure {
    pub fn new_for(uav_id: impl Into<String>) -> Self {
        Self {
            id: UNASSIGNED_ID,
            record_id: UNASSIGNED_ID,
            uav_id: uav_id.into(),
            date: String::new(),
            severity: FailureSeverity::Information,
            description: String::new(),
        }
    }
}

impl DisplayRow for UavFailure {
    fn display_id(&self) -> DbId {
        self.id
    }

    fn set_display_id(&mut self, id: DbId) {
        self.id = id;
    }

    fn sort_key(&self) -> SortKey<'_> {
        SortKey::NewestFirst(parse_sort_key(&self.date))
    }

    fn filter_fields(&self) -> Vec<&str> {
        vec![
            self.date.as_str(),
            self.severity.as_str(),
            self.description.as_str(),
        ]
    }
}

impl Identified for UavFailure {
    fn record_id(&self) -> DbId {
        self.record_id
    }
}

impl TableRecord for UavFailure {
    fn prepare_for_display(&mut self) {
        self.record_id = self.id;
    }

    fn to_wire(&self) -> Self {
        Self {
            date: to_iso_date(&self.date),
            ..self.clone()
        }
    }
}

/// One step in the handling history of a failure (child via `failure_id`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UavFailureStep {
    #[serde(default)]
    pub id: DbId,
    #[serde(default)]
    pub failure_id: DbId,
    #[serde(default)]
    pub record_id: DbId,
    pub uav_id: String,
    #[serde(default, deserialize_with = "deserialize_display_date")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub contact_person: String,
    #[serde(default)]
    pub importance: FailureSeverity,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

impl UavFailureStep {
    pub fn new_for(uav_id: impl Into<String>, failure_id: DbId) -> Self {
        Self {
            id: UNASSIGNED_ID,
            failure_id,
            record_id: UNASSIGNED_ID,
            uav_id: uav_id.into(),
            date: String::new(),
            contact_person: String::new(),
            importance: FailureSeverity::Information,
            description: String::new(),
        }
    }
}

impl DisplayRow for UavFailureStep {
    fn display_id(&self) -> DbId {
        self.id
    }

    fn set_display_id(&mut self, id: DbId) {
        self.id = id;
    }

    fn sort_key(&self) -> SortKey<'_> {
        SortKey::NewestFirst(parse_sort_key(&self.date))
    }

    fn filter_fields(&self) -> Vec<&str> {
        vec![
            self.date.as_str(),
            self.contact_person.as_str(),
            self.importance.as_str(),
            self.description.as_str(),
        ]
    }
}

impl Identified for UavFailureStep {
    fn record_id(&self) -> DbId {
        self.record_id
    }
}

impl TableRecord for UavFailureStep {
    fn prepare_for_display(&mut self) {
        self.record_id = self.id;
    }

    fn to_wire(&self) -> Self {
        Self {
            date: to_iso_date(&self.date),
            ..self.clone()
        }
    }
}
