//! Engine operating-interval record.

use serde::{Deserialize, Serialize};

use crate::dates::{parse_sort_key, shorten_year};
use crate::edit::Identified;
use crate::listing::{DisplayRow, SortKey};
use crate::models::{null_as_default, TableRecord};
use crate::types::{DbId, UNASSIGNED_ID};

/// One interval during which a vehicle's engine ran.
///
/// Stamps are `dd.MM.yy HH:mm` once prepared for display;
/// `engine_operate_duration` is `"H ч, M мин"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UavEngine {
    #[serde(default)]
    pub id: DbId,
    #[serde(default)]
    pub record_id: DbId,
    pub uav_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub engine_active_from: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub engine_active_till: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub engine_operate_duration: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reporter: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reported_timestamp: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub note: String,
}

impl UavEngine {
    /// Blank row for the add button; ids are assigned by the backend.
    pub fn new_for(uav_id: impl Into<String>) -> Self {
        Self {
            id: UNASSIGNED_ID,
            record_id: UNASSIGNED_ID,
            uav_id: uav_id.into(),
            engine_active_from: String::new(),
            engine_active_till: String::new(),
            engine_operate_duration: "0".to_string(),
            reporter: String::new(),
            reported_timestamp: String::new(),
            note: String::new(),
        }
    }
}

impl DisplayRow for UavEngine {
    fn display_id(&self) -> DbId {
        self.id
    }

    fn set_display_id(&mut self, id: DbId) {
        self.id = id;
    }

    fn sort_key(&self) -> SortKey<'_> {
        SortKey::NewestFirst(parse_sort_key(&self.engine_active_from))
    }

    fn filter_fields(&self) -> Vec<&str> {
        vec![
            self.engine_active_from.as_str(),
            self.engine_active_till.as_str(),
            self.engine_operate_duration.as_str(),
            self.reporter.as_str(),
            self.reported_timestamp.as_str(),
            self.note.as_str(),
        ]
    }
}

impl Identified for UavEngine {
    fn record_id(&self) -> DbId {
        self.record_id
    }
}

impl TableRecord for UavEngine {
    fn prepare_for_display(&mut self) {
        self.engine_active_from = shorten_year(&self.engine_active_from);
        self.engine_active_till = shorten_year(&self.engine_active_till);
        self.reported_timestamp = shorten_year(&self.reported_timestamp);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepare_shortens_all_stamps() {
        let mut record: UavEngine = serde_json::from_str(
            r#"{"id":4,"recordId":4,"uavId":"A","engineActiveFrom":"11.10.2015 10:00",
                "engineActiveTill":"11.10.2015 12:30","engineOperateDuration":"2 ч, 30 мин",
                "reporter":"pilot","reportedTimestamp":"12.10.2015 08:00","note":null}"#,
        )
        .unwrap();
        record.prepare_for_display();
        assert_eq!(record.engine_active_from, "11.10.15 10:00");
        assert_eq!(record.engine_active_till, "11.10.15 12:30");
        assert_eq!(record.reported_timestamp, "12.10.15 08:00");
        assert_eq!(record.note, "");
        assert_eq!(record.record_id(), 4);
    }

    #[test]
    fn new_rows_are_unassigned() {
        let row = UavEngine::new_for("A");
        assert_eq!(row.id, UNASSIGNED_ID);
        assert_eq!(row.record_id, UNASSIGNED_ID);
        assert_eq!(row.engine_operate_duration, "0");
        assert_eq!(row.sort_key(), SortKey::NewestFirst(None));
    }
}
