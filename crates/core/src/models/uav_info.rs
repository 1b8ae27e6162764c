//! Vehicle card record: free-text info list plus document and insurance
//! timestamps.

use serde::{Deserialize, Serialize};

use crate::dates::deserialize_opt_timestamp;
use crate::models::null_as_default;
use crate::statuses::DocType;
use crate::types::{DbId, Timestamp};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UavInfo {
    #[serde(default)]
    pub id: DbId,
    pub uav_id: String,
    /// Ordered, user-editable lines.
    #[serde(default, deserialize_with = "null_as_default")]
    pub info_list: Vec<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_opt_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub slg_add_ts: Option<Timestamp>,
    #[serde(
        default,
        deserialize_with = "deserialize_opt_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub eval_act_add_ts: Option<Timestamp>,
    #[serde(
        default,
        deserialize_with = "deserialize_opt_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub insurance_add_ts: Option<Timestamp>,
    #[serde(
        default,
        deserialize_with = "deserialize_opt_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub insurance_expiry_ts: Option<Timestamp>,
}

impl UavInfo {
    /// Placeholder card for a vehicle the backend has no info for yet.
    pub fn empty(uav_id: impl Into<String>) -> Self {
        Self {
            id: 0,
            uav_id: uav_id.into(),
            info_list: Vec::new(),
            slg_add_ts: None,
            eval_act_add_ts: None,
            insurance_add_ts: None,
            insurance_expiry_ts: None,
        }
    }

    /// When the document in `slot` was uploaded, if it exists.
    pub fn document_added_at(&self, slot: DocType) -> Option<Timestamp> {
        match slot {
            DocType::Slg => self.slg_add_ts,
            DocType::EvalAct => self.eval_act_add_ts,
            DocType::Insurance => self.insurance_add_ts,
        }
    }

    pub fn set_document_added_at(&mut self, slot: DocType, ts: Option<Timestamp>) {
        let field = match slot {
            DocType::Slg => &mut self.slg_add_ts,
            DocType::EvalAct => &mut self.eval_act_add_ts,
            DocType::Insurance => &mut self.insurance_add_ts,
        };
        *field = ts;
    }
}
