//! Read-only audit log entry.

use serde::{Deserialize, Serialize};

use crate::dates::{deserialize_display_date, parse_sort_key};
use crate::listing::{DisplayRow, SortKey};
use crate::models::null_as_default;
use crate::types::DbId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(default)]
    pub id: DbId,
    #[serde(default, deserialize_with = "deserialize_display_date")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ip_address: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
}

impl DisplayRow for Activity {
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
            self.username.as_str(),
            self.ip_address.as_str(),
            self.content.as_str(),
        ]
    }
}
