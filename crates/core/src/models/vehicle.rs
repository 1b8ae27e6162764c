//! Vehicle (fleet table) record.

use serde::{Deserialize, Serialize};

use crate::listing::{DisplayRow, SortKey};
use crate::models::null_as_default;
use crate::types::DbId;

/// Vehicle types offered by the add-vehicle form.
pub const KNOWN_VEHICLE_TYPES: &[&str] = &["VT-30", "VT-45", "VT-440", "VT-550"];

/// Label of the type-filter option that disables the filter.
pub const ALL_TYPES_LABEL: &str = "Все типы";

/// A row of the fleet table. `vehicle_id` is the business key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    #[serde(default)]
    pub id: DbId,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub vehicle_type: String,
    pub vehicle_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

impl DisplayRow for Vehicle {
    fn display_id(&self) -> DbId {
        self.id
    }

    fn set_display_id(&mut self, id: DbId) {
        self.id = id;
    }

    fn sort_key(&self) -> SortKey<'_> {
        SortKey::Ascending(&self.vehicle_id)
    }

    fn filter_fields(&self) -> Vec<&str> {
        vec![
            self.vehicle_type.as_str(),
            self.vehicle_id.as_str(),
            self.description.as_str(),
        ]
    }
}

/// An entry of the type filter drop-down. `value == None` means "any type".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeOption {
    pub label: String,
    pub value: Option<String>,
}

/// Distinct vehicle types in first-seen order, headed by "all types".
pub fn type_options(vehicles: &[Vehicle]) -> Vec<TypeOption> {
    let mut options = vec![TypeOption {
        label: ALL_TYPES_LABEL.to_string(),
        value: None,
    }];
    for vehicle in vehicles {
        if !options
            .iter()
            .any(|o| o.value.as_deref() == Some(vehicle.vehicle_type.as_str()))
        {
            options.push(TypeOption {
                label: vehicle.vehicle_type.clone(),
                value: Some(vehicle.vehicle_type.clone()),
            });
        }
    }
    options
}
