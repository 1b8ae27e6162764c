//! Wire records exchanged with the fleet backend.
//!
//! All records are flat and serialize with the backend's camelCase field
//! names. `id` is the client-side display sequence number; `recordId`
//! (where present) is the server identity.

pub mod activity;
pub mod auth;
pub mod engine;
pub mod failure;
pub mod maintenance;
pub mod uav_info;
pub mod user;
pub mod vehicle;

use serde::{Deserialize, Deserializer};

use crate::edit::Identified;
use crate::listing::DisplayRow;

pub use activity::Activity;
pub use auth::{InsuranceExpiryUpdate, LoginRequest, LoginResponse};
pub use engine::UavEngine;
pub use failure::{UavFailure, UavFailureStep};
pub use maintenance::UavMaintenance;
pub use uav_info::UavInfo;
pub use user::User;
pub use vehicle::Vehicle;

/// An editable per-vehicle table row.
pub trait TableRecord: DisplayRow + Identified + Clone {
    /// Normalise a freshly fetched record for display (date formats,
    /// server identity).
    fn prepare_for_display(&mut self) {}

    /// Copy of the record in the shape the backend expects on save.
    fn to_wire(&self) -> Self {
        self.clone()
    }
}

/// Treat `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
