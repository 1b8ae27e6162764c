//! Login exchange and small request bodies.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub login: String,
    pub password: String,
}

/// Response of `POST /login`. The backend may leave any field `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Body of `PUT /updateInsuranceExpiryDate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceExpiryUpdate {
    pub uav_id: String,
    /// `yyyy-MM-dd`.
    pub expiry_date: String,
}
