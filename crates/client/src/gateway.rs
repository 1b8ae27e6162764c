//! The gateway seam between screens and the fleet backend.
//!
//! One method per backend endpoint. Bodies are the records of
//! [`uavfleet_core::models`] serialized as-is; callers convert dates to
//! their wire form before sending.

use async_trait::async_trait;
use chrono::NaiveDate;

use uavfleet_core::models::{
    Activity, LoginRequest, UavEngine, UavFailure, UavFailureStep, UavInfo, UavMaintenance, User,
    Vehicle,
};
use uavfleet_core::statuses::DocType;
use uavfleet_core::types::DbId;

use crate::error::GatewayError;
use crate::session::{Session, SessionContext};

/// A file picked for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;

#[async_trait]
pub trait FleetGateway: Send + Sync {
    /// Session the gateway authenticates with.
    fn session(&self) -> &SessionContext;

    // ---- auth ----

    /// `POST /login`; on success the session is opened.
    async fn login(&self, credentials: &LoginRequest) -> GatewayResult<Session>;

    /// Close the session. No backend call is involved.
    async fn logout(&self) {
        self.session().logout().await;
    }

    // ---- vehicles ----

    async fn get_vehicles(&self) -> GatewayResult<Vec<Vehicle>>;
    async fn add_vehicle(&self, vehicle: &Vehicle) -> GatewayResult<()>;
    async fn delete_vehicles(&self, vehicles: &[Vehicle]) -> GatewayResult<()>;
    async fn update_vehicle(&self, vehicle: &Vehicle) -> GatewayResult<()>;

    // ---- users ----

    async fn get_users(&self) -> GatewayResult<Vec<User>>;
    async fn get_user(&self, login: &str) -> GatewayResult<User>;
    async fn register_user(&self, user: &User) -> GatewayResult<()>;
    async fn delete_users(&self, users: &[User]) -> GatewayResult<()>;
    async fn update_user(&self, user: &User) -> GatewayResult<()>;

    // ---- vehicle card ----

    async fn get_uav_info(&self, uav_id: &str) -> GatewayResult<UavInfo>;
    async fn post_uav_info(&self, info: &UavInfo) -> GatewayResult<()>;
    async fn update_insurance_expiry(&self, uav_id: &str, expiry: NaiveDate) -> GatewayResult<()>;

    // ---- documents ----

    async fn download_pdf(&self, uav_id: &str, doc: DocType) -> GatewayResult<Vec<u8>>;
    async fn upload_pdf(&self, uav_id: &str, doc: DocType, file: FileUpload) -> GatewayResult<()>;
    async fn delete_pdf(&self, uav_id: &str, doc: DocType) -> GatewayResult<()>;

    // ---- images ----

    async fn upload_image(&self, uav_id: &str, file: FileUpload) -> GatewayResult<()>;
    async fn delete_image(&self, image_id: DbId) -> GatewayResult<()>;
    async fn fetch_image_ids(&self, uav_id: &str) -> GatewayResult<Vec<DbId>>;
    async fn download_image(&self, image_id: DbId) -> GatewayResult<Vec<u8>>;

    // ---- maintenance (TO) ----

    async fn get_maintenance(&self, uav_id: &str) -> GatewayResult<Vec<UavMaintenance>>;
    async fn save_maintenance(&self, record: &UavMaintenance) -> GatewayResult<()>;
    async fn delete_maintenance(&self, record: &UavMaintenance) -> GatewayResult<()>;

    // ---- engine hours ----

    async fn get_engine_log(&self, uav_id: &str) -> GatewayResult<Vec<UavEngine>>;
    async fn save_engine_record(&self, record: &UavEngine) -> GatewayResult<()>;
    async fn delete_engine_record(&self, record: &UavEngine) -> GatewayResult<()>;

    // ---- failures ----

    async fn get_failures(&self, uav_id: &str) -> GatewayResult<Vec<UavFailure>>;
    async fn save_failure(&self, failure: &UavFailure) -> GatewayResult<()>;
    async fn delete_failure(&self, uav_id: &str, record_id: DbId) -> GatewayResult<()>;

    async fn get_failure_steps(
        &self,
        uav_id: &str,
        failure_id: DbId,
    ) -> GatewayResult<Vec<UavFailureStep>>;
    async fn save_failure_step(&self, step: &UavFailureStep) -> GatewayResult<()>;
    async fn delete_failure_step(&self, failure_id: DbId, step_id: DbId) -> GatewayResult<()>;

    // ---- audit log ----

    async fn get_activities(&self) -> GatewayResult<Vec<Activity>>;
}
