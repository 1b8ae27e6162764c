//! REST client for the fleet backend.
//!
//! Wraps every backend endpoint with [`reqwest`]. Authenticated requests
//! carry the bearer token of the shared [`SessionContext`]; a 401 with
//! `"Unauthorized path"` closes that session.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::multipart::{Form, Part};
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use uavfleet_core::dates::ISO_DATE_FORMAT;
use uavfleet_core::models::{
    Activity, InsuranceExpiryUpdate, LoginRequest, LoginResponse, UavEngine, UavFailure,
    UavFailureStep, UavInfo, UavMaintenance, User, Vehicle,
};
use uavfleet_core::statuses::DocType;
use uavfleet_core::types::DbId;

use crate::config::ClientConfig;
use crate::error::GatewayError;
use crate::gateway::{FileUpload, FleetGateway, GatewayResult};
use crate::session::{Session, SessionContext};

/// Multipart field carrying an uploaded PDF.
const PDF_FIELD: &str = "pdf";

/// Multipart field carrying an uploaded image.
const IMAGE_FIELD: &str = "image";

/// HTTP client for a single fleet backend.
#[derive(Debug, Clone)]
pub struct FleetApi {
    client: reqwest::Client,
    base_url: String,
    session: SessionContext,
}

impl FleetApi {
    pub fn new(config: &ClientConfig, session: SessionContext) -> Self {
        Self::with_client(reqwest::Client::new(), config, session)
    }

    /// Reuse an existing [`reqwest::Client`] (connection pooling).
    pub fn with_client(
        client: reqwest::Client,
        config: &ClientConfig,
        session: SessionContext,
    ) -> Self {
        Self {
            client,
            base_url: config.backend_url.clone(),
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of an endpoint path such as `getUavInfo/A-01`.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    // ---- private helpers ----

    async fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.bearer().await {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send, map non-2xx statuses onto [`GatewayError`] and log the
    /// outcome. An expired token closes the session.
    async fn execute(
        &self,
        operation: &str,
        request: RequestBuilder,
    ) -> GatewayResult<reqwest::Response> {
        let result = match self.authorized(request).await.send().await {
            Ok(response) => Self::ensure_success(response).await,
            Err(err) => Err(GatewayError::Request(err)),
        };
        match &result {
            Ok(_) => tracing::debug!(operation, "Backend call succeeded"),
            Err(err) => {
                tracing::warn!("{operation} failed: {err}");
                if err.is_session_expired() {
                    self.session.expire().await;
                }
            }
        }
        result
    }

    async fn ensure_success(response: reqwest::Response) -> GatewayResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        Err(GatewayError::from_status(status.as_u16(), &body))
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        operation: &str,
        request: RequestBuilder,
    ) -> GatewayResult<T> {
        let response = self.execute(operation, request).await?;
        response.json::<T>().await.map_err(|err| {
            tracing::warn!("{operation} failed: {err}");
            GatewayError::Request(err)
        })
    }

    async fn fetch_bytes(&self, operation: &str, request: RequestBuilder) -> GatewayResult<Vec<u8>> {
        let response = self.execute(operation, request).await?;
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }

    async fn send(&self, operation: &str, request: RequestBuilder) -> GatewayResult<()> {
        self.execute(operation, request).await.map(|_| ())
    }

    fn file_form(field: &'static str, file: FileUpload, mime: &str) -> GatewayResult<Form> {
        let part = Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(mime)?;
        Ok(Form::new().part(field, part))
    }
}

#[async_trait]
impl FleetGateway for FleetApi {
    fn session(&self) -> &SessionContext {
        &self.session
    }

    async fn login(&self, credentials: &LoginRequest) -> GatewayResult<Session> {
        let request = self.client.post(self.url("login")).json(credentials);
        let response: LoginResponse = self.fetch_json("login", request).await?;
        let session = Session::from_response(response);
        self.session.login(session.clone()).await;
        Ok(session)
    }

    // ---- vehicles ----

    async fn get_vehicles(&self) -> GatewayResult<Vec<Vehicle>> {
        let request = self.client.get(self.url("getVehicles"));
        self.fetch_json("getVehicles", request).await
    }

    async fn add_vehicle(&self, vehicle: &Vehicle) -> GatewayResult<()> {
        let request = self.client.post(self.url("addUav")).json(vehicle);
        self.send("addVehicle", request).await
    }

    async fn delete_vehicles(&self, vehicles: &[Vehicle]) -> GatewayResult<()> {
        let request = self.client.delete(self.url("deleteUavs")).json(vehicles);
        self.send("deleteVehicles", request).await
    }

    async fn update_vehicle(&self, vehicle: &Vehicle) -> GatewayResult<()> {
        let request = self.client.put(self.url("updateUav")).json(vehicle);
        self.send("updateVehicle", request).await
    }

    // ---- users ----

    async fn get_users(&self) -> GatewayResult<Vec<User>> {
        let request = self.client.get(self.url("getUsers"));
        self.fetch_json("getUsers", request).await
    }

    async fn get_user(&self, login: &str) -> GatewayResult<User> {
        let request = self.client.get(self.url(&format!("getUser/{login}")));
        self.fetch_json(&format!("getUser login={login}"), request).await
    }

    async fn register_user(&self, user: &User) -> GatewayResult<()> {
        let request = self.client.post(self.url("register")).json(user);
        self.send("register", request).await
    }

    async fn delete_users(&self, users: &[User]) -> GatewayResult<()> {
        let request = self.client.delete(self.url("deleteUsers")).json(users);
        self.send("deleteUsers", request).await
    }

    async fn update_user(&self, user: &User) -> GatewayResult<()> {
        let request = self.client.put(self.url("updateUser")).json(user);
        self.send("updateUser", request).await
    }

    // ---- vehicle card ----

    async fn get_uav_info(&self, uav_id: &str) -> GatewayResult<UavInfo> {
        let request = self.client.get(self.url(&format!("getUavInfo/{uav_id}")));
        self.fetch_json(&format!("getUavInfo id={uav_id}"), request).await
    }

    async fn post_uav_info(&self, info: &UavInfo) -> GatewayResult<()> {
        let request = self.client.post(self.url("postUavInfo")).json(info);
        self.send(&format!("postUavInfo id={}", info.uav_id), request)
            .await
    }

    async fn update_insurance_expiry(&self, uav_id: &str, expiry: NaiveDate) -> GatewayResult<()> {
        let body = InsuranceExpiryUpdate {
            uav_id: uav_id.to_string(),
            expiry_date: expiry.format(ISO_DATE_FORMAT).to_string(),
        };
        let request = self
            .client
            .put(self.url("updateInsuranceExpiryDate"))
            .json(&body);
        self.send("putInsuranceExpiryDate", request).await
    }

    // ---- documents ----

    async fn download_pdf(&self, uav_id: &str, doc: DocType) -> GatewayResult<Vec<u8>> {
        let path = format!("downloadPdf/{uav_id}/{}", doc.as_str());
        let request = self.client.get(self.url(&path));
        self.fetch_bytes(&format!("downloadPdf id={uav_id}"), request)
            .await
    }

    async fn upload_pdf(&self, uav_id: &str, doc: DocType, file: FileUpload) -> GatewayResult<()> {
        let form = Self::file_form(PDF_FIELD, file, "application/pdf")?;
        let path = format!("uploadPdf/{uav_id}/{}", doc.as_str());
        let request = self.client.post(self.url(&path)).multipart(form);
        self.send(&format!("uploadPdf id={uav_id}"), request).await
    }

    async fn delete_pdf(&self, uav_id: &str, doc: DocType) -> GatewayResult<()> {
        let path = format!("deletePdf/{uav_id}/{}", doc.as_str());
        let request = self.client.delete(self.url(&path));
        self.send(
            &format!("deletePdf uavId='{uav_id}', docType='{}'", doc.as_str()),
            request,
        )
        .await
    }

    // ---- images ----

    async fn upload_image(&self, uav_id: &str, file: FileUpload) -> GatewayResult<()> {
        let form = Self::file_form(IMAGE_FIELD, file, "application/octet-stream")?;
        let request = self
            .client
            .post(self.url(&format!("uploadImage/{uav_id}")))
            .multipart(form);
        self.send(&format!("uploadImage id={uav_id}"), request).await
    }

    async fn delete_image(&self, image_id: DbId) -> GatewayResult<()> {
        let request = self.client.delete(self.url(&format!("deleteImage/{image_id}")));
        self.send(&format!("deleteImage id={image_id}"), request).await
    }

    async fn fetch_image_ids(&self, uav_id: &str) -> GatewayResult<Vec<DbId>> {
        let request = self.client.get(self.url(&format!("fetchImageIds/{uav_id}")));
        self.fetch_json(&format!("fetchImageIds id={uav_id}"), request)
            .await
    }

    async fn download_image(&self, image_id: DbId) -> GatewayResult<Vec<u8>> {
        let request = self
            .client
            .get(self.url(&format!("downloadOneImage/{image_id}")));
        self.fetch_bytes(&format!("downloadOneImage id={image_id}"), request)
            .await
    }

    // ---- maintenance (TO) ----

    async fn get_maintenance(&self, uav_id: &str) -> GatewayResult<Vec<UavMaintenance>> {
        let request = self.client.get(self.url(&format!("getUavTOs/{uav_id}")));
        self.fetch_json(&format!("getUavTOs id={uav_id}"), request).await
    }

    async fn save_maintenance(&self, record: &UavMaintenance) -> GatewayResult<()> {
        let request = self.client.post(self.url("saveUavTO")).json(record);
        self.send("saveUavTO", request).await
    }

    async fn delete_maintenance(&self, record: &UavMaintenance) -> GatewayResult<()> {
        let request = self.client.delete(self.url("deleteUavTO")).json(record);
        self.send("deleteUavTO", request).await
    }

    // ---- engine hours ----

    async fn get_engine_log(&self, uav_id: &str) -> GatewayResult<Vec<UavEngine>> {
        let request = self.client.get(self.url(&format!("getUavTOInfo/{uav_id}")));
        self.fetch_json(&format!("getUavTOInfo id={uav_id}"), request)
            .await
    }

    async fn save_engine_record(&self, record: &UavEngine) -> GatewayResult<()> {
        let request = self.client.post(self.url("saveUavTOInfo")).json(record);
        self.send("saveUavTOInfo", request).await
    }

    async fn delete_engine_record(&self, record: &UavEngine) -> GatewayResult<()> {
        let request = self.client.delete(self.url("deleteUavTOInfo")).json(record);
        self.send("deleteUavTOInfo", request).await
    }

    // ---- failures ----

    async fn get_failures(&self, uav_id: &str) -> GatewayResult<Vec<UavFailure>> {
        let request = self
            .client
            .get(self.url(&format!("fetchUavFailures/{uav_id}")));
        self.fetch_json(&format!("getUavFailures id={uav_id}"), request)
            .await
    }

    async fn save_failure(&self, failure: &UavFailure) -> GatewayResult<()> {
        let request = self.client.post(self.url("saveUavFailure")).json(failure);
        self.send("saveUavFailure", request).await
    }

    async fn delete_failure(&self, uav_id: &str, record_id: DbId) -> GatewayResult<()> {
        let request = self
            .client
            .delete(self.url(&format!("deleteUavFailure/{uav_id}/{record_id}")));
        self.send("deleteUavFailure", request).await
    }

    async fn get_failure_steps(
        &self,
        uav_id: &str,
        failure_id: DbId,
    ) -> GatewayResult<Vec<UavFailureStep>> {
        let request = self
            .client
            .get(self.url(&format!("fetchFailureSteps/{uav_id}/{failure_id}")));
        self.fetch_json(
            &format!("fetchUavFailureSteps uavId={uav_id}, failureId={failure_id}"),
            request,
        )
        .await
    }

    async fn save_failure_step(&self, step: &UavFailureStep) -> GatewayResult<()> {
        let request = self.client.post(self.url("saveFailureStep")).json(step);
        self.send("saveUavFailureStep", request).await
    }

    async fn delete_failure_step(&self, failure_id: DbId, step_id: DbId) -> GatewayResult<()> {
        let request = self
            .client
            .delete(self.url(&format!("deleteFailureStep/{failure_id}/{step_id}")));
        self.send("deleteUavFailureStep", request).await
    }

    // ---- audit log ----

    async fn get_activities(&self) -> GatewayResult<Vec<Activity>> {
        let request = self.client.get(self.url("getEvents"));
        self.fetch_json("getEvents", request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_base_and_path() {
        let api = FleetApi::new(&ClientConfig::new("http://fleet:8080/"), SessionContext::new());
        assert_eq!(api.base_url(), "http://fleet:8080");
        assert_eq!(api.url("getVehicles"), "http://fleet:8080/getVehicles");
        assert_eq!(api.url("/getUavInfo/A-01"), "http://fleet:8080/getUavInfo/A-01");
    }
}
