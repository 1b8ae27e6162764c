//! In-memory [`FleetGateway`] shared by the screen tests.
//!
//! Records are held in their display form. Every call is logged by name so
//! tests can assert which endpoints a screen hit. Setting
//! [`FleetState::expired`] makes every call behave like a backend that
//! rejected the token.

#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::NaiveDate;

use uavfleet_client::{
    FileUpload, FleetGateway, GatewayError, GatewayResult, Session, SessionContext,
};
use uavfleet_core::models::{
    Activity, LoginRequest, UavEngine, UavFailure, UavFailureStep, UavInfo, UavMaintenance, User,
    Vehicle,
};
use uavfleet_core::statuses::DocType;
use uavfleet_core::types::DbId;

pub const PASSWORD: &str = "secret";

#[derive(Debug, Default)]
pub struct FleetState {
    pub vehicles: Vec<Vehicle>,
    pub users: Vec<User>,
    pub info: HashMap<String, UavInfo>,
    pub insurance: HashMap<String, NaiveDate>,
    pub pdfs: HashMap<(String, &'static str), Vec<u8>>,
    pub images: BTreeMap<DbId, Vec<u8>>,
    /// Image ids listed by `fetch_image_ids` but failing to download.
    pub broken_images: HashSet<DbId>,
    pub maintenance: Vec<UavMaintenance>,
    pub engine: Vec<UavEngine>,
    pub failures: Vec<UavFailure>,
    pub steps: Vec<UavFailureStep>,
    pub activities: Vec<Activity>,

    pub saved_maintenance: Vec<UavMaintenance>,
    pub saved_engine: Vec<UavEngine>,
    pub saved_failures: Vec<UavFailure>,
    pub saved_steps: Vec<UavFailureStep>,
    pub updated_users: Vec<User>,
    pub registered_users: Vec<User>,
    pub added_vehicles: Vec<Vehicle>,
    pub uploads: Vec<FileUpload>,

    pub expired: bool,
    pub calls: Vec<String>,
    pub next_id: DbId,
}

impl FleetState {
    fn next_id(&mut self) -> DbId {
        self.next_id += 1;
        1000 + self.next_id
    }

    pub fn called(&self, operation: &str) -> usize {
        self.calls.iter().filter(|c| c.as_str() == operation).count()
    }
}

pub struct FakeGateway {
    session: SessionContext,
    state: Mutex<FleetState>,
}

impl FakeGateway {
    pub fn new(state: FleetState) -> Arc<Self> {
        Arc::new(Self {
            session: SessionContext::new(),
            state: Mutex::new(state),
        })
    }

    /// A gateway with an open session for `login`.
    pub async fn signed_in(state: FleetState, login: &str) -> Arc<Self> {
        let gateway = Self::new(state);
        gateway
            .session
            .login(Session {
                token: "tok".into(),
                login: login.into(),
                role: "ADMIN".into(),
            })
            .await;
        gateway
    }

    pub fn state(&self) -> MutexGuard<'_, FleetState> {
        self.state.lock().expect("fake state lock")
    }

    /// Log the call and fail it when the session is marked expired.
    async fn enter(&self, operation: &str) -> GatewayResult<()> {
        let expired = {
            let mut state = self.state();
            state.calls.push(operation.to_string());
            state.expired
        };
        if expired {
            self.session.expire().await;
            return Err(GatewayError::SessionExpired);
        }
        Ok(())
    }
}

fn not_found(what: &str) -> GatewayError {
    GatewayError::Api {
        status: 404,
        message: format!("{what} not found"),
    }
}

#[async_trait]
impl FleetGateway for FakeGateway {
    fn session(&self) -> &SessionContext {
        &self.session
    }

    async fn login(&self, credentials: &LoginRequest) -> GatewayResult<Session> {
        self.state().calls.push("login".into());
        if credentials.password != PASSWORD {
            return Err(GatewayError::Api {
                status: 401,
                message: "Bad credentials".into(),
            });
        }
        let session = Session {
            token: "tok".into(),
            login: credentials.login.clone(),
            role: "USER".into(),
        };
        self.session.login(session.clone()).await;
        Ok(session)
    }

    // ---- vehicles ----

    async fn get_vehicles(&self) -> GatewayResult<Vec<Vehicle>> {
        self.enter("get_vehicles").await?;
        Ok(self.state().vehicles.clone())
    }

    async fn add_vehicle(&self, vehicle: &Vehicle) -> GatewayResult<()> {
        self.enter("add_vehicle").await?;
        let mut state = self.state();
        state.added_vehicles.push(vehicle.clone());
        state.vehicles.push(vehicle.clone());
        Ok(())
    }

    async fn delete_vehicles(&self, vehicles: &[Vehicle]) -> GatewayResult<()> {
        self.enter("delete_vehicles").await?;
        let ids: Vec<&str> = vehicles.iter().map(|v| v.vehicle_id.as_str()).collect();
        self.state()
            .vehicles
            .retain(|v| !ids.contains(&v.vehicle_id.as_str()));
        Ok(())
    }

    async fn update_vehicle(&self, vehicle: &Vehicle) -> GatewayResult<()> {
        self.enter("update_vehicle").await?;
        let mut state = self.state();
        let stored = state
            .vehicles
            .iter_mut()
            .find(|v| v.vehicle_id == vehicle.vehicle_id)
            .ok_or_else(|| not_found("vehicle"))?;
        stored.description = vehicle.description.clone();
        Ok(())
    }

    // ---- users ----

    async fn get_users(&self) -> GatewayResult<Vec<User>> {
        self.enter("get_users").await?;
        Ok(self.state().users.clone())
    }

    async fn get_user(&self, login: &str) -> GatewayResult<User> {
        self.enter("get_user").await?;
        self.state()
            .users
            .iter()
            .find(|u| u.login == login)
            .cloned()
            .ok_or_else(|| not_found("user"))
    }

    async fn register_user(&self, user: &User) -> GatewayResult<()> {
        self.enter("register_user").await?;
        self.state().registered_users.push(user.clone());
        Ok(())
    }

    async fn delete_users(&self, users: &[User]) -> GatewayResult<()> {
        self.enter("delete_users").await?;
        let logins: Vec<&str> = users.iter().map(|u| u.login.as_str()).collect();
        self.state()
            .users
            .retain(|u| !logins.contains(&u.login.as_str()));
        Ok(())
    }

    async fn update_user(&self, user: &User) -> GatewayResult<()> {
        self.enter("update_user").await?;
        self.state().updated_users.push(user.clone());
        Ok(())
    }

    // ---- vehicle card ----

    async fn get_uav_info(&self, uav_id: &str) -> GatewayResult<UavInfo> {
        self.enter("get_uav_info").await?;
        self.state()
            .info
            .get(uav_id)
            .cloned()
            .ok_or_else(|| not_found("uav info"))
    }

    async fn post_uav_info(&self, info: &UavInfo) -> GatewayResult<()> {
        self.enter("post_uav_info").await?;
        self.state().info.insert(info.uav_id.clone(), info.clone());
        Ok(())
    }

    async fn update_insurance_expiry(&self, uav_id: &str, expiry: NaiveDate) -> GatewayResult<()> {
        self.enter("update_insurance_expiry").await?;
        self.state().insurance.insert(uav_id.to_string(), expiry);
        Ok(())
    }

    // ---- documents ----

    async fn download_pdf(&self, uav_id: &str, doc: DocType) -> GatewayResult<Vec<u8>> {
        self.enter("download_pdf").await?;
        Ok(self
            .state()
            .pdfs
            .get(&(uav_id.to_string(), doc.as_str()))
            .cloned()
            .unwrap_or_default())
    }

    async fn upload_pdf(&self, uav_id: &str, doc: DocType, file: FileUpload) -> GatewayResult<()> {
        self.enter("upload_pdf").await?;
        let mut state = self.state();
        state
            .pdfs
            .insert((uav_id.to_string(), doc.as_str()), file.bytes.clone());
        state.uploads.push(file);
        Ok(())
    }

    async fn delete_pdf(&self, uav_id: &str, doc: DocType) -> GatewayResult<()> {
        self.enter("delete_pdf").await?;
        self.state()
            .pdfs
            .remove(&(uav_id.to_string(), doc.as_str()));
        Ok(())
    }

    // ---- images ----

    async fn upload_image(&self, _uav_id: &str, file: FileUpload) -> GatewayResult<()> {
        self.enter("upload_image").await?;
        let mut state = self.state();
        let id = state.next_id();
        state.images.insert(id, file.bytes.clone());
        state.uploads.push(file);
        Ok(())
    }

    async fn delete_image(&self, image_id: DbId) -> GatewayResult<()> {
        self.enter("delete_image").await?;
        self.state().images.remove(&image_id);
        Ok(())
    }

    async fn fetch_image_ids(&self, _uav_id: &str) -> GatewayResult<Vec<DbId>> {
        self.enter("fetch_image_ids").await?;
        let state = self.state();
        let mut ids: Vec<DbId> = state.images.keys().copied().collect();
        ids.extend(state.broken_images.iter().copied());
        Ok(ids)
    }

    async fn download_image(&self, image_id: DbId) -> GatewayResult<Vec<u8>> {
        self.enter("download_image").await?;
        self.state()
            .images
            .get(&image_id)
            .cloned()
            .ok_or_else(|| not_found("image"))
    }

    // ---- maintenance ----

    async fn get_maintenance(&self, uav_id: &str) -> GatewayResult<Vec<UavMaintenance>> {
        self.enter("get_maintenance").await?;
        Ok(self
            .state()
            .maintenance
            .iter()
            .filter(|m| m.uav_id == uav_id)
            .cloned()
            .collect())
    }

    async fn save_maintenance(&self, record: &UavMaintenance) -> GatewayResult<()> {
        self.enter("save_maintenance").await?;
        let mut state = self.state();
        state.saved_maintenance.push(record.clone());
        let mut stored = record.clone();
        if stored.record_id < 0 {
            stored.id = state.next_id();
            state.maintenance.push(stored);
        }
        Ok(())
    }

    async fn delete_maintenance(&self, record: &UavMaintenance) -> GatewayResult<()> {
        self.enter("delete_maintenance").await?;
        self.state().maintenance.retain(|m| m.id != record.record_id);
        Ok(())
    }

    // ---- engine ----

    async fn get_engine_log(&self, uav_id: &str) -> GatewayResult<Vec<UavEngine>> {
        self.enter("get_engine_log").await?;
        Ok(self
            .state()
            .engine
            .iter()
            .filter(|e| e.uav_id == uav_id)
            .cloned()
            .collect())
    }

    async fn save_engine_record(&self, record: &UavEngine) -> GatewayResult<()> {
        self.enter("save_engine_record").await?;
        let mut state = self.state();
        state.saved_engine.push(record.clone());
        let mut stored = record.clone();
        if stored.record_id < 0 {
            let id = state.next_id();
            stored.id = id;
            stored.record_id = id;
            state.engine.push(stored);
        }
        Ok(())
    }

    async fn delete_engine_record(&self, record: &UavEngine) -> GatewayResult<()> {
        self.enter("delete_engine_record").await?;
        self.state()
            .engine
            .retain(|e| e.record_id != record.record_id);
        Ok(())
    }

    // ---- failures ----

    async fn get_failures(&self, uav_id: &str) -> GatewayResult<Vec<UavFailure>> {
        self.enter("get_failures").await?;
        Ok(self
            .state()
            .failures
            .iter()
            .filter(|f| f.uav_id == uav_id)
            .cloned()
            .collect())
    }

    async fn save_failure(&self, failure: &UavFailure) -> GatewayResult<()> {
        self.enter("save_failure").await?;
        self.state().saved_failures.push(failure.clone());
        Ok(())
    }

    async fn delete_failure(&self, uav_id: &str, record_id: DbId) -> GatewayResult<()> {
        self.enter("delete_failure").await?;
        self.state()
            .failures
            .retain(|f| !(f.uav_id == uav_id && f.id == record_id));
        Ok(())
    }

    async fn get_failure_steps(
        &self,
        uav_id: &str,
        failure_id: DbId,
    ) -> GatewayResult<Vec<UavFailureStep>> {
        self.enter("get_failure_steps").await?;
        Ok(self
            .state()
            .steps
            .iter()
            .filter(|s| s.uav_id == uav_id && s.failure_id == failure_id)
            .cloned()
            .collect())
    }

    async fn save_failure_step(&self, step: &UavFailureStep) -> GatewayResult<()> {
        self.enter("save_failure_step").await?;
        self.state().saved_steps.push(step.clone());
        Ok(())
    }

    async fn delete_failure_step(&self, failure_id: DbId, step_id: DbId) -> GatewayResult<()> {
        self.enter("delete_failure_step").await?;
        self.state()
            .steps
            .retain(|s| !(s.failure_id == failure_id && s.id == step_id));
        Ok(())
    }

    // ---- audit log ----

    async fn get_activities(&self) -> GatewayResult<Vec<Activity>> {
        self.enter("get_activities").await?;
        Ok(self.state().activities.clone())
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn vehicle(vehicle_type: &str, vehicle_id: &str) -> Vehicle {
    Vehicle {
        id: 0,
        vehicle_type: vehicle_type.into(),
        vehicle_id: vehicle_id.into(),
        description: String::new(),
    }
}

pub fn user(login: &str, role: &str) -> User {
    User {
        id: 0,
        login: login.into(),
        surname: "Иван".into(),
        lastname: "Петров".into(),
        password: String::new(),
        role: role.into(),
        enabled: true,
        token: String::new(),
    }
}

/// A maintenance record as the backend returns it: `id` is the server id.
pub fn inspection(id: DbId, uav_id: &str, date: &str) -> UavMaintenance {
    UavMaintenance {
        id,
        record_id: 0,
        inspection_date: date.into(),
        ..UavMaintenance::new_for(uav_id)
    }
}

pub fn engine_run(id: DbId, uav_id: &str, from: &str, till: &str, duration: &str) -> UavEngine {
    UavEngine {
        id,
        record_id: id,
        engine_active_from: from.into(),
        engine_active_till: till.into(),
        engine_operate_duration: duration.into(),
        ..UavEngine::new_for(uav_id)
    }
}

pub fn failure(id: DbId, uav_id: &str, date: &str) -> UavFailure {
    UavFailure {
        id,
        record_id: 0,
        date: date.into(),
        ..UavFailure::new_for(uav_id)
    }
}

pub fn step(id: DbId, uav_id: &str, failure_id: DbId, date: &str) -> UavFailureStep {
    UavFailureStep {
        id,
        record_id: 0,
        date: date.into(),
        ..UavFailureStep::new_for(uav_id, failure_id)
    }
}
