//! Fleet table: type filter, text filter, paging and bulk delete.

use std::sync::Arc;

use uavfleet_client::FleetGateway;
use uavfleet_core::listing::{apply_filter, enumerate, Pager};
use uavfleet_core::models::vehicle::{type_options, TypeOption};
use uavfleet_core::models::Vehicle;

use crate::notice::{Notice, CHANGES_SAVED};
use crate::routes::{CardTab, Route};

pub struct VehicleTable {
    gateway: Arc<dyn FleetGateway>,
    all: Vec<Vehicle>,
    displayed: Vec<Vehicle>,
    search: String,
    selected_type: Option<String>,
    pub pager: Pager,
    pub notice: Notice,
}

impl VehicleTable {
    pub fn new(gateway: Arc<dyn FleetGateway>) -> Self {
        Self {
            gateway,
            all: Vec::new(),
            displayed: Vec::new(),
            search: String::new(),
            selected_type: None,
            pager: Pager::default(),
            notice: Notice::default(),
        }
    }

    pub async fn load(&mut self) {
        let vehicles = self.notice.absorb(self.gateway.get_vehicles().await);
        self.all = enumerate(vehicles);
        self.refresh();
    }

    pub fn rows(&self) -> &[Vehicle] {
        &self.displayed
    }

    pub fn type_options(&self) -> Vec<TypeOption> {
        type_options(&self.all)
    }

    /// `None` shows every type.
    pub fn set_type_filter(&mut self, vehicle_type: Option<String>) {
        self.selected_type = vehicle_type;
        self.refresh();
    }

    pub fn set_search(&mut self, needle: impl Into<String>) {
        self.search = needle.into();
        self.refresh();
    }

    /// Exact type match first, then the substring filter.
    fn refresh(&mut self) {
        let by_type: Vec<Vehicle> = match &self.selected_type {
            Some(vehicle_type) => self
                .all
                .iter()
                .filter(|v| &v.vehicle_type == vehicle_type)
                .cloned()
                .collect(),
            None => self.all.clone(),
        };
        self.displayed = apply_filter(&by_type, &self.search);
        self.pager.reset();
    }

    /// Where double-clicking a row leads.
    pub fn open(&self, index: usize) -> Option<Route> {
        self.displayed.get(index).map(|v| Route::VehicleCard {
            uav_id: v.vehicle_id.clone(),
            tab: CardTab::Info,
        })
    }

    /// Delete the given vehicles (already confirmed) and reload.
    pub async fn delete(&mut self, vehicle_ids: &[String]) {
        let selected: Vec<Vehicle> = self
            .all
            .iter()
            .filter(|v| vehicle_ids.contains(&v.vehicle_id))
            .cloned()
            .collect();
        if selected.is_empty() {
            return;
        }
        self.notice.clear();
        let result = self.gateway.delete_vehicles(&selected).await;
        if self.notice.succeeded(result) {
            self.notice.say(if selected.len() == 1 {
                "БВС удален."
            } else {
                "БВС удалены."
            });
        }
        self.load().await;
    }

    pub async fn update_description(&mut self, vehicle_id: &str, description: &str) {
        let Some(mut vehicle) = self.all.iter().find(|v| v.vehicle_id == vehicle_id).cloned()
        else {
            return;
        };
        vehicle.description = description.to_string();
        self.notice.clear();
        let result = self.gateway.update_vehicle(&vehicle).await;
        if self.notice.succeeded(result) {
            self.notice.say(CHANGES_SAVED);
        }
        self.load().await;
    }
}
