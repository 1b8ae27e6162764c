//! Maintenance (TO) tab: inspection table and the nearest-inspection bar.

use std::sync::Arc;

use chrono::NaiveDate;

use uavfleet_client::FleetGateway;
use uavfleet_core::countdown::InspectionCountdown;
use uavfleet_core::models::{TableRecord, UavMaintenance};

use crate::notice::Notice;
use crate::screens::table::RecordTable;

pub struct MaintenanceTab {
    gateway: Arc<dyn FleetGateway>,
    uav_id: String,
    pub table: RecordTable<UavMaintenance>,
    pub notice: Notice,
}

impl MaintenanceTab {
    pub fn new(gateway: Arc<dyn FleetGateway>, uav_id: impl Into<String>) -> Self {
        Self {
            gateway,
            uav_id: uav_id.into(),
            table: RecordTable::default(),
            notice: Notice::default(),
        }
    }

    pub async fn load(&mut self) {
        let records = self
            .notice
            .absorb(self.gateway.get_maintenance(&self.uav_id).await);
        self.table.load(records);
    }

    /// Countdown to the nearest planned inspection over the full list.
    pub fn countdown(&self, today: NaiveDate) -> InspectionCountdown {
        InspectionCountdown::new(self.table.all(), today)
    }

    pub fn add_row(&mut self) {
        self.table.add_row(UavMaintenance::new_for(self.uav_id.clone()));
    }

    pub fn cancel_edit(&mut self, index: usize) -> bool {
        self.table.cancel_edit(index)
    }

    /// Send the edited row and reload the authoritative list.
    pub async fn save_row(&mut self, index: usize) {
        let Some(row) = self.table.row(index) else {
            return;
        };
        let mut wire = row.to_wire();
        wire.uav_id = self.uav_id.clone();
        self.notice.clear();
        let result = self.gateway.save_maintenance(&wire).await;
        if self.notice.succeeded(result) {
            self.load().await;
        }
    }

    /// Delete a row (already confirmed) and reload.
    pub async fn remove_row(&mut self, index: usize) {
        let Some(row) = self.table.row(index) else {
            return;
        };
        let mut wire = row.to_wire();
        wire.uav_id = self.uav_id.clone();
        self.notice.clear();
        let result = self.gateway.delete_maintenance(&wire).await;
        self.notice.succeeded(result);
        self.load().await;
    }
}
