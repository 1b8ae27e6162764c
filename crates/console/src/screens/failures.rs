//! Failures tab and the handling history of a single failure.

use std::sync::Arc;

use uavfleet_client::FleetGateway;
use uavfleet_core::models::{TableRecord, UavFailure, UavFailureStep};
use uavfleet_core::types::DbId;

use crate::notice::Notice;
use crate::routes::{CardTab, Route};
use crate::screens::table::RecordTable;

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

pub struct FailuresTab {
    gateway: Arc<dyn FleetGateway>,
    uav_id: String,
    pub table: RecordTable<UavFailure>,
    pub notice: Notice,
}

impl FailuresTab {
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
            .absorb(self.gateway.get_failures(&self.uav_id).await);
        self.table.load(records);
    }

    pub fn add_row(&mut self) {
        self.table.add_row(UavFailure::new_for(self.uav_id.clone()));
    }

    pub fn cancel_edit(&mut self, index: usize) -> bool {
        self.table.cancel_edit(index)
    }

    pub async fn save_row(&mut self, index: usize) {
        let Some(row) = self.table.row(index) else {
            return;
        };
        let mut wire = row.to_wire();
        wire.uav_id = self.uav_id.clone();
        self.notice.clear();
        let result = self.gateway.save_failure(&wire).await;
        if self.notice.succeeded(result) {
            self.load().await;
        }
    }

    /// Delete a failure (already confirmed) by its server identity.
    pub async fn remove_row(&mut self, index: usize) {
        let Some(record_id) = self.table.row(index).map(|row| row.record_id) else {
            return;
        };
        self.notice.clear();
        let result = self.gateway.delete_failure(&self.uav_id, record_id).await;
        self.notice.succeeded(result);
        self.load().await;
    }

    /// History screen of a saved failure. Unsaved rows have none.
    pub fn open_history(&self, index: usize) -> Option<Route> {
        self.table
            .row(index)
            .filter(|row| row.record_id > 0)
            .map(|row| Route::FailureHistory {
                uav_id: self.uav_id.clone(),
                failure_id: row.record_id,
            })
    }
}

// ---------------------------------------------------------------------------
// Failure history
// ---------------------------------------------------------------------------

pub struct FailureHistory {
    gateway: Arc<dyn FleetGateway>,
    uav_id: String,
    failure_id: DbId,
    pub table: RecordTable<UavFailureStep>,
    pub notice: Notice,
}

impl FailureHistory {
    pub fn new(gateway: Arc<dyn FleetGateway>, uav_id: impl Into<String>, failure_id: DbId) -> Self {
        Self {
            gateway,
            uav_id: uav_id.into(),
            failure_id,
            table: RecordTable::default(),
            notice: Notice::default(),
        }
    }

    pub async fn load(&mut self) {
        let steps = self.notice.absorb(
            self.gateway
                .get_failure_steps(&self.uav_id, self.failure_id)
                .await,
        );
        self.table.load(steps);
    }

    pub fn add_row(&mut self) {
        self.table
            .add_row(UavFailureStep::new_for(self.uav_id.clone(), self.failure_id));
    }

    pub fn cancel_edit(&mut self, index: usize) -> bool {
        self.table.cancel_edit(index)
    }

    pub async fn save_row(&mut self, index: usize) {
        let Some(row) = self.table.row(index) else {
            return;
        };
        let mut wire = row.to_wire();
        wire.uav_id = self.uav_id.clone();
        wire.failure_id = self.failure_id;
        self.notice.clear();
        let result = self.gateway.save_failure_step(&wire).await;
        if self.notice.succeeded(result) {
            self.load().await;
        }
    }

    pub async fn remove_row(&mut self, index: usize) {
        let Some(step_id) = self.table.row(index).map(|row| row.record_id) else {
            return;
        };
        self.notice.clear();
        let result = self
            .gateway
            .delete_failure_step(self.failure_id, step_id)
            .await;
        self.notice.succeeded(result);
        self.load().await;
    }

    /// Back to the failures tab of the vehicle card.
    pub fn back(&self) -> Route {
        Route::VehicleCard {
            uav_id: self.uav_id.clone(),
            tab: CardTab::Failures,
        }
    }
}
