//! Engine tab: operating intervals and the countdown to the next engine TO.

use std::sync::Arc;

use chrono::NaiveDateTime;

use uavfleet_client::FleetGateway;
use uavfleet_core::countdown::{engine_countdown, EngineCountdown};
use uavfleet_core::dates::SHORT_DATE_TIME_FORMAT;
use uavfleet_core::duration::interval_between;
use uavfleet_core::error::CoreError;
use uavfleet_core::models::UavEngine;

use crate::notice::Notice;
use crate::screens::table::RecordTable;

pub struct EngineTab {
    gateway: Arc<dyn FleetGateway>,
    uav_id: String,
    pub table: RecordTable<UavEngine>,
    pub notice: Notice,
}

impl EngineTab {
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
            .absorb(self.gateway.get_engine_log(&self.uav_id).await);
        self.table.load(records);
    }

    /// Countdown over the whole log, ignoring the current filter.
    pub fn countdown(&self) -> EngineCountdown {
        engine_countdown(self.table.all())
    }

    pub fn add_row(&mut self) {
        self.table.add_row(UavEngine::new_for(self.uav_id.clone()));
    }

    pub fn cancel_edit(&mut self, index: usize) -> bool {
        self.table.cancel_edit(index)
    }

    /// Recompute the duration, stamp the reporter and send the row.
    pub async fn save_row(&mut self, index: usize, now: NaiveDateTime) {
        let Some(row) = self.table.row(index) else {
            return;
        };
        self.notice.clear();
        let duration = match interval_between(&row.engine_active_from, &row.engine_active_till) {
            Ok(duration) => duration,
            Err(CoreError::Validation(msg)) => {
                self.notice.say(format!("Ошибка: {msg}"));
                return;
            }
            Err(err) => {
                self.notice.say(format!("Ошибка: {err}"));
                return;
            }
        };
        let reporter = self
            .gateway
            .session()
            .current()
            .await
            .map(|s| s.login)
            .unwrap_or_default();

        let mut record = row.clone();
        record.uav_id = self.uav_id.clone();
        record.engine_operate_duration = duration;
        record.reporter = reporter;
        record.reported_timestamp = now.format(SHORT_DATE_TIME_FORMAT).to_string();

        let result = self.gateway.save_engine_record(&record).await;
        if self.notice.succeeded(result) {
            self.load().await;
        }
    }

    /// Delete a row (already confirmed) and reload.
    pub async fn remove_row(&mut self, index: usize) {
        let Some(row) = self.table.row(index) else {
            return;
        };
        let mut record = row.clone();
        record.uav_id = self.uav_id.clone();
        self.notice.clear();
        let result = self.gateway.delete_engine_record(&record).await;
        self.notice.succeeded(result);
        self.load().await;
    }
}
