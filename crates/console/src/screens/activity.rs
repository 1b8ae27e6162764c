//! Read-only audit log.

use std::sync::Arc;

use uavfleet_client::FleetGateway;
use uavfleet_core::listing::{apply_filter, enumerate, Pager};
use uavfleet_core::models::Activity;

use crate::notice::Notice;

pub struct ActivityLog {
    gateway: Arc<dyn FleetGateway>,
    all: Vec<Activity>,
    displayed: Vec<Activity>,
    pub pager: Pager,
    pub notice: Notice,
}

impl ActivityLog {
    pub fn new(gateway: Arc<dyn FleetGateway>) -> Self {
        Self {
            gateway,
            all: Vec::new(),
            displayed: Vec::new(),
            pager: Pager::default(),
            notice: Notice::default(),
        }
    }

    pub async fn load(&mut self) {
        let entries = self.notice.absorb(self.gateway.get_activities().await);
        self.all = enumerate(entries);
        self.displayed = self.all.clone();
    }

    pub fn rows(&self) -> &[Activity] {
        &self.displayed
    }

    pub fn set_search(&mut self, needle: &str) {
        self.displayed = apply_filter(&self.all, needle);
        self.pager.reset();
    }
}
