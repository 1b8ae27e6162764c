//! Vehicle card: the editable info list and the insurance expiry banner.

use std::sync::Arc;

use chrono::NaiveDate;

use uavfleet_client::FleetGateway;
use uavfleet_core::countdown::InsuranceCountdown;
use uavfleet_core::dates::{format_display_date, local_date, local_midnight, parse_display_date};
use uavfleet_core::edit::InfoListDraft;
use uavfleet_core::models::UavInfo;

use crate::notice::{Notice, CHANGES_SAVED};

pub const INSURANCE_SAVED: &str = "Дата страхования сохранена";
pub const PICK_A_DATE: &str = "Пожалуйста, выберите дату";

pub struct VehicleCard {
    gateway: Arc<dyn FleetGateway>,
    uav_id: String,
    info: UavInfo,
    pub draft: InfoListDraft,
    editable: bool,
    pub notice: Notice,
}

impl VehicleCard {
    pub fn new(gateway: Arc<dyn FleetGateway>, uav_id: impl Into<String>) -> Self {
        let uav_id = uav_id.into();
        Self {
            gateway,
            info: UavInfo::empty(uav_id.clone()),
            uav_id,
            draft: InfoListDraft::default(),
            editable: false,
            notice: Notice::default(),
        }
    }

    /// Fetch the card. A vehicle without a card gets an empty one.
    pub async fn load(&mut self) {
        self.info = match self.gateway.get_uav_info(&self.uav_id).await {
            Ok(info) => info,
            Err(err) => {
                self.notice.fail(&err);
                UavInfo::empty(self.uav_id.clone())
            }
        };
        self.draft = InfoListDraft::new(self.info.info_list.clone());
    }

    pub fn uav_id(&self) -> &str {
        &self.uav_id
    }

    pub fn info(&self) -> &UavInfo {
        &self.info
    }

    pub fn toggle_edit(&mut self) {
        self.editable = !self.editable;
    }

    pub fn mode(&self) -> &'static str {
        if self.editable {
            "Режим редактирования"
        } else {
            "Режим чтения"
        }
    }

    /// Post the edited info list. Nothing is sent when the draft matches
    /// what was loaded.
    pub async fn save_info(&mut self) {
        if !self.draft.is_modified() {
            return;
        }
        let mut info = self.info.clone();
        info.info_list = self.draft.rows().to_vec();
        self.notice.clear();
        let result = self.gateway.post_uav_info(&info).await;
        if self.notice.succeeded(result) {
            self.notice.say(CHANGES_SAVED);
            self.draft.mark_saved(info.info_list.clone());
            self.info = info;
        }
    }

    // ---- insurance ----

    /// Local calendar date the insurance expires, if known.
    pub fn insurance_expiry(&self) -> Option<NaiveDate> {
        self.info.insurance_expiry_ts.as_ref().map(local_date)
    }

    /// Expiry date as shown in the form (`dd.MM.yyyy`, empty when unset).
    pub fn insurance_form_value(&self) -> String {
        self.insurance_expiry()
            .map(format_display_date)
            .unwrap_or_default()
    }

    pub fn insurance_countdown(&self, today: NaiveDate) -> Option<InsuranceCountdown> {
        self.insurance_expiry()
            .map(|expiry| InsuranceCountdown::new(expiry, today))
    }

    /// Store a new expiry date typed as `dd.MM.yyyy`.
    pub async fn save_insurance(&mut self, form_value: &str) {
        self.notice.clear();
        let Some(expiry) = parse_display_date(form_value) else {
            self.notice.say(PICK_A_DATE);
            return;
        };
        let result = self
            .gateway
            .update_insurance_expiry(&self.uav_id, expiry)
            .await;
        if self.notice.succeeded(result) {
            self.info.insurance_expiry_ts = Some(local_midnight(expiry));
            self.notice.say(INSURANCE_SAVED);
        }
    }
}
