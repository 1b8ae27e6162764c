//! PDF document slots of the vehicle card.

use std::sync::Arc;

use chrono::{DateTime, Local, NaiveDate, Utc};

use uavfleet_client::{FileUpload, FleetGateway};
use uavfleet_core::dates::{to_display_date_time, ISO_DATE_FORMAT};
use uavfleet_core::models::UavInfo;
use uavfleet_core::statuses::DocType;

use crate::notice::{Notice, CHANGES_SAVED, NO_FILE_SELECTED};

/// One document slot (`Slg`, `EvalAct` or `Insurance`) of one vehicle.
pub struct DocumentsTab {
    gateway: Arc<dyn FleetGateway>,
    info: UavInfo,
    doc: DocType,
    content: Option<Vec<u8>>,
    pub notice: Notice,
}

impl DocumentsTab {
    pub fn new(gateway: Arc<dyn FleetGateway>, info: UavInfo, doc: DocType) -> Self {
        Self {
            gateway,
            info,
            doc,
            content: None,
            notice: Notice::default(),
        }
    }

    pub fn title(&self) -> &'static str {
        self.doc.title()
    }

    /// Fetch the stored PDF. An empty body means the slot is empty.
    pub async fn load(&mut self) {
        let bytes = self
            .notice
            .absorb(self.gateway.download_pdf(&self.info.uav_id, self.doc).await);
        self.content = (!bytes.is_empty()).then_some(bytes);
    }

    pub fn content(&self) -> Option<&[u8]> {
        self.content.as_deref()
    }

    pub fn has_content(&self) -> bool {
        self.content.is_some()
    }

    /// `"Дата добавления документа: dd.MM.yyyy HH:mm"`, shown only while a
    /// document is present and its upload time is known.
    pub fn added_banner(&self) -> Option<String> {
        if !self.has_content() {
            return None;
        }
        self.info.document_added_at(self.doc).map(|ts| {
            format!(
                "Дата добавления документа: {}",
                to_display_date_time(&ts.with_timezone(&Local))
            )
        })
    }

    /// File name offered when saving the document locally.
    pub fn download_name(&self, today: NaiveDate) -> String {
        format!(
            "{}_{}_{}.pdf",
            self.doc.as_str().to_lowercase(),
            self.info.uav_id,
            today.format(ISO_DATE_FORMAT)
        )
    }

    /// Upload a picked file, then reload the slot.
    pub async fn upload(&mut self, file: Option<FileUpload>, now: DateTime<Utc>) {
        self.notice.clear();
        let Some(file) = file else {
            self.notice.say(NO_FILE_SELECTED);
            return;
        };
        let result = self
            .gateway
            .upload_pdf(&self.info.uav_id, self.doc, file)
            .await;
        if self.notice.succeeded(result) {
            self.notice.say(CHANGES_SAVED);
            self.info.set_document_added_at(self.doc, Some(now));
            self.load().await;
        }
    }

    /// Remove the document (already confirmed).
    pub async fn delete(&mut self) {
        self.notice.clear();
        let result = self.gateway.delete_pdf(&self.info.uav_id, self.doc).await;
        if self.notice.succeeded(result) {
            self.content = None;
            self.info.set_document_added_at(self.doc, None);
            self.notice.say(format!("{CHANGES_SAVED}."));
        }
    }
}
