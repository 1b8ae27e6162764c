//! Photo gallery of a vehicle.
//!
//! Image ids are fetched first, then every image is downloaded
//! concurrently. Images appear in the order their downloads finish.

use std::sync::Arc;

use futures::stream::{FuturesUnordered, StreamExt};

use uavfleet_client::{FileUpload, FleetGateway};
use uavfleet_core::types::DbId;

use crate::notice::{Notice, CHANGES_SAVED, NO_FILE_SELECTED};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryImage {
    pub image_id: DbId,
    pub bytes: Vec<u8>,
}

pub struct Gallery {
    gateway: Arc<dyn FleetGateway>,
    uav_id: String,
    images: Vec<GalleryImage>,
    current: usize,
    pub notice: Notice,
}

impl Gallery {
    pub fn new(gateway: Arc<dyn FleetGateway>, uav_id: impl Into<String>) -> Self {
        Self {
            gateway,
            uav_id: uav_id.into(),
            images: Vec::new(),
            current: 0,
            notice: Notice::default(),
        }
    }

    pub async fn load(&mut self) {
        self.images.clear();
        self.current = 0;
        let ids = self
            .notice
            .absorb(self.gateway.fetch_image_ids(&self.uav_id).await);

        let gateway = &self.gateway;
        let mut downloads: FuturesUnordered<_> = ids
            .into_iter()
            .map(|image_id| async move { (image_id, gateway.download_image(image_id).await) })
            .collect();

        let mut images = Vec::new();
        while let Some((image_id, result)) = downloads.next().await {
            match result {
                Ok(bytes) => images.push(GalleryImage { image_id, bytes }),
                Err(err) => {
                    tracing::warn!(image_id, "Image download failed: {err}");
                    self.notice.fail(&err);
                }
            }
        }
        self.images = images;
    }

    pub fn images(&self) -> &[GalleryImage] {
        &self.images
    }

    pub fn current(&self) -> Option<&GalleryImage> {
        self.images.get(self.current)
    }

    /// Select the image at `index`; out-of-range selections are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.images.len() {
            self.current = index;
        }
    }

    pub async fn upload(&mut self, file: Option<FileUpload>) {
        self.notice.clear();
        let Some(file) = file else {
            self.notice.say(NO_FILE_SELECTED);
            return;
        };
        let result = self.gateway.upload_image(&self.uav_id, file).await;
        if self.notice.succeeded(result) {
            self.notice.say(CHANGES_SAVED);
        }
        self.load().await;
    }

    /// Delete the selected image and reload.
    pub async fn delete_current(&mut self) {
        let Some(image_id) = self.current().map(|image| image.image_id) else {
            return;
        };
        self.notice.clear();
        let result = self.gateway.delete_image(image_id).await;
        if self.notice.succeeded(result) {
            self.load().await;
        }
    }
}
