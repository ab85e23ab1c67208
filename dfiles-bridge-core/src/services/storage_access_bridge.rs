//! 全部文件访问权限桥接服务

use std::sync::Arc;

use crate::error::{BridgeError, BridgeResult};
use crate::services::StorageModel;
use crate::traits::AndroidPlatform;
use crate::types::{Intent, IntentFlags, Uri, ACTION_MANAGE_APP_ALL_FILES_ACCESS_PERMISSION};

/// Reports and requests the "all files access" (`MANAGE_EXTERNAL_STORAGE`) permission.
pub struct StorageAccessBridge {
    platform: Arc<dyn AndroidPlatform>,
    model: StorageModel,
}

impl StorageAccessBridge {
    /// Build the bridge, selecting the storage model from the device API level.
    #[must_use]
    pub fn new(platform: Arc<dyn AndroidPlatform>) -> Self {
        let model = StorageModel::for_api_level(platform.api_level());
        log::debug!("StorageAccessBridge on {}: {model:?}", platform.api_level());
        Self { platform, model }
    }

    #[must_use]
    pub fn model(&self) -> StorageModel {
        self.model
    }

    /// Whether the app currently holds all-files access.
    ///
    /// Always `true` below API 30, where the permission does not exist.
    pub async fn has_all_files_access(&self) -> BridgeResult<bool> {
        match self.model {
            StorageModel::Scoped => self
                .platform
                .is_external_storage_manager()
                .await
                .map_err(|e| BridgeError::PermissionCheck(e.to_string())),
            StorageModel::Legacy => Ok(true),
        }
    }

    /// Open the system "All files access" screen for this app.
    ///
    /// `true` means the settings screen was launched, NOT that the user
    /// granted anything. Call [`Self::has_all_files_access`] later to observe
    /// the decision. Below API 30 nothing is launched and `true` is returned.
    pub async fn request_all_files_access(&self) -> BridgeResult<bool> {
        if self.model == StorageModel::Legacy {
            return Ok(true);
        }

        let package_name = self.platform.package_name();
        let intent = Intent::new(ACTION_MANAGE_APP_ALL_FILES_ACCESS_PERMISSION)
            .with_data(Uri::package(package_name))
            .with_flags(IntentFlags::ACTIVITY_NEW_TASK);

        self.platform
            .start_activity(&intent)
            .await
            .map_err(|e| BridgeError::PermissionRequest(e.to_string()))?;

        log::info!("All files access settings opened for {package_name}");
        Ok(true)
    }
}
