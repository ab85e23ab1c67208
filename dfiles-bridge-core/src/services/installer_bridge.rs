//! APK 安装桥接服务

use std::path::Path;
use std::sync::Arc;

use crate::error::{BridgeError, BridgeResult};
use crate::services::UriStrategy;
use crate::traits::AndroidPlatform;
use crate::types::{
    InstallerConfig, Intent, IntentFlags, ResolvedActivity, Uri, ACTION_VIEW, APK_MIME_TYPE,
};

/// Hands an APK on disk to the system package installer.
///
/// Dispatch is fire-and-forget: a resolved call means the OS accepted the
/// request to show the installer UI, never that the package was installed.
pub struct InstallerBridge {
    platform: Arc<dyn AndroidPlatform>,
    uri_strategy: UriStrategy,
    prefer_system_installer: bool,
}

impl InstallerBridge {
    /// Build the bridge, selecting the URI strategy from the device API level.
    #[must_use]
    pub fn new(platform: Arc<dyn AndroidPlatform>, config: &InstallerConfig) -> Self {
        let authority = config.authority_for(platform.package_name());
        let uri_strategy = UriStrategy::for_api_level(platform.api_level(), authority);
        log::debug!("InstallerBridge on {}: {uri_strategy:?}", platform.api_level());
        Self {
            platform,
            uri_strategy,
            prefer_system_installer: config.prefer_system_installer,
        }
    }

    #[must_use]
    pub fn uri_strategy(&self) -> &UriStrategy {
        &self.uri_strategy
    }

    /// Open `file_path` as a package archive in the system installer.
    ///
    /// # Errors
    /// * `FileNotFound` - the file is absent; nothing is dispatched
    /// * `InstallDispatch` - URI resolution or dispatch failed
    pub async fn install_package(&self, file_path: &str) -> BridgeResult<bool> {
        if !file_exists(file_path) {
            return Err(BridgeError::FileNotFound(file_path.to_string()));
        }

        // 相对路径按进程工作目录解析，否则 file:// 会被当成根目录下的文件
        let absolute = std::path::absolute(file_path).map_err(|e| {
            BridgeError::InstallDispatch(format!("Cannot resolve {file_path}: {e}"))
        })?;
        let intent = self.build_intent(&absolute.display().to_string()).await?;
        let intent = if self.prefer_system_installer {
            self.pin_system_installer(intent).await
        } else {
            intent
        };

        self.platform
            .start_activity(&intent)
            .await
            .map_err(|e| BridgeError::InstallDispatch(e.to_string()))?;

        log::info!("Install request dispatched for {file_path}");
        Ok(true)
    }

    async fn build_intent(&self, file_path: &str) -> BridgeResult<Intent> {
        let (uri, grant) = match &self.uri_strategy {
            UriStrategy::ContentProvider { authority } => {
                let uri = self
                    .platform
                    .content_uri_for_file(authority, file_path)
                    .await
                    .map_err(|e| BridgeError::InstallDispatch(e.to_string()))?;
                // 受限版本上绝不能把 file:// 交给其他应用
                if uri.is_file() {
                    return Err(BridgeError::InstallDispatch(format!(
                        "FileProvider returned a raw file URI: {uri}"
                    )));
                }
                (uri, IntentFlags::GRANT_READ_URI_PERMISSION)
            }
            UriStrategy::FileUri => (Uri::from_file(file_path), IntentFlags::NONE),
        };

        Ok(Intent::new(ACTION_VIEW)
            .with_data_and_type(uri, APK_MIME_TYPE)
            .with_flags(IntentFlags::ACTIVITY_NEW_TASK | grant))
    }

    /// Target the system package installer explicitly so the host app (or
    /// another file manager) never intercepts the request. Falls back to the
    /// unpinned intent when nothing suitable resolves.
    async fn pin_system_installer(&self, intent: Intent) -> Intent {
        let activities = match self.platform.query_activities(&intent).await {
            Ok(activities) => activities,
            Err(e) => {
                log::warn!("Failed to query installer activities, dispatching unpinned: {e}");
                return intent;
            }
        };

        match select_installer(&activities, self.platform.package_name()) {
            Some(installer) => {
                log::debug!(
                    "Pinning install intent to {}/{}",
                    installer.package_name,
                    installer.class_name
                );
                intent
                    .with_component(installer.component())
                    .with_flags(IntentFlags::ACTIVITY_CLEAR_TOP)
            }
            None => intent,
        }
    }
}

/// Pick the package installer among the activities able to open an APK,
/// never the caller's own package.
pub fn select_installer<'a>(
    activities: &'a [ResolvedActivity],
    own_package: &str,
) -> Option<&'a ResolvedActivity> {
    let mut foreign = activities
        .iter()
        .filter(|a| a.package_name != own_package)
        .peekable();
    let first = foreign.peek().copied();

    foreign
        .find(|a| {
            a.package_name.contains("packageinstaller")
                || a.package_name.contains("google")
                || a.class_name.to_lowercase().contains("installer")
        })
        .or(first)
}

fn file_exists(file_path: &str) -> bool {
    match Path::new(file_path).try_exists() {
        Ok(exists) => exists,
        Err(e) => {
            log::debug!("Cannot stat {file_path}: {e}");
            false
        }
    }
}
