use dfiles_bridge_core::{BridgeError, BridgeResult, StorageAccessBridge};

const UNSUPPORTED: &str = "All files access is only supported on Android";

/// 存储权限桥接，插件状态
pub struct StorageAccess(Option<StorageAccessBridge>);

impl StorageAccess {
    #[cfg(target_os = "android")]
    pub(crate) fn new() -> crate::Result<Self> {
        use std::sync::Arc;

        let platform = dfiles_bridge_android::JniPlatform::from_ndk_context()?;
        Ok(Self(Some(StorageAccessBridge::new(Arc::new(platform)))))
    }

    #[cfg(not(target_os = "android"))]
    #[allow(clippy::unnecessary_wraps)]
    pub(crate) fn new() -> crate::Result<Self> {
        Ok(Self(None))
    }

    fn bridge(&self) -> BridgeResult<&StorageAccessBridge> {
        self.0
            .as_ref()
            .ok_or_else(|| BridgeError::Unsupported(UNSUPPORTED.to_string()))
    }

    /// 是否已授予所有文件访问权限
    pub async fn has_permission(&self) -> BridgeResult<bool> {
        self.bridge()?.has_all_files_access().await
    }

    /// 打开授权设置页
    ///
    /// `true` 仅表示设置页已打开，不代表用户已授权。
    pub async fn request_permission(&self) -> BridgeResult<bool> {
        self.bridge()?.request_all_files_access().await
    }
}
