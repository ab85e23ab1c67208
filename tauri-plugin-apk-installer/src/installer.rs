use dfiles_bridge_core::types::InstallerConfig;
use dfiles_bridge_core::{BridgeError, BridgeResult, InstallerBridge};

/// APK 安装器，插件状态
///
/// 仅 Android 上持有桥接实例，其余平台所有调用返回 `UNSUPPORTED`。
pub struct ApkInstaller(Option<InstallerBridge>);

impl ApkInstaller {
    #[cfg(target_os = "android")]
    pub(crate) fn new(config: &InstallerConfig) -> crate::Result<Self> {
        use std::sync::Arc;

        let platform = dfiles_bridge_android::JniPlatform::from_ndk_context()?;
        Ok(Self(Some(InstallerBridge::new(Arc::new(platform), config))))
    }

    #[cfg(not(target_os = "android"))]
    #[allow(clippy::unnecessary_wraps)]
    pub(crate) fn new(_config: &InstallerConfig) -> crate::Result<Self> {
        Ok(Self(None))
    }

    /// 安装 APK 文件
    ///
    /// 返回 `true` 表示系统已接受安装请求，不代表安装完成。
    pub async fn install_package(&self, file_path: &str) -> BridgeResult<bool> {
        match &self.0 {
            Some(bridge) => bridge.install_package(file_path).await,
            None => Err(BridgeError::Unsupported(
                "APK installation is only supported on Android".to_string(),
            )),
        }
    }
}

#[cfg(all(test, not(target_os = "android")))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unsupported_outside_android() {
        let installer = ApkInstaller::new(&InstallerConfig::default()).unwrap();
        let err = installer
            .install_package("/tmp/app.apk")
            .await
            .unwrap_err();

        assert_eq!(err.code(), "UNSUPPORTED");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "UNSUPPORTED");
        assert_eq!(
            json["message"],
            "APK installation is only supported on Android"
        );
    }
}
