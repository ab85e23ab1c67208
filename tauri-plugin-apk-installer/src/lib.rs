//! Tauri APK Installer Plugin
//!
//! 用于在 Android 上调起系统安装器安装 APK 文件，Android 7.0+ 使用 FileProvider 生成 content URI。
//!
//! 前端调用：`invoke("plugin:apk-installer|install_package", { filePath })`，
//! 成功返回 `true`，失败时 reject `{ code: "FILE_NOT_FOUND" | "INSTALL_ERROR", message }`。

use tauri::{
    Manager, Runtime,
    plugin::{Builder, TauriPlugin},
};

mod commands;
mod installer;

pub use dfiles_bridge_core::types::InstallerConfig;
pub use dfiles_bridge_core::{BridgeError, BridgeResult};
pub use installer::ApkInstaller;

/// 插件错误类型
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Android platform unavailable: {0}")]
    Platform(#[from] dfiles_bridge_core::PlatformError),
}

pub type Result<T> = std::result::Result<T, Error>;

/// 为 AppHandle 扩展 APK 安装器方法
pub trait ApkInstallerExt<R: Runtime> {
    fn apk_installer(&self) -> &ApkInstaller;
}

impl<R: Runtime, T: Manager<R>> ApkInstallerExt<R> for T {
    fn apk_installer(&self) -> &ApkInstaller {
        self.state::<ApkInstaller>().inner()
    }
}

/// 初始化插件
///
/// 配置读取自 `tauri.conf.json` 的 `plugins.apk-installer`，缺省时使用默认值。
pub fn init<R: Runtime>() -> TauriPlugin<R, Option<InstallerConfig>> {
    Builder::<R, Option<InstallerConfig>>::new("apk-installer")
        .invoke_handler(tauri::generate_handler![commands::install_package])
        .setup(|app, api| {
            let config = api.config().clone().unwrap_or_default();
            log::debug!("apk-installer plugin config: {config:?}");
            let installer = ApkInstaller::new(&config)?;
            app.manage(installer);
            Ok(())
        })
        .build()
}
