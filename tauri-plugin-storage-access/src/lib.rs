//! Tauri Storage Access Plugin
//!
//! 查询 / 申请 Android 11+ 的“所有文件访问权限”（`MANAGE_EXTERNAL_STORAGE`）。
//!
//! - `plugin:storage-access|has_permission`：当前是否已授予；Android 10 及以下恒为 `true`
//! - `plugin:storage-access|request_permission`：打开系统设置中的授权页面
//!
//! `request_permission` 返回 `true` 只表示设置页已打开，用户是否授权需之后再调用
//! `has_permission` 确认。

use tauri::{
    Manager, Runtime,
    plugin::{Builder, TauriPlugin},
};

mod commands;
mod storage_access;

pub use dfiles_bridge_core::{BridgeError, BridgeResult};
pub use storage_access::StorageAccess;

/// 插件错误类型
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Android platform unavailable: {0}")]
    Platform(#[from] dfiles_bridge_core::PlatformError),
}

pub type Result<T> = std::result::Result<T, Error>;

/// 为 AppHandle 扩展存储权限方法
pub trait StorageAccessExt<R: Runtime> {
    fn storage_access(&self) -> &StorageAccess;
}

impl<R: Runtime, T: Manager<R>> StorageAccessExt<R> for T {
    fn storage_access(&self) -> &StorageAccess {
        self.state::<StorageAccess>().inner()
    }
}

/// 初始化插件
pub fn init<R: Runtime>() -> TauriPlugin<R> {
    Builder::new("storage-access")
        .invoke_handler(tauri::generate_handler![
            commands::has_permission,
            commands::request_permission
        ])
        .setup(|app, _api| {
            let storage_access = StorageAccess::new()?;
            app.manage(storage_access);
            log::debug!("storage-access plugin ready");
            Ok(())
        })
        .build()
}
