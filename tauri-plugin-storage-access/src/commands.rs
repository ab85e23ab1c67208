use tauri::{AppHandle, Runtime, command};

use crate::StorageAccessExt;
use dfiles_bridge_core::BridgeError;

/// 查询所有文件访问权限
#[command]
pub async fn has_permission<R: Runtime>(app: AppHandle<R>) -> Result<bool, BridgeError> {
    app.storage_access()
        .has_permission()
        .await
        .map_err(BridgeError::logged)
}

/// 打开所有文件访问权限设置页
#[command]
pub async fn request_permission<R: Runtime>(app: AppHandle<R>) -> Result<bool, BridgeError> {
    app.storage_access()
        .request_permission()
        .await
        .map_err(BridgeError::logged)
}
