use tauri::{AppHandle, Runtime, command};

use crate::ApkInstallerExt;
use dfiles_bridge_core::BridgeError;

/// 安装 APK 文件
///
/// 在 Android 平台上使用 FileProvider 正确处理 URI 转换
#[command]
pub async fn install_package<R: Runtime>(
    app: AppHandle<R>,
    file_path: String,
) -> Result<bool, BridgeError> {
    app.apk_installer()
        .install_package(&file_path)
        .await
        .map_err(BridgeError::logged)
}
