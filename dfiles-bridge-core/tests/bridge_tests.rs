#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for `InstallerBridge` and `StorageAccessBridge` sharing one platform.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dfiles_bridge_core::error::PlatformResult;
use dfiles_bridge_core::services::{StorageModel, UriStrategy};
use dfiles_bridge_core::types::{
    ApiLevel, InstallerConfig, Intent, IntentFlags, ResolvedActivity, Uri,
    ACTION_MANAGE_APP_ALL_FILES_ACCESS_PERMISSION, APK_MIME_TYPE,
};
use dfiles_bridge_core::{AndroidPlatform, BridgeError, InstallerBridge, StorageAccessBridge};

// ===== Mock Implementations =====

/// Device whose all-files-access grant can be flipped from the test, the way
/// a user toggles it in settings.
struct FakeDevice {
    api_level: ApiLevel,
    granted: AtomicBool,
    dispatched: Mutex<Vec<Intent>>,
}

impl FakeDevice {
    fn new(api_level: u32) -> Arc<Self> {
        Arc::new(Self {
            api_level: ApiLevel(api_level),
            granted: AtomicBool::new(false),
            dispatched: Mutex::new(Vec::new()),
        })
    }

    fn dispatched(&self) -> Vec<Intent> {
        self.dispatched.lock().unwrap().clone()
    }
}

#[async_trait]
impl AndroidPlatform for FakeDevice {
    fn api_level(&self) -> ApiLevel {
        self.api_level
    }

    fn package_name(&self) -> &str {
        "com.dfiles"
    }

    async fn content_uri_for_file(&self, authority: &str, path: &str) -> PlatformResult<Uri> {
        Ok(Uri::parse(format!("content://{authority}/external{path}")))
    }

    async fn query_activities(&self, _intent: &Intent) -> PlatformResult<Vec<ResolvedActivity>> {
        Ok(Vec::new())
    }

    async fn start_activity(&self, intent: &Intent) -> PlatformResult<()> {
        tokio::task::yield_now().await;
        self.dispatched.lock().unwrap().push(intent.clone());
        Ok(())
    }

    async fn is_external_storage_manager(&self) -> PlatformResult<bool> {
        tokio::task::yield_now().await;
        Ok(self.granted.load(Ordering::SeqCst))
    }
}

fn write_apks(dir: &tempfile::TempDir, count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let path = dir.path().join(format!("app-{i}.apk"));
            std::fs::write(&path, b"PK").unwrap();
            path.display().to_string()
        })
        .collect()
}

// ===== Tests =====

#[tokio::test]
async fn strategies_follow_api_level() {
    let modern = FakeDevice::new(34);
    assert_eq!(
        InstallerBridge::new(modern.clone(), &InstallerConfig::default()).uri_strategy(),
        &UriStrategy::ContentProvider {
            authority: "com.dfiles.fileprovider".to_string()
        }
    );
    assert_eq!(StorageAccessBridge::new(modern).model(), StorageModel::Scoped);

    let old = FakeDevice::new(22);
    assert_eq!(
        InstallerBridge::new(old.clone(), &InstallerConfig::default()).uri_strategy(),
        &UriStrategy::FileUri
    );
    assert_eq!(StorageAccessBridge::new(old).model(), StorageModel::Legacy);
}

#[tokio::test]
async fn concurrent_installs_each_dispatch_their_own_file() {
    let device = FakeDevice::new(33);
    let bridge = Arc::new(InstallerBridge::new(device.clone(), &InstallerConfig::default()));
    let dir = tempfile::tempdir().unwrap();
    let paths = write_apks(&dir, 8);

    let results =
        futures::future::join_all(paths.iter().map(|p| bridge.install_package(p))).await;
    assert!(results.iter().all(|r| *r == Ok(true)));

    let dispatched = device.dispatched();
    assert_eq!(dispatched.len(), paths.len());
    for path in &paths {
        let matching = dispatched
            .iter()
            .filter(|i| i.data.as_ref().unwrap().as_str().ends_with(path.as_str()))
            .count();
        assert_eq!(matching, 1, "expected exactly one dispatch for {path}");
    }
    for intent in &dispatched {
        assert_eq!(intent.mime_type.as_deref(), Some(APK_MIME_TYPE));
        assert!(intent.has_flag(IntentFlags::GRANT_READ_URI_PERMISSION));
        assert!(!intent.data.as_ref().unwrap().is_file());
    }
}

#[tokio::test]
async fn permission_check_runs_alongside_install() {
    let device = FakeDevice::new(30);
    let installer = InstallerBridge::new(device.clone(), &InstallerConfig::default());
    let storage = StorageAccessBridge::new(device.clone());
    let dir = tempfile::tempdir().unwrap();
    let paths = write_apks(&dir, 1);
    let missing = dir.path().join("missing.apk").display().to_string();

    let (installed, failed, granted) = tokio::join!(
        installer.install_package(&paths[0]),
        installer.install_package(&missing),
        storage.has_all_files_access(),
    );

    assert_eq!(installed, Ok(true));
    assert_eq!(failed, Err(BridgeError::FileNotFound(missing)));
    assert_eq!(granted, Ok(false));
    assert_eq!(device.dispatched().len(), 1);
}

#[tokio::test]
async fn request_then_user_grants_in_settings() {
    let device = FakeDevice::new(31);
    let storage = StorageAccessBridge::new(device.clone());

    assert_eq!(storage.has_all_files_access().await, Ok(false));
    assert_eq!(storage.request_all_files_access().await, Ok(true));

    let intent = device.dispatched().pop().unwrap();
    assert_eq!(intent.action, ACTION_MANAGE_APP_ALL_FILES_ACCESS_PERMISSION);
    assert_eq!(intent.data, Some(Uri::package("com.dfiles")));

    // 用户在设置页中打开开关
    device.granted.store(true, Ordering::SeqCst);
    assert_eq!(storage.has_all_files_access().await, Ok(true));
}

#[tokio::test]
async fn rejection_payload_matches_ui_contract() {
    let device = FakeDevice::new(33);
    let installer = InstallerBridge::new(device, &InstallerConfig::default());

    let err = installer
        .install_package("/sdcard/Download/none.apk")
        .await
        .unwrap_err();
    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(json["code"], "FILE_NOT_FOUND");
    assert_eq!(json["message"], "APK file not found");
}
