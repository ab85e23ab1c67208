//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::{PlatformError, PlatformResult};
use crate::traits::AndroidPlatform;
use crate::types::{ApiLevel, Intent, ResolvedActivity, Uri};

pub const TEST_PACKAGE: &str = "com.dfiles";

// ===== MockPlatform =====

/// Configurable mock `AndroidPlatform` that records every dispatched intent.
pub struct MockPlatform {
    api_level: ApiLevel,
    package_name: String,
    activities: Vec<ResolvedActivity>,
    storage_manager: bool,
    /// 如果 Some，对应调用返回此错误
    content_uri_error: Option<PlatformError>,
    query_error: Option<PlatformError>,
    start_error: Option<PlatformError>,
    storage_error: Option<PlatformError>,
    dispatched: Mutex<Vec<Intent>>,
    storage_queries: AtomicUsize,
}

impl MockPlatform {
    pub fn new(api_level: u32) -> Self {
        Self {
            api_level: ApiLevel(api_level),
            package_name: TEST_PACKAGE.to_string(),
            activities: Vec::new(),
            storage_manager: false,
            content_uri_error: None,
            query_error: None,
            start_error: None,
            storage_error: None,
            dispatched: Mutex::new(Vec::new()),
            storage_queries: AtomicUsize::new(0),
        }
    }

    pub fn with_activities(mut self, activities: Vec<ResolvedActivity>) -> Self {
        self.activities = activities;
        self
    }

    pub fn with_storage_manager(mut self, granted: bool) -> Self {
        self.storage_manager = granted;
        self
    }

    pub fn with_content_uri_error(mut self, message: &str) -> Self {
        self.content_uri_error = Some(PlatformError::new("getUriForFile", message));
        self
    }

    pub fn with_query_error(mut self, message: &str) -> Self {
        self.query_error = Some(PlatformError::new("queryIntentActivities", message));
        self
    }

    pub fn with_start_error(mut self, message: &str) -> Self {
        self.start_error = Some(PlatformError::new("startActivity", message));
        self
    }

    pub fn with_storage_error(mut self, message: &str) -> Self {
        self.storage_error = Some(PlatformError::new("isExternalStorageManager", message));
        self
    }

    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Intents passed to `start_activity`, in dispatch order.
    pub fn dispatched(&self) -> Vec<Intent> {
        self.dispatched.lock().unwrap().clone()
    }

    pub fn storage_queries(&self) -> usize {
        self.storage_queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AndroidPlatform for MockPlatform {
    fn api_level(&self) -> ApiLevel {
        self.api_level
    }

    fn package_name(&self) -> &str {
        &self.package_name
    }

    async fn content_uri_for_file(&self, authority: &str, path: &str) -> PlatformResult<Uri> {
        if let Some(ref err) = self.content_uri_error {
            return Err(err.clone());
        }
        Ok(Uri::parse(format!("content://{authority}/root{path}")))
    }

    async fn query_activities(&self, _intent: &Intent) -> PlatformResult<Vec<ResolvedActivity>> {
        if let Some(ref err) = self.query_error {
            return Err(err.clone());
        }
        Ok(self.activities.clone())
    }

    async fn start_activity(&self, intent: &Intent) -> PlatformResult<()> {
        if let Some(ref err) = self.start_error {
            return Err(err.clone());
        }
        self.dispatched.lock().unwrap().push(intent.clone());
        Ok(())
    }

    async fn is_external_storage_manager(&self) -> PlatformResult<bool> {
        self.storage_queries.fetch_add(1, Ordering::SeqCst);
        if let Some(ref err) = self.storage_error {
            return Err(err.clone());
        }
        Ok(self.storage_manager)
    }
}

// ===== Files =====

/// Create an existing APK file in a fresh temp dir.
pub fn temp_apk(name: &str) -> (tempfile::TempDir, String) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    std::fs::write(&path, b"PK\x03\x04").unwrap();
    let path = path.display().to_string();
    (dir, path)
}
