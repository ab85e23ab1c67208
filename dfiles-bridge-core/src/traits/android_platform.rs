//! Android platform abstract Trait

use async_trait::async_trait;

use crate::error::PlatformResult;
use crate::types::{ApiLevel, Intent, ResolvedActivity, Uri};

/// The OS facilities the bridges need, borrowed from the live application context.
///
/// Platform implementation:
/// - Android: `JniPlatform` (dfiles-bridge-android, `jni` + `ndk-context`)
/// - Tests: `MockPlatform` (records dispatched intents)
///
/// Implementations hold no mutable state that a call could observe from
/// another call; every method is independently valid.
#[async_trait]
pub trait AndroidPlatform: Send + Sync {
    /// `Build.VERSION.SDK_INT`
    fn api_level(&self) -> ApiLevel;

    /// `Context.getPackageName()`
    fn package_name(&self) -> &str;

    /// `FileProvider.getUriForFile(context, authority, File(path))`
    ///
    /// # Arguments
    /// * `authority` - FileProvider authority registered by the host app
    /// * `path` - Absolute path of the file to share
    async fn content_uri_for_file(&self, authority: &str, path: &str) -> PlatformResult<Uri>;

    /// `PackageManager.queryIntentActivities(intent, MATCH_DEFAULT_ONLY)`
    async fn query_activities(&self, intent: &Intent) -> PlatformResult<Vec<ResolvedActivity>>;

    /// `Context.startActivity(intent)`
    ///
    /// Returns once the OS accepted the request; the launched activity runs
    /// independently afterwards.
    async fn start_activity(&self, intent: &Intent) -> PlatformResult<()>;

    /// `Environment.isExternalStorageManager()`
    ///
    /// Only meaningful on API 30 and above.
    async fn is_external_storage_manager(&self) -> PlatformResult<bool>;
}
