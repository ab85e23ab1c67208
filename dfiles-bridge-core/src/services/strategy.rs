//! Version-selected platform behaviour
//!
//! Each bridge resolves its strategy once, when it is built, from the
//! device API level. Calls never branch on the version again.

use crate::types::ApiLevel;

/// How a file is turned into a URI another app may open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UriStrategy {
    /// API 24+: mediated `content://` URI from the app's FileProvider, with a
    /// temporary read grant on the dispatched intent
    ContentProvider { authority: String },
    /// Below API 24: raw `file://` URI
    FileUri,
}

impl UriStrategy {
    #[must_use]
    pub fn for_api_level(level: ApiLevel, authority: String) -> Self {
        if level.requires_content_uri() {
            Self::ContentProvider { authority }
        } else {
            Self::FileUri
        }
    }
}

/// Which storage permission model the device runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageModel {
    /// API 30+: all-files access is an explicit, user-granted permission
    Scoped,
    /// Below API 30: legacy storage permissions, handled outside this bridge
    Legacy,
}

impl StorageModel {
    #[must_use]
    pub fn for_api_level(level: ApiLevel) -> Self {
        if level.has_scoped_storage() {
            Self::Scoped
        } else {
            Self::Legacy
        }
    }
}
