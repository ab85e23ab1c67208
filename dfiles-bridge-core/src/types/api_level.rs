//! Android API level

use std::fmt;

/// Android `Build.VERSION.SDK_INT` of the running device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ApiLevel(pub u32);

impl ApiLevel {
    /// Android 7.0: cross-app `file://` URIs are rejected, sharing goes through a content provider.
    pub const N: Self = Self(24);

    /// Android 11: scoped storage enforcement and the all-files-access permission.
    pub const R: Self = Self(30);

    /// Whether file URIs handed to other apps must be content-provider URIs.
    #[must_use]
    pub fn requires_content_uri(self) -> bool {
        self >= Self::N
    }

    /// Whether the `MANAGE_EXTERNAL_STORAGE` permission model exists.
    #[must_use]
    pub fn has_scoped_storage(self) -> bool {
        self >= Self::R
    }
}

impl fmt::Display for ApiLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "API {}", self.0)
    }
}
