//! Intent model handed to the platform for dispatch

use std::ops::{BitOr, BitOrAssign};

use super::Uri;

/// MIME type the package installer registers for.
pub const APK_MIME_TYPE: &str = "application/vnd.android.package-archive";

/// `Intent.ACTION_VIEW`
pub const ACTION_VIEW: &str = "android.intent.action.VIEW";

/// `Settings.ACTION_MANAGE_APP_ALL_FILES_ACCESS_PERMISSION`
pub const ACTION_MANAGE_APP_ALL_FILES_ACCESS_PERMISSION: &str =
    "android.settings.MANAGE_APP_ALL_FILES_ACCESS_PERMISSION";

/// Subset of `Intent.FLAG_*` the bridges use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IntentFlags(u32);

impl IntentFlags {
    pub const NONE: Self = Self(0);
    /// `FLAG_GRANT_READ_URI_PERMISSION`
    pub const GRANT_READ_URI_PERMISSION: Self = Self(0x0000_0001);
    /// `FLAG_ACTIVITY_CLEAR_TOP`
    pub const ACTIVITY_CLEAR_TOP: Self = Self(0x0400_0000);
    /// `FLAG_ACTIVITY_NEW_TASK`
    pub const ACTIVITY_NEW_TASK: Self = Self(0x1000_0000);

    #[must_use]
    pub fn bits(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for IntentFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for IntentFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Explicit activity target (`ComponentName`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentName {
    pub package_name: String,
    pub class_name: String,
}

/// Activity able to handle an intent, as reported by `PackageManager.queryIntentActivities`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedActivity {
    pub package_name: String,
    pub class_name: String,
}

impl ResolvedActivity {
    #[must_use]
    pub fn new(package_name: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            class_name: class_name.into(),
        }
    }

    #[must_use]
    pub fn component(&self) -> ComponentName {
        ComponentName {
            package_name: self.package_name.clone(),
            class_name: self.class_name.clone(),
        }
    }
}

/// Request to start an activity, built by the bridges and executed by the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intent {
    pub action: String,
    pub data: Option<Uri>,
    pub mime_type: Option<String>,
    pub flags: IntentFlags,
    pub component: Option<ComponentName>,
}

impl Intent {
    #[must_use]
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            data: None,
            mime_type: None,
            flags: IntentFlags::NONE,
            component: None,
        }
    }

    /// `setDataAndType`
    #[must_use]
    pub fn with_data_and_type(mut self, data: Uri, mime_type: impl Into<String>) -> Self {
        self.data = Some(data);
        self.mime_type = Some(mime_type.into());
        self
    }

    /// `setData`
    #[must_use]
    pub fn with_data(mut self, data: Uri) -> Self {
        self.data = Some(data);
        self
    }

    /// `addFlags`
    #[must_use]
    pub fn with_flags(mut self, flags: IntentFlags) -> Self {
        self.flags |= flags;
        self
    }

    /// `setComponent`
    #[must_use]
    pub fn with_component(mut self, component: ComponentName) -> Self {
        self.component = Some(component);
        self
    }

    #[must_use]
    pub fn has_flag(&self, flag: IntentFlags) -> bool {
        self.flags.contains(flag)
    }
}
