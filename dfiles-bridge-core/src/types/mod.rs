//! 类型定义模块

mod api_level;
mod config;
mod intent;
mod uri;

pub use api_level::ApiLevel;
pub use config::InstallerConfig;
pub use intent::{
    ComponentName, Intent, IntentFlags, ResolvedActivity,
    ACTION_MANAGE_APP_ALL_FILES_ACCESS_PERMISSION, ACTION_VIEW, APK_MIME_TYPE,
};
pub use uri::Uri;
