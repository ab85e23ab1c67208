//! dfiles Bridge Core Library
//!
//! Platform-agnostic logic behind the two Android bridges exposed to the UI layer:
//! - Installer bridge: hand an APK on disk to the system package installer
//! - Storage access bridge: check / request the "all files access" permission
//!
//! OS facilities are abstracted through the [`AndroidPlatform`] trait; the
//! version-dependent behaviour is resolved once when a bridge is built.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{BridgeError, BridgeResult, PlatformError, PlatformResult};
pub use services::{InstallerBridge, StorageAccessBridge};
pub use traits::AndroidPlatform;
