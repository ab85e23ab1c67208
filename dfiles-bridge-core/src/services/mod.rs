//! 桥接服务层

mod installer_bridge;
mod storage_access_bridge;
mod strategy;

pub use installer_bridge::{select_installer, InstallerBridge};
pub use storage_access_bridge::StorageAccessBridge;
pub use strategy::{StorageModel, UriStrategy};
