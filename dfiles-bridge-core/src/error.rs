//! Unified error type definition

use serde::ser::SerializeStruct;
use serde::Serialize;
use thiserror::Error;

/// Failure reported by the OS seam (JNI call, Java exception).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{operation}: {message}")]
pub struct PlatformError {
    /// The OS call that failed, e.g. `startActivity`
    pub operation: String,
    /// Underlying message (exception text or JNI error)
    pub message: String,
}

impl PlatformError {
    #[must_use]
    pub fn new(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            message: message.into(),
        }
    }
}

/// Platform seam Result type alias
pub type PlatformResult<T> = std::result::Result<T, PlatformError>;

/// Bridge layer error type
///
/// Every variant reaches the UI layer as a rejected call carrying a stable
/// machine-readable `code` and a human-readable `message`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// The APK file was absent at check time; the path stays out of the message
    #[error("APK file not found")]
    FileNotFound(String),

    /// The OS refused or failed to accept the install request
    #[error("Failed to install APK: {0}")]
    InstallDispatch(String),

    /// Querying the all-files-access grant failed
    #[error("Failed to check permission: {0}")]
    PermissionCheck(String),

    /// Opening the all-files-access settings screen failed
    #[error("Failed to request permission: {0}")]
    PermissionRequest(String),

    /// The bridge is not available on this platform
    #[error("{0}")]
    Unsupported(String),
}

impl BridgeError {
    /// Stable code delivered to the calling UI layer.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::FileNotFound(_) => "FILE_NOT_FOUND",
            Self::InstallDispatch(_) => "INSTALL_ERROR",
            Self::PermissionCheck(_) | Self::PermissionRequest(_) => "ERROR",
            Self::Unsupported(_) => "UNSUPPORTED",
        }
    }

    /// Whether it is expected behavior (bad input, unsupported platform), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::FileNotFound(_) | Self::Unsupported(_) => true,
            Self::InstallDispatch(_) | Self::PermissionCheck(_) | Self::PermissionRequest(_) => {
                false
            }
        }
    }

    /// Log this error at the level matching [`Self::is_expected`] and hand it back.
    #[must_use]
    pub fn logged(self) -> Self {
        if let Self::FileNotFound(path) = &self {
            log::warn!("BridgeError [{}]: {self}: {path}", self.code());
        } else if self.is_expected() {
            log::warn!("BridgeError [{}]: {self}", self.code());
        } else {
            log::error!("BridgeError [{}]: {self}", self.code());
        }
        self
    }
}

impl Serialize for BridgeError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("BridgeError", 2)?;
        state.serialize_field("code", self.code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Bridge layer Result type alias
pub type BridgeResult<T> = std::result::Result<T, BridgeError>;
