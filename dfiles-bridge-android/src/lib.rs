//! Android adapters for the dfiles bridges
//!
//! [`JniPlatform`] implements `AndroidPlatform` by calling the Android SDK
//! through JNI on the application context the shell registered with
//! `ndk-context`. Only compiled for `target_os = "android"`.

#[cfg(target_os = "android")]
mod jni_platform;

#[cfg(target_os = "android")]
pub use jni_platform::JniPlatform;
