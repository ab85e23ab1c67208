//! OS capability abstraction trait definition

mod android_platform;

pub use android_platform::AndroidPlatform;
