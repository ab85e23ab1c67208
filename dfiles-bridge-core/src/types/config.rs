//! 安装器配置（来自 `tauri.conf.json` 的 `plugins.apk-installer`）

use serde::Deserialize;

fn default_authority_suffix() -> String {
    ".fileprovider".to_string()
}

fn default_prefer_system_installer() -> bool {
    true
}

/// Installer bridge options.
///
/// ```json
/// {
///   "plugins": {
///     "apk-installer": { "authoritySuffix": ".fileprovider", "preferSystemInstaller": true }
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallerConfig {
    /// Full FileProvider authority; overrides `authority_suffix` when set
    #[serde(default)]
    pub authority: Option<String>,

    /// Appended to the package name to form the FileProvider authority
    #[serde(default = "default_authority_suffix")]
    pub authority_suffix: String,

    /// Pin the install intent to the system package installer when one resolves
    #[serde(default = "default_prefer_system_installer")]
    pub prefer_system_installer: bool,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            authority: None,
            authority_suffix: default_authority_suffix(),
            prefer_system_installer: default_prefer_system_installer(),
        }
    }
}

impl InstallerConfig {
    /// FileProvider authority registered by the host app.
    #[must_use]
    pub fn authority_for(&self, package_name: &str) -> String {
        match &self.authority {
            Some(authority) => authority.clone(),
            None => format!("{package_name}{}", self.authority_suffix),
        }
    }
}
