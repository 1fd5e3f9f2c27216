//! Host settings sections
//!
//! Each section is an immutable value handed to the bundle builder. Nothing
//! here is read from process-wide state.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Application version information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VersionSettings {
    /// Complete semantic version (e.g. "10.1.0-rc.2")
    pub semantic: String,

    /// Assembly version (e.g. "10.1.0.0")
    pub assembly: String,
}

impl Default for VersionSettings {
    fn default() -> Self {
        Self {
            semantic: env!("CARGO_PKG_VERSION").to_string(),
            assembly: format!("{}.0", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Readiness level of the running application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuntimeLevel {
    Unknown,
    Boot,
    Install,
    Upgrade,
    #[default]
    Run,
    BootFailed,
}

impl RuntimeLevel {
    /// Display form used when deriving the cache buster
    pub fn as_str(self) -> &'static str {
        match self {
            RuntimeLevel::Unknown => "Unknown",
            RuntimeLevel::Boot => "Boot",
            RuntimeLevel::Install => "Install",
            RuntimeLevel::Upgrade => "Upgrade",
            RuntimeLevel::Run => "Run",
            RuntimeLevel::BootFailed => "BootFailed",
        }
    }
}

impl fmt::Display for RuntimeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runtime state and request limits
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RuntimeSettings {
    pub level: RuntimeLevel,

    /// Token published by the asset minifier
    pub minifier_cache_buster: String,

    /// Whether the host runs in debug mode
    pub debug: bool,

    /// Maximum request length in kilobytes; unbounded when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_request_length: Option<u64>,
}

impl RuntimeSettings {
    /// Max upload size as sent to clients: the number, or empty when unbounded
    pub fn max_file_size(&self) -> String {
        self.max_request_length
            .map(|len| len.to_string())
            .unwrap_or_default()
    }
}

/// Hosting environment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HostingSettings {
    /// Virtual directory the application is mounted at
    pub application_virtual_path: String,
}

impl Default for HostingSettings {
    fn default() -> Self {
        Self {
            application_virtual_path: "/".to_string(),
        }
    }
}

/// Outgoing mail configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SmtpSettings {
    pub from: String,
    pub host: String,
}

/// Global paths and mail settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlobalSettings {
    pub back_office_path: String,
    pub media_path: String,
    pub css_path: String,
    pub app_plugins_path: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub smtp: Option<SmtpSettings>,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            back_office_path: "~/admin".to_string(),
            media_path: "~/media".to_string(),
            css_path: "~/css".to_string(),
            app_plugins_path: "~/App_Plugins".to_string(),
            smtp: None,
        }
    }
}

impl GlobalSettings {
    /// Whether mail required by the back office (invites, password resets) can be sent
    pub fn can_send_required_email(&self) -> bool {
        self.smtp
            .as_ref()
            .is_some_and(|smtp| !smtp.from.trim().is_empty() && !smtp.host.trim().is_empty())
    }
}

/// Content and upload policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentSettings {
    pub image_file_types: Vec<String>,
    pub allowed_upload_files: Vec<String>,
    pub disallowed_upload_files: Vec<String>,
    pub login_background_image: String,
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self {
            image_file_types: to_strings(&["jpeg", "jpg", "gif", "bmp", "png", "tiff", "tif"]),
            allowed_upload_files: Vec::new(),
            disallowed_upload_files: to_strings(&[
                "ashx", "aspx", "ascx", "config", "cshtml", "vbhtml", "asmx", "air", "axd",
                "xamlx",
            ]),
            login_background_image: "assets/img/login.jpg".to_string(),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Back-office account policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SecuritySettings {
    pub keep_user_logged_in: bool,
    pub username_is_email: bool,
    pub allow_password_reset: bool,
}

impl Default for SecuritySettings {
    fn default() -> Self {
        Self {
            keep_user_logged_in: false,
            username_is_email: true,
            allow_password_reset: true,
        }
    }
}

/// Togglable back-office features
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeatureFlags {
    pub disable_templates: bool,
}

impl FeatureFlags {
    /// Disabled-feature flags by wire name. New flags are added here.
    pub fn disabled(&self) -> Vec<(&'static str, bool)> {
        vec![("disableTemplates", self.disable_templates)]
    }
}

/// Package repository settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PackageSettings {
    pub rest_api_base_url: String,
}

impl Default for PackageSettings {
    fn default() -> Self {
        Self {
            rest_api_base_url: "https://packages.example.org/webapi/packages/v1".to_string(),
        }
    }
}
