//! Common test utilities for bootvars integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Host configuration used by most integration tests: mounted under `/cms`,
/// mail configured and one back-office login scheme.
#[allow(dead_code)]
pub const HOST_CONFIG: &str = r"
version:
  semantic: 10.1.0
  assembly: 10.1.0.0
runtime:
  level: run
  minifierCacheBuster: abc123
  debug: true
  maxRequestLength: 4096
hosting:
  applicationVirtualPath: /cms
global:
  smtp:
    from: noreply@example.org
    host: smtp.example.org
content:
  imageFileTypes: [png, jpg]
features:
  disableTemplates: true
authSchemes:
  - name: Google
    displayName: Sign in with Google
    backOffice: true
  - name: Cookies
    displayName: Cookies
plugins:
  - alias: forms
    mountPath: /App_Plugins/Forms
  - alias: settings
    mountPath: /core/settings
    core: true
";

/// A temporary directory holding a host configuration file
pub struct TestHost {
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the configuration file
    pub config_path: PathBuf,
}

impl TestHost {
    /// Create a host with the given configuration
    pub fn with_config(yaml: &str) -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let config_path = temp.path().join("bootvars.yaml");
        std::fs::write(&config_path, yaml).expect("Failed to write config");
        Self { temp, config_path }
    }

    /// Create a host with [`HOST_CONFIG`]
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::with_config(HOST_CONFIG)
    }

    /// Command with `--config` pointing at this host's file
    pub fn cmd(&self) -> Command {
        let mut cmd = bootvars_cmd();
        cmd.arg("--config").arg(&self.config_path);
        cmd
    }
}

/// The real bootvars binary with a clean environment
#[allow(deprecated)]
pub fn bootvars_cmd() -> Command {
    let mut cmd = Command::cargo_bin("bootvars").expect("bootvars binary");
    cmd.env_remove("BOOTVARS_CONFIG").env_remove("RUST_LOG");
    cmd
}

/// Run the command and parse stdout as JSON
#[allow(dead_code)]
pub fn json_output(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).expect("stdout should be JSON")
}
