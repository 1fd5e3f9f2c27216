//! External authentication schemes
//!
//! The scheme provider is an external collaborator. A scheme is offered to
//! back-office clients only when it carries the explicit `backOffice` marker
//! in its metadata.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::bundle::GroupValue;
use crate::error::Result;

/// A registered authentication scheme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationScheme {
    /// Scheme name used to challenge (e.g. "Google")
    pub name: String,

    /// Caption shown on the login button
    #[serde(default)]
    pub display_name: String,

    /// Back-office marker: only marked schemes reach the back-office login page
    #[serde(default)]
    pub back_office: bool,
}

impl AuthenticationScheme {
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            back_office: false,
        }
    }

    /// Mark the scheme as enabled for the back office
    pub fn for_back_office(mut self) -> Self {
        self.back_office = true;
        self
    }
}

/// One external login entry in the `externalLogins` group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalLoginProvider {
    pub auth_type: String,
    pub caption: String,
}

impl From<ExternalLoginProvider> for GroupValue {
    fn from(provider: ExternalLoginProvider) -> Self {
        GroupValue::map([
            ("authType", GroupValue::from(provider.auth_type)),
            ("caption", GroupValue::from(provider.caption)),
        ])
    }
}

/// Enumerates registered authentication schemes.
///
/// Failures must be returned, not replaced by an empty list: an empty list
/// means "no external logins configured".
#[async_trait]
pub trait AuthenticationSchemeProvider: Send + Sync {
    async fn list_schemes(&self) -> Result<Vec<AuthenticationScheme>>;
}

/// Provider over a fixed list of schemes, typically from host configuration
#[derive(Debug, Clone, Default)]
pub struct StaticSchemeProvider {
    schemes: Vec<AuthenticationScheme>,
}

impl StaticSchemeProvider {
    pub fn new(schemes: Vec<AuthenticationScheme>) -> Self {
        Self { schemes }
    }
}

#[async_trait]
impl AuthenticationSchemeProvider for StaticSchemeProvider {
    async fn list_schemes(&self) -> Result<Vec<AuthenticationScheme>> {
        Ok(self.schemes.clone())
    }
}

/// Keep back-office schemes only and map them to their client form
pub fn back_office_providers(schemes: Vec<AuthenticationScheme>) -> Vec<ExternalLoginProvider> {
    schemes
        .into_iter()
        .filter(|s| s.back_office)
        .map(|s| ExternalLoginProvider {
            auth_type: s.name,
            caption: s.display_name,
        })
        .collect()
}
