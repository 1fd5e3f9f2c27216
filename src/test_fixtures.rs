//! Test fixtures shared by unit tests
//!
//! Builds a host configuration with every section populated so tests can
//! assert on concrete values without repeating setup.

use async_trait::async_trait;
use proptest::prelude::*;
use proptest::sample;

use crate::auth::{AuthenticationScheme, AuthenticationSchemeProvider};
use crate::bundle::{Bundle, GroupName, GroupValue, RequestContext};
use crate::config::{HostConfig, RuntimeLevel, SmtpSettings};
use crate::error::{Result, scheme};
use crate::projection::Whitelist;

/// Host configuration mounted under `/cms` with mail, debug and one back-office scheme
pub fn fixture_config() -> HostConfig {
    let mut config = HostConfig::default();
    config.version.semantic = "10.1.0".to_string();
    config.version.assembly = "10.1.0.0".to_string();
    config.runtime.level = RuntimeLevel::Run;
    config.runtime.minifier_cache_buster = "abc123".to_string();
    config.runtime.debug = true;
    config.runtime.max_request_length = Some(4096);
    config.hosting.application_virtual_path = "/cms".to_string();
    config.global.smtp = Some(SmtpSettings {
        from: "noreply@example.org".to_string(),
        host: "smtp.example.org".to_string(),
    });
    config.content.image_file_types = vec!["png".to_string(), "jpg".to_string()];
    config.features.disable_templates = true;
    config.auth_schemes =
        vec![AuthenticationScheme::new("Google", "Sign in with Google").for_back_office()];
    config
}

/// Request arriving under `/cms` on a server one hour east of UTC
pub fn fixture_request() -> RequestContext {
    RequestContext::new("/cms", 60)
}

/// Scheme provider whose enumeration always fails
pub struct FailingSchemeProvider;

#[async_trait]
impl AuthenticationSchemeProvider for FailingSchemeProvider {
    async fn list_schemes(&self) -> Result<Vec<AuthenticationScheme>> {
        Err(scheme::enumeration_failed("identity provider unreachable"))
    }
}

/// Scalar or list value
pub fn arb_leaf() -> impl Strategy<Value = GroupValue> {
    prop_oneof![
        any::<bool>().prop_map(GroupValue::Bool),
        any::<i64>().prop_map(GroupValue::Number),
        "[a-z/]{0,8}".prop_map(GroupValue::String),
        prop::collection::vec(any::<bool>().prop_map(GroupValue::Bool), 0..3)
            .prop_map(GroupValue::List),
    ]
}

/// Mapping whose keys are drawn from `keys` and whose values are leaves
pub fn arb_map(keys: &'static [&'static str]) -> impl Strategy<Value = GroupValue> {
    prop::collection::vec((sample::select(keys), arb_leaf()), 0..6).prop_map(GroupValue::map)
}

pub fn arb_group_value(keys: &'static [&'static str]) -> impl Strategy<Value = GroupValue> {
    prop_oneof![arb_leaf(), arb_map(keys)]
}

/// Bundle holding an arbitrary subset of the groups, in canonical order
pub fn arb_bundle<S>(values: S) -> impl Strategy<Value = Bundle>
where
    S: Strategy<Value = GroupValue>,
{
    prop::collection::vec(prop::option::of(values), GroupName::ALL.len()).prop_map(|slots| {
        GroupName::ALL
            .into_iter()
            .zip(slots)
            .filter_map(|(group, value)| value.map(|v| (group, v)))
            .collect()
    })
}

/// Whitelist over an arbitrary subset of the groups. An empty key draw keeps
/// the whole group.
pub fn arb_whitelist(keys: &'static [&'static str]) -> impl Strategy<Value = Whitelist> {
    let allowance = sample::subsequence(keys, 0..=keys.len());
    prop::collection::vec(prop::option::of(allowance), GroupName::ALL.len()).prop_map(|slots| {
        GroupName::ALL
            .into_iter()
            .zip(slots)
            .fold(Whitelist::new(), |whitelist, (group, keys)| match keys {
                Some(keys) => whitelist.keep_keys(group, keys),
                None => whitelist,
            })
    })
}
