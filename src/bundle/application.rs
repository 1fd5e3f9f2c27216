//! Application state: version and environment metadata for the `application` group

use chrono::Local;

use super::GroupValue;
use super::keys::application as keys;
use crate::config::{RuntimeSettings, VersionSettings};
use crate::hash::cache_buster;
use crate::path_utils::ensure_ends_with_slash;

/// Per-request inputs that vary by host or request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// Path base the request arrived under (e.g. "/cms")
    pub path_base: String,

    /// Server offset from UTC in minutes
    pub utc_offset_minutes: i32,
}

impl RequestContext {
    pub fn new(path_base: impl Into<String>, utc_offset_minutes: i32) -> Self {
        Self {
            path_base: path_base.into(),
            utc_offset_minutes,
        }
    }

    /// Context using the local clock's current UTC offset
    pub fn with_local_offset(path_base: impl Into<String>) -> Self {
        Self::new(path_base, local_utc_offset_minutes())
    }
}

/// Current local offset from UTC in minutes
pub fn local_utc_offset_minutes() -> i32 {
    Local::now().offset().local_minus_utc() / 60
}

/// Version and environment metadata, computed fresh for every request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationState {
    pub version: String,
    pub assembly_version: String,
    pub cache_buster: String,
    pub application_path: String,
    pub server_time_offset: i32,
}

impl ApplicationState {
    pub fn compute(
        version: &VersionSettings,
        runtime: &RuntimeSettings,
        request: &RequestContext,
    ) -> Self {
        Self {
            version: version.semantic.clone(),
            assembly_version: version.assembly.clone(),
            cache_buster: cache_buster(
                &version.semantic,
                runtime.level.as_str(),
                &runtime.minifier_cache_buster,
            ),
            application_path: ensure_ends_with_slash(&request.path_base),
            server_time_offset: request.utc_offset_minutes,
        }
    }
}

impl From<ApplicationState> for GroupValue {
    fn from(state: ApplicationState) -> Self {
        GroupValue::map([
            (keys::VERSION, GroupValue::from(state.version)),
            (keys::ASSEMBLY_VERSION, GroupValue::from(state.assembly_version)),
            (keys::CACHE_BUSTER, GroupValue::from(state.cache_buster)),
            (keys::APPLICATION_PATH, GroupValue::from(state.application_path)),
            (keys::SERVER_TIME_OFFSET, GroupValue::from(state.server_time_offset)),
        ])
    }
}
