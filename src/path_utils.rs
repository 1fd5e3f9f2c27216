//! Virtual path utilities for client-facing addresses
//!
//! Configuration refers to application paths in the `~/` virtual form. The
//! client needs them rooted against the application's virtual directory.

use crate::error::{Result, config};

/// Prefix marking an application-relative virtual path
pub const VIRTUAL_ROOT: &str = "~/";

/// Resolve a virtual path against the application virtual directory.
///
/// - `~/media` with virtual path `/site` becomes `/site/media`
/// - `/media` is already rooted and is returned unchanged
/// - anything else is rejected as a configuration error
///
/// # Examples
///
/// ```
/// use bootvars::path_utils::to_absolute;
///
/// assert_eq!(to_absolute("~/media", "/").unwrap(), "/media");
/// assert_eq!(to_absolute("~/media", "/site/").unwrap(), "/site/media");
/// assert_eq!(to_absolute("/css", "/site").unwrap(), "/css");
/// ```
pub fn to_absolute(path: &str, application_virtual_path: &str) -> Result<String> {
    if let Some(rest) = path.strip_prefix(VIRTUAL_ROOT) {
        let root = application_virtual_path.trim_end_matches('/');
        return Ok(format!("{}/{}", root, rest));
    }

    if path == "~" {
        return Ok(ensure_ends_with_slash(application_virtual_path));
    }

    if path.starts_with('/') {
        return Ok(path.to_string());
    }

    Err(config::invalid(format!(
        "path '{}' must start with '~/' or '/'",
        path
    )))
}

/// Resolve a virtual path and strip any trailing slash, the form sent to clients.
pub fn to_client_path(path: &str, application_virtual_path: &str) -> Result<String> {
    let absolute = to_absolute(path, application_virtual_path)?;
    Ok(trim_trailing_slash(&absolute).to_string())
}

/// Remove trailing slashes
pub fn trim_trailing_slash(path: &str) -> &str {
    path.trim_end_matches('/')
}

/// Append a `/` unless the path already ends with one
pub fn ensure_ends_with_slash(path: &str) -> String {
    if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{}/", path)
    }
}

/// Check whether a path is in a form `to_absolute` accepts
pub fn is_resolvable(path: &str) -> bool {
    path == "~" || path.starts_with(VIRTUAL_ROOT) || path.starts_with('/')
}
