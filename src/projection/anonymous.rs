//! Anonymous bundle: the strict subset served before login

use tracing::debug;

use super::{Whitelist, project};
use crate::bundle::keys::{application, settings};
use crate::bundle::urls::anonymous_bootstrap_route;
use crate::bundle::{Bundle, GroupMap, GroupName, GroupValue, UrlKey};
use crate::error::{Result, projection};
use crate::routing::RouteResolver;

/// Everything an anonymous client may see
pub fn anonymous_whitelist() -> Whitelist {
    Whitelist::new()
        .keep_keys(
            GroupName::Urls,
            [
                UrlKey::AuthenticationApiBaseUrl.as_str(),
                UrlKey::BootstrapEndpoint.as_str(),
                UrlKey::ExternalLoginsUrl.as_str(),
                UrlKey::CurrentUserApiBaseUrl.as_str(),
            ],
        )
        .keep_keys(
            GroupName::Settings,
            [
                settings::ALLOW_PASSWORD_RESET,
                settings::IMAGE_FILE_TYPES,
                settings::MAX_FILE_SIZE,
                settings::LOGIN_BACKGROUND_IMAGE,
                settings::CAN_SEND_REQUIRED_EMAIL,
                settings::USERNAME_IS_EMAIL,
            ],
        )
        .keep_keys(
            GroupName::Application,
            [application::APPLICATION_PATH, application::CACHE_BUSTER],
        )
        .keep_group(GroupName::IsDebugEnabled)
        .keep_group(GroupName::Features)
}

/// Derives the anonymous bundle from a full one
pub struct AnonymousBundleAdapter<'a> {
    routes: &'a dyn RouteResolver,
    whitelist: Whitelist,
}

impl<'a> AnonymousBundleAdapter<'a> {
    pub fn new(routes: &'a dyn RouteResolver) -> Self {
        Self {
            routes,
            whitelist: anonymous_whitelist(),
        }
    }

    /// Project the full bundle and apply the bootstrap endpoint override
    pub fn build_anonymous(&self, full: &Bundle) -> Result<Bundle> {
        let mut reduced = project(full, &self.whitelist)?;
        self.override_bootstrap_endpoint(&mut reduced)?;
        debug!(groups = reduced.len(), "built anonymous bundle");
        Ok(reduced)
    }

    /// `urls.bootstrapEndpoint` names the application shell for authenticated
    /// clients but the bootstrap configuration endpoint itself for anonymous
    /// ones. This is the only value the adapter rewrites.
    fn override_bootstrap_endpoint(&self, reduced: &mut Bundle) -> Result<()> {
        let path = self.routes.resolve(&anonymous_bootstrap_route())?;

        let urls = reduced.get_or_insert_with(GroupName::Urls, || GroupValue::Map(GroupMap::new()));
        let kind = urls.kind();
        let Some(map) = urls.as_map_mut() else {
            return Err(projection::shape_mismatch(GroupName::Urls.as_str(), kind));
        };

        map.insert(UrlKey::BootstrapEndpoint.as_str().to_string(), path.into());
        Ok(())
    }
}
