//! Construction of the full, authenticated bundle
//!
//! The builder only reads from its collaborators. Every call rebuilds the
//! bundle from current state, so it is safe to call repeatedly and from
//! concurrent requests.

use tracing::debug;

use super::application::{ApplicationState, RequestContext};
use super::keys;
use super::urls::{UrlKey, UrlSource};
use super::{Bundle, GroupMap, GroupName, GroupValue};
use crate::auth::{AuthenticationSchemeProvider, back_office_providers};
use crate::config::HostConfig;
use crate::error::{BootvarsError, Result, scheme};
use crate::path_utils::to_client_path;
use crate::plugins::PluginCapabilityDiscovery;
use crate::routing::{RouteResolver, service_base_url};

/// Builds the full bundle from host configuration and collaborators
pub struct BundleBuilder<'a> {
    config: &'a HostConfig,
    routes: &'a dyn RouteResolver,
    plugins: &'a dyn PluginCapabilityDiscovery,
    schemes: &'a dyn AuthenticationSchemeProvider,
}

impl<'a> BundleBuilder<'a> {
    pub fn new(
        config: &'a HostConfig,
        routes: &'a dyn RouteResolver,
        plugins: &'a dyn PluginCapabilityDiscovery,
        schemes: &'a dyn AuthenticationSchemeProvider,
    ) -> Self {
        Self {
            config,
            routes,
            plugins,
            schemes,
        }
    }

    /// Build the full bundle for one request.
    ///
    /// Fails on the first unresolved route, invalid path or scheme provider
    /// failure; no group is ever silently omitted.
    pub async fn build(&self, request: &RequestContext) -> Result<Bundle> {
        let mut bundle = Bundle::new();
        bundle.insert(GroupName::Urls, self.urls()?);
        bundle.insert(GroupName::Settings, self.settings()?);
        bundle.insert(GroupName::Plugins, self.plugins());
        bundle.insert(GroupName::IsDebugEnabled, self.config.runtime.debug);
        bundle.insert(
            GroupName::Application,
            ApplicationState::compute(&self.config.version, &self.config.runtime, request),
        );
        bundle.insert(GroupName::ExternalLogins, self.external_logins().await?);
        bundle.insert(GroupName::Features, self.features());

        debug!(
            groups = bundle.len(),
            path_base = %request.path_base,
            "built full bundle"
        );
        Ok(bundle)
    }

    /// Resolve the value of one `urls` key
    pub fn resolve_url(&self, key: UrlKey) -> Result<String> {
        match key.source() {
            UrlSource::Action(route) => self.routes.resolve(&route),
            UrlSource::ServiceBase(route) => service_base_url(self.routes, &route),
            UrlSource::PackagesRestApi => Ok(self.config.packages.rest_api_base_url.clone()),
        }
    }

    fn urls(&self) -> Result<GroupValue> {
        let mut urls = GroupMap::new();
        for key in UrlKey::ALL {
            urls.insert(key.as_str().to_string(), self.resolve_url(key)?.into());
        }
        Ok(GroupValue::Map(urls))
    }

    fn settings(&self) -> Result<GroupValue> {
        use keys::settings as k;

        let global = &self.config.global;
        let content = &self.config.content;
        let security = &self.config.security;
        let root = &self.config.hosting.application_virtual_path;
        let can_send_required_email = global.can_send_required_email();

        Ok(GroupValue::map([
            (k::BACK_OFFICE_PATH, self.config.back_office_path()?.into()),
            (k::MEDIA_PATH, to_client_path(&global.media_path, root)?.into()),
            (
                k::APP_PLUGINS_PATH,
                to_client_path(&global.app_plugins_path, root)?.into(),
            ),
            (k::CSS_PATH, to_client_path(&global.css_path, root)?.into()),
            (k::IMAGE_FILE_TYPES, content.image_file_types.join(",").into()),
            (
                k::DISALLOWED_UPLOAD_FILES,
                content.disallowed_upload_files.join(",").into(),
            ),
            (
                k::ALLOWED_UPLOAD_FILES,
                content.allowed_upload_files.join(",").into(),
            ),
            (k::MAX_FILE_SIZE, self.config.runtime.max_file_size().into()),
            (k::KEEP_USER_LOGGED_IN, security.keep_user_logged_in.into()),
            (k::USERNAME_IS_EMAIL, security.username_is_email.into()),
            (k::ALLOW_PASSWORD_RESET, security.allow_password_reset.into()),
            (
                k::LOGIN_BACKGROUND_IMAGE,
                content.login_background_image.as_str().into(),
            ),
            // Both keys share one derivation; clients address them separately.
            (k::SHOW_USER_INVITE, can_send_required_email.into()),
            (k::CAN_SEND_REQUIRED_EMAIL, can_send_required_email.into()),
            (k::SHOW_ALLOW_SEGMENTATION, false.into()),
        ]))
    }

    fn plugins(&self) -> GroupValue {
        let trees: Vec<GroupValue> = self
            .plugins
            .discover()
            .into_iter()
            .map(GroupValue::from)
            .collect();

        GroupValue::map([(keys::TREES, GroupValue::List(trees))])
    }

    async fn external_logins(&self) -> Result<GroupValue> {
        let schemes = self
            .schemes
            .list_schemes()
            .await
            .map_err(|e| match e {
                BootvarsError::SchemeEnumerationFailed { .. } => e,
                other => scheme::enumeration_failed(other.to_string()),
            })?;

        let providers: Vec<GroupValue> = back_office_providers(schemes)
            .into_iter()
            .map(GroupValue::from)
            .collect();

        Ok(GroupValue::map([(keys::PROVIDERS, GroupValue::List(providers))]))
    }

    fn features(&self) -> GroupValue {
        let disabled = GroupValue::map(
            self.config
                .features
                .disabled()
                .into_iter()
                .map(|(name, value)| (name, GroupValue::from(value))),
        );
        GroupValue::map([(keys::DISABLED_FEATURES, disabled)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{AuthenticationScheme, StaticSchemeProvider};
    use crate::plugins::{PluginRegistration, PluginRegistry};
    use crate::routing::RouteTable;
    use crate::test_fixtures::{FailingSchemeProvider, fixture_config, fixture_request};

    struct Fixture {
        config: HostConfig,
        routes: RouteTable,
        plugins: PluginRegistry,
        schemes: StaticSchemeProvider,
    }

    impl Fixture {
        fn new(config: HostConfig) -> Self {
            let routes = config.route_table().unwrap();
            let plugins = config.plugin_registry().unwrap();
            let schemes = StaticSchemeProvider::new(config.auth_schemes.clone());
            Self {
                config,
                routes,
                plugins,
                schemes,
            }
        }

        fn builder(&self) -> BundleBuilder<'_> {
            BundleBuilder::new(&self.config, &self.routes, &self.plugins, &self.schemes)
        }
    }

    #[tokio::test]
    async fn test_full_bundle_has_every_group_in_order() {
        let fixture = Fixture::new(fixture_config());
        let bundle = fixture.builder().build(&fixture_request()).await.unwrap();

        assert!(bundle.is_complete());
        let groups: Vec<_> = bundle.groups().collect();
        assert_eq!(groups, GroupName::ALL.to_vec());
    }

    #[tokio::test]
    async fn test_build_is_idempotent() {
        let fixture = Fixture::new(fixture_config());
        let builder = fixture.builder();
        let first = builder.build(&fixture_request()).await.unwrap();
        let second = builder.build(&fixture_request()).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_urls_cover_catalogue() {
        let fixture = Fixture::new(fixture_config());
        let bundle = fixture.builder().build(&fixture_request()).await.unwrap();
        let urls = bundle.get(GroupName::Urls).and_then(GroupValue::as_map).unwrap();

        assert_eq!(urls.len(), UrlKey::ALL.len());
        assert_eq!(
            urls["bootstrapEndpoint"].as_str(),
            Some("/cms/admin/backoffice/application")
        );
        assert_eq!(
            urls["tourApiBaseUrl"].as_str(),
            Some("/cms/admin/api/tour/")
        );
        assert_eq!(
            urls["packagesRestApiBaseUrl"].as_str(),
            Some("https://packages.example.org/webapi/packages/v1")
        );
    }

    #[tokio::test]
    async fn test_unregistered_route_fails_build() {
        let mut config = fixture_config();
        config.conventional_routes = false;
        let fixture = Fixture::new(config);

        let err = fixture.builder().build(&fixture_request()).await.unwrap_err();
        assert!(matches!(err, BootvarsError::RouteNotRegistered { .. }));
    }

    #[tokio::test]
    async fn test_explicit_routes_without_conventions() {
        let mut config = fixture_config();
        config.conventional_routes = false;
        let mut fixture = Fixture::new(config);
        for key in crate::bundle::urls::required_routes() {
            fixture
                .routes
                .register(key.clone(), format!("/x/{}", key.operation))
                .unwrap();
        }

        let bundle = fixture.builder().build(&fixture_request()).await.unwrap();
        assert_eq!(
            bundle
                .lookup(GroupName::Urls, "helpApiBaseUrl")
                .and_then(GroupValue::as_str),
            Some("/x/")
        );
    }

    #[tokio::test]
    async fn test_settings_values() {
        let fixture = Fixture::new(fixture_config());
        let bundle = fixture.builder().build(&fixture_request()).await.unwrap();
        let setting = |key: &str| bundle.lookup(GroupName::Settings, key).cloned();

        assert_eq!(setting("backOfficePath"), Some("/cms/admin".into()));
        assert_eq!(setting("mediaPath"), Some("/cms/media".into()));
        assert_eq!(setting("appPluginsPath"), Some("/cms/App_Plugins".into()));
        assert_eq!(setting("imageFileTypes"), Some("png,jpg".into()));
        assert_eq!(setting("allowedUploadFiles"), Some("".into()));
        assert_eq!(setting("maxFileSize"), Some("4096".into()));
        assert_eq!(setting("showUserInvite"), Some(true.into()));
        assert_eq!(setting("canSendRequiredEmail"), Some(true.into()));
        assert_eq!(
            setting("showAllowSegmentationForDocumentTypes"),
            Some(false.into())
        );
    }

    #[tokio::test]
    async fn test_invite_and_required_email_share_derivation() {
        let mut config = fixture_config();
        config.global.smtp = None;
        let fixture = Fixture::new(config);
        let bundle = fixture.builder().build(&fixture_request()).await.unwrap();

        assert_eq!(
            bundle.lookup(GroupName::Settings, "showUserInvite"),
            bundle.lookup(GroupName::Settings, "canSendRequiredEmail")
        );
        assert_eq!(
            bundle.lookup(GroupName::Settings, "canSendRequiredEmail"),
            Some(&GroupValue::Bool(false))
        );
    }

    #[tokio::test]
    async fn test_unbounded_max_file_size_is_empty_string() {
        let mut config = fixture_config();
        config.runtime.max_request_length = None;
        let fixture = Fixture::new(config);
        let bundle = fixture.builder().build(&fixture_request()).await.unwrap();
        assert_eq!(
            bundle.lookup(GroupName::Settings, "maxFileSize"),
            Some(&GroupValue::String(String::new()))
        );
    }

    #[tokio::test]
    async fn test_zero_schemes_yields_empty_provider_list() {
        let mut config = fixture_config();
        config.auth_schemes.clear();
        let fixture = Fixture::new(config);
        let bundle = fixture.builder().build(&fixture_request()).await.unwrap();

        assert_eq!(
            bundle.lookup(GroupName::ExternalLogins, "providers"),
            Some(&GroupValue::List(Vec::new()))
        );
    }

    #[tokio::test]
    async fn test_only_back_office_schemes_are_listed() {
        let mut config = fixture_config();
        config.auth_schemes = vec![
            AuthenticationScheme::new("Cookies", "Cookies"),
            AuthenticationScheme::new("Google", "Google").for_back_office(),
        ];
        let fixture = Fixture::new(config);
        let bundle = fixture.builder().build(&fixture_request()).await.unwrap();
        let providers = bundle
            .lookup(GroupName::ExternalLogins, "providers")
            .and_then(GroupValue::as_list)
            .unwrap();

        assert_eq!(providers.len(), 1);
        assert_eq!(
            providers[0].get("authType").and_then(GroupValue::as_str),
            Some("Google")
        );
    }

    #[tokio::test]
    async fn test_scheme_provider_failure_propagates() {
        let config = fixture_config();
        let routes = config.route_table().unwrap();
        let plugins = PluginRegistry::new();
        let builder = BundleBuilder::new(&config, &routes, &plugins, &FailingSchemeProvider);

        let err = builder.build(&fixture_request()).await.unwrap_err();
        assert!(matches!(err, BootvarsError::SchemeEnumerationFailed { .. }));
    }

    #[tokio::test]
    async fn test_plugins_group() {
        let mut config = fixture_config();
        config.plugins = vec![
            PluginRegistration::new("forms", "/App_Plugins/Forms"),
            PluginRegistration::new("settings", "/core/settings").as_core(),
        ];
        let fixture = Fixture::new(config);
        let bundle = fixture.builder().build(&fixture_request()).await.unwrap();
        let trees = bundle
            .lookup(GroupName::Plugins, "trees")
            .and_then(GroupValue::as_list)
            .unwrap();

        assert_eq!(
            trees,
            &[GroupValue::map([
                ("alias", GroupValue::from("forms")),
                ("mountPath", GroupValue::from("/App_Plugins/Forms")),
            ])]
        );
    }

    #[tokio::test]
    async fn test_plugins_group_empty_by_default() {
        let fixture = Fixture::new(HostConfig::default());
        let bundle = fixture.builder().build(&fixture_request()).await.unwrap();
        assert_eq!(
            bundle.lookup(GroupName::Plugins, "trees"),
            Some(&GroupValue::List(Vec::new()))
        );
    }

    #[tokio::test]
    async fn test_features_and_debug() {
        let fixture = Fixture::new(fixture_config());
        let bundle = fixture.builder().build(&fixture_request()).await.unwrap();

        assert_eq!(
            bundle.get(GroupName::IsDebugEnabled),
            Some(&GroupValue::Bool(true))
        );
        assert_eq!(
            bundle
                .lookup(GroupName::Features, "disabledFeatures")
                .and_then(|f| f.get("disableTemplates")),
            Some(&GroupValue::Bool(true))
        );
    }

    #[tokio::test]
    async fn test_application_group() {
        let fixture = Fixture::new(fixture_config());
        let bundle = fixture.builder().build(&fixture_request()).await.unwrap();

        assert_eq!(
            bundle
                .lookup(GroupName::Application, "cacheBuster")
                .and_then(GroupValue::as_str),
            Some(crate::hash::cache_buster("10.1.0", "Run", "abc123").as_str())
        );
        assert_eq!(
            bundle
                .lookup(GroupName::Application, "applicationPath")
                .and_then(GroupValue::as_str),
            Some("/cms/")
        );
    }

    #[test]
    fn test_resolve_url_service_base() {
        let fixture = Fixture::new(fixture_config());
        assert_eq!(
            fixture.builder().resolve_url(UrlKey::HelpApiBaseUrl).unwrap(),
            "/cms/admin/api/help/"
        );
    }

    #[test]
    fn test_resolve_url_missing_route() {
        let config = fixture_config();
        let routes = RouteTable::new();
        let plugins = PluginRegistry::new();
        let schemes = StaticSchemeProvider::default();
        let builder = BundleBuilder::new(&config, &routes, &plugins, &schemes);

        let err = builder.resolve_url(UrlKey::GridConfig).unwrap_err();
        assert!(matches!(
            err,
            BootvarsError::RouteNotRegistered { ref operation, .. } if operation == "GetGridConfig"
        ));
        assert!(builder.resolve_url(UrlKey::PackagesRestApiBaseUrl).is_ok());
    }
}
