//! Catalogue of client-visible endpoints
//!
//! Every key of the `urls` group is listed here together with the operation
//! it is resolved from. Adding a back-office capability means adding a
//! variant here; if anonymous clients need it too, it must also be added to
//! the anonymous whitelist.

use std::fmt;

use crate::routing::RouteKey;

/// Capability serving the back-office application shell
pub const BACK_OFFICE: &str = "BackOffice";

/// Area API services are scoped to
pub const API_AREA: &str = "Api";

/// How a `urls` entry gets its value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlSource {
    /// Full path of a single operation
    Action(RouteKey),
    /// Base address of an API service, derived from one of its operations
    ServiceBase(RouteKey),
    /// External package repository address from configuration
    PackagesRestApi,
}

/// Keys of the `urls` group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UrlKey {
    /// The application shell for authenticated clients. Anonymous bundles
    /// reuse this key for the bootstrap configuration endpoint itself.
    BootstrapEndpoint,
    GridConfig,
    ExternalLoginsUrl,
    ExternalLinkLoginsUrl,
    PackagesRestApiBaseUrl,
    TourApiBaseUrl,
    ImagesApiBaseUrl,
    AuthenticationApiBaseUrl,
    CurrentUserApiBaseUrl,
    DashboardApiBaseUrl,
    ExamineMgmtBaseUrl,
    HelpApiBaseUrl,
    ImageUrlGeneratorApiBaseUrl,
}

impl UrlKey {
    /// Every key, in output order
    pub const ALL: [UrlKey; 13] = [
        UrlKey::BootstrapEndpoint,
        UrlKey::GridConfig,
        UrlKey::ExternalLoginsUrl,
        UrlKey::ExternalLinkLoginsUrl,
        UrlKey::PackagesRestApiBaseUrl,
        UrlKey::TourApiBaseUrl,
        UrlKey::ImagesApiBaseUrl,
        UrlKey::AuthenticationApiBaseUrl,
        UrlKey::CurrentUserApiBaseUrl,
        UrlKey::DashboardApiBaseUrl,
        UrlKey::ExamineMgmtBaseUrl,
        UrlKey::HelpApiBaseUrl,
        UrlKey::ImageUrlGeneratorApiBaseUrl,
    ];

    /// Wire name of the key
    pub fn as_str(self) -> &'static str {
        match self {
            UrlKey::BootstrapEndpoint => "bootstrapEndpoint",
            UrlKey::GridConfig => "gridConfig",
            UrlKey::ExternalLoginsUrl => "externalLoginsUrl",
            UrlKey::ExternalLinkLoginsUrl => "externalLinkLoginsUrl",
            UrlKey::PackagesRestApiBaseUrl => "packagesRestApiBaseUrl",
            UrlKey::TourApiBaseUrl => "tourApiBaseUrl",
            UrlKey::ImagesApiBaseUrl => "imagesApiBaseUrl",
            UrlKey::AuthenticationApiBaseUrl => "authenticationApiBaseUrl",
            UrlKey::CurrentUserApiBaseUrl => "currentUserApiBaseUrl",
            UrlKey::DashboardApiBaseUrl => "dashboardApiBaseUrl",
            UrlKey::ExamineMgmtBaseUrl => "examineMgmtBaseUrl",
            UrlKey::HelpApiBaseUrl => "helpApiBaseUrl",
            UrlKey::ImageUrlGeneratorApiBaseUrl => "imageUrlGeneratorApiBaseUrl",
        }
    }

    pub fn source(self) -> UrlSource {
        match self {
            UrlKey::BootstrapEndpoint => UrlSource::Action(back_office("Application")),
            UrlKey::GridConfig => UrlSource::Action(back_office("GetGridConfig")),
            UrlKey::ExternalLoginsUrl => UrlSource::Action(back_office("ExternalLogin")),
            UrlKey::ExternalLinkLoginsUrl => UrlSource::Action(back_office("LinkLogin")),
            UrlKey::PackagesRestApiBaseUrl => UrlSource::PackagesRestApi,
            UrlKey::TourApiBaseUrl => UrlSource::ServiceBase(api("Tour", "GetTours")),
            UrlKey::ImagesApiBaseUrl => UrlSource::ServiceBase(api("Images", "GetBigThumbnail")),
            UrlKey::AuthenticationApiBaseUrl => {
                UrlSource::ServiceBase(api("Authentication", "PostLogin"))
            }
            UrlKey::CurrentUserApiBaseUrl => {
                UrlSource::ServiceBase(api("CurrentUser", "PostChangePassword"))
            }
            UrlKey::DashboardApiBaseUrl => UrlSource::ServiceBase(api("Dashboard", "GetDashboard")),
            UrlKey::ExamineMgmtBaseUrl => {
                UrlSource::ServiceBase(api("ExamineManagement", "GetIndexerDetails"))
            }
            UrlKey::HelpApiBaseUrl => UrlSource::ServiceBase(api("Help", "GetContextHelpForPage")),
            UrlKey::ImageUrlGeneratorApiBaseUrl => {
                UrlSource::ServiceBase(api("ImageUrlGenerator", "GetCropUrl"))
            }
        }
    }
}

impl fmt::Display for UrlKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The bootstrap configuration endpoint served to anonymous clients
pub fn anonymous_bootstrap_route() -> RouteKey {
    back_office("ServerVariables")
}

/// Every operation the bundle needs a route for, catalogue first
pub fn required_routes() -> Vec<RouteKey> {
    let mut routes: Vec<RouteKey> = UrlKey::ALL
        .iter()
        .filter_map(|key| match key.source() {
            UrlSource::Action(route) | UrlSource::ServiceBase(route) => Some(route),
            UrlSource::PackagesRestApi => None,
        })
        .collect();
    routes.push(anonymous_bootstrap_route());
    routes
}

fn back_office(operation: &str) -> RouteKey {
    RouteKey::new(BACK_OFFICE, operation)
}

fn api(capability: &str, operation: &str) -> RouteKey {
    RouteKey::new(capability, operation).in_area(API_AREA)
}
