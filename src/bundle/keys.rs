//! Wire names of keys inside the open-ended groups
//!
//! Clients address these by exact name. The builder and the anonymous
//! whitelist both refer to these constants.

/// Keys of the `settings` group
pub mod settings {
    pub const BACK_OFFICE_PATH: &str = "backOfficePath";
    pub const MEDIA_PATH: &str = "mediaPath";
    pub const APP_PLUGINS_PATH: &str = "appPluginsPath";
    pub const CSS_PATH: &str = "cssPath";
    pub const IMAGE_FILE_TYPES: &str = "imageFileTypes";
    pub const DISALLOWED_UPLOAD_FILES: &str = "disallowedUploadFiles";
    pub const ALLOWED_UPLOAD_FILES: &str = "allowedUploadFiles";
    pub const MAX_FILE_SIZE: &str = "maxFileSize";
    pub const KEEP_USER_LOGGED_IN: &str = "keepUserLoggedIn";
    pub const USERNAME_IS_EMAIL: &str = "usernameIsEmail";
    pub const ALLOW_PASSWORD_RESET: &str = "allowPasswordReset";
    pub const LOGIN_BACKGROUND_IMAGE: &str = "loginBackgroundImage";
    pub const SHOW_USER_INVITE: &str = "showUserInvite";
    pub const CAN_SEND_REQUIRED_EMAIL: &str = "canSendRequiredEmail";
    pub const SHOW_ALLOW_SEGMENTATION: &str = "showAllowSegmentationForDocumentTypes";
}

/// Keys of the `application` group
pub mod application {
    pub const VERSION: &str = "version";
    pub const ASSEMBLY_VERSION: &str = "assemblyVersion";
    pub const CACHE_BUSTER: &str = "cacheBuster";
    pub const APPLICATION_PATH: &str = "applicationPath";
    pub const SERVER_TIME_OFFSET: &str = "serverTimeOffset";
}

/// Key of the `plugins` group
pub const TREES: &str = "trees";

/// Key of the `externalLogins` group
pub const PROVIDERS: &str = "providers";

/// Key of the `features` group
pub const DISABLED_FEATURES: &str = "disabledFeatures";
