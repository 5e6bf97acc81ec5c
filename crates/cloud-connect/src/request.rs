//! Vendor request defaults

use cloud_connect_http::ApiRequestBuilder;

/// Default API host
pub const DEFAULT_HOST: &str = "dashboard.munic.io/api";
/// Default API version segment
pub const DEFAULT_VERSION: &str = "v2";
/// Default API port
pub const DEFAULT_PORT: u16 = 443;
/// Default URI scheme
pub const DEFAULT_SCHEME: &str = "https";

/// Base address every operation's request starts from.
///
/// Defaults to the vendor dashboard; overriding it (e.g. to point at a mock
/// server in tests) changes where requests go without touching the facade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBase {
    /// URI scheme
    pub scheme: String,
    /// API host
    pub host: String,
    /// API port
    pub port: u16,
    /// API version segment
    pub version: String,
}

impl Default for ApiBase {
    fn default() -> Self {
        Self {
            scheme: DEFAULT_SCHEME.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            version: DEFAULT_VERSION.to_string(),
        }
    }
}

impl ApiBase {
    /// A request builder pre-seeded with this base; every seeded field can
    /// still be overridden through the builder's normal setters.
    pub fn builder(&self) -> ApiRequestBuilder {
        ApiRequestBuilder::new()
            .scheme(self.scheme.as_str())
            .host(self.host.as_str())
            .port(self.port)
            .version(self.version.as_str())
    }
}

/// A request builder seeded with the vendor defaults
pub fn api_builder() -> ApiRequestBuilder {
    ApiBase::default().builder()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_default_settings_if_none_are_supplied() {
        let request = api_builder().build();

        assert_eq!(request.host(), Some("dashboard.munic.io/api"));
        assert_eq!(request.port(), Some(443));
        assert_eq!(request.version(), Some("v2"));
        assert_eq!(request.scheme(), Some("https"));
        assert!(request.headers().is_none());
        assert!(request.path().is_none());
        assert!(request.query_parameters().is_none());
        assert!(request.body_parameters().is_none());
    }

    #[test]
    fn can_overwrite_default_parameters() {
        let request = api_builder()
            .host("dashboard.munic.io")
            .version("v3")
            .build();

        assert_eq!(request.host(), Some("dashboard.munic.io"));
        assert_eq!(request.port(), Some(443));
        assert_eq!(request.version(), Some("v3"));
        assert_eq!(request.scheme(), Some("https"));
    }
}
