//! Configuration profiles for HTTP and client settings

use std::time::Duration;

/// HTTP configuration profile
#[derive(Debug, Clone)]
pub struct HttpProfile {
    /// HTTP request method (GET, POST)
    pub req_method: String,
    /// API endpoint URL
    pub endpoint: String,
    /// Request timeout in seconds
    pub req_timeout: u64,
    /// Connection timeout in seconds
    pub connect_timeout: u64,
    /// Keep-alive setting
    pub keep_alive: bool,
    /// Proxy host (optional)
    pub proxy_host: Option<String>,
    /// Proxy port (optional)
    pub proxy_port: Option<u16>,
    /// User-Agent header
    pub user_agent: String,
}

impl HttpProfile {
    /// Create a new HTTP profile with default settings
    pub fn new() -> Self {
        Self {
            req_method: "POST".to_string(),
            endpoint: "sms.tencentcloudapi.com".to_string(),
            req_timeout: 60,
            connect_timeout: 60,
            keep_alive: false,
            proxy_host: None,
            proxy_port: None,
            user_agent: "TencentCloud-SDK-Rust/1.0.0".to_string(),
        }
    }

    /// Set the HTTP request method
    pub fn set_req_method<S: Into<String>>(&mut self, method: S) -> &mut Self {
        self.req_method = method.into();
        self
    }

    /// Set the API endpoint
    pub fn set_endpoint<S: Into<String>>(&mut self, endpoint: S) -> &mut Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the request timeout in seconds
    pub fn set_req_timeout(&mut self, timeout: u64) -> &mut Self {
        self.req_timeout = timeout;
        self
    }

    /// Set the connection timeout in seconds
    pub fn set_connect_timeout(&mut self, timeout: u64) -> &mut Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the keep-alive setting
    pub fn set_keep_alive(&mut self, keep_alive: bool) -> &mut Self {
        self.keep_alive = keep_alive;
        self
    }

    /// Set the proxy host
    pub fn set_proxy_host<S: Into<String>>(&mut self, host: Option<S>) -> &mut Self {
        self.proxy_host = host.map(|h| h.into());
        self
    }

    /// Set the proxy port
    pub fn set_proxy_port(&mut self, port: Option<u16>) -> &mut Self {
        self.proxy_port = port;
        self
    }

    /// Set the User-Agent header
    pub fn set_user_agent<S: Into<String>>(&mut self, user_agent: S) -> &mut Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Get the full endpoint URL with protocol
    pub fn get_full_endpoint(&self) -> String {
        if self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://") {
            self.endpoint.clone()
        } else {
            format!("https://{}", self.endpoint)
        }
    }

    /// Get request timeout as Duration
    pub fn get_req_timeout(&self) -> Duration {
        Duration::from_secs(self.req_timeout)
    }

    /// Get connection timeout as Duration
    pub fn get_connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout)
    }

    /// Check if proxy is configured
    pub fn has_proxy(&self) -> bool {
        self.proxy_host.is_some() && self.proxy_port.is_some()
    }

    /// Get proxy URL if configured
    pub fn get_proxy_url(&self) -> Option<String> {
        if let (Some(host), Some(port)) = (&self.proxy_host, self.proxy_port) {
            Some(format!("http://{}:{}", host, port))
        } else {
            None
        }
    }
}

impl Default for HttpProfile {
    fn default() -> Self {
        Self::new()
    }
}

/// Client configuration profile
#[derive(Debug, Clone)]
pub struct ClientProfile {
    /// HTTP profile for request settings
    pub http_profile: HttpProfile,
    /// Signature method (default: HmacSHA256)
    pub sign_method: String,
    /// API version
    pub api_version: String,
    /// Language for error messages
    pub language: String,
    /// Debug mode
    pub debug: bool,
}

impl ClientProfile {
    /// Create a new client profile with default settings
    pub fn new() -> Self {
        Self {
            http_profile: HttpProfile::new(),
            sign_method: "HmacSHA256".to_string(),
            api_version: "2021-01-11".to_string(),
            language: "en-US".to_string(),
            debug: false,
        }
    }

    /// Create a new client profile with custom HTTP profile
    pub fn with_http_profile(http_profile: HttpProfile) -> Self {
        Self {
            http_profile,
            sign_method: "HmacSHA256".to_string(),
            api_version: "2021-01-11".to_string(),
            language: "en-US".to_string(),
            debug: false,
        }
    }

    /// Set the HTTP profile
    pub fn set_http_profile(&mut self, profile: HttpProfile) -> &mut Self {
        self.http_profile = profile;
        self
    }

    /// Set the signature method
    pub fn set_sign_method<S: Into<String>>(&mut self, method: S) -> &mut Self {
        self.sign_method = method.into();
        self
    }

    /// Set the API version
    pub fn set_api_version<S: Into<String>>(&mut self, version: S) -> &mut Self {
        self.api_version = version.into();
        self
    }

    /// Set the language
    pub fn set_language<S: Into<String>>(&mut self, language: S) -> &mut Self {
        self.language = language.into();
        self
    }

    /// Set the debug mode
    pub fn set_debug(&mut self, debug: bool) -> &mut Self {
        self.debug = debug;
        self
    }

    /// Get the HTTP profile
    pub fn get_http_profile(&self) -> &HttpProfile {
        &self.http_profile
    }

    /// Get the signature method
    pub fn get_sign_method(&self) -> &str {
        &self.sign_method
    }

    /// Get the API version
    pub fn get_api_version(&self) -> &str {
        &self.api_version
    }

    /// Get the language
    pub fn get_language(&self) -> &str {
        &self.language
    }

    /// Check if debug mode is enabled
    pub fn is_debug(&self) -> bool {
        self.debug
    }
}

impl Default for ClientProfile {
    fn default() -> Self {
        Self::new()
    }
}

/// An opaque, string-valued region tag (e.g. `ap-guangzhou`).
///
/// Regions whose name ends in `-fsi` are "isolated": they are never
/// reachable through the global `{service}.tencentcloudapi.com` endpoint
/// and always resolve to `{region}.tencentcloudapi.com`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Region(String);

impl Region {
    /// `ap-guangzhou`
    pub const AP_GUANGZHOU: &'static str = "ap-guangzhou";
    /// `ap-beijing`
    pub const AP_BEIJING: &'static str = "ap-beijing";
    /// `ap-shanghai`
    pub const AP_SHANGHAI: &'static str = "ap-shanghai";
    /// `ap-shanghai-fsi` (isolated)
    pub const AP_SHANGHAI_FSI: &'static str = "ap-shanghai-fsi";
    /// `na-siliconvalley`
    pub const NA_SILICONVALLEY: &'static str = "na-siliconvalley";

    /// Wrap any region name.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self(name.into())
    }

    /// Read `TENCENTCLOUD_REGION` from the environment.
    pub fn from_env() -> Option<Self> {
        std::env::var("TENCENTCLOUD_REGION").ok().map(Self)
    }

    /// The raw region string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `true` if this region's name ends in `-fsi`.
    pub fn is_isolated(&self) -> bool {
        self.0.ends_with("-fsi")
    }

    /// Compute the API hostname for `service`, honoring the
    /// `preferring_regional` override and the isolation rule.
    pub fn hostname(&self, service: &str, preferring_regional: bool) -> String {
        if self.is_isolated() || preferring_regional {
            format!("{}.{}.tencentcloudapi.com", service, self.0)
        } else {
            format!("{}.tencentcloudapi.com", service)
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Region {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Region {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// How a service's endpoint is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndpointPreference {
    /// `{service}.tencentcloudapi.com`, unless the region is isolated.
    Global,
    /// `{service}.{region}.tencentcloudapi.com` regardless of isolation.
    Regional,
    /// A fixed URL, regardless of region.
    Custom(String),
}

/// Language for server-side error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    /// `zh-CN`
    ZhCn,
    /// `en-US`
    EnUs,
}

impl Language {
    /// The wire representation of this language tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::ZhCn => "zh-CN",
            Language::EnUs => "en-US",
        }
    }
}

/// Immutable per-service configuration: region, service name, API version,
/// endpoint preference, and request timeout. `ServiceConfig::with` returns a
/// patched copy, matching the "copy-with-patch" shape used across this
/// crate's other profile types.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Region this service call targets.
    pub region: Region,
    /// Short service name, e.g. `cvm`, `sms`.
    pub service: String,
    /// API version, e.g. `2017-03-12`.
    pub api_version: String,
    /// Optional language for error messages.
    pub language: Option<Language>,
    /// How the endpoint for this service is resolved.
    pub endpoint_preference: EndpointPreference,
    /// Overall per-call timeout.
    pub request_timeout: std::time::Duration,
}

impl ServiceConfig {
    /// Default request timeout: 20 seconds, per spec.
    pub const DEFAULT_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(20);

    /// Create a new service config with `EndpointPreference::Global`.
    pub fn new<S: Into<String>>(region: Region, service: S, api_version: S) -> Self {
        Self {
            region,
            service: service.into(),
            api_version: api_version.into(),
            language: None,
            endpoint_preference: EndpointPreference::Global,
            request_timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Resolve the URL this service config's calls should be sent to.
    ///
    /// Invariant (spec §3): `Custom(u)` always resolves to `u`; otherwise the
    /// host is `{service}.tencentcloudapi.com` unless the region is isolated
    /// or `Regional` is requested, in which case it is
    /// `{service}.{region}.tencentcloudapi.com`.
    pub fn resolve_endpoint(&self) -> String {
        match &self.endpoint_preference {
            EndpointPreference::Custom(url) => url.clone(),
            EndpointPreference::Regional => {
                format!("https://{}", self.region.hostname(&self.service, true))
            }
            EndpointPreference::Global => {
                format!("https://{}", self.region.hostname(&self.service, false))
            }
        }
    }

    /// Return a copy of this config with `region` replaced. If the current
    /// endpoint preference is not `Custom`, the endpoint is implicitly
    /// recomputed against the new region on next `resolve_endpoint()` call.
    pub fn with_region(&self, region: Region) -> Self {
        Self {
            region,
            ..self.clone()
        }
    }

    /// Return a copy of this config with `language` replaced.
    pub fn with_language(&self, language: Option<Language>) -> Self {
        Self {
            language,
            ..self.clone()
        }
    }

    /// Return a copy of this config with `endpoint_preference` replaced.
    pub fn with_endpoint_preference(&self, preference: EndpointPreference) -> Self {
        Self {
            endpoint_preference: preference,
            ..self.clone()
        }
    }

    /// Return a copy of this config with `request_timeout` replaced.
    pub fn with_timeout(&self, timeout: std::time::Duration) -> Self {
        Self {
            request_timeout: timeout,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod service_config_tests {
    use super::*;

    #[test]
    fn test_isolated_region_overrides_global() {
        let config = ServiceConfig::new(Region::new("ap-shanghai-fsi"), "cvm", "2017-03-12");
        assert_eq!(
            config.resolve_endpoint(),
            "https://cvm.ap-shanghai-fsi.tencentcloudapi.com"
        );
    }

    #[test]
    fn test_global_region_no_suffix() {
        let config = ServiceConfig::new(Region::new("ap-guangzhou"), "cvm", "2017-03-12");
        assert_eq!(config.resolve_endpoint(), "https://cvm.tencentcloudapi.com");
    }

    #[test]
    fn test_custom_endpoint_wins_regardless_of_region() {
        let config = ServiceConfig::new(Region::new("ap-guangzhou"), "cvm", "2017-03-12")
            .with_endpoint_preference(EndpointPreference::Custom("https://x".to_string()));
        assert_eq!(config.resolve_endpoint(), "https://x");
    }

    #[test]
    fn test_regional_preference_forces_region_in_host() {
        let config = ServiceConfig::new(Region::new("ap-guangzhou"), "cvm", "2017-03-12")
            .with_endpoint_preference(EndpointPreference::Regional);
        assert_eq!(
            config.resolve_endpoint(),
            "https://cvm.ap-guangzhou.tencentcloudapi.com"
        );
    }

    #[test]
    fn test_with_region_recomputes_endpoint() {
        let config = ServiceConfig::new(Region::new("ap-guangzhou"), "cvm", "2017-03-12");
        let moved = config.with_region(Region::new("ap-shanghai-fsi"));
        assert_eq!(
            moved.resolve_endpoint(),
            "https://cvm.ap-shanghai-fsi.tencentcloudapi.com"
        );
    }

    #[test]
    fn test_region_is_isolated() {
        assert!(Region::new("ap-shanghai-fsi").is_isolated());
        assert!(!Region::new("ap-guangzhou").is_isolated());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_profile_defaults() {
        let profile = HttpProfile::new();
        assert_eq!(profile.req_method, "POST");
        assert_eq!(profile.endpoint, "sms.tencentcloudapi.com");
        assert_eq!(profile.req_timeout, 60);
        assert_eq!(profile.connect_timeout, 60);
        assert!(!profile.keep_alive);
        assert!(profile.proxy_host.is_none());
        assert!(profile.proxy_port.is_none());
    }

    #[test]
    fn test_http_profile_configuration() {
        let mut profile = HttpProfile::new();
        profile
            .set_req_method("GET")
            .set_endpoint("custom.endpoint.com")
            .set_req_timeout(30)
            .set_connect_timeout(30)
            .set_keep_alive(true)
            .set_proxy_host(Some("proxy.example.com"))
            .set_proxy_port(Some(8080));

        assert_eq!(profile.req_method, "GET");
        assert_eq!(profile.endpoint, "custom.endpoint.com");
        assert_eq!(profile.req_timeout, 30);
        assert_eq!(profile.connect_timeout, 30);
        assert!(profile.keep_alive);
        assert_eq!(profile.proxy_host, Some("proxy.example.com".to_string()));
        assert_eq!(profile.proxy_port, Some(8080));
    }

    #[test]
    fn test_http_profile_full_endpoint() {
        let mut profile = HttpProfile::new();
        assert_eq!(profile.get_full_endpoint(), "https://sms.tencentcloudapi.com");

        profile.set_endpoint("http://custom.endpoint.com");
        assert_eq!(profile.get_full_endpoint(), "http://custom.endpoint.com");

        profile.set_endpoint("https://custom.endpoint.com");
        assert_eq!(profile.get_full_endpoint(), "https://custom.endpoint.com");
    }

    #[test]
    fn test_http_profile_proxy() {
        let mut profile = HttpProfile::new();
        assert!(!profile.has_proxy());
        assert!(profile.get_proxy_url().is_none());

        profile.set_proxy_host(Some("proxy.example.com"));
        assert!(!profile.has_proxy()); // Still false because port is not set

        profile.set_proxy_port(Some(8080));
        assert!(profile.has_proxy());
        assert_eq!(profile.get_proxy_url(), Some("http://proxy.example.com:8080".to_string()));
    }

    #[test]
    fn test_client_profile_defaults() {
        let profile = ClientProfile::new();
        assert_eq!(profile.sign_method, "HmacSHA256");
        assert_eq!(profile.api_version, "2021-01-11");
        assert_eq!(profile.language, "en-US");
        assert!(!profile.debug);
    }

    #[test]
    fn test_client_profile_configuration() {
        let mut profile = ClientProfile::new();
        profile
            .set_sign_method("HmacSHA1")
            .set_api_version("2019-07-11")
            .set_language("zh-CN")
            .set_debug(true);

        assert_eq!(profile.sign_method, "HmacSHA1");
        assert_eq!(profile.api_version, "2019-07-11");
        assert_eq!(profile.language, "zh-CN");
        assert!(profile.debug);
    }
}