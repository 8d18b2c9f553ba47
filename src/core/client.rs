//! The request pipeline: encode, sign, dispatch, decode, classify, retry.

use crate::core::credential::Credential;
use crate::core::profile::{HttpProfile, ServiceConfig};
use crate::core::providers::{CredentialProvider, StaticCredentialProvider};
use crate::core::signature::{SignedHeaders, Signer, SigningMode};
use crate::error::{ClientErrorKind, Result, TencentCloudError};
use rand::Rng;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// What a [`RetryPolicy`] wants the pipeline to do after a failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Wait `delay`, then retry.
    Retry(Duration),
    /// Give up and return the error to the caller.
    Stop,
}

/// Decides whether a failed request attempt should be retried.
pub trait RetryPolicy: Send + Sync {
    /// `attempt` is 1 on the first retry decision (i.e. after the first
    /// failed call).
    fn decide(&self, error: &TencentCloudError, attempt: u32) -> RetryDecision;
}

/// Exponential backoff with full jitter, capped, retrying only transport
/// failures and the classic retryable HTTP statuses
/// (429, 500, 502, 503, 504).
pub struct DefaultRetryPolicy {
    max_retries: u32,
    base_delay: Duration,
    max_delay: Duration,
}

impl DefaultRetryPolicy {
    /// 4 retries, 100ms base, 20s cap.
    pub fn new() -> Self {
        Self {
            max_retries: 4,
            base_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(20),
        }
    }

    /// Build a policy with explicit limits.
    pub fn with_limits(max_retries: u32, base_delay: Duration, max_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
            max_delay,
        }
    }
}

impl Default for DefaultRetryPolicy {
    fn default() -> Self {
        Self::new()
    }
}

fn is_retryable(error: &TencentCloudError) -> bool {
    match error {
        TencentCloudError::Network(_) => true,
        TencentCloudError::Timeout(_) => true,
        TencentCloudError::Raw { status, .. } => {
            matches!(status, 429 | 500 | 502 | 503 | 504)
        }
        _ => false,
    }
}

impl RetryPolicy for DefaultRetryPolicy {
    fn decide(&self, error: &TencentCloudError, attempt: u32) -> RetryDecision {
        if attempt > self.max_retries || !is_retryable(error) {
            return RetryDecision::Stop;
        }
        let exponential = self
            .base_delay
            .as_millis()
            .saturating_mul(1u128 << attempt.saturating_sub(1).min(20));
        let capped = exponential.min(self.max_delay.as_millis());
        let jittered = if capped == 0 {
            0
        } else {
            rand::thread_rng().gen_range(0..=capped)
        };
        RetryDecision::Retry(Duration::from_millis(jittered as u64))
    }
}

/// Builds a [`Client`].
pub struct ClientBuilder {
    credential_provider: Option<Arc<dyn CredentialProvider>>,
    service_config: Option<ServiceConfig>,
    http_profile: HttpProfile,
    retry_policy: Arc<dyn RetryPolicy>,
    signing_mode: SigningMode,
    debug: bool,
}

impl ClientBuilder {
    /// Start an empty builder.
    pub fn new() -> Self {
        Self {
            credential_provider: None,
            service_config: None,
            http_profile: HttpProfile::new(),
            retry_policy: Arc::new(DefaultRetryPolicy::new()),
            signing_mode: SigningMode::Default,
            debug: false,
        }
    }

    /// Use a fixed credential. Equivalent to
    /// `credential_provider(Arc::new(StaticCredentialProvider::new(cred)))`.
    pub fn credential(self, credential: Credential) -> Self {
        self.credential_provider(Arc::new(StaticCredentialProvider::new(credential)))
    }

    /// Resolve credentials through `provider` on every call.
    pub fn credential_provider(mut self, provider: Arc<dyn CredentialProvider>) -> Self {
        self.credential_provider = Some(provider);
        self
    }

    /// Set the target service, region, and endpoint preference.
    pub fn service_config(mut self, config: ServiceConfig) -> Self {
        self.service_config = Some(config);
        self
    }

    /// Override transport settings (proxy, keep-alive, user agent).
    pub fn http_profile(mut self, profile: HttpProfile) -> Self {
        self.http_profile = profile;
        self
    }

    /// Override the default retry policy.
    pub fn retry_policy(mut self, policy: Arc<dyn RetryPolicy>) -> Self {
        self.retry_policy = policy;
        self
    }

    /// Override the signing mode (default: [`SigningMode::Default`]).
    pub fn signing_mode(mut self, mode: SigningMode) -> Self {
        self.signing_mode = mode;
        self
    }

    /// Log request/response bodies at debug level.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<Client> {
        let credential_provider = self
            .credential_provider
            .ok_or_else(|| TencentCloudError::config("client requires a credential provider"))?;
        let service_config = self
            .service_config
            .ok_or_else(|| TencentCloudError::config("client requires a service config"))?;

        let mut builder = reqwest::Client::builder()
            .timeout(service_config.request_timeout)
            .connect_timeout(self.http_profile.get_connect_timeout())
            .tcp_keepalive(if self.http_profile.keep_alive {
                Some(Duration::from_secs(60))
            } else {
                None
            })
            .user_agent(&self.http_profile.user_agent);

        if let Some(proxy_url) = self.http_profile.get_proxy_url() {
            if let Ok(proxy) = reqwest::Proxy::all(&proxy_url) {
                builder = builder.proxy(proxy);
            }
        }

        let http_client = builder
            .build()
            .map_err(|e| TencentCloudError::config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Client {
            credential_provider,
            service_config,
            http_client,
            retry_policy: self.retry_policy,
            signing_mode: self.signing_mode,
            debug: self.debug,
            request_counter: Arc::new(AtomicU64::new(0)),
            shutdown: Arc::new(AtomicBool::new(false)),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A configured client for one TencentCloud service in one region.
///
/// Cloning is cheap: the credential provider, HTTP client, and retry policy
/// are all shared behind `Arc` / `reqwest::Client`'s own internal `Arc`.
pub struct Client {
    credential_provider: Arc<dyn CredentialProvider>,
    service_config: ServiceConfig,
    http_client: reqwest::Client,
    retry_policy: Arc<dyn RetryPolicy>,
    signing_mode: SigningMode,
    debug: bool,
    request_counter: Arc<AtomicU64>,
    shutdown: Arc<AtomicBool>,
}

impl Client {
    /// Start building a client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// The service config this client was built with.
    pub fn service_config(&self) -> &ServiceConfig {
        &self.service_config
    }

    /// Shut the client down: drains the credential provider's in-flight
    /// refreshes and marks the client so every subsequent [`Client::call`]
    /// fails immediately with [`ClientErrorKind::AlreadyShutdown`] instead
    /// of attempting a request.
    pub async fn shutdown(&self) -> Result<()> {
        self.shutdown.store(true, Ordering::SeqCst);
        self.credential_provider.shutdown().await;
        Ok(())
    }

    /// Invoke `action` with `request`, retrying per this client's
    /// [`RetryPolicy`] until it succeeds, exhausts its retries, or hits a
    /// non-retryable error.
    pub async fn call<Req, Resp>(&self, action: &str, request: &Req) -> Result<Resp>
    where
        Req: serde::Serialize,
        Resp: serde::de::DeserializeOwned,
    {
        if self.shutdown.load(Ordering::SeqCst) {
            return Err(ClientErrorKind::AlreadyShutdown.into());
        }

        let request_id = self.request_counter.fetch_add(1, Ordering::Relaxed) + 1;
        let mut attempt: u32 = 0;
        loop {
            match self.try_once(action, request).await {
                Ok(response) => {
                    if self.debug {
                        log::debug!(
                            "tc-service={} tc-action={} tc-request-id={}",
                            self.service_config.service,
                            action,
                            request_id,
                        );
                    }
                    return Ok(response);
                }
                Err(error) => {
                    attempt += 1;
                    match self.retry_policy.decide(&error, attempt) {
                        RetryDecision::Retry(delay) => {
                            if self.debug {
                                log::debug!(
                                    "tc-service={} tc-action={} tc-request-id={} tc-error={} retrying after {:?} (attempt {})",
                                    self.service_config.service,
                                    action,
                                    request_id,
                                    error,
                                    delay,
                                    attempt,
                                );
                            }
                            tokio::time::sleep(delay).await;
                        }
                        RetryDecision::Stop => {
                            log::warn!(
                                "tc-service={} tc-action={} tc-request-id={} tc-error={}",
                                self.service_config.service,
                                action,
                                request_id,
                                error,
                            );
                            return Err(error);
                        }
                    }
                }
            }
        }
    }

    async fn try_once<Req, Resp>(&self, action: &str, request: &Req) -> Result<Resp>
    where
        Req: serde::Serialize,
        Resp: serde::de::DeserializeOwned,
    {
        let credential = self.credential_provider.get_credential().await?;
        credential.validate()?;

        let payload = serde_json::to_vec(request)?;
        let url = self.service_config.resolve_endpoint();
        let host = url::Url::parse(&url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .unwrap_or_default();
        let timestamp = chrono::Utc::now().timestamp();

        // Only content-type and host go into the signature, matching the
        // official TC3 vector (`SignedHeaders=content-type;host`). The
        // X-TC-* headers below are attached to the outgoing request but are
        // never part of what gets signed.
        let mut sign_headers = BTreeMap::new();
        sign_headers.insert("Content-Type".to_string(), "application/json".to_string());
        sign_headers.insert("Host".to_string(), host.clone());

        let signer = Signer::new(
            credential.secret_id().to_string(),
            credential.secret_key().to_string(),
            credential.token().map(str::to_string),
        );
        let SignedHeaders {
            authorization,
            timestamp: signed_timestamp,
            token,
            host: derived_host,
        } = signer.sign_headers(
            &url,
            "POST",
            &sign_headers,
            &payload,
            &self.service_config.service,
            self.signing_mode,
            false,
            timestamp,
        )?;

        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("Host".to_string(), derived_host.unwrap_or(host));
        headers.insert("X-TC-Action".to_string(), action.to_string());
        headers.insert(
            "X-TC-Version".to_string(),
            self.service_config.api_version.clone(),
        );
        headers.insert(
            "X-TC-Region".to_string(),
            self.service_config.region.as_str().to_string(),
        );
        headers.insert("X-TC-Timestamp".to_string(), signed_timestamp);
        if let Some(language) = self.service_config.language {
            headers.insert("X-TC-Language".to_string(), language.as_str().to_string());
        }
        headers.insert("Authorization".to_string(), authorization);
        if let Some(token) = token {
            headers.insert("X-TC-Token".to_string(), token);
        }

        if self.debug {
            log::debug!(
                "tc-service={} tc-action={} tc-credential-provider=configured request: {}",
                self.service_config.service,
                action,
                String::from_utf8_lossy(&payload)
            );
        }

        let mut request_builder = self.http_client.post(&url).body(payload);
        for (key, value) in &headers {
            request_builder = request_builder.header(key.as_str(), value.as_str());
        }

        let response = request_builder.send().await?;
        let status = response.status();
        let response_text = response.text().await?;

        if self.debug {
            log::debug!("response {} ({}): {}", action, status, response_text);
        }

        if !status.is_success() {
            return Err(TencentCloudError::raw(
                status.as_u16(),
                Some(response_text),
                None,
            ));
        }

        let response_json: serde_json::Value = serde_json::from_str(&response_text)?;

        if let Some(error) = response_json.get("Response").and_then(|r| r.get("Error")) {
            let code = error
                .get("Code")
                .and_then(|c| c.as_str())
                .unwrap_or("Unknown")
                .to_string();
            let message = error
                .get("Message")
                .and_then(|m| m.as_str())
                .unwrap_or("Unknown error")
                .to_string();
            let request_id = response_json
                .get("Response")
                .and_then(|r| r.get("RequestId"))
                .and_then(|r| r.as_str())
                .map(str::to_string);

            return Err(TencentCloudError::api_with_request_id(
                code,
                message,
                request_id,
            ));
        }

        let response_data = response_json
            .get("Response")
            .ok_or_else(|| TencentCloudError::other("response missing top-level Response field"))?;

        Ok(serde_json::from_value(response_data.clone())?)
    }
}
