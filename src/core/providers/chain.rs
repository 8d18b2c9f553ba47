//! Tries a sequence of providers in order and caches whichever one
//! succeeds first, in the style of the AWS/S3 default credential chain.

use super::CredentialProvider;
use crate::core::credential::Credential;
use crate::error::{CredentialProviderErrorKind, Result, TencentCloudError};
use async_trait::async_trait;
use chrono::Duration;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// Default window before expiry at which a cached credential is considered
/// stale and the chain is retried.
const DEFAULT_REFRESH_WINDOW_SECS: i64 = 60;

/// Tries each provider in order on a cache miss, keeping whichever
/// credential the first successful provider returns until it is close to
/// expiring. Concurrent callers reading a still-valid cached credential
/// never block; concurrent refreshes coalesce onto the same walk, same as
/// [`super::TemporaryCredentialProvider`].
pub struct ChainProvider {
    providers: Vec<Arc<dyn CredentialProvider>>,
    refresh_window: Duration,
    cache: RwLock<Option<Credential>>,
    refresh_lock: Mutex<()>,
}

impl ChainProvider {
    /// Build a chain that tries `providers` in order.
    pub fn new(providers: Vec<Arc<dyn CredentialProvider>>) -> Self {
        Self {
            providers,
            refresh_window: Duration::seconds(DEFAULT_REFRESH_WINDOW_SECS),
            cache: RwLock::new(None),
            refresh_lock: Mutex::new(()),
        }
    }

    /// Override the default refresh window.
    pub fn with_refresh_window(mut self, window: Duration) -> Self {
        self.refresh_window = window;
        self
    }

    /// Walk the chain in order. Only a [`CredentialProviderErrorKind::NoProvider`]
    /// (or its equivalent) from a provider causes the walk to continue to
    /// the next one — any other error (a malformed profile file, say) is a
    /// real failure and aborts immediately.
    async fn resolve(&self) -> Result<Credential> {
        for provider in &self.providers {
            match provider.get_credential().await {
                Ok(cred) => return Ok(cred),
                Err(TencentCloudError::CredentialProvider(CredentialProviderErrorKind::NoProvider)) => {
                    continue;
                }
                Err(other) => return Err(other),
            }
        }
        Err(CredentialProviderErrorKind::NoProvider.into())
    }

    async fn cached_if_fresh(&self) -> Option<Credential> {
        let guard = self.cache.read().await;
        guard
            .as_ref()
            .filter(|cred| !cred.is_expiring(self.refresh_window))
            .cloned()
    }
}

#[async_trait]
impl CredentialProvider for ChainProvider {
    async fn get_credential(&self) -> Result<Credential> {
        if let Some(cred) = self.cached_if_fresh().await {
            return Ok(cred);
        }

        // Coalesce concurrent refreshes onto one walk of the chain; the
        // cache itself is only ever locked for the read/write above and
        // below, never across the provider calls in `resolve`.
        let _refresh_guard = self.refresh_lock.lock().await;
        if let Some(cred) = self.cached_if_fresh().await {
            return Ok(cred);
        }

        let fresh = self.resolve().await?;
        *self.cache.write().await = Some(fresh.clone());
        Ok(fresh)
    }

    async fn shutdown(&self) {
        let _refresh_guard = self.refresh_lock.lock().await;
        for provider in &self.providers {
            provider.shutdown().await;
        }
    }
}
