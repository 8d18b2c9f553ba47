//! A provider that wraps an arbitrary async fetch function and caches its
//! result until it is close to expiring.
//!
//! Concurrent callers that arrive while a refresh is already running queue
//! on the same lock and are served the result that refresh produced, rather
//! than each independently hitting the token-issuing service.

use super::CredentialProvider;
use crate::core::credential::Credential;
use crate::error::Result;
use async_trait::async_trait;
use chrono::Duration;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

type Fetcher = Arc<dyn Fn() -> Pin<Box<dyn Future<Output = Result<Credential>> + Send>> + Send + Sync>;

/// Caches a temporary (STS-style) credential and coalesces concurrent
/// refreshes behind a single fetch. A still-valid cached credential is
/// served to readers immediately, never blocked behind an unrelated
/// refresh: `cache` is only ever locked for the read/write of its value,
/// while `refresh_lock` is what serializes concurrent fetches.
pub struct TemporaryCredentialProvider {
    fetcher: Fetcher,
    refresh_window: Duration,
    cache: RwLock<Option<Credential>>,
    refresh_lock: Mutex<()>,
}

impl TemporaryCredentialProvider {
    /// Build a provider around `fetcher`. A cached credential is considered
    /// stale, and refetched, once it is within `refresh_window` of its
    /// expiration (or immediately, for non-expiring credentials the fetcher
    /// happens to return).
    pub fn new<F, Fut>(fetcher: F, refresh_window: Duration) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Credential>> + Send + 'static,
    {
        Self {
            fetcher: Arc::new(move || Box::pin(fetcher())),
            refresh_window,
            cache: RwLock::new(None),
            refresh_lock: Mutex::new(()),
        }
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
impl CredentialProvider for TemporaryCredentialProvider {
    async fn get_credential(&self) -> Result<Credential> {
        if let Some(cred) = self.cached_if_fresh().await {
            return Ok(cred);
        }

        let _refresh_guard = self.refresh_lock.lock().await;
        if let Some(cred) = self.cached_if_fresh().await {
            return Ok(cred);
        }

        let fresh = (self.fetcher)().await?;
        *self.cache.write().await = Some(fresh.clone());
        Ok(fresh)
    }
}
