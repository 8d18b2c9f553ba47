//! A provider that reads credentials from the process environment.

use super::CredentialProvider;
use crate::core::credential::Credential;
use crate::error::{CredentialProviderErrorKind, Result};
use async_trait::async_trait;

/// Reads `TENCENTCLOUD_SECRET_ID`/`TC_SECRET_ID`,
/// `TENCENTCLOUD_SECRET_KEY`/`TC_SECRET_KEY`, and the optional
/// `TENCENTCLOUD_TOKEN`/`TC_TOKEN` on every call. Environment variables can
/// change between calls (tests commonly do this), so nothing is cached.
#[derive(Debug, Clone, Default)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new environment-variable provider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CredentialProvider for EnvCredentialProvider {
    async fn get_credential(&self) -> Result<Credential> {
        // Missing env vars mean this provider has no credential to offer,
        // not that one was found and is broken — a chain must keep trying
        // the next provider rather than abort on this.
        Credential::from_env().map_err(|_| CredentialProviderErrorKind::NoProvider.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[tokio::test]
    async fn test_reads_from_environment() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var("TENCENTCLOUD_SECRET_ID", "envid");
        std::env::set_var("TENCENTCLOUD_SECRET_KEY", "envkey");
        std::env::remove_var("TENCENTCLOUD_TOKEN");
        std::env::remove_var("TC_TOKEN");

        let provider = EnvCredentialProvider::new();
        let cred = provider.get_credential().await.unwrap();
        assert_eq!(cred.secret_id(), "envid");
        assert_eq!(cred.secret_key(), "envkey");

        std::env::remove_var("TENCENTCLOUD_SECRET_ID");
        std::env::remove_var("TENCENTCLOUD_SECRET_KEY");
    }

    #[tokio::test]
    async fn test_missing_env_is_error() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::remove_var("TENCENTCLOUD_SECRET_ID");
        std::env::remove_var("TC_SECRET_ID");
        std::env::remove_var("TENCENTCLOUD_SECRET_KEY");
        std::env::remove_var("TC_SECRET_KEY");

        let provider = EnvCredentialProvider::new();
        assert!(provider.get_credential().await.is_err());
    }
}
