//! A provider that always hands back the same credential it was built with.

use super::CredentialProvider;
use crate::core::credential::Credential;
use crate::error::Result;
use async_trait::async_trait;

/// Wraps a fixed [`Credential`]. Used when the caller already has secrets in
/// hand and does not want any provider-chain resolution.
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    credential: Credential,
}

impl StaticCredentialProvider {
    /// Wrap `credential` for use as a provider.
    pub fn new(credential: Credential) -> Self {
        Self { credential }
    }
}

#[async_trait]
impl CredentialProvider for StaticCredentialProvider {
    async fn get_credential(&self) -> Result<Credential> {
        Ok(self.credential.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_returns_wrapped_credential() {
        let cred = Credential::new("id", "key", None);
        let provider = StaticCredentialProvider::new(cred.clone());
        assert_eq!(provider.get_credential().await.unwrap(), cred);
    }
}
