//! A provider that never produces a credential.
//!
//! Used as the tail of a [`super::ChainProvider`] so the chain's error
//! always reads as "no provider could supply a credential" rather than
//! whatever the last real provider happened to fail with.

use super::CredentialProvider;
use crate::core::credential::Credential;
use crate::error::{CredentialProviderErrorKind, Result};
use async_trait::async_trait;

/// Always returns [`CredentialProviderErrorKind::NoProvider`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCredentialProvider;

impl NullCredentialProvider {
    /// Create a new null provider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CredentialProvider for NullCredentialProvider {
    async fn get_credential(&self) -> Result<Credential> {
        Err(CredentialProviderErrorKind::NoProvider.into())
    }
}
