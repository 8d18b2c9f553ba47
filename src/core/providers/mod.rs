//! Pluggable credential sources.
//!
//! A [`CredentialProvider`] resolves a [`Credential`](crate::core::Credential)
//! lazily and asynchronously, so that fetching one can hit the network
//! (STS, a metadata service) without blocking construction of a client.

mod chain;
mod env_provider;
mod null_provider;
mod profile_file;
mod static_provider;
mod temporary;

pub use chain::ChainProvider;
pub use env_provider::EnvCredentialProvider;
pub use null_provider::NullCredentialProvider;
pub use profile_file::ProfileFileCredentialProvider;
pub use static_provider::StaticCredentialProvider;
pub use temporary::TemporaryCredentialProvider;

use crate::core::credential::Credential;
use crate::error::Result;
use async_trait::async_trait;

/// A source of credentials. Implementations decide internally whether to
/// cache, refresh, or re-derive the credential on every call.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// Resolve a credential, refreshing it first if necessary.
    async fn get_credential(&self) -> Result<Credential>;

    /// Release any resources held for future refreshes (in-flight HTTP
    /// calls, cached state). Called once, when the owning [`Client`] is
    /// shut down; `get_credential` is not expected to be called again
    /// afterward. The default no-op is correct for providers that hold
    /// nothing beyond a cache the process will drop anyway.
    ///
    /// [`Client`]: crate::core::Client
    async fn shutdown(&self) {}
}
