//! Core components for the TencentCloud SDK runtime

pub mod client;
pub mod credential;
pub mod pagination;
pub mod profile;
pub mod providers;
pub mod signature;

pub use client::{Client, ClientBuilder, DefaultRetryPolicy, RetryDecision, RetryPolicy};
pub use credential::Credential;
pub use pagination::{paginate_fold, Paginator, TCPagedResponse, TCPaginatedRequest};
pub use profile::{ClientProfile, EndpointPreference, HttpProfile, Region, ServiceConfig};
pub use providers::{
    ChainProvider, CredentialProvider, EnvCredentialProvider, NullCredentialProvider,
    ProfileFileCredentialProvider, StaticCredentialProvider, TemporaryCredentialProvider,
};
pub use signature::{sign_v1_query, SignedHeaders, Signer, SigningMode, V1Algorithm};
