//! # TencentCloud SDK core runtime for Rust
//!
//! This crate implements the parts of a TencentCloud Rust SDK that are
//! shared by every generated service client: TC3-HMAC-SHA256 request
//! signing, a pluggable credential provider chain, service/region endpoint
//! resolution, a request pipeline with retry and backoff, and offset/limit
//! pagination helpers. A small SMS service module is included as a worked
//! example of a client built on top of the pipeline.
//!
//! ## Basic usage
//!
//! ```rust,no_run
//! use tencentcloud_sdk_core::{Client, Credential, Region, ServiceConfig};
//! use tencentcloud_sdk_core::sms::{SendSmsRequest, SendSmsResponse};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credential = Credential::new("your_secret_id", "your_secret_key", None);
//!     let service_config = ServiceConfig::new(Region::new("ap-guangzhou"), "sms", "2021-01-11");
//!
//!     let client = Client::builder()
//!         .credential(credential)
//!         .service_config(service_config)
//!         .build()?;
//!
//!     let request = SendSmsRequest::new(
//!         vec!["+8613800000000".to_string()],
//!         "1400000000",
//!         "123456",
//!         "YourSignature",
//!         vec!["123456".to_string()],
//!     );
//!
//!     let response: SendSmsResponse = client.call("SendSms", &request).await?;
//!     println!("SMS sent: {:?}", response);
//!
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod error;
pub mod sms;

// Re-export main types for convenient usage
pub use crate::core::{
    paginate_fold, ChainProvider, Client, ClientBuilder, ClientProfile, Credential,
    CredentialProvider, DefaultRetryPolicy, EndpointPreference, EnvCredentialProvider,
    HttpProfile, NullCredentialProvider, Paginator, ProfileFileCredentialProvider, Region,
    sign_v1_query, RetryDecision, RetryPolicy, ServiceConfig, SignedHeaders, Signer, SigningMode,
    StaticCredentialProvider, TCPagedResponse, TCPaginatedRequest, TemporaryCredentialProvider,
    V1Algorithm,
};
pub use crate::error::{
    ClientErrorKind, CredentialProviderErrorKind, ErrorTable, PaginationErrorKind, Result,
    SignerErrorKind, TencentCloudError,
};
pub use crate::sms::{SendSmsRequest, SendSmsResponse, SendStatus};
