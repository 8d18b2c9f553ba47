//! A provider that reads credentials from an INI-style profile file, in the
//! style of the AWS/S3 `~/.aws/credentials` convention.

use super::CredentialProvider;
use crate::core::credential::Credential;
use crate::error::{CredentialProviderErrorKind, Result, TencentCloudError};
use async_trait::async_trait;
use ini::Ini;
use std::path::PathBuf;

/// Reads `secret_id`, `secret_key`, and an optional `token` out of a named
/// section of an INI file, defaulting to `~/.tencentcloud/credentials` and
/// the `default` profile.
#[derive(Debug, Clone)]
pub struct ProfileFileCredentialProvider {
    path: PathBuf,
    profile: String,
}

impl ProfileFileCredentialProvider {
    /// Use the default path (`~/.tencentcloud/credentials`) and the
    /// `default` profile section.
    pub fn new() -> Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| TencentCloudError::config("could not determine home directory"))?;
        Ok(Self {
            path: home.join(".tencentcloud").join("credentials"),
            profile: "default".to_string(),
        })
    }

    /// Use an explicit file path and profile section.
    pub fn with_path<S: Into<String>>(path: PathBuf, profile: S) -> Self {
        Self {
            path,
            profile: profile.into(),
        }
    }
}

#[async_trait]
impl CredentialProvider for ProfileFileCredentialProvider {
    async fn get_credential(&self) -> Result<Credential> {
        let path = self.path.clone();
        let profile = self.profile.clone();
        tokio::task::spawn_blocking(move || read_profile(&path, &profile))
            .await
            .map_err(|e| TencentCloudError::other(format!("profile file task panicked: {}", e)))?
    }
}

fn read_profile(path: &std::path::Path, profile: &str) -> Result<Credential> {
    // A file that can't be opened (missing, unreadable) means this
    // provider has nothing to offer — the chain should move on to the
    // next provider. A file that opens but is malformed is a real error:
    // the source exists and is broken, so the chain must abort.
    let ini = Ini::load_from_file(path).map_err(|_| CredentialProviderErrorKind::NoProvider)?;

    let section = ini
        .section(Some(profile))
        .ok_or(CredentialProviderErrorKind::InvalidCredentials)?;

    let secret_id = section
        .get("secret_id")
        .ok_or(CredentialProviderErrorKind::InvalidCredentials)?
        .to_string();
    let secret_key = section
        .get("secret_key")
        .ok_or(CredentialProviderErrorKind::InvalidCredentials)?
        .to_string();
    let token = section.get("token").map(|t| t.to_string());

    Ok(Credential::new(secret_id, secret_key, token))
}
