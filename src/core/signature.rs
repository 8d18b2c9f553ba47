//! TC3-HMAC-SHA256 signature implementation for TencentCloud API authentication,
//! plus the co-resident V1 (HmacSHA1/HmacSHA256 flat-query) signer used for
//! legacy GET-style calls and COS V5 presigned URLs.

use crate::error::{Result, SignerErrorKind, TencentCloudError};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use sha1::Sha1;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use url::Url;

type HmacSha256 = Hmac<Sha256>;
type HmacSha1 = Hmac<Sha1>;

/// RFC 3986 unreserved set: alphanumerics plus `-._~`. Everything else gets
/// percent-encoded exactly once; this crate never double-encodes a value
/// that arrives already percent-encoded in a query string or form body.
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

fn percent_encode(s: &str) -> String {
    percent_encoding::utf8_percent_encode(s, UNRESERVED).to_string()
}

/// Controls how much of a request the TC3 signer actually signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SigningMode {
    /// Sign the full canonical request as specified.
    Default,
    /// Skip derivation entirely; set `Authorization: SKIP`. Used when the
    /// transport authenticates the request by other means.
    SkipAuthorization,
    /// Sign only `content-type` and `host`, even if more headers are present.
    Minimal,
}

/// The headers a signing pass adds or overwrites on a request.
#[derive(Debug, Clone, Default)]
pub struct SignedHeaders {
    /// `Authorization` header value.
    pub authorization: String,
    /// `X-TC-Timestamp` header value.
    pub timestamp: String,
    /// `X-TC-Token`, present only when the credential carries a session
    /// token and the caller did not ask to omit it.
    pub token: Option<String>,
    /// `Host`, present when the caller's header set did not already set it.
    pub host: Option<String>,
}

/// TC3-HMAC-SHA256 signature generator. Pure function of its inputs plus an
/// explicit `timestamp`; holds only the credential material needed to derive
/// the signing key.
pub struct Signer {
    secret_id: String,
    secret_key: String,
    token: Option<String>,
}

impl Signer {
    /// Create a new signer with credentials
    pub fn new<S: Into<String>>(secret_id: S, secret_key: S, token: Option<S>) -> Self {
        Self {
            secret_id: secret_id.into(),
            secret_key: secret_key.into(),
            token: token.map(|t| t.into()),
        }
    }

    /// Build the full set of headers to overlay onto `headers` so the
    /// request is accepted as authentic, per spec §4.A.
    ///
    /// `headers` must already carry a `content-type`; `host` is derived from
    /// `url` if absent. `body` is the exact byte buffer that will be sent.
    #[allow(clippy::too_many_arguments)]
    pub fn sign_headers(
        &self,
        url: &str,
        method: &str,
        headers: &BTreeMap<String, String>,
        body: &[u8],
        service: &str,
        mode: SigningMode,
        omit_session_token: bool,
        timestamp: i64,
    ) -> Result<SignedHeaders> {
        let parsed = Url::parse(url).map_err(|_| SignerErrorKind::InvalidUrl)?;

        let host_header = headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case("host"))
            .map(|(_, v)| v.clone());
        let derived_host = host_header
            .clone()
            .unwrap_or_else(|| parsed.host_str().unwrap_or_default().to_string());

        if mode == SigningMode::SkipAuthorization {
            return Ok(SignedHeaders {
                authorization: "SKIP".to_string(),
                timestamp: timestamp.to_string(),
                token: if omit_session_token {
                    None
                } else {
                    self.token.clone()
                },
                host: if host_header.is_none() {
                    Some(derived_host)
                } else {
                    None
                },
            });
        }

        let mut effective_headers = headers.clone();
        effective_headers.insert("host".to_string(), derived_host.clone());
        if mode == SigningMode::Minimal {
            let mut minimal = BTreeMap::new();
            for key in ["content-type", "host"] {
                if let Some(v) = effective_headers
                    .iter()
                    .find(|(k, _)| k.eq_ignore_ascii_case(key))
                    .map(|(_, v)| v.clone())
                {
                    minimal.insert(key.to_string(), v);
                }
            }
            effective_headers = minimal;
        }

        let canonical_request = self.canonical_request(method, &parsed, &effective_headers, body);
        let date = format_date(timestamp);
        let credential_scope = format!("{}/{}/tc3_request", date, service);
        let string_to_sign = self.string_to_sign(&canonical_request, &credential_scope, timestamp);
        let signature = self.calculate_signature(&string_to_sign, &date, service);
        let signed_header_names = Self::signed_header_names(&effective_headers);

        let authorization = format!(
            "TC3-HMAC-SHA256 Credential={}/{}, SignedHeaders={}, Signature={}",
            self.secret_id, credential_scope, signed_header_names, signature
        );

        Ok(SignedHeaders {
            authorization,
            timestamp: timestamp.to_string(),
            token: if omit_session_token {
                None
            } else {
                self.token.clone()
            },
            host: if host_header.is_none() {
                Some(derived_host)
            } else {
                None
            },
        })
    }

    fn canonical_request(
        &self,
        method: &str,
        url: &Url,
        headers: &BTreeMap<String, String>,
        body: &[u8],
    ) -> String {
        let canonical_uri = {
            let path = url.path();
            if path.is_empty() {
                "/".to_string()
            } else {
                path.to_string()
            }
        };

        let canonical_query_string = Self::canonical_query_string(url);
        let canonical_headers = Self::canonical_headers(headers);
        let signed_headers = Self::signed_header_names(headers);
        let hashed_payload = Self::hash_payload(body);

        format!(
            "{}\n{}\n{}\n{}\n{}\n{}",
            method.to_uppercase(),
            canonical_uri,
            canonical_query_string,
            canonical_headers,
            signed_headers,
            hashed_payload
        )
    }

    fn canonical_query_string(url: &Url) -> String {
        let mut pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (percent_encode(&k), percent_encode(&v)))
            .collect();
        pairs.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
        pairs
            .into_iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&")
    }

    fn canonical_headers(headers: &BTreeMap<String, String>) -> String {
        let mut lowered: BTreeMap<String, String> = BTreeMap::new();
        for (k, v) in headers {
            lowered.insert(k.to_lowercase(), v.trim().to_string());
        }
        lowered
            .into_iter()
            .map(|(k, v)| format!("{}:{}\n", k, v))
            .collect::<String>()
    }

    fn signed_header_names(headers: &BTreeMap<String, String>) -> String {
        let mut names: Vec<String> = headers.keys().map(|k| k.to_lowercase()).collect();
        names.sort();
        names.dedup();
        names.join(";")
    }

    fn hash_payload(body: &[u8]) -> String {
        let mut hasher = Sha256::new();
        hasher.update(body);
        hex::encode(hasher.finalize())
    }

    fn string_to_sign(&self, canonical_request: &str, credential_scope: &str, timestamp: i64) -> String {
        let mut hasher = Sha256::new();
        hasher.update(canonical_request.as_bytes());
        let hashed_canonical_request = hex::encode(hasher.finalize());

        format!(
            "TC3-HMAC-SHA256\n{}\n{}\n{}",
            timestamp, credential_scope, hashed_canonical_request
        )
    }

    fn calculate_signature(&self, string_to_sign: &str, date: &str, service: &str) -> String {
        let k_date = hmac_sha256(format!("TC3{}", self.secret_key).as_bytes(), date.as_bytes());
        let k_service = hmac_sha256(&k_date, service.as_bytes());
        let k_signing = hmac_sha256(&k_service, b"tc3_request");
        let signature = hmac_sha256(&k_signing, string_to_sign.as_bytes());
        hex::encode(signature)
    }
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts a key of any length");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

fn format_date(timestamp: i64) -> String {
    use chrono::{TimeZone, Utc};
    Utc.timestamp_opt(timestamp, 0)
        .single()
        .expect("timestamp out of range")
        .format("%Y-%m-%d")
        .to_string()
}

/// Legacy V1 signature algorithm (`HmacSHA1`/`HmacSHA256` over a flat
/// `METHODhost path?sortedQuery` string), exposed for GET-style legacy
/// signing and object-storage (COS V5) presigned URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum V1Algorithm {
    /// `HmacSHA1`
    HmacSha1,
    /// `HmacSHA256`
    HmacSha256,
}

/// Sign `params` (already containing everything but `Signature`) using the
/// V1 flat-query scheme and return the computed `Signature` value.
pub fn sign_v1_query(
    secret_key: &str,
    algorithm: V1Algorithm,
    method: &str,
    host: &str,
    path: &str,
    params: &BTreeMap<String, String>,
) -> Result<String> {
    if host.is_empty() {
        return Err(TencentCloudError::Signer(SignerErrorKind::InvalidUrl));
    }

    let sorted_query = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    let string_to_sign = format!("{}{}{}?{}", method.to_uppercase(), host, path, sorted_query);

    let signature = match algorithm {
        V1Algorithm::HmacSha1 => {
            let mut mac = HmacSha1::new_from_slice(secret_key.as_bytes())
                .map_err(|_| SignerErrorKind::InvalidUrl)?;
            mac.update(string_to_sign.as_bytes());
            BASE64.encode(mac.finalize().into_bytes())
        }
        V1Algorithm::HmacSha256 => {
            let mut mac = HmacSha256::new_from_slice(secret_key.as_bytes())
                .map_err(|_| SignerErrorKind::InvalidUrl)?;
            mac.update(string_to_sign.as_bytes());
            BASE64.encode(mac.finalize().into_bytes())
        }
    };

    Ok(signature)
}
