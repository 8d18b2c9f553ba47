//! TC3 and V1 signature tests run from outside the crate, against the
//! public `Signer` API only.

use std::collections::BTreeMap;
use tencentcloud_sdk_core::{sign_v1_query, Signer, SigningMode, V1Algorithm};

fn headers(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_official_tc3_example_vector() {
    let signer = Signer::new(
        "AKIDEXAMPLE",
        "Gu5t9xGARNpq86cd98joQYCN3EXAMPLE",
        None::<String>,
    );
    let body = br#"{"Limit": 1, "Filters": [{"Values": ["unnamed"], "Name": "instance-name"}]}"#;
    let hdrs = headers(&[
        ("Content-Type", "application/json; charset=utf-8"),
        ("Host", "cvm.tencentcloudapi.com"),
    ]);

    let signed = signer
        .sign_headers(
            "https://cvm.tencentcloudapi.com/",
            "POST",
            &hdrs,
            body,
            "cvm",
            SigningMode::Default,
            true,
            1551113065,
        )
        .unwrap();

    assert_eq!(
        signed.authorization,
        "TC3-HMAC-SHA256 Credential=AKIDEXAMPLE/2019-02-25/cvm/tc3_request, \
         SignedHeaders=content-type;host, \
         Signature=be4f67d323fe4b2b81c1b9c97f44bdb224953ccf80ac398a4884efc28a19ac52"
    );
}

#[test]
fn test_different_payloads_produce_different_signatures() {
    let signer = Signer::new("id", "key", None::<String>);
    let hdrs = headers(&[
        ("Content-Type", "application/json; charset=utf-8"),
        ("Host", "cvm.tencentcloudapi.com"),
    ]);

    let a = signer
        .sign_headers(
            "https://cvm.tencentcloudapi.com/",
            "POST",
            &hdrs,
            b"{\"a\":1}",
            "cvm",
            SigningMode::Default,
            true,
            1000,
        )
        .unwrap();
    let b = signer
        .sign_headers(
            "https://cvm.tencentcloudapi.com/",
            "POST",
            &hdrs,
            b"{\"a\":2}",
            "cvm",
            SigningMode::Default,
            true,
            1000,
        )
        .unwrap();

    assert_ne!(a.authorization, b.authorization);
}

#[test]
fn test_query_string_sorted_by_name_then_value() {
    let signer = Signer::new("id", "key", None::<String>);
    let hdrs = headers(&[
        ("Content-Type", "application/json"),
        ("Host", "cvm.tencentcloudapi.com"),
    ]);

    let sorted_order = signer
        .sign_headers(
            "https://cvm.tencentcloudapi.com/?b=2&a=2&a=1",
            "GET",
            &hdrs,
            b"",
            "cvm",
            SigningMode::Default,
            true,
            1000,
        )
        .unwrap();
    let reordered = signer
        .sign_headers(
            "https://cvm.tencentcloudapi.com/?a=1&a=2&b=2",
            "GET",
            &hdrs,
            b"",
            "cvm",
            SigningMode::Default,
            true,
            1000,
        )
        .unwrap();

    assert_eq!(sorted_order.authorization, reordered.authorization);
}

#[test]
fn test_v1_signature_changes_with_params() {
    let mut a = BTreeMap::new();
    a.insert("Action".to_string(), "DescribeInstances".to_string());
    let mut b = a.clone();
    b.insert("Limit".to_string(), "10".to_string());

    let sig_a = sign_v1_query(
        "secret",
        V1Algorithm::HmacSha1,
        "GET",
        "cvm.tencentcloudapi.com",
        "/",
        &a,
    )
    .unwrap();
    let sig_b = sign_v1_query(
        "secret",
        V1Algorithm::HmacSha1,
        "GET",
        "cvm.tencentcloudapi.com",
        "/",
        &b,
    )
    .unwrap();

    assert_ne!(sig_a, sig_b);
}

#[test]
fn test_v1_signature_algorithms_diverge() {
    let mut params = BTreeMap::new();
    params.insert("Action".to_string(), "DescribeInstances".to_string());

    let sha1 = sign_v1_query(
        "secret",
        V1Algorithm::HmacSha1,
        "GET",
        "cvm.tencentcloudapi.com",
        "/",
        &params,
    )
    .unwrap();
    let sha256 = sign_v1_query(
        "secret",
        V1Algorithm::HmacSha256,
        "GET",
        "cvm.tencentcloudapi.com",
        "/",
        &params,
    )
    .unwrap();

    assert_ne!(sha1, sha256);
}

#[test]
fn test_v1_signature_rejects_empty_host() {
    let params = BTreeMap::new();
    let result = sign_v1_query("secret", V1Algorithm::HmacSha256, "GET", "", "/", &params);
    assert!(result.is_err());
}
