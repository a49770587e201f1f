// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! OAuth 1.0a two-legged HMAC-SHA1 signing.
use http::Method;
use log::debug;
use nutrisign_core::hash::base64_hmac_sha1;
use nutrisign_core::time::{format_timestamp, now, DateTime};
use nutrisign_core::{Error, Result};
use percent_encoding::utf8_percent_encode;
use uuid::Uuid;

use crate::constants::*;
use crate::{Credential, ParameterSet, SignedRequest};

/// Percent-encode input with the OAuth unreserved set `A-Z a-z 0-9 - . _ ~`.
///
/// Every other byte of the UTF-8 representation becomes `%XX` in uppercase
/// hex, including `+`, `=`, `&` and `/`.
pub fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, &OAUTH_ENCODE_SET).to_string()
}

/// Encode every pair and sort them by encoded key.
///
/// The sort is stable, equal keys keep their input order.
pub(crate) fn encoded_pairs(params: &ParameterSet) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (percent_encode(k), percent_encode(v)))
        .collect();
    pairs.sort_by(|(a, _), (b, _)| a.as_bytes().cmp(b.as_bytes()));
    pairs
}

pub(crate) fn join_pairs(pairs: &[(String, String)]) -> String {
    let mut s = String::with_capacity(pairs.iter().map(|(k, v)| k.len() + v.len() + 2).sum());
    for (idx, (k, v)) in pairs.iter().enumerate() {
        if idx != 0 {
            s.push('&');
        }
        s.push_str(k);
        s.push('=');
        s.push_str(v);
    }
    s
}

/// Build the normalized parameter string: `k1=v1&k2=v2` over encoded,
/// sorted pairs.
pub fn parameter_string(params: &ParameterSet) -> String {
    join_pairs(&encoded_pairs(params))
}

/// Construct the signature base string.
///
/// ## Format
///
/// ```text
/// UPPERCASE(method) + "&" +
/// percent_encode(base_url) + "&" +
/// percent_encode(parameter_string)
/// ```
///
/// ## Reference
///
/// - [Signature Base String](https://tools.ietf.org/html/rfc5849#section-3.4.1)
pub fn signature_base_string(method: &str, base_url: &str, params: &ParameterSet) -> String {
    format!(
        "{}&{}&{}",
        method.to_ascii_uppercase(),
        percent_encode(base_url),
        percent_encode(&parameter_string(params))
    )
}

/// Sign the request described by `method`, `base_url` and `params`.
///
/// `params` must already carry the OAuth boilerplate (`oauth_consumer_key`,
/// `oauth_nonce`, `oauth_signature_method`, `oauth_timestamp`,
/// `oauth_version`) but not `oauth_signature`. `nonce` and `timestamp` are
/// the values the caller generated for this call and must match the
/// `oauth_nonce` and `oauth_timestamp` entries.
///
/// The returned request holds `params` plus `oauth_signature`, whose value is
/// the raw base64 digest: it gets percent-encoded only on serialization.
///
/// This function is pure, it never generates nonces, reads clocks or logs
/// the consumer secret.
pub fn sign(
    method: &str,
    base_url: &str,
    params: &ParameterSet,
    cred: &Credential,
    nonce: &str,
    timestamp: &str,
) -> Result<SignedRequest> {
    let method = normalize_method(method)?;
    check_base_url(base_url)?;
    check_params(params, cred, nonce, timestamp)?;

    let base_string = signature_base_string(&method, base_url, params);
    debug!("signature base string: {base_string}");

    let signing_key = format!("{}&", percent_encode(&cred.consumer_secret));
    let signature = base64_hmac_sha1(signing_key.as_bytes(), base_string.as_bytes());

    let mut signed = params.clone();
    signed.insert(OAUTH_SIGNATURE, signature);

    Ok(SignedRequest::new(method, base_url.to_string(), signed))
}

fn normalize_method(method: &str) -> Result<String> {
    if method.is_empty() {
        return Err(Error::request_invalid("http method is empty"));
    }
    let method = method.to_ascii_uppercase();
    Method::from_bytes(method.as_bytes())?;
    Ok(method)
}

fn check_base_url(base_url: &str) -> Result<()> {
    if base_url.is_empty() {
        return Err(Error::request_invalid("base url is empty"));
    }
    if base_url.contains(['?', '#']) {
        return Err(Error::request_invalid(format!(
            "base url must not carry query or fragment: {base_url}"
        )));
    }

    let uri: http::Uri = base_url.parse()?;
    if uri.scheme().is_none() || uri.authority().is_none() {
        return Err(Error::request_invalid(format!(
            "base url must be absolute: {base_url}"
        )));
    }
    Ok(())
}

fn check_params(params: &ParameterSet, cred: &Credential, nonce: &str, timestamp: &str) -> Result<()> {
    if let Some(missing) = REQUIRED_OAUTH_PARAMS
        .iter()
        .find(|k| !params.contains_key(k))
    {
        return Err(Error::request_invalid(format!(
            "required parameter {missing} is missing"
        )));
    }
    if params.contains_key(OAUTH_SIGNATURE) {
        return Err(Error::request_invalid(format!(
            "{OAUTH_SIGNATURE} must not be present before signing"
        )));
    }

    expect_param(params, OAUTH_SIGNATURE_METHOD, HMAC_SHA1)?;
    expect_param(params, OAUTH_VERSION, OAUTH_VERSION_1_0)?;

    if nonce.is_empty() {
        return Err(Error::request_invalid("nonce is empty"));
    }
    expect_param(params, OAUTH_NONCE, nonce)?;
    if timestamp.is_empty() {
        return Err(Error::request_invalid("timestamp is empty"));
    }
    expect_param(params, OAUTH_TIMESTAMP, timestamp)?;

    // Don't echo the key itself, it identifies the account.
    if params.get(OAUTH_CONSUMER_KEY) != Some(cred.consumer_key.as_str()) {
        return Err(Error::request_invalid(format!(
            "{OAUTH_CONSUMER_KEY} doesn't match the credential's consumer key"
        )));
    }
    Ok(())
}

fn expect_param(params: &ParameterSet, key: &str, expected: &str) -> Result<()> {
    match params.get(key) {
        Some(v) if v == expected => Ok(()),
        Some(v) => Err(Error::request_invalid(format!(
            "{key} must be {expected}, got {v}"
        ))),
        None => Err(Error::request_invalid(format!(
            "required parameter {key} is missing"
        ))),
    }
}

/// RequestSigner fills in the per-call OAuth boilerplate and signs.
///
/// Every call gets a fresh UUID v4 nonce and the current unix timestamp, so
/// two signed requests are never identical.
#[derive(Debug, Default, Clone)]
pub struct RequestSigner {
    nonce: Option<String>,
    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new request signer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Specify the nonce.
    ///
    /// # Note
    ///
    /// A nonce must never be reused across requests.
    /// Only use this function for testing.
    pub fn with_nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Add the OAuth boilerplate to `params` and sign them.
    ///
    /// Boilerplate keys already present in `params` are overwritten.
    pub fn sign_request(
        &self,
        cred: &Credential,
        method: &str,
        base_url: &str,
        params: ParameterSet,
    ) -> Result<SignedRequest> {
        let nonce = self
            .nonce
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let timestamp = format_timestamp(self.time.unwrap_or_else(now));

        let mut params = params;
        params.insert(OAUTH_CONSUMER_KEY, cred.consumer_key.as_str());
        params.insert(OAUTH_NONCE, nonce.as_str());
        params.insert(OAUTH_SIGNATURE_METHOD, HMAC_SHA1);
        params.insert(OAUTH_TIMESTAMP, timestamp.as_str());
        params.insert(OAUTH_VERSION, OAUTH_VERSION_1_0);

        sign(method, base_url, &params, cred, &nonce, &timestamp)
    }

    /// Sign against a url that may carry a query string.
    ///
    /// The query is moved into the signed parameters and the bare url is
    /// used as base url. Entries of `params` win over the query.
    pub fn sign_url(
        &self,
        cred: &Credential,
        method: &str,
        url: &str,
        params: ParameterSet,
    ) -> Result<SignedRequest> {
        let url = url.split_once('#').map_or(url, |(u, _)| u);
        let (base_url, mut merged) = match url.split_once('?') {
            Some((base, query)) => (base, ParameterSet::from_query(query)),
            None => (url, ParameterSet::new()),
        };
        merged.extend(params);

        self.sign_request(cred, method, base_url, merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutrisign_core::ErrorKind;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn boilerplate() -> ParameterSet {
        ParameterSet::from([
            (OAUTH_CONSUMER_KEY, "key"),
            (OAUTH_NONCE, "nonce123"),
            (OAUTH_SIGNATURE_METHOD, HMAC_SHA1),
            (OAUTH_TIMESTAMP, "1700000000"),
            (OAUTH_VERSION, OAUTH_VERSION_1_0),
        ])
    }

    fn cred() -> Credential {
        Credential::new("key", "secret")
    }

    #[test]
    fn test_percent_encode_reserved() {
        assert_eq!(
            percent_encode(" !\"#$%&'()*+,/:;=?@[]"),
            "%20%21%22%23%24%25%26%27%28%29%2A%2B%2C%2F%3A%3B%3D%3F%40%5B%5D"
        );
    }

    #[test]
    fn test_percent_encode_unreserved_untouched() {
        let unreserved = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-._~";
        assert_eq!(percent_encode(unreserved), unreserved);
    }

    #[test_case("", ""; "empty")]
    #[test_case("crème", "cr%C3%A8me"; "latin")]
    #[test_case("りんご", "%E3%82%8A%E3%82%93%E3%81%94"; "cjk")]
    #[test_case("a+b=c&d/e", "a%2Bb%3Dc%26d%2Fe"; "query delimiters")]
    fn test_percent_encode_utf8(input: &str, expected: &str) {
        assert_eq!(percent_encode(input), expected);
    }

    #[test]
    fn test_parameter_string_is_sorted() {
        let forward = ParameterSet::from([("a", "1"), ("b", "2")]);
        let backward = ParameterSet::from([("b", "2"), ("a", "1")]);
        assert_eq!(parameter_string(&forward), "a=1&b=2");
        assert_eq!(parameter_string(&backward), "a=1&b=2");
    }

    #[test]
    fn test_parameter_string_sorts_encoded_keys() {
        // Raw '{' sorts after 'a', but its encoded form "%7B" sorts first.
        let params = ParameterSet::from([("a", "1"), ("{", "2")]);
        assert_eq!(parameter_string(&params), "%7B=2&a=1");
    }

    #[test]
    fn test_signature_base_string() {
        let params = boilerplate().with("method", "test");
        assert_eq!(
            signature_base_string("get", "https://example.com/api", &params),
            "GET&https%3A%2F%2Fexample.com%2Fapi&method%3Dtest%26oauth_consumer_key%3Dkey%26oauth_nonce%3Dnonce123%26oauth_signature_method%3DHMAC-SHA1%26oauth_timestamp%3D1700000000%26oauth_version%3D1.0"
        );
    }

    #[test]
    fn test_sign_known_vector() -> Result<()> {
        let params = boilerplate().with("method", "test");
        let signed = sign(
            "GET",
            "https://example.com/api",
            &params,
            &cred(),
            "nonce123",
            "1700000000",
        )?;

        assert_eq!(signed.signature(), "GCVdmzn6YAP7BuAr7/hPMNjHjRY=");
        assert_eq!(signed.method(), "GET");
        assert_eq!(signed.parameters().len(), params.len() + 1);
        for (k, v) in params.iter() {
            assert_eq!(signed.parameters().get(k), Some(v));
        }
        Ok(())
    }

    #[test]
    fn test_sign_is_deterministic() -> Result<()> {
        let params = boilerplate().with("method", "test");
        let a = sign("GET", "https://example.com/api", &params, &cred(), "nonce123", "1700000000")?;
        let b = sign("get", "https://example.com/api", &params, &cred(), "nonce123", "1700000000")?;
        assert_eq!(a, b);
        Ok(())
    }

    #[test]
    fn test_sign_changes_with_nonce() -> Result<()> {
        let first = boilerplate().with("method", "test");
        let second = first.clone().with(OAUTH_NONCE, "nonce456");

        let a = sign("GET", "https://example.com/api", &first, &cred(), "nonce123", "1700000000")?;
        let b = sign("GET", "https://example.com/api", &second, &cred(), "nonce456", "1700000000")?;
        assert_eq!(b.signature(), "J8irDwT9c4aPOsVqQB72PPs/clE=");
        assert_ne!(a.signature(), b.signature());
        Ok(())
    }

    #[test]
    fn test_sign_empty_value() -> Result<()> {
        let params = boilerplate().with("method", "test").with("empty", "");
        let signed = sign("GET", "https://example.com/api", &params, &cred(), "nonce123", "1700000000")?;
        assert_eq!(signed.signature(), "wyacKgEjACu1wSSF04tc6GLG+zE=");
        Ok(())
    }

    #[test]
    fn test_sign_non_ascii_and_reserved_secret() -> Result<()> {
        let params = boilerplate()
            .with("search_expression", "crème brûlée & co")
            .with("method", "foods.search")
            .with("format", "json");
        let signed = sign(
            "get",
            "https://platform.example.com/rest/server.api",
            &params,
            &Credential::new("key", "s3cr3t+/="),
            "nonce123",
            "1700000000",
        )?;

        assert_eq!(signed.method(), "GET");
        assert_eq!(signed.signature(), "ymRI9GNyRJViVzIg5JZi6VGqMn0=");
        Ok(())
    }

    #[test_case(OAUTH_CONSUMER_KEY; "consumer key")]
    #[test_case(OAUTH_NONCE; "nonce")]
    #[test_case(OAUTH_SIGNATURE_METHOD; "signature method")]
    #[test_case(OAUTH_TIMESTAMP; "timestamp")]
    #[test_case(OAUTH_VERSION; "version")]
    fn test_sign_rejects_missing_param(key: &str) {
        let mut params = boilerplate();
        params.remove(key);

        let err = sign("GET", "https://example.com/api", &params, &cred(), "nonce123", "1700000000")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
        assert!(err.to_string().contains(key), "{err}");
    }

    #[test_case("", "https://example.com/api"; "empty method")]
    #[test_case("GE T", "https://example.com/api"; "method with space")]
    #[test_case("GET", ""; "empty url")]
    #[test_case("GET", "/api"; "relative url")]
    #[test_case("GET", "https://example.com/api?a=1"; "url with query")]
    #[test_case("GET", "https://example.com/api#frag"; "url with fragment")]
    fn test_sign_rejects_bad_target(method: &str, url: &str) {
        let err = sign(method, url, &boilerplate(), &cred(), "nonce123", "1700000000").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    }

    #[test]
    fn test_sign_rejects_inconsistent_params() {
        let url = "https://example.com/api";
        let kind = |params: &ParameterSet, cred: &Credential, nonce: &str, ts: &str| {
            sign("GET", url, params, cred, nonce, ts).unwrap_err().kind()
        };

        // nonce and timestamp must match the arguments
        assert_eq!(kind(&boilerplate(), &cred(), "other", "1700000000"), ErrorKind::RequestInvalid);
        assert_eq!(kind(&boilerplate(), &cred(), "nonce123", "1"), ErrorKind::RequestInvalid);
        assert_eq!(kind(&boilerplate(), &cred(), "", "1700000000"), ErrorKind::RequestInvalid);

        // consumer key must match the credential
        let other = Credential::new("another", "secret");
        assert_eq!(kind(&boilerplate(), &other, "nonce123", "1700000000"), ErrorKind::RequestInvalid);

        let plaintext = boilerplate().with(OAUTH_SIGNATURE_METHOD, "PLAINTEXT");
        assert_eq!(kind(&plaintext, &cred(), "nonce123", "1700000000"), ErrorKind::RequestInvalid);

        let signed_twice = boilerplate().with(OAUTH_SIGNATURE, "abc=");
        assert_eq!(kind(&signed_twice, &cred(), "nonce123", "1700000000"), ErrorKind::RequestInvalid);
    }

    #[test]
    fn test_request_signer_pinned() -> Result<()> {
        let signer = RequestSigner::new()
            .with_nonce("nonce123")
            .with_time(DateTime::from_timestamp(1_700_000_000, 0).unwrap());

        let signed = signer.sign_request(
            &cred(),
            "GET",
            "https://example.com/api",
            ParameterSet::from([("method", "test")]),
        )?;
        assert_eq!(signed.signature(), "GCVdmzn6YAP7BuAr7/hPMNjHjRY=");
        Ok(())
    }

    #[test]
    fn test_request_signer_generates_fresh_nonce() -> Result<()> {
        let signer = RequestSigner::new();
        let params = ParameterSet::from([("method", "test")]);

        let a = signer.sign_request(&cred(), "GET", "https://example.com/api", params.clone())?;
        let b = signer.sign_request(&cred(), "GET", "https://example.com/api", params)?;

        let nonce = a.parameters().get(OAUTH_NONCE).unwrap();
        assert!(Uuid::parse_str(nonce).is_ok());
        assert_ne!(nonce, b.parameters().get(OAUTH_NONCE).unwrap());
        assert_ne!(a.signature(), b.signature());
        Ok(())
    }

    #[test]
    fn test_sign_url_moves_query_into_params() -> Result<()> {
        let signer = RequestSigner::new()
            .with_nonce("nonce123")
            .with_time(DateTime::from_timestamp(1_700_000_000, 0).unwrap());

        let signed = signer.sign_url(
            &cred(),
            "GET",
            "https://example.com/api?method=ignored",
            ParameterSet::from([("method", "test")]),
        )?;
        assert_eq!(signed.base_url(), "https://example.com/api");
        assert_eq!(signed.parameters().get("method"), Some("test"));
        assert_eq!(signed.signature(), "GCVdmzn6YAP7BuAr7/hPMNjHjRY=");
        Ok(())
    }
}
