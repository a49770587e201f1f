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

use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::HeaderValue;
use nutrisign_core::Result;

use crate::constants::{FORM_URLENCODED, OAUTH_SIGNATURE};
use crate::sign_request::{encoded_pairs, join_pairs};
use crate::ParameterSet;

/// Where the signed parameters travel.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ParameterLocation {
    /// Appended to the url after `?`, request body is empty.
    ///
    /// Used by read-style calls.
    Query,
    /// Sent as `application/x-www-form-urlencoded` body, url is untouched.
    ///
    /// Used by write-style calls such as uploading an image.
    FormBody,
}

/// SignedRequest is a parameter set that carries a valid `oauth_signature`.
///
/// It's built fresh for every call and must not be reused: the nonce
/// inside makes a second send a replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    method: String,
    base_url: String,
    params: ParameterSet,
}

impl SignedRequest {
    pub(crate) fn new(method: String, base_url: String, params: ParameterSet) -> Self {
        Self {
            method,
            base_url,
            params,
        }
    }

    /// Uppercase http method that has been signed.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Base url without query.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// All parameters, including `oauth_signature`.
    pub fn parameters(&self) -> &ParameterSet {
        &self.params
    }

    /// The base64 HMAC-SHA1 signature, not percent-encoded.
    pub fn signature(&self) -> &str {
        // `sign` is the only constructor and always inserts the signature.
        self.params.get(OAUTH_SIGNATURE).unwrap_or_default()
    }

    /// Percent-encode the full set, signature included, sorted by key.
    pub fn encoded_parameters(&self) -> Vec<(String, String)> {
        encoded_pairs(&self.params)
    }

    /// Serialize for query-string mode.
    pub fn query_string(&self) -> String {
        join_pairs(&self.encoded_parameters())
    }

    /// The complete request url for query-string mode: `base_url?query`.
    pub fn url(&self) -> String {
        format!("{}?{}", self.base_url, self.query_string())
    }

    /// Serialize for form-body mode.
    pub fn form_body(&self) -> String {
        self.query_string()
    }

    /// Build an [`http::Request`] carrying the signed parameters at `location`.
    ///
    /// The request is ready to be handed to any http client.
    pub fn into_http_request(self, location: ParameterLocation) -> Result<http::Request<Bytes>> {
        let builder = http::Request::builder().method(self.method.as_str());

        let req = match location {
            ParameterLocation::Query => builder.uri(self.url()).body(Bytes::new())?,
            ParameterLocation::FormBody => builder
                .uri(self.base_url.as_str())
                .header(CONTENT_TYPE, HeaderValue::from_static(FORM_URLENCODED))
                .body(Bytes::from(self.form_body()))?,
        };
        Ok(req)
    }
}
