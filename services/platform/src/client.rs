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
use log::debug;
use nutrisign_core::{Error, Result};
use nutrisign_oauth1::{SignedRequest, Signer};
use serde_json::Value;

use crate::response::PlatformError;
use crate::{PlatformConfig, PlatformRequest};

/// Platform signs calls of the nutrition platform and decodes their
/// responses.
///
/// Platform never sends anything: hand the built request to any http
/// client and feed the body back to [`Platform::parse_response`].
#[derive(Debug, Clone)]
pub struct Platform {
    config: PlatformConfig,
    signer: Signer,
}

impl Platform {
    /// Create a new platform client.
    pub fn new(config: PlatformConfig, signer: Signer) -> Self {
        Self { config, signer }
    }

    /// The endpoints in use.
    pub fn config(&self) -> &PlatformConfig {
        &self.config
    }

    /// Sign the call without serializing it.
    pub fn sign<R: PlatformRequest>(&self, req: &R) -> Result<SignedRequest> {
        let params = req.parameters()?;
        let endpoint = req.endpoint(&self.config);
        debug!("signing platform request {req:?} against {endpoint}");

        self.signer
            .sign(req.http_method().as_str(), endpoint, params)
    }

    /// Sign the call and build a ready to send http request.
    pub fn build_request<R: PlatformRequest>(&self, req: &R) -> Result<http::Request<Bytes>> {
        self.sign(req)?.into_http_request(req.location())
    }

    /// Decode the response body of given call.
    ///
    /// The platform reports failures as `{"error": {..}}` with a success
    /// status, those become [`nutrisign_core::ErrorKind::ResponseInvalid`].
    pub fn parse_response<R: PlatformRequest>(&self, _req: &R, body: &[u8]) -> Result<R::Response> {
        let value: Value = serde_json::from_slice(body).map_err(|e| {
            Error::response_invalid("response is not valid json").with_source(e)
        })?;

        if let Some(err) = value.get("error") {
            let err: PlatformError = serde_json::from_value(err.clone()).map_err(|e| {
                Error::response_invalid("malformed platform error").with_source(e)
            })?;
            let code = err.code.map(|c| c.to_string()).unwrap_or_default();
            let message = err.message.unwrap_or_default();
            return Err(Error::response_invalid(format!(
                "platform returned error {code}: {message}"
            )));
        }

        serde_json::from_value(value).map_err(|e| {
            Error::response_invalid("response doesn't match the expected schema").with_source(e)
        })
    }
}
