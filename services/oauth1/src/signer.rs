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

use std::sync::{Arc, Mutex};

use nutrisign_core::{Context, Error, ProvideCredential, Result, SigningCredential};

use crate::{Credential, ParameterSet, RequestSigner, SignedRequest};

/// Signer is the main struct used to sign requests.
///
/// It asks the provider for a credential on first use and keeps it for
/// later calls as long as it stays valid.
#[derive(Clone, Debug)]
pub struct Signer {
    ctx: Context,
    provider: Arc<dyn ProvideCredential<Credential = Credential>>,
    builder: RequestSigner,
    credential: Arc<Mutex<Option<Credential>>>,
}

impl Signer {
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        provider: impl ProvideCredential<Credential = Credential>,
        builder: RequestSigner,
    ) -> Self {
        Self {
            ctx,
            provider: Arc::new(provider),
            builder,
            credential: Arc::new(Mutex::new(None)),
        }
    }

    /// Load the credential, from cache if possible.
    pub fn credential(&self) -> Result<Credential> {
        let cached = self.credential.lock().expect("lock poisoned").clone();
        if let Some(cred) = cached.filter(|c| c.is_valid()) {
            return Ok(cred);
        }

        let loaded = self
            .provider
            .provide_credential(&self.ctx)?
            .filter(|c| c.is_valid())
            .ok_or_else(|| Error::credential_invalid("no valid consumer credential found"))?;
        *self.credential.lock().expect("lock poisoned") = Some(loaded.clone());
        Ok(loaded)
    }

    /// Sign a request against `base_url` with given business parameters.
    pub fn sign(&self, method: &str, base_url: &str, params: ParameterSet) -> Result<SignedRequest> {
        let cred = self.credential()?;
        self.builder.sign_request(&cred, method, base_url, params)
    }

    /// Sign a request against a url that may carry a query string.
    pub fn sign_url(&self, method: &str, url: &str, params: ParameterSet) -> Result<SignedRequest> {
        let cred = self.credential()?;
        self.builder.sign_url(&cred, method, url, params)
    }
}
