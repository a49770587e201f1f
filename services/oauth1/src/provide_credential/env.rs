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

use crate::{constants::*, Credential};
use log::debug;
use nutrisign_core::{Context, ProvideCredential, Result};

/// EnvCredentialProvider loads the consumer credential from environment variables.
///
/// This provider looks for the following environment variables:
/// - `NUTRISIGN_CONSUMER_KEY`
/// - `NUTRISIGN_CONSUMER_SECRET`
///
/// Both must be set and non-empty, otherwise nothing is provided.
#[derive(Debug, Default, Clone)]
pub struct EnvCredentialProvider {}

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self {}
    }
}

impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let key = ctx.env_var(NUTRISIGN_CONSUMER_KEY).filter(|v| !v.is_empty());
        let secret = ctx
            .env_var(NUTRISIGN_CONSUMER_SECRET)
            .filter(|v| !v.is_empty());

        match (key, secret) {
            (Some(key), Some(secret)) => {
                debug!("loading credential from environment variables");
                Ok(Some(Credential::new(key, secret)))
            }
            _ => Ok(None),
        }
    }
}
