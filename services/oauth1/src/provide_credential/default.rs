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
use crate::provide_credential::{ConfigFileCredentialProvider, EnvCredentialProvider};
use crate::{Config, Credential};
use log::debug;
use nutrisign_core::{Context, ProvideCredential, ProvideCredentialChain, Result};

/// DefaultCredentialProvider is a loader that will try to load credential via default chains.
///
/// Resolution order:
///
/// 1. Values set on [`Config`]
/// 2. Environment variables
/// 3. The config file
#[derive(Debug)]
pub struct DefaultCredentialProvider {
    chain: ProvideCredentialChain<Credential>,
}

impl DefaultCredentialProvider {
    /// Create a new DefaultCredentialProvider.
    pub fn new(config: Config) -> Self {
        let chain = ProvideCredentialChain::new()
            .push(ConfigCredentialProvider {
                config: config.clone(),
            })
            .push(EnvCredentialProvider::new())
            .push(ConfigFileCredentialProvider::new().with_config(config));

        Self { chain }
    }
}

impl Default for DefaultCredentialProvider {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl ProvideCredential for DefaultCredentialProvider {
    type Credential = Credential;

    fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        self.chain.provide_credential(ctx)
    }
}

/// Provider that loads credential from values set on config.
#[derive(Debug)]
struct ConfigCredentialProvider {
    config: Config,
}

impl ProvideCredential for ConfigCredentialProvider {
    type Credential = Credential;

    fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        match (&self.config.consumer_key, &self.config.consumer_secret) {
            (Some(key), Some(secret)) if !key.is_empty() && !secret.is_empty() => {
                debug!("loading credential from config");
                Ok(Some(Credential::new(key, secret)))
            }
            _ => Ok(None),
        }
    }
}
