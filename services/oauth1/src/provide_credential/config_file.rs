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
use std::collections::HashMap;

use crate::{Config, Credential};
use log::debug;
use nutrisign_core::{Context, Error, ProvideCredential, Result};
use serde::Deserialize;

/// ConfigFileCredentialProvider loads the consumer credential from a TOML config file.
///
/// The file lives at `~/.nutrisign/config.toml` by default and holds one
/// table per profile:
///
/// ```toml
/// [default]
/// consumer_key = "..."
/// consumer_secret = "..."
/// ```
///
/// The path and profile can be overridden through [`Config`] or with
/// `NUTRISIGN_CONFIG_FILE` and `NUTRISIGN_PROFILE`.
#[derive(Debug, Default, Clone)]
pub struct ConfigFileCredentialProvider {
    config: Config,
}

#[derive(Deserialize)]
struct Profile {
    consumer_key: Option<String>,
    consumer_secret: Option<String>,
}

impl ConfigFileCredentialProvider {
    /// Create a new ConfigFileCredentialProvider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use given config to locate the file and the profile.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }
}

impl ProvideCredential for ConfigFileCredentialProvider {
    type Credential = Credential;

    fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let config = self.config.clone().from_env(ctx);

        let path = ctx
            .expand_home_dir(config.config_file_or_default())
            .ok_or_else(|| Error::unexpected("failed to expand home directory"))?;

        let content = match ctx.file_read_as_string(&path) {
            Ok(content) => content,
            Err(_) => {
                debug!("config file not found at {path:?}");
                return Ok(None);
            }
        };

        let mut profiles: HashMap<String, Profile> = toml::from_str(&content).map_err(|e| {
            Error::config_invalid(format!("failed to parse config file {path}")).with_source(e)
        })?;

        let profile = config.profile_or_default();
        let Some(section) = profiles.remove(profile) else {
            debug!("profile {profile} not found in config file");
            return Ok(None);
        };

        match (section.consumer_key, section.consumer_secret) {
            (Some(key), Some(secret)) if !key.is_empty() && !secret.is_empty() => {
                debug!("loading credential from config file profile {profile}");
                Ok(Some(Credential::new(key, secret)))
            }
            _ => {
                debug!("incomplete profile {profile} in config file, skipping");
                Ok(None)
            }
        }
    }
}
