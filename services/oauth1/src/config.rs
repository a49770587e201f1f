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

use std::fmt::{Debug, Formatter};

use crate::constants::*;
use nutrisign_core::{utils::Redact, Context};

/// Config carries all the configuration for OAuth 1.0a signing.
#[derive(Clone, Default)]
pub struct Config {
    /// `consumer_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `NUTRISIGN_CONSUMER_KEY`
    pub consumer_key: Option<String>,
    /// `consumer_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `NUTRISIGN_CONSUMER_SECRET`
    pub consumer_secret: Option<String>,
    /// `config_file` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `NUTRISIGN_CONFIG_FILE`
    /// - default to: `~/.nutrisign/config.toml`
    pub config_file: Option<String>,
    /// `profile` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `NUTRISIGN_PROFILE`
    /// - default to: `default`
    pub profile: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set consumer_key
    pub fn with_consumer_key(mut self, consumer_key: impl Into<String>) -> Self {
        self.consumer_key = Some(consumer_key.into());
        self
    }

    /// Set consumer_secret
    pub fn with_consumer_secret(mut self, consumer_secret: impl Into<String>) -> Self {
        self.consumer_secret = Some(consumer_secret.into());
        self
    }

    /// Set config_file
    pub fn with_config_file(mut self, config_file: impl Into<String>) -> Self {
        self.config_file = Some(config_file.into());
        self
    }

    /// Set profile
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    /// Fill unset fields from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(NUTRISIGN_CONSUMER_KEY) {
            self.consumer_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(NUTRISIGN_CONSUMER_SECRET) {
            self.consumer_secret.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(NUTRISIGN_CONFIG_FILE) {
            self.config_file.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(NUTRISIGN_PROFILE) {
            self.profile.get_or_insert(v);
        }

        self
    }

    /// The config file to read, falling back to the default location.
    pub fn config_file_or_default(&self) -> &str {
        self.config_file.as_deref().unwrap_or(DEFAULT_CONFIG_FILE)
    }

    /// The profile to read, falling back to `default`.
    pub fn profile_or_default(&self) -> &str {
        self.profile.as_deref().unwrap_or(DEFAULT_PROFILE)
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("consumer_key", &Redact::from(&self.consumer_key))
            .field("consumer_secret", &Redact::from(&self.consumer_secret))
            .field("config_file", &self.config_file)
            .field("profile", &self.profile)
            .finish()
    }
}
