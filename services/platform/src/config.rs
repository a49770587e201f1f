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

use nutrisign_core::Context;

use crate::constants::*;

/// Endpoints of the nutrition platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformConfig {
    /// Base url of the method-dispatch API used by `foods.search` and
    /// `food.get.v2`.
    ///
    /// - env value: `NUTRISIGN_SERVER_API_URL`
    pub server_api_url: String,
    /// Base url of the image recognition API.
    ///
    /// - env value: `NUTRISIGN_IMAGE_RECOGNITION_URL`
    pub image_recognition_url: String,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            server_api_url: DEFAULT_SERVER_API_URL.to_string(),
            image_recognition_url: DEFAULT_IMAGE_RECOGNITION_URL.to_string(),
        }
    }
}

impl PlatformConfig {
    /// Override endpoints with values from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(NUTRISIGN_SERVER_API_URL) {
            self.server_api_url = v;
        }
        if let Some(v) = ctx.env_var(NUTRISIGN_IMAGE_RECOGNITION_URL) {
            self.image_recognition_url = v;
        }
        self
    }

    /// Set the server API url.
    pub fn with_server_api_url(mut self, url: impl Into<String>) -> Self {
        self.server_api_url = url.into();
        self
    }

    /// Set the image recognition url.
    pub fn with_image_recognition_url(mut self, url: impl Into<String>) -> Self {
        self.image_recognition_url = url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutrisign_core::StaticEnv;
    use std::collections::HashMap;

    #[test]
    fn test_default_endpoints() {
        let config = PlatformConfig::default();
        assert_eq!(config.server_api_url, DEFAULT_SERVER_API_URL);
        assert_eq!(config.image_recognition_url, DEFAULT_IMAGE_RECOGNITION_URL);
    }

    #[test]
    fn test_from_env() {
        let ctx = Context::new().with_env(StaticEnv {
            home_dir: None,
            envs: HashMap::from([(
                NUTRISIGN_SERVER_API_URL.to_string(),
                "http://127.0.0.1:8080/rest/server.api".to_string(),
            )]),
        });

        let config = PlatformConfig::default().from_env(&ctx);
        assert_eq!(config.server_api_url, "http://127.0.0.1:8080/rest/server.api");
        assert_eq!(config.image_recognition_url, DEFAULT_IMAGE_RECOGNITION_URL);
    }
}
