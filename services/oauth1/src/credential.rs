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

use nutrisign_core::{utils::Redact, SigningCredential};

/// Consumer credential for two-legged OAuth 1.0a.
///
/// There is no token or token secret: the signing key is always
/// `percent_encode(consumer_secret) + "&"`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    /// Consumer key, sent as `oauth_consumer_key`.
    pub consumer_key: String,
    /// Consumer secret, only ever used as HMAC key material.
    pub consumer_secret: String,
}

impl Credential {
    /// Create a new credential.
    pub fn new(consumer_key: impl Into<String>, consumer_secret: impl Into<String>) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
        }
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("consumer_key", &Redact::from(&self.consumer_key))
            .field("consumer_secret", &Redact::from(&self.consumer_secret))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.consumer_key.is_empty() && !self.consumer_secret.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_never_prints_secret() {
        let cred = Credential::new(
            "1913e819073e4c3187bcd164640df2e0",
            "07b19f21626f4d238e7ac81da32f5f17",
        );
        let debug = format!("{cred:?}");
        assert!(!debug.contains("07b19f21626f4d238e7ac81da32f5f17"));
        assert!(debug.contains("07b***f17"));
    }

    #[test]
    fn test_is_valid() {
        assert!(Credential::new("key", "secret").is_valid());
        assert!(!Credential::new("", "secret").is_valid());
        assert!(!Credential::new("key", "").is_valid());
    }
}
