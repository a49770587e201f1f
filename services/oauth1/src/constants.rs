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

use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

/// `oauth_consumer_key` parameter name.
pub const OAUTH_CONSUMER_KEY: &str = "oauth_consumer_key";
/// `oauth_nonce` parameter name.
pub const OAUTH_NONCE: &str = "oauth_nonce";
/// `oauth_signature` parameter name.
pub const OAUTH_SIGNATURE: &str = "oauth_signature";
/// `oauth_signature_method` parameter name.
pub const OAUTH_SIGNATURE_METHOD: &str = "oauth_signature_method";
/// `oauth_timestamp` parameter name.
pub const OAUTH_TIMESTAMP: &str = "oauth_timestamp";
/// `oauth_version` parameter name.
pub const OAUTH_VERSION: &str = "oauth_version";

/// Parameters that must be present before signing.
pub const REQUIRED_OAUTH_PARAMS: [&str; 5] = [
    OAUTH_CONSUMER_KEY,
    OAUTH_NONCE,
    OAUTH_SIGNATURE_METHOD,
    OAUTH_TIMESTAMP,
    OAUTH_VERSION,
];

/// The only supported `oauth_signature_method`.
pub const HMAC_SHA1: &str = "HMAC-SHA1";
/// The only supported `oauth_version`.
pub const OAUTH_VERSION_1_0: &str = "1.0";

pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

// Env values used in nutrisign.
pub const NUTRISIGN_CONSUMER_KEY: &str = "NUTRISIGN_CONSUMER_KEY";
pub const NUTRISIGN_CONSUMER_SECRET: &str = "NUTRISIGN_CONSUMER_SECRET";
pub const NUTRISIGN_CONFIG_FILE: &str = "NUTRISIGN_CONFIG_FILE";
pub const NUTRISIGN_PROFILE: &str = "NUTRISIGN_PROFILE";

pub const DEFAULT_CONFIG_FILE: &str = "~/.nutrisign/config.toml";
pub const DEFAULT_PROFILE: &str = "default";

/// AsciiSet for [OAuth 1.0 parameter encoding](https://tools.ietf.org/html/rfc5849#section-3.6)
///
/// - ALPHA, DIGIT, '-', '.', '_', '~' MUST NOT be encoded.
/// - All other bytes MUST be encoded with uppercase hex.
pub static OAUTH_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
