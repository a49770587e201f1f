//! OAuth 1.0a request signing for nutrisign.
//!
//! This crate signs requests with the two-legged flavour of OAuth 1.0a:
//! a consumer key and consumer secret, no token, and `HMAC-SHA1` as the
//! only signature method.
//!
//! ## Overview
//!
//! Signing a request takes every parameter that will travel with it,
//! percent-encodes keys and values, sorts them by encoded key, and joins
//! them into the parameter string. That string is combined with the
//! upper-cased HTTP method and the encoded base URL into the signature
//! base string, which is then signed with `HMAC-SHA1` keyed by
//! `encode(consumer_secret) + "&"`. The base64 signature is added to the
//! parameters as `oauth_signature`.
//!
//! ## Quick Start
//!
//! ```no_run
//! use nutrisign_core::{Context, OsEnv, OsFileRead, Result};
//! use nutrisign_oauth1::{
//!     Config, DefaultCredentialProvider, ParameterLocation, ParameterSet, RequestSigner, Signer,
//! };
//!
//! fn main() -> Result<()> {
//!     let ctx = Context::new().with_file_read(OsFileRead).with_env(OsEnv);
//!
//!     let signer = Signer::new(
//!         ctx,
//!         DefaultCredentialProvider::new(Config::default()),
//!         RequestSigner::new(),
//!     );
//!
//!     let params = ParameterSet::from([
//!         ("method", "foods.search"),
//!         ("format", "json"),
//!         ("search_expression", "apple"),
//!     ]);
//!     let signed = signer.sign("GET", "https://platform.fatsecret.com/rest/server.api", params)?;
//!
//!     let req = signed.into_http_request(ParameterLocation::Query)?;
//!     println!("{}", req.uri());
//!     Ok(())
//! }
//! ```
//!
//! ## Credential Sources
//!
//! ### Environment Variables
//!
//! ```bash
//! export NUTRISIGN_CONSUMER_KEY=your-consumer-key
//! export NUTRISIGN_CONSUMER_SECRET=your-consumer-secret
//! ```
//!
//! ### Configuration File
//!
//! Credentials can be read from `~/.nutrisign/config.toml`, one table per
//! profile. Use `NUTRISIGN_CONFIG_FILE` and `NUTRISIGN_PROFILE` to pick
//! another file or profile.
//!
//! ```toml
//! [default]
//! consumer_key = "your-consumer-key"
//! consumer_secret = "your-consumer-secret"
//! ```
//!
//! ## Deterministic Signing
//!
//! [`RequestSigner::with_nonce`] and [`RequestSigner::with_time`] pin the
//! nonce and timestamp, and [`sign`] takes them explicitly. Both are
//! useful for tests and for reproducing a signature by hand.

#![warn(missing_docs)]

mod constants;
pub use constants::{
    HMAC_SHA1, OAUTH_CONSUMER_KEY, OAUTH_NONCE, OAUTH_SIGNATURE, OAUTH_SIGNATURE_METHOD,
    OAUTH_TIMESTAMP, OAUTH_VERSION, OAUTH_VERSION_1_0,
};

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod parameters;
pub use parameters::ParameterSet;

mod sign_request;
pub use sign_request::{
    parameter_string, percent_encode, sign, signature_base_string, RequestSigner,
};

mod signed_request;
pub use signed_request::{ParameterLocation, SignedRequest};

mod signer;
pub use signer::Signer;

mod provide_credential;
pub use provide_credential::*;
