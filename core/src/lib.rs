//! Core components for signing nutrition platform requests.
//!
//! This crate provides the foundational types and traits shared by the
//! nutrisign crates:
//!
//! - **Context**: holds the environment and file reader that credential
//!   providers read from.
//! - **Traits**: [`ProvideCredential`] for loading credentials and
//!   [`SigningCredential`] for validating them.
//! - **Error**: a single [`Error`] type with an [`ErrorKind`].
//!
//! ## Example
//!
//! ```
//! use nutrisign_core::{Context, ProvideCredential, ProvideCredentialChain, Result};
//!
//! #[derive(Debug)]
//! struct FromEnv;
//!
//! impl ProvideCredential for FromEnv {
//!     type Credential = String;
//!
//!     fn provide_credential(&self, ctx: &Context) -> Result<Option<String>> {
//!         Ok(ctx.env_var("MY_API_SECRET"))
//!     }
//! }
//!
//! let chain = ProvideCredentialChain::new().push(FromEnv);
//! // No env configured, nothing is found.
//! assert_eq!(chain.provide_credential(&Context::new()).unwrap(), None);
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: HMAC-SHA1 and base64 helpers
//! - [`time`]: Time manipulation utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::Context;
pub use context::{Env, NoopEnv, OsEnv, StaticEnv};
pub use context::{FileRead, NoopFileRead, OsFileRead};

mod api;
pub use api::{ProvideCredential, ProvideCredentialChain, SigningCredential};

mod error;
pub use error::{Error, ErrorKind, Result};
