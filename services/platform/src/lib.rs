//! Typed calls of the nutrition platform, signed with OAuth 1.0a.
//!
//! ## Overview
//!
//! Three calls are supported:
//!
//! | request | http | endpoint |
//! |---|---|---|
//! | [`FoodSearch`] | `GET`, query string | server API, `foods.search` |
//! | [`FoodGet`] | `GET`, query string | server API, `food.get.v2` |
//! | [`ImageRecognition`] | `POST`, form body | image recognition API |
//!
//! [`Platform`] signs a call with a [`nutrisign_oauth1::Signer`], turns it
//! into an [`http::Request`] and decodes the JSON response into the schema
//! of that call. Sending is left to the caller.
//!
//! ## Quick Start
//!
//! ```no_run
//! use nutrisign_core::{Context, OsEnv, OsFileRead, Result};
//! use nutrisign_oauth1::{Config, DefaultCredentialProvider, RequestSigner, Signer};
//! use nutrisign_platform::{FoodSearch, Platform, PlatformConfig};
//!
//! fn main() -> Result<()> {
//!     let ctx = Context::new().with_file_read(OsFileRead).with_env(OsEnv);
//!     let config = PlatformConfig::default().from_env(&ctx);
//!     let signer = Signer::new(
//!         ctx,
//!         DefaultCredentialProvider::new(Config::default()),
//!         RequestSigner::new(),
//!     );
//!     let platform = Platform::new(config, signer);
//!
//!     let search = FoodSearch::new("apple");
//!     let req = platform.build_request(&search)?;
//!     println!("{}", req.uri());
//!
//!     // Send `req` with any http client, then:
//!     let body = br#"{"foods":{"food":{"food_id":"35718","food_name":"Apples"}}}"#;
//!     for food in platform.parse_response(&search, body)?.into_foods() {
//!         println!("{}: {}", food.food_id, food.food_name);
//!     }
//!     Ok(())
//! }
//! ```

mod constants;

mod config;
pub use config::PlatformConfig;

mod request;
pub use request::{FoodGet, FoodSearch, ImageRecognition, PlatformRequest};

pub mod response;

mod client;
pub use client::Platform;
