//! Sign a `foods.search` call and print the resulting request.
//!
//! ```bash
//! NUTRISIGN_CONSUMER_KEY=... NUTRISIGN_CONSUMER_SECRET=... \
//!     cargo run --example sign_food_search -- "apple pie"
//! ```

use nutrisign_core::{Context, OsEnv, OsFileRead, Result};
use nutrisign_oauth1::{
    Config, DefaultCredentialProvider, ParameterLocation, ParameterSet, RequestSigner, Signer,
};

fn main() -> Result<()> {
    let _ = env_logger::builder().try_init();

    let term = std::env::args().nth(1).unwrap_or_else(|| "apple".to_string());

    let ctx = Context::new().with_file_read(OsFileRead).with_env(OsEnv);
    let config = Config::default().from_env(&ctx);
    let signer = Signer::new(
        ctx,
        DefaultCredentialProvider::new(config),
        RequestSigner::new(),
    );

    let signed = signer.sign(
        "GET",
        "https://platform.fatsecret.com/rest/server.api",
        ParameterSet::from([
            ("method", "foods.search"),
            ("search_expression", term.as_str()),
            ("format", "json"),
        ]),
    )?;

    let req = signed.into_http_request(ParameterLocation::Query)?;
    println!("{} {}", req.method(), req.uri());
    Ok(())
}
