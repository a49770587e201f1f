//! Example of building a custom credential chain with specific providers

use nutrisign_core::{Context, OsEnv, OsFileRead, ProvideCredentialChain, Result};
use nutrisign_oauth1::{
    Config, ConfigFileCredentialProvider, EnvCredentialProvider, ParameterSet, RequestSigner,
    Signer, StaticCredentialProvider,
};

fn main() -> Result<()> {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .try_init();

    let ctx = Context::new().with_file_read(OsFileRead).with_env(OsEnv);

    // Try a staging profile first, then env, then a development fallback.
    let chain = ProvideCredentialChain::new()
        .push(
            ConfigFileCredentialProvider::new()
                .with_config(Config::default().with_profile("staging")),
        )
        .push(EnvCredentialProvider::new())
        .push(StaticCredentialProvider::new("dev-key", "dev-secret"));

    let signer = Signer::new(ctx, chain, RequestSigner::new());

    let signed = signer.sign(
        "GET",
        "https://platform.fatsecret.com/rest/server.api",
        ParameterSet::from([
            ("method", "foods.search"),
            ("search_expression", "apple"),
            ("format", "json"),
        ]),
    )?;

    println!("signed url: {}", signed.url());
    Ok(())
}
