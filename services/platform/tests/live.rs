use std::env;

use anyhow::Result;
use log::{debug, warn};
use nutrisign_core::{Context, OsEnv, OsFileRead};
use nutrisign_oauth1::{Config, DefaultCredentialProvider, RequestSigner, Signer};
use nutrisign_platform::{FoodGet, FoodSearch, Platform, PlatformConfig, PlatformRequest};
use reqwest::Client;

fn init_platform() -> Option<Platform> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();

    if env::var("NUTRISIGN_PLATFORM_TEST").ok().as_deref() != Some("on") {
        return None;
    }

    let ctx = Context::new().with_file_read(OsFileRead).with_env(OsEnv);
    let config = PlatformConfig::default().from_env(&ctx);
    let signer = Signer::new(
        ctx.clone(),
        DefaultCredentialProvider::new(Config::default().from_env(&ctx)),
        RequestSigner::new(),
    );

    Some(Platform::new(config, signer))
}

async fn send<R: PlatformRequest>(platform: &Platform, req: &R) -> Result<R::Response> {
    let signed = platform.build_request(req)?;
    debug!("signed request: {signed:?}");

    let resp = Client::new()
        .execute(signed.try_into()?)
        .await
        .expect("request must succeed");
    debug!("got response: {resp:?}");
    assert!(resp.status().is_success());

    let body = resp.bytes().await?;
    Ok(platform.parse_response(req, &body)?)
}

#[tokio::test]
async fn test_food_search() -> Result<()> {
    let Some(platform) = init_platform() else {
        warn!("NUTRISIGN_PLATFORM_TEST is not set, skipped");
        return Ok(());
    };

    let foods = send(&platform, &FoodSearch::new("apple")).await?.into_foods();
    assert!(!foods.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_food_get() -> Result<()> {
    let Some(platform) = init_platform() else {
        warn!("NUTRISIGN_PLATFORM_TEST is not set, skipped");
        return Ok(());
    };

    let food_id = env::var("NUTRISIGN_PLATFORM_FOOD_ID")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(33691);

    let food = send(&platform, &FoodGet::new(food_id)).await?.food;
    assert_eq!(food.food_id, food_id);
    debug!("servings: {:?}", food.serving_summaries());
    Ok(())
}
