//! Integration tests for ProvideCredentialChain with OAuth 1.0a credentials

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use nutrisign_core::{Context, Error, ProvideCredential, ProvideCredentialChain, StaticEnv};
use nutrisign_oauth1::{Credential, EnvCredentialProvider, StaticCredentialProvider};

/// Mock provider that tracks how many times it was called
#[derive(Debug)]
struct CountingProvider {
    name: String,
    outcome: Outcome,
    call_count: Arc<Mutex<usize>>,
}

#[derive(Debug, Clone, Copy)]
enum Outcome {
    Found,
    Missing,
    Failed,
}

impl CountingProvider {
    fn new(name: &str, outcome: Outcome) -> (Self, Arc<Mutex<usize>>) {
        let count = Arc::new(Mutex::new(0));
        let provider = Self {
            name: name.to_string(),
            outcome,
            call_count: count.clone(),
        };
        (provider, count)
    }
}

impl ProvideCredential for CountingProvider {
    type Credential = Credential;

    fn provide_credential(&self, _ctx: &Context) -> nutrisign_core::Result<Option<Self::Credential>> {
        *self.call_count.lock().unwrap() += 1;

        match self.outcome {
            Outcome::Found => Ok(Some(Credential::new(
                format!("{}_key", self.name),
                format!("{}_secret", self.name),
            ))),
            Outcome::Missing => Ok(None),
            Outcome::Failed => Err(Error::config_invalid(format!("{} is broken", self.name))),
        }
    }
}

#[test]
fn test_chain_stops_at_first_success() {
    let _ = env_logger::builder().is_test(true).try_init();

    let (p1, count1) = CountingProvider::new("provider1", Outcome::Missing);
    let (p2, count2) = CountingProvider::new("provider2", Outcome::Found);
    let (p3, count3) = CountingProvider::new("provider3", Outcome::Found);

    let chain = ProvideCredentialChain::new().push(p1).push(p2).push(p3);

    let cred = chain
        .provide_credential(&Context::new())
        .unwrap()
        .expect("credential must be found");
    assert_eq!(cred.consumer_key, "provider2_key");
    assert_eq!(cred.consumer_secret, "provider2_secret");

    assert_eq!(*count1.lock().unwrap(), 1);
    assert_eq!(*count2.lock().unwrap(), 1);
    assert_eq!(*count3.lock().unwrap(), 0);
}

#[test]
fn test_chain_skips_failing_provider() {
    let _ = env_logger::builder().is_test(true).try_init();

    let (p1, count1) = CountingProvider::new("provider1", Outcome::Failed);
    let (p2, _) = CountingProvider::new("provider2", Outcome::Found);

    let chain = ProvideCredentialChain::new().push(p1).push(p2);
    let cred = chain.provide_credential(&Context::new()).unwrap();

    assert_eq!(*count1.lock().unwrap(), 1);
    assert_eq!(cred.map(|c| c.consumer_key), Some("provider2_key".to_string()));
}

#[test]
fn test_chain_with_real_providers() {
    let ctx = Context::new().with_env(StaticEnv {
        home_dir: None,
        envs: HashMap::from_iter([
            ("NUTRISIGN_CONSUMER_KEY".to_string(), "env_key".to_string()),
            (
                "NUTRISIGN_CONSUMER_SECRET".to_string(),
                "env_secret".to_string(),
            ),
        ]),
    });

    let chain = ProvideCredentialChain::new()
        .push(EnvCredentialProvider::new())
        .push(StaticCredentialProvider::new("static_key", "static_secret"));
    let cred = chain.provide_credential(&ctx).unwrap();
    assert_eq!(cred, Some(Credential::new("env_key", "env_secret")));

    let cred = chain.provide_credential(&Context::new()).unwrap();
    assert_eq!(cred, Some(Credential::new("static_key", "static_secret")));
}

#[test]
fn test_empty_chain() {
    let chain: ProvideCredentialChain<Credential> = ProvideCredentialChain::new();
    assert!(chain.is_empty());
    assert!(chain.provide_credential(&Context::new()).unwrap().is_none());
}
