use criterion::criterion_group;
use criterion::criterion_main;
use criterion::Criterion;
use nutrisign_core::time::DateTime;
use nutrisign_oauth1::{parameter_string, Credential, ParameterSet, RequestSigner};

criterion_group!(benches, bench);
criterion_main!(benches);

pub fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("oauth1");

    let cred = Credential::new("consumer_key", "consumer_secret");
    let params = ParameterSet::from([
        ("method", "foods.search"),
        ("format", "json"),
        ("search_expression", "crème brûlée & co"),
    ]);

    group.bench_function("sign_request", |b| {
        let signer = RequestSigner::new();

        b.iter(|| {
            signer
                .sign_request(
                    &cred,
                    "GET",
                    "https://platform.fatsecret.com/rest/server.api",
                    params.clone(),
                )
                .expect("must success")
        })
    });

    group.bench_function("sign_request_fixed", |b| {
        let signer = RequestSigner::new()
            .with_nonce("nonce123")
            .with_time(DateTime::from_timestamp(1_700_000_000, 0).expect("in range"));

        b.iter(|| {
            signer
                .sign_request(
                    &cred,
                    "GET",
                    "https://platform.fatsecret.com/rest/server.api",
                    params.clone(),
                )
                .expect("must success")
                .query_string()
        })
    });

    group.bench_function("parameter_string", |b| {
        let image = "A".repeat(64 * 1024);
        let params = params.clone().with("image", image);

        b.iter(|| parameter_string(&params))
    });

    group.finish();
}
