use fautocall::prelude::*;
use fautocall::{ElasticSanSku, ElasticSanSkuName};

fn describe_san(args: String) -> Result<String, FunctionError> {
    let args = parse_json_object(&args)?;
    let location = required_string(&args, "location")?;

    let san = ElasticSanData::new(location, ElasticSanSku::new(ElasticSanSkuName::PremiumLrs), 10, 2);
    san.to_json()
        .map_err(|err| FunctionError::execution(err.to_string()))
}

#[tokio::test]
async fn client_options_dispatch_model_requested_calls() {
    let mut options = observed_client_options();
    options
        .enable_auto_function_calls(fa_try_functions! {
            "describe_san" => describe_san,
        })
        .expect("enable should succeed");

    let runtime = options
        .auto_function_runtime()
        .expect("auto function calls enabled");
    let mut budget = runtime.retry_budget("stream-1");
    assert_eq!(budget.max_retry(), DEFAULT_MAX_RETRY);

    let calls = vec![
        function_call("c1", "describe_san", "{\"location\":\"northeurope\"}"),
        function_call("c2", "describe_san", "{}"),
        function_call("c3", "get_time", "{}"),
    ];
    let results = runtime.execute_all(&calls, &mut budget).await;

    let described = results[0].as_ref().expect("first call succeeds");
    let san = ElasticSanData::from_json(&described.output).expect("output is a resource");
    assert_eq!(san.resource().location, "northeurope");

    assert_eq!(
        results[1].as_ref().expect_err("missing location").kind,
        FunctionErrorKind::InvalidArguments
    );
    assert_eq!(
        results[2].as_ref().expect_err("unknown function").kind,
        FunctionErrorKind::NotFound
    );
    assert_eq!(budget.failures(), 2);
    assert_eq!(budget.remaining(), DEFAULT_MAX_RETRY - 2);
}
