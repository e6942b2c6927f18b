use std::sync::Arc;
use std::thread;

use ffunction::prelude::*;
use ffunction::{parse_json_object, required_string};

fn get_weather() -> AutoFunction {
    AutoFunction::from_sync(|args| {
        let args = parse_json_object(&args)?;
        let city = required_string(&args, "city")?;
        Ok(format!("{city}: 21C and clear"))
    })
}

#[tokio::test]
async fn weather_scenario_uses_default_budget_and_exact_lookup() {
    let registry = FunctionRegistry::new();
    let weather = get_weather();

    registry
        .register([("get_weather", weather.clone())])
        .expect("registration should succeed");

    assert_eq!(registry.max_retry(), DEFAULT_MAX_RETRY);
    assert_eq!(registry.max_retry(), 10);

    let found = registry.lookup("get_weather").expect("get_weather registered");
    assert!(found.ptr_eq(&weather));
    assert!(registry.lookup("get_time").is_none());

    let output = found
        .invoke("{\"city\":\"Paris\"}")
        .await
        .expect("invoke should succeed");
    assert_eq!(output, "Paris: 21C and clear");
}

#[tokio::test]
async fn runtime_pinned_before_reregistration_keeps_old_functions() {
    let registry = FunctionRegistry::new();
    registry
        .register_with_retry([("get_weather", get_weather())], 2)
        .expect("first registration");

    let runtime = AutoFunctionRuntime::from_registry(&registry).expect("registered");
    let mut budget = runtime.retry_budget("stream-1");

    registry
        .register([("get_time", AutoFunction::from_fn(|_| "12:00".to_string()))])
        .expect("second registration");

    let output = runtime
        .execute_call(
            &FunctionCall::new("call_1", "get_weather", "{\"city\":\"Bern\"}"),
            &mut budget,
        )
        .await
        .expect("pinned snapshot still serves get_weather");
    assert_eq!(output.output, "Bern: 21C and clear");
    assert!(registry.lookup("get_weather").is_none());
}

#[test]
fn concurrent_readers_never_observe_a_mixed_function_set() {
    let registry = Arc::new(FunctionRegistry::new());
    let constant = |value: &'static str| AutoFunction::from_fn(move |_| value.to_string());

    registry
        .register([("a1", constant("a")), ("a2", constant("a"))])
        .expect("initial registration");

    let writer = {
        let registry = Arc::clone(&registry);
        thread::spawn(move || {
            for round in 0..500 {
                if round % 2 == 0 {
                    registry
                        .register_with_retry([("b1", constant("b")), ("b2", constant("b"))], 1)
                        .expect("set b");
                } else {
                    registry
                        .register_with_retry([("a1", constant("a")), ("a2", constant("a"))], 2)
                        .expect("set a");
                }
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for _ in 0..2_000 {
                    let snapshot = registry.snapshot().expect("always registered");
                    let names = snapshot.function_names();
                    let consistent = (names == ["a1", "a2"] && snapshot.max_retry() == 2)
                        || (names == ["b1", "b2"] && snapshot.max_retry() == 1)
                        || (names == ["a1", "a2"] && snapshot.max_retry() == DEFAULT_MAX_RETRY);
                    assert!(consistent, "observed mixed state: {names:?}");
                }
            })
        })
        .collect();

    writer.join().expect("writer thread");
    for reader in readers {
        reader.join().expect("reader thread");
    }
}
