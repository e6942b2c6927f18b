use std::sync::{Arc, Mutex};

use ffunction::{
    AutoFunction, AutoFunctionHooks, FunctionCall, FunctionError, FunctionErrorKind,
    parse_json_object, required_string,
};
use fproject::ProjectClientOptions;

#[derive(Default)]
struct RegistrationLog {
    entries: Mutex<Vec<String>>,
}

impl AutoFunctionHooks for RegistrationLog {
    fn on_registered(&self, function_names: &[String], max_retry: u32) {
        self.entries
            .lock()
            .expect("entries lock")
            .push(format!("{}@{max_retry}", function_names.join("+")));
    }

    fn on_registration_rejected(&self, error: &FunctionError) {
        self.entries
            .lock()
            .expect("entries lock")
            .push(error.message.clone());
    }
}

fn lookup_order() -> AutoFunction {
    AutoFunction::from_sync(|args| {
        let args = parse_json_object(&args)?;
        let order_id = required_string(&args, "order_id")?;
        if order_id == "missing" {
            return Err(FunctionError::execution("order not found"));
        }

        Ok(format!("order {order_id} shipped"))
    })
}

#[tokio::test]
async fn enabled_options_drive_a_streaming_session_budget() {
    let mut options = ProjectClientOptions::builder().client_cache_size(16).build();
    options
        .enable_auto_function_calls_with_retry([("lookup_order", lookup_order())], 1)
        .expect("enable should succeed");

    let runtime = options
        .auto_function_runtime()
        .expect("auto function calls are enabled");
    let mut budget = runtime.retry_budget("stream-42");

    let ok = runtime
        .execute_call(
            &FunctionCall::new("c1", "lookup_order", "{\"order_id\":\"A7\"}"),
            &mut budget,
        )
        .await
        .expect("known order");
    assert_eq!(ok.output, "order A7 shipped");

    let missing = FunctionCall::new("c2", "lookup_order", "{\"order_id\":\"missing\"}");
    let first = runtime
        .execute_call(&missing, &mut budget)
        .await
        .expect_err("first failure is tolerated");
    assert_eq!(first.kind, FunctionErrorKind::Execution);

    let second = runtime
        .execute_call(&missing, &mut budget)
        .await
        .expect_err("second failure exhausts the budget");
    assert_eq!(second.kind, FunctionErrorKind::RetryBudgetExhausted);
}

#[test]
fn builder_hooks_see_every_enable_attempt() {
    let log = Arc::new(RegistrationLog::default());
    let mut options = ProjectClientOptions::builder().hooks(log.clone()).build();

    options
        .enable_auto_function_calls([("lookup_order", lookup_order())])
        .expect("enable should succeed");
    let _ = options.enable_auto_function_calls(Vec::<(&str, AutoFunction)>::new());

    let entries = log.entries.lock().expect("entries lock");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0], "lookup_order@10");
    assert!(entries[1].contains("at least one function"));
    assert!(options.auto_function_calls_enabled());
}
