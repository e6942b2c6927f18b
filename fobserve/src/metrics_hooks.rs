//! Metrics-based observability hooks for function registration and invocation.
//!
//! ```rust
//! use ffunction::AutoFunctionHooks;
//! use fobserve::MetricsAutoFunctionHooks;
//!
//! fn accepts_hooks(_hooks: &dyn AutoFunctionHooks) {}
//!
//! let hooks = MetricsAutoFunctionHooks;
//! accepts_hooks(&hooks);
//! ```

use std::time::Duration;

use fcommon::SessionId;
use ffunction::{AutoFunctionHooks, FunctionCall, FunctionCallOutput, FunctionError};

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsAutoFunctionHooks;

impl AutoFunctionHooks for MetricsAutoFunctionHooks {
    fn on_registered(&self, function_names: &[String], max_retry: u32) {
        metrics::counter!("fautocall_registry_registered_total").increment(1);
        metrics::gauge!("fautocall_registry_functions").set(function_names.len() as f64);
        metrics::gauge!("fautocall_registry_max_retry").set(f64::from(max_retry));
    }

    fn on_registration_rejected(&self, error: &FunctionError) {
        metrics::counter!(
            "fautocall_registry_rejected_total",
            "error_kind" => format!("{:?}", error.kind)
        )
        .increment(1);
    }

    fn on_invocation_start(&self, _session_id: &SessionId, call: &FunctionCall) {
        metrics::counter!(
            "fautocall_invocation_start_total",
            "function" => call.name.clone()
        )
        .increment(1);
    }

    fn on_invocation_success(
        &self,
        _session_id: &SessionId,
        call: &FunctionCall,
        _output: &FunctionCallOutput,
        elapsed: Duration,
    ) {
        metrics::counter!(
            "fautocall_invocation_success_total",
            "function" => call.name.clone()
        )
        .increment(1);
        metrics::histogram!(
            "fautocall_invocation_duration_seconds",
            "function" => call.name.clone(),
            "status" => "success"
        )
        .record(elapsed.as_secs_f64());
    }

    fn on_invocation_failure(
        &self,
        _session_id: &SessionId,
        call: &FunctionCall,
        error: &FunctionError,
        elapsed: Duration,
        remaining_retries: u32,
    ) {
        metrics::counter!(
            "fautocall_invocation_failure_total",
            "function" => call.name.clone(),
            "error_kind" => format!("{:?}", error.kind)
        )
        .increment(1);
        metrics::histogram!(
            "fautocall_invocation_duration_seconds",
            "function" => call.name.clone(),
            "status" => "failure"
        )
        .record(elapsed.as_secs_f64());
        metrics::histogram!(
            "fautocall_invocation_remaining_retries",
            "function" => call.name.clone()
        )
        .record(f64::from(remaining_retries));
    }
}
