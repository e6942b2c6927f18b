//! Tracing-based observability hooks for function registration and invocation.
//!
//! ```rust
//! use ffunction::AutoFunctionHooks;
//! use fobserve::TracingAutoFunctionHooks;
//!
//! fn accepts_hooks(_hooks: &dyn AutoFunctionHooks) {}
//!
//! let hooks = TracingAutoFunctionHooks;
//! accepts_hooks(&hooks);
//! ```

use std::time::Duration;

use fcommon::SessionId;
use ffunction::{AutoFunctionHooks, FunctionCall, FunctionCallOutput, FunctionError};

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAutoFunctionHooks;

impl AutoFunctionHooks for TracingAutoFunctionHooks {
    fn on_registered(&self, function_names: &[String], max_retry: u32) {
        tracing::info!(
            phase = "registry",
            event = "registered",
            function_count = function_names.len(),
            functions = ?function_names,
            max_retry
        );
    }

    fn on_registration_rejected(&self, error: &FunctionError) {
        tracing::warn!(
            phase = "registry",
            event = "registration_rejected",
            error_kind = ?error.kind,
            error = %error
        );
    }

    fn on_invocation_start(&self, session_id: &SessionId, call: &FunctionCall) {
        tracing::debug!(
            phase = "invocation",
            event = "start",
            session_id = %session_id,
            function = %call.name,
            call_id = %call.id
        );
    }

    fn on_invocation_success(
        &self,
        session_id: &SessionId,
        call: &FunctionCall,
        output: &FunctionCallOutput,
        elapsed: Duration,
    ) {
        tracing::info!(
            phase = "invocation",
            event = "success",
            session_id = %session_id,
            function = %call.name,
            call_id = %call.id,
            output_bytes = output.output.len(),
            elapsed_ms = elapsed.as_millis() as u64
        );
    }

    fn on_invocation_failure(
        &self,
        session_id: &SessionId,
        call: &FunctionCall,
        error: &FunctionError,
        elapsed: Duration,
        remaining_retries: u32,
    ) {
        tracing::error!(
            phase = "invocation",
            event = "failure",
            session_id = %session_id,
            function = %call.name,
            call_id = %call.id,
            elapsed_ms = elapsed.as_millis() as u64,
            error_kind = ?error.kind,
            retryable = error.retryable,
            remaining_retries,
            error = %error
        );
    }
}
