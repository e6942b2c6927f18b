use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Duration;

use fcommon::SessionId;
use ffunction::{AutoFunctionHooks, FunctionCall, FunctionCallOutput, FunctionError};

/// Swallows panics raised by the wrapped hooks so observers cannot break dispatch.
pub struct SafeAutoFunctionHooks<H> {
    inner: H,
}

impl<H> SafeAutoFunctionHooks<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H> AutoFunctionHooks for SafeAutoFunctionHooks<H>
where
    H: AutoFunctionHooks,
{
    fn on_registered(&self, function_names: &[String], max_retry: u32) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_registered(function_names, max_retry)
        }));
    }

    fn on_registration_rejected(&self, error: &FunctionError) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_registration_rejected(error)
        }));
    }

    fn on_invocation_start(&self, session_id: &SessionId, call: &FunctionCall) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_invocation_start(session_id, call)
        }));
    }

    fn on_invocation_success(
        &self,
        session_id: &SessionId,
        call: &FunctionCall,
        output: &FunctionCallOutput,
        elapsed: Duration,
    ) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner
                .on_invocation_success(session_id, call, output, elapsed)
        }));
    }

    fn on_invocation_failure(
        &self,
        session_id: &SessionId,
        call: &FunctionCall,
        error: &FunctionError,
        elapsed: Duration,
        remaining_retries: u32,
    ) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner
                .on_invocation_failure(session_id, call, error, elapsed, remaining_retries)
        }));
    }
}
