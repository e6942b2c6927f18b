//! Lifecycle hooks for registration and invocation events.
//!
//! ```rust
//! use ffunction::{AutoFunctionHooks, NoopAutoFunctionHooks};
//!
//! fn assert_hooks_trait(_hooks: &dyn AutoFunctionHooks) {}
//!
//! let hooks = NoopAutoFunctionHooks;
//! assert_hooks_trait(&hooks);
//! ```

use std::time::Duration;

use fcommon::SessionId;

use crate::{FunctionCall, FunctionCallOutput, FunctionError};

pub trait AutoFunctionHooks: Send + Sync {
    fn on_registered(&self, _function_names: &[String], _max_retry: u32) {}

    fn on_registration_rejected(&self, _error: &FunctionError) {}

    fn on_invocation_start(&self, _session_id: &SessionId, _call: &FunctionCall) {}

    fn on_invocation_success(
        &self,
        _session_id: &SessionId,
        _call: &FunctionCall,
        _output: &FunctionCallOutput,
        _elapsed: Duration,
    ) {
    }

    /// `remaining_retries` is the budget left after this failure was charged.
    fn on_invocation_failure(
        &self,
        _session_id: &SessionId,
        _call: &FunctionCall,
        _error: &FunctionError,
        _elapsed: Duration,
        _remaining_retries: u32,
    ) {
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopAutoFunctionHooks;

impl AutoFunctionHooks for NoopAutoFunctionHooks {}
