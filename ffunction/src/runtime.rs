//! Dispatch of model-requested function calls against a pinned registration.

use std::sync::Arc;
use std::time::{Duration, Instant};

use fcommon::SessionId;
use futures_timer::Delay;
use futures_util::future::{Either, join_all, select};

use crate::{
    AutoFunction, AutoFunctionCallOptions, AutoFunctionHooks, FunctionCall, FunctionCallOutput,
    FunctionError, FunctionFuture, FunctionRegistry, NoopAutoFunctionHooks, RetryBudget,
};

pub trait FunctionRuntime: Send + Sync {
    fn execute<'a>(
        &'a self,
        call: &'a FunctionCall,
        budget: &'a mut RetryBudget,
    ) -> FunctionFuture<'a, Result<FunctionCallOutput, FunctionError>>;
}

#[derive(Clone)]
pub struct AutoFunctionRuntime {
    options: Arc<AutoFunctionCallOptions>,
    hooks: Arc<dyn AutoFunctionHooks>,
    timeout: Option<Duration>,
}

impl AutoFunctionRuntime {
    pub fn new(options: Arc<AutoFunctionCallOptions>) -> Self {
        Self {
            options,
            hooks: Arc::new(NoopAutoFunctionHooks),
            timeout: None,
        }
    }

    /// Pins the registry's current registration and hooks. `None` while unregistered.
    pub fn from_registry(registry: &FunctionRegistry) -> Option<Self> {
        registry
            .snapshot()
            .map(|options| Self::new(options).with_hooks(registry.hooks()))
    }

    pub fn with_hooks(mut self, hooks: Arc<dyn AutoFunctionHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn options(&self) -> Arc<AutoFunctionCallOptions> {
        Arc::clone(&self.options)
    }

    /// Starts a fresh budget for one streaming session.
    pub fn retry_budget(&self, session_id: impl Into<SessionId>) -> RetryBudget {
        RetryBudget::new(session_id, self.options.max_retry())
    }

    pub async fn execute_call(
        &self,
        call: &FunctionCall,
        budget: &mut RetryBudget,
    ) -> Result<FunctionCallOutput, FunctionError> {
        if budget.is_exhausted() {
            return Err(exhausted_before_call(call, budget));
        }

        let session_id = budget.session_id().clone();
        let (outcome, elapsed) = self.run(&session_id, call).await;
        self.settle(call, outcome, elapsed, budget)
    }

    /// Runs every call concurrently, then charges failures in call order.
    ///
    /// Every call in the batch has already run when failures are charged, so
    /// exhausting the budget partway through only changes the later failures
    /// to `RetryBudgetExhausted`. Later successes in the same batch are still
    /// returned as `Ok`. Calls made after the batch short-circuit.
    pub async fn execute_all(
        &self,
        calls: &[FunctionCall],
        budget: &mut RetryBudget,
    ) -> Vec<Result<FunctionCallOutput, FunctionError>> {
        if budget.is_exhausted() {
            return calls
                .iter()
                .map(|call| Err(exhausted_before_call(call, budget)))
                .collect();
        }

        let session_id = budget.session_id().clone();
        let outcomes = join_all(calls.iter().map(|call| self.run(&session_id, call))).await;

        calls
            .iter()
            .zip(outcomes)
            .map(|(call, (outcome, elapsed))| self.settle(call, outcome, elapsed, budget))
            .collect()
    }

    async fn run(
        &self,
        session_id: &SessionId,
        call: &FunctionCall,
    ) -> (Result<String, FunctionError>, Duration) {
        self.hooks.on_invocation_start(session_id, call);
        let started = Instant::now();

        let outcome = match self.options.lookup(&call.name) {
            Some(function) => self.invoke(function, &call.arguments).await,
            None => Err(FunctionError::not_found(format!(
                "function '{}' is not registered",
                call.name
            ))),
        };

        (outcome, started.elapsed())
    }

    async fn invoke(&self, function: &AutoFunction, args_json: &str) -> Result<String, FunctionError> {
        let invocation = function.invoke(args_json);
        let Some(limit) = self.timeout else {
            return invocation.await;
        };

        match select(invocation, Delay::new(limit)).await {
            Either::Left((outcome, _)) => outcome,
            Either::Right(((), _)) => Err(FunctionError::timeout(format!(
                "function call exceeded {}ms",
                limit.as_millis()
            ))),
        }
    }

    fn settle(
        &self,
        call: &FunctionCall,
        outcome: Result<String, FunctionError>,
        elapsed: Duration,
        budget: &mut RetryBudget,
    ) -> Result<FunctionCallOutput, FunctionError> {
        match outcome {
            Ok(output) => {
                let output = FunctionCallOutput::from_call(call, output);
                self.hooks
                    .on_invocation_success(budget.session_id(), call, &output, elapsed);
                Ok(output)
            }
            Err(error) => {
                let error = error
                    .with_function_name(call.name.clone())
                    .with_call_id(call.id.clone());

                match budget.record_failure(&error.message) {
                    Ok(remaining) => {
                        self.hooks.on_invocation_failure(
                            budget.session_id(),
                            call,
                            &error,
                            elapsed,
                            remaining,
                        );
                        Err(error)
                    }
                    Err(exhausted) => {
                        let exhausted = exhausted
                            .with_function_name(call.name.clone())
                            .with_call_id(call.id.clone());
                        self.hooks.on_invocation_failure(
                            budget.session_id(),
                            call,
                            &exhausted,
                            elapsed,
                            0,
                        );
                        Err(exhausted)
                    }
                }
            }
        }
    }
}

impl FunctionRuntime for AutoFunctionRuntime {
    fn execute<'a>(
        &'a self,
        call: &'a FunctionCall,
        budget: &'a mut RetryBudget,
    ) -> FunctionFuture<'a, Result<FunctionCallOutput, FunctionError>> {
        Box::pin(self.execute_call(call, budget))
    }
}

fn exhausted_before_call(call: &FunctionCall, budget: &RetryBudget) -> FunctionError {
    FunctionError::retry_budget_exhausted(format!(
        "stream '{}' already exhausted its retry budget of {}",
        budget.session_id(),
        budget.max_retry()
    ))
    .with_function_name(call.name.clone())
    .with_call_id(call.id.clone())
}
