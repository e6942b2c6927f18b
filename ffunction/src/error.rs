//! Registration and invocation errors for auto function calls.

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionErrorKind {
    /// The registration call itself was malformed; fix the call, do not retry.
    InvalidConfiguration,
    NotFound,
    InvalidArguments,
    Execution,
    Timeout,
    RetryBudgetExhausted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionError {
    pub kind: FunctionErrorKind,
    pub message: String,
    pub retryable: bool,
    pub function_name: Option<String>,
    pub call_id: Option<String>,
}

impl FunctionError {
    pub fn new(kind: FunctionErrorKind, message: impl Into<String>, retryable: bool) -> Self {
        Self {
            kind,
            message: message.into(),
            retryable,
            function_name: None,
            call_id: None,
        }
    }

    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::new(FunctionErrorKind::InvalidConfiguration, message, false)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(FunctionErrorKind::NotFound, message, false)
    }

    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        Self::new(FunctionErrorKind::InvalidArguments, message, true)
    }

    pub fn execution(message: impl Into<String>) -> Self {
        Self::new(FunctionErrorKind::Execution, message, true)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(FunctionErrorKind::Timeout, message, true)
    }

    pub fn retry_budget_exhausted(message: impl Into<String>) -> Self {
        Self::new(FunctionErrorKind::RetryBudgetExhausted, message, false)
    }

    pub fn with_function_name(mut self, function_name: impl Into<String>) -> Self {
        self.function_name = Some(function_name.into());
        self
    }

    pub fn with_call_id(mut self, call_id: impl Into<String>) -> Self {
        self.call_id = Some(call_id.into());
        self
    }

    pub fn is_retryable(&self) -> bool {
        self.retryable
    }

    pub fn is_user_error(&self) -> bool {
        matches!(
            self.kind,
            FunctionErrorKind::InvalidConfiguration | FunctionErrorKind::NotFound
        )
    }
}

impl Display for FunctionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match (&self.function_name, &self.call_id) {
            (Some(function_name), Some(call_id)) => write!(
                f,
                "{:?} [function={}, call_id={}]: {}",
                self.kind, function_name, call_id, self.message
            ),
            (Some(function_name), None) => {
                write!(f, "{:?} [function={}]: {}", self.kind, function_name, self.message)
            }
            _ => write!(f, "{:?}: {}", self.kind, self.message),
        }
    }
}

impl Error for FunctionError {}
