//! Per-stream failure accounting for auto function calls.
//!
//! ```rust
//! use ffunction::{FunctionErrorKind, RetryBudget};
//!
//! let mut budget = RetryBudget::new("stream-1", 1);
//! assert_eq!(budget.record_failure("timeout").expect("first failure tolerated"), 0);
//!
//! let error = budget.record_failure("timeout").expect_err("second failure exhausts");
//! assert_eq!(error.kind, FunctionErrorKind::RetryBudgetExhausted);
//! ```

use fcommon::SessionId;

use crate::FunctionError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryBudget {
    session_id: SessionId,
    max_retry: u32,
    failures: u32,
}

impl RetryBudget {
    pub fn new(session_id: impl Into<SessionId>, max_retry: u32) -> Self {
        Self {
            session_id: session_id.into(),
            max_retry,
            failures: 0,
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn max_retry(&self) -> u32 {
        self.max_retry
    }

    pub fn failures(&self) -> u32 {
        self.failures
    }

    pub fn remaining(&self) -> u32 {
        self.max_retry.saturating_sub(self.failures)
    }

    pub fn is_exhausted(&self) -> bool {
        self.failures > self.max_retry
    }

    /// Charges one failure and returns the retries left. Up to `max_retry`
    /// failures are tolerated; the one after that exhausts the budget.
    pub fn record_failure(&mut self, reason: impl AsRef<str>) -> Result<u32, FunctionError> {
        self.failures = self.failures.saturating_add(1);
        if self.is_exhausted() {
            return Err(FunctionError::retry_budget_exhausted(format!(
                "stream '{}' exceeded {} allowed function call failures; last error: {}",
                self.session_id,
                self.max_retry,
                reason.as_ref()
            )));
        }

        Ok(self.remaining())
    }
}
