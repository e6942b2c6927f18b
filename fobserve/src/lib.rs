//! Production-friendly observability hooks for auto function calls.
//!
//! ```rust
//! use fobserve::{MetricsAutoFunctionHooks, SafeAutoFunctionHooks, TracingAutoFunctionHooks};
//!
//! let _tracing = SafeAutoFunctionHooks::new(TracingAutoFunctionHooks);
//! let _metrics = MetricsAutoFunctionHooks;
//! ```

mod metrics_hooks;
mod safe_hooks;
mod tracing_hooks;

pub use metrics_hooks::MetricsAutoFunctionHooks;
pub use safe_hooks::SafeAutoFunctionHooks;
pub use tracing_hooks::TracingAutoFunctionHooks;

pub mod prelude {
    pub use crate::{MetricsAutoFunctionHooks, SafeAutoFunctionHooks, TracingAutoFunctionHooks};
}
