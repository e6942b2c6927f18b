//! Callable handlers that can be registered for automatic invocation.
//!
//! Every handler produces a `String`; the signature is fixed by the
//! constructors, so a handler returning anything else does not type-check.
//!
//! ```rust
//! use ffunction::AutoFunction;
//!
//! let weather = AutoFunction::from_fn(|_args| "sunny".to_string());
//! let alias = weather.clone();
//!
//! assert!(weather.ptr_eq(&alias));
//! ```
//!
//! ```compile_fail
//! use ffunction::AutoFunction;
//!
//! let _ = AutoFunction::from_fn(|_args| 42_u32);
//! ```

use std::fmt::{Debug, Formatter};
use std::future::Future;
use std::sync::Arc;

use fcommon::BoxFuture;

use crate::FunctionError;

pub type FunctionFuture<'a, T> = BoxFuture<'a, T>;

type FunctionHandler =
    dyn Fn(String) -> FunctionFuture<'static, Result<String, FunctionError>> + Send + Sync;

#[derive(Clone)]
pub struct AutoFunction {
    handler: Arc<FunctionHandler>,
}

impl AutoFunction {
    /// Wraps an async handler that receives the model-supplied JSON arguments.
    pub fn new<F, Fut>(handler: F) -> Self
    where
        F: Fn(String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<String, FunctionError>> + Send + 'static,
    {
        let handler: Arc<FunctionHandler> = Arc::new(move |args_json| Box::pin(handler(args_json)));
        Self { handler }
    }

    pub fn from_sync<F>(handler: F) -> Self
    where
        F: Fn(String) -> Result<String, FunctionError> + Send + Sync + 'static,
    {
        Self::new(move |args_json| {
            let output = handler(args_json);
            async move { output }
        })
    }

    pub fn from_fn<F>(handler: F) -> Self
    where
        F: Fn(String) -> String + Send + Sync + 'static,
    {
        Self::from_sync(move |args_json| Ok(handler(args_json)))
    }

    pub fn invoke<'a>(&'a self, args_json: &str) -> FunctionFuture<'a, Result<String, FunctionError>> {
        (self.handler)(args_json.to_string())
    }

    /// True when both values share the same registered handler.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.handler, &other.handler)
    }
}

impl Debug for AutoFunction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AutoFunction")
            .field("handler", &Arc::as_ptr(&self.handler))
            .finish()
    }
}
