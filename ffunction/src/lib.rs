//! Registration, lookup, and dispatch of automatically invoked functions.

mod args;
mod budget;
mod error;
mod function;
mod hooks;
mod registry;
mod runtime;
mod types;

pub mod prelude {
    pub use crate::{
        AutoFunction, AutoFunctionCallOptions, AutoFunctionHooks, AutoFunctionRuntime,
        DEFAULT_MAX_RETRY, FunctionCall, FunctionCallOutput, FunctionError, FunctionErrorKind,
        FunctionRegistry, FunctionRuntime, RetryBudget,
    };
}

pub use args::{optional_string, parse_json_object, parse_json_value, required_string};
pub use budget::RetryBudget;
pub use error::{FunctionError, FunctionErrorKind};
pub use function::{AutoFunction, FunctionFuture};
pub use hooks::{AutoFunctionHooks, NoopAutoFunctionHooks};
pub use registry::{AutoFunctionCallOptions, DEFAULT_MAX_RETRY, FunctionRegistry};
pub use runtime::{AutoFunctionRuntime, FunctionRuntime};
pub use types::{FunctionCall, FunctionCallOutput};
