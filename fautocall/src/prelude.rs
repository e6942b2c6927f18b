//! Common imports for most fautocall applications.

pub use crate::{fa_functions, fa_try_functions};
pub use crate::{function_call, observed_client_options, traced_registry};
pub use crate::{
    AutoFunction, AutoFunctionCallOptions, AutoFunctionHooks, AutoFunctionRuntime,
    DEFAULT_MAX_RETRY, ElasticSanData, FunctionCall, FunctionCallOutput, FunctionError,
    FunctionErrorKind, FunctionRegistry, FunctionRuntime, ProjectClientOptions, RetryBudget,
    SessionId, parse_json_object, required_string,
};
