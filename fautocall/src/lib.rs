//! Unified facade over the fautocall workspace crates.
//!
//! This crate is meant to be the single dependency for most applications.
//! It re-exports the core crates and adds helpers and macros for wiring
//! auto function calls into client options.

mod macros;

pub mod prelude;
pub mod util;

pub use fcommon;
pub use ffunction;
pub use fobserve;
pub use fproject;
pub use fresource;

pub use fcommon::{BoxFuture, Registry, SessionId};
pub use ffunction::{
    AutoFunction, AutoFunctionCallOptions, AutoFunctionHooks, AutoFunctionRuntime,
    DEFAULT_MAX_RETRY, FunctionCall, FunctionCallOutput, FunctionError, FunctionErrorKind,
    FunctionFuture, FunctionRegistry, FunctionRuntime, NoopAutoFunctionHooks, RetryBudget,
    optional_string, parse_json_object, parse_json_value, required_string,
};
pub use fobserve::{MetricsAutoFunctionHooks, SafeAutoFunctionHooks, TracingAutoFunctionHooks};
pub use fproject::{DEFAULT_CLIENT_CACHE_SIZE, ProjectClientOptions, ProjectClientOptionsBuilder};
pub use fresource::{
    AdditionalData, AutoScalePolicyEnforcement, ElasticSanData, ElasticSanProvisioningState,
    ElasticSanPublicNetworkAccess, ElasticSanScaleUpProperties, ElasticSanSku, ElasticSanSkuName,
    ElasticSanSkuTier, PrivateEndpointConnection, ResourceError, ResourceErrorKind, SystemData,
    TrackedResourceData,
};

pub use util::{function_call, observed_client_options, traced_registry};

#[cfg(test)]
mod tests {
    use crate::FunctionErrorKind;

    #[test]
    fn fa_functions_macro_builds_named_pairs() {
        let functions = crate::fa_functions! {
            "get_weather" => |_args| "sunny".to_string(),
            "get_time" => |_args| "noon".to_string(),
        };

        assert_eq!(functions.len(), 2);
        assert_eq!(functions[0].0, "get_weather");
        assert_eq!(functions[1].0, "get_time");
    }

    #[test]
    fn empty_fa_functions_is_rejected_on_registration() {
        let registry = crate::FunctionRegistry::new();
        let error = registry
            .register(crate::fa_functions! {})
            .expect_err("empty set should fail");

        assert_eq!(error.kind, FunctionErrorKind::InvalidConfiguration);
    }
}
