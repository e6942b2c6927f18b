//! Small convenience constructors for common wiring.

use std::sync::Arc;

use crate::{
    FunctionCall, FunctionRegistry, ProjectClientOptions, SafeAutoFunctionHooks,
    TracingAutoFunctionHooks,
};

pub fn function_call(
    id: impl Into<String>,
    name: impl Into<String>,
    arguments: impl Into<String>,
) -> FunctionCall {
    FunctionCall::new(id, name, arguments)
}

/// Client options whose registry reports through panic-isolated tracing hooks.
pub fn observed_client_options() -> ProjectClientOptions {
    ProjectClientOptions::builder()
        .hooks(Arc::new(SafeAutoFunctionHooks::new(TracingAutoFunctionHooks)))
        .build()
}

pub fn traced_registry() -> FunctionRegistry {
    FunctionRegistry::with_hooks(Arc::new(SafeAutoFunctionHooks::new(
        TracingAutoFunctionHooks,
    )))
}

#[cfg(test)]
mod tests {
    use super::{function_call, observed_client_options, traced_registry};

    #[test]
    fn helpers_apply_expected_defaults() {
        let call = function_call("c1", "get_weather", "{}");
        assert_eq!(call.name, "get_weather");

        let options = observed_client_options();
        assert_eq!(options.client_cache_size, crate::DEFAULT_CLIENT_CACHE_SIZE);
        assert!(!options.auto_function_calls_enabled());

        let registry = traced_registry();
        assert!(!registry.is_registered());
    }
}
