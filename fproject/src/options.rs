//! Project client options and auto function-call enablement.
//!
//! ```rust
//! use ffunction::AutoFunction;
//! use fproject::ProjectClientOptions;
//!
//! let mut options = ProjectClientOptions::default();
//! assert_eq!(options.client_cache_size, 100);
//!
//! options
//!     .enable_auto_function_calls_with_retry(
//!         [("get_weather", AutoFunction::from_fn(|_| "sunny".to_string()))],
//!         3,
//!     )
//!     .expect("functions should register");
//!
//! assert!(options.auto_function_calls_enabled());
//! assert_eq!(options.auto_function_calls().max_retry(), 3);
//! ```

use std::sync::Arc;

use ffunction::{
    AutoFunction, AutoFunctionHooks, AutoFunctionRuntime, FunctionError, FunctionRegistry,
};

pub const DEFAULT_CLIENT_CACHE_SIZE: usize = 100;

#[derive(Debug, Clone)]
pub struct ProjectClientOptions {
    pub client_cache_size: usize,
    auto_function_calls: Arc<FunctionRegistry>,
}

impl Default for ProjectClientOptions {
    fn default() -> Self {
        Self {
            client_cache_size: DEFAULT_CLIENT_CACHE_SIZE,
            auto_function_calls: Arc::new(FunctionRegistry::new()),
        }
    }
}

impl ProjectClientOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> ProjectClientOptionsBuilder {
        ProjectClientOptionsBuilder::default()
    }

    /// Enables automatic invocation during streaming with the default retry budget.
    /// Without it, function calls must be handled manually.
    pub fn enable_auto_function_calls<I, K>(&mut self, functions: I) -> Result<(), FunctionError>
    where
        I: IntoIterator<Item = (K, AutoFunction)>,
        K: Into<String>,
    {
        self.auto_function_calls.register(functions)
    }

    /// `max_retry` bounds the failed calls tolerated per stream.
    pub fn enable_auto_function_calls_with_retry<I, K>(
        &mut self,
        functions: I,
        max_retry: u32,
    ) -> Result<(), FunctionError>
    where
        I: IntoIterator<Item = (K, AutoFunction)>,
        K: Into<String>,
    {
        self.auto_function_calls
            .register_with_retry(functions, max_retry)
    }

    pub fn auto_function_calls(&self) -> Arc<FunctionRegistry> {
        Arc::clone(&self.auto_function_calls)
    }

    pub fn auto_function_calls_enabled(&self) -> bool {
        self.auto_function_calls.is_registered()
    }

    /// Dispatcher for one streaming session; `None` means manual function handling.
    pub fn auto_function_runtime(&self) -> Option<AutoFunctionRuntime> {
        AutoFunctionRuntime::from_registry(&self.auto_function_calls)
    }
}

#[derive(Default)]
pub struct ProjectClientOptionsBuilder {
    client_cache_size: Option<usize>,
    hooks: Option<Arc<dyn AutoFunctionHooks>>,
}

impl ProjectClientOptionsBuilder {
    pub fn client_cache_size(mut self, client_cache_size: usize) -> Self {
        self.client_cache_size = Some(client_cache_size);
        self
    }

    pub fn hooks(mut self, hooks: Arc<dyn AutoFunctionHooks>) -> Self {
        self.hooks = Some(hooks);
        self
    }

    pub fn build(self) -> ProjectClientOptions {
        let registry = match self.hooks {
            Some(hooks) => FunctionRegistry::with_hooks(hooks),
            None => FunctionRegistry::new(),
        };

        ProjectClientOptions {
            client_cache_size: self
                .client_cache_size
                .unwrap_or(DEFAULT_CLIENT_CACHE_SIZE),
            auto_function_calls: Arc::new(registry),
        }
    }
}
