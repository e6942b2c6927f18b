//! Validated function sets and the registry that publishes them.
//!
//! A registration is validated into an immutable [`AutoFunctionCallOptions`]
//! before anything is stored. The registry then swaps the whole set in one
//! step, so readers see either the previous set or the new one.
//!
//! ```rust
//! use ffunction::{AutoFunction, FunctionRegistry, DEFAULT_MAX_RETRY};
//!
//! let registry = FunctionRegistry::new();
//! let weather = AutoFunction::from_fn(|_args| "sunny".to_string());
//!
//! registry
//!     .register([("get_weather", weather.clone())])
//!     .expect("registration should succeed");
//!
//! assert_eq!(registry.max_retry(), DEFAULT_MAX_RETRY);
//! assert!(registry.lookup("get_weather").expect("registered").ptr_eq(&weather));
//! assert!(registry.lookup("get_time").is_none());
//! ```

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use arc_swap::ArcSwapOption;
use fcommon::Registry;

use crate::{AutoFunction, AutoFunctionHooks, FunctionError, NoopAutoFunctionHooks};

pub const DEFAULT_MAX_RETRY: u32 = 10;

#[derive(Debug, Clone)]
pub struct AutoFunctionCallOptions {
    functions: Registry<String, AutoFunction>,
    max_retry: u32,
}

impl AutoFunctionCallOptions {
    /// Validates `functions` with the default retry budget.
    pub fn new<I, K>(functions: I) -> Result<Self, FunctionError>
    where
        I: IntoIterator<Item = (K, AutoFunction)>,
        K: Into<String>,
    {
        Self::with_max_retry(functions, DEFAULT_MAX_RETRY)
    }

    pub fn with_max_retry<I, K>(functions: I, max_retry: u32) -> Result<Self, FunctionError>
    where
        I: IntoIterator<Item = (K, AutoFunction)>,
        K: Into<String>,
    {
        let mut validated = Registry::new();
        for (name, function) in functions {
            validated.insert(name.into(), function);
        }

        if validated.is_empty() {
            return Err(FunctionError::invalid_configuration(
                "the function map must contain at least one function",
            ));
        }

        Ok(Self {
            functions: validated,
            max_retry,
        })
    }

    pub fn lookup(&self, name: &str) -> Option<&AutoFunction> {
        self.functions.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn max_retry(&self) -> u32 {
        self.max_retry
    }

    /// Registered names in ascending order.
    pub fn function_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.functions.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

pub struct FunctionRegistry {
    current: ArcSwapOption<AutoFunctionCallOptions>,
    hooks: Arc<dyn AutoFunctionHooks>,
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for FunctionRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionRegistry")
            .field("registered", &self.function_names())
            .field("max_retry", &self.max_retry())
            .finish()
    }
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self::with_hooks(Arc::new(NoopAutoFunctionHooks))
    }

    pub fn with_hooks(hooks: Arc<dyn AutoFunctionHooks>) -> Self {
        Self {
            current: ArcSwapOption::empty(),
            hooks,
        }
    }

    pub fn hooks(&self) -> Arc<dyn AutoFunctionHooks> {
        Arc::clone(&self.hooks)
    }

    pub fn register<I, K>(&self, functions: I) -> Result<(), FunctionError>
    where
        I: IntoIterator<Item = (K, AutoFunction)>,
        K: Into<String>,
    {
        self.register_with_retry(functions, DEFAULT_MAX_RETRY)
    }

    /// Replaces every registered function. On error the previous set stays published.
    pub fn register_with_retry<I, K>(&self, functions: I, max_retry: u32) -> Result<(), FunctionError>
    where
        I: IntoIterator<Item = (K, AutoFunction)>,
        K: Into<String>,
    {
        match AutoFunctionCallOptions::with_max_retry(functions, max_retry) {
            Ok(options) => {
                self.register_options(options);
                Ok(())
            }
            Err(error) => {
                self.hooks.on_registration_rejected(&error);
                Err(error)
            }
        }
    }

    pub fn register_options(&self, options: AutoFunctionCallOptions) {
        let names = options.function_names();
        let max_retry = options.max_retry();
        self.current.store(Some(Arc::new(options)));
        self.hooks.on_registered(&names, max_retry);
    }

    pub fn lookup(&self, name: &str) -> Option<AutoFunction> {
        let current = self.current.load();
        current.as_deref().and_then(|options| options.lookup(name).cloned())
    }

    /// Zero until the first successful registration.
    pub fn max_retry(&self) -> u32 {
        let current = self.current.load();
        current.as_deref().map_or(0, AutoFunctionCallOptions::max_retry)
    }

    /// Pins the current registration; later re-registrations do not affect it.
    pub fn snapshot(&self) -> Option<Arc<AutoFunctionCallOptions>> {
        self.current.load_full()
    }

    pub fn is_registered(&self) -> bool {
        self.current.load().is_some()
    }

    pub fn function_names(&self) -> Vec<String> {
        let current = self.current.load();
        current
            .as_deref()
            .map(AutoFunctionCallOptions::function_names)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        let current = self.current.load();
        current.as_deref().map_or(0, AutoFunctionCallOptions::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
