/// Builds a `Vec<(String, AutoFunction)>` from `"name" => closure` pairs.
/// Each closure takes the JSON argument string and returns a `String`.
///
/// ```rust
/// use fautocall::{FunctionRegistry, fa_functions};
///
/// let registry = FunctionRegistry::new();
/// registry
///     .register(fa_functions! {
///         "get_weather" => |_args| "sunny".to_string(),
///     })
///     .expect("registration should succeed");
///
/// assert!(registry.lookup("get_weather").is_some());
/// ```
#[macro_export]
macro_rules! fa_functions {
    () => {
        Vec::<(String, $crate::AutoFunction)>::new()
    };
    ($($name:expr => $handler:expr),+ $(,)?) => {
        vec![$((String::from($name), $crate::AutoFunction::from_fn($handler))),+]
    };
}

/// Builds a `Vec<(String, AutoFunction)>` from fallible handlers returning
/// `Result<String, FunctionError>`.
///
/// ```rust
/// use fautocall::{FunctionError, fa_try_functions, parse_json_object, required_string};
///
/// let functions = fa_try_functions! {
///     "echo" => |args: String| {
///         let args = parse_json_object(&args)?;
///         required_string(&args, "text")
///     },
///     "fail" => |_args| Err(FunctionError::execution("always fails")),
/// };
///
/// assert_eq!(functions.len(), 2);
/// ```
#[macro_export]
macro_rules! fa_try_functions {
    ($($name:expr => $handler:expr),+ $(,)?) => {
        vec![$((String::from($name), $crate::AutoFunction::from_sync($handler))),+]
    };
}
