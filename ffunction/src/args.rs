//! JSON argument parsing helpers for registered function handlers.
//!
//! ```rust
//! use ffunction::{parse_json_object, required_string};
//!
//! let args = parse_json_object(r#"{"city":"Oslo"}"#).expect("object should parse");
//! let city = required_string(&args, "city").expect("city should be present");
//! assert_eq!(city, "Oslo");
//! ```

use serde_json::{Map, Value};

use crate::FunctionError;

pub fn parse_json_value(args_json: &str) -> Result<Value, FunctionError> {
    serde_json::from_str(args_json)
        .map_err(|err| FunctionError::invalid_arguments(format!("invalid JSON arguments: {err}")))
}

pub fn parse_json_object(args_json: &str) -> Result<Map<String, Value>, FunctionError> {
    match parse_json_value(args_json)? {
        Value::Object(map) => Ok(map),
        _ => Err(FunctionError::invalid_arguments(
            "expected JSON object arguments",
        )),
    }
}

pub fn required_string(args: &Map<String, Value>, key: &str) -> Result<String, FunctionError> {
    optional_string(args, key)?
        .ok_or_else(|| FunctionError::invalid_arguments(format!("missing required string: '{key}'")))
}

/// Absent and `null` both read as `None`; any other non-string value is rejected.
pub fn optional_string(
    args: &Map<String, Value>,
    key: &str,
) -> Result<Option<String>, FunctionError> {
    match args.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(FunctionError::invalid_arguments(format!(
            "argument '{key}' must be a string"
        ))),
    }
}
