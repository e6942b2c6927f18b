//! Client configuration that owns the auto function-call registry.

mod options;

pub use options::{DEFAULT_CLIENT_CACHE_SIZE, ProjectClientOptions, ProjectClientOptionsBuilder};
