//! Resource payload errors.

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceErrorKind {
    InvalidPayload,
    Serialization,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceError {
    pub kind: ResourceErrorKind,
    pub message: String,
}

impl ResourceError {
    pub fn new(kind: ResourceErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_payload(message: impl Into<String>) -> Self {
        Self::new(ResourceErrorKind::InvalidPayload, message)
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ResourceErrorKind::Serialization, message)
    }
}

impl Display for ResourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for ResourceError {}

impl From<serde_json::Error> for ResourceError {
    fn from(value: serde_json::Error) -> Self {
        if value.is_data() || value.is_syntax() || value.is_eof() {
            ResourceError::invalid_payload(value.to_string())
        } else {
            ResourceError::serialization(value.to_string())
        }
    }
}
