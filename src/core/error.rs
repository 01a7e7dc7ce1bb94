//! Contract violations raised while reducing.

use thiserror::Error;

/// Errors that surface when a state or action does not have the shape an
/// enhancer was configured for.
///
/// Unknown action tags are never an error; they pass through untouched.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReduceError {
    #[error("State has no field '{field}'")]
    MissingField { field: String },

    #[error("Field '{field}' is not {expected}")]
    FieldType {
        field: String,
        expected: &'static str,
    },

    #[error("Action '{tag}' requires a payload")]
    MissingPayload { tag: String },

    #[error("Payload of action '{tag}' is not {expected}")]
    MalformedPayload { tag: String, expected: &'static str },

    #[error("Payload of action '{tag}' has no '{identity}' identity")]
    MissingIdentity { tag: String, identity: String },
}
