//! Action-type table errors.

use thiserror::Error;

/// Problems found when validating an action-type table.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("No operations configured for the {table} table")]
    NoOperations { table: &'static str },

    #[error("Tag for '{operation}' is empty")]
    EmptyTag { operation: &'static str },

    #[error("Tag '{tag}' is registered for both '{first}' and '{second}'; '{second}' wins")]
    DuplicateTag {
        tag: String,
        first: &'static str,
        second: &'static str,
    },
}
