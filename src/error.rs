use crate::key::Key;
use thiserror::Error;

/// Errors that can occur when accessing a `PropertyStore` through its
/// explicit-error methods
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No property was ever set under the requested key
    #[error("no property stored under {0}")]
    KeyNotFound(Key),
    /// A property exists under the key but holds a different type
    #[error("property {key} holds `{stored}`, not `{requested}`")]
    TypeMismatch {
        key: Key,
        stored: &'static str,
        requested: &'static str,
    },
}
