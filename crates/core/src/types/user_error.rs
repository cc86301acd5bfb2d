//! Validation errors returned by Admin API mutations.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A validation failure reported by a mutation's `userErrors` field.
///
/// These are distinct from transport or GraphQL errors: the request was
/// well-formed but the input was refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserError {
    /// Machine-readable error code, when the API provides one.
    pub code: Option<String>,
    /// Path to the offending input field (empty when not field-specific).
    #[serde(default)]
    pub field: Vec<String>,
    /// Human-readable message.
    pub message: String,
}

impl fmt::Display for UserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.field.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "{}: {}", self.field.join("."), self.message)
        }
    }
}
