//! JSON rendering through serde

use super::FormatError;
use crate::lexing::TokenSequence;
use crate::matching::Value;

/// Serialize a derivation value. Tokens become objects with kind, text and span.
pub fn to_json(value: &Value) -> Result<String, FormatError> {
    serde_json::to_string(value).map_err(|e| FormatError::SerializationError(e.to_string()))
}

/// Serialize a token sequence as a JSON array
pub fn tokens_to_json(tokens: &TokenSequence) -> Result<String, FormatError> {
    serde_json::to_string_pretty(tokens).map_err(|e| FormatError::SerializationError(e.to_string()))
}
