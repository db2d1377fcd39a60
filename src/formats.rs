//! Output formats for tokens and derivation values
//!
//! - `pretty`: compact human-readable notation, tokens as `KIND:[text]`
//! - `json`: serde serialization of the same data

pub mod json;
pub mod pretty;

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::lexing::TokenSequence;
use crate::matching::Value;

pub use json::{to_json, tokens_to_json};
pub use pretty::{pretty, pretty_token, pretty_tokens};

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Unknown format name
    FormatNotFound(String),
    /// Error during serialization
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

impl OutputFormat {
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Pretty => "pretty",
            OutputFormat::Json => "json",
        }
    }

    /// Render one derivation value
    pub fn render_value(self, value: &Value) -> Result<String, FormatError> {
        match self {
            OutputFormat::Pretty => Ok(pretty(value)),
            OutputFormat::Json => to_json(value),
        }
    }

    /// Render a whole token sequence
    pub fn render_tokens(self, tokens: &TokenSequence) -> Result<String, FormatError> {
        match self {
            OutputFormat::Pretty => Ok(pretty_tokens(tokens)),
            OutputFormat::Json => tokens_to_json(tokens),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "pretty" => Ok(OutputFormat::Pretty),
            "json" => Ok(OutputFormat::Json),
            other => Err(FormatError::FormatNotFound(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
