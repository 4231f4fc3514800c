//! Token JSON formatter
//!
//! Serializes the token list, without explanations, for scripting:
//!
//!     [
//!       { "start": 0, "value": "Standard", "kind": "machine-tier" },
//!       ...
//!     ]

use crate::vmsize::formats::registry::{FormatError, Formatter};
use crate::vmsize::pipeline::Decoded;

pub struct TokenJsonFormatter;

impl Formatter for TokenJsonFormatter {
    fn name(&self) -> &str {
        "token-json"
    }

    fn serialize(&self, decoded: &Decoded) -> Result<String, FormatError> {
        let mut json = serde_json::to_string_pretty(&decoded.tokens)
            .map_err(|e| FormatError::SerializationError(e.to_string()))?;
        json.push('\n');
        Ok(json)
    }

    fn description(&self) -> &str {
        "Token list as JSON"
    }
}
