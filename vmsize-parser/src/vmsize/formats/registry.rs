//! Format registry for decoded identifiers
//!
//! Each output format implements [`Formatter`] and is registered with
//! [`FormatRegistry`] under its name.

use crate::vmsize::pipeline::Decoded;
use std::collections::HashMap;
use thiserror::Error;

/// Error that can occur during formatting
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Trait for output formatters
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "diagram", "token-json")
    fn name(&self) -> &str;

    fn serialize(&self, decoded: &Decoded) -> Result<String, FormatError>;

    fn description(&self) -> &str {
        ""
    }
}

/// Registry of output formatters, keyed by name.
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter, replacing any formatter with the same name.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    pub fn serialize(&self, decoded: &Decoded, format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(decoded)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(super::DiagramFormatter);
        registry.register(super::TokenJsonFormatter);
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
