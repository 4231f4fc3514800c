//! Processing pipeline
//!
//! Runs the three stages in order:
//!
//! 1. **Tokenizing** - split the identifier into typed tokens
//! 2. **Explaining** - attach text to every token and append the sentinel
//! 3. **Formatting** - serialize the result with a registered format
//!
//! Use [`explain_vm_size`] when only the decoded result is needed and
//! [`PipelineExecutor`] when the output has to be serialized by format name (e.g. for
//! the CLI).

use crate::vmsize::explaining::{explain_tokens, Explanation};
use crate::vmsize::formats::{render, FormatError, FormatRegistry};
use crate::vmsize::token::{Token, TokenKind};
use crate::vmsize::tokenizing::{tokenize, ParseError};
use thiserror::Error;
use tracing::debug;

/// Errors during pipeline execution
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// A tokenized and explained identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub identifier: String,
    pub tokens: Vec<Token>,
    /// One entry per token plus the trailing sentinel.
    pub explanations: Vec<Explanation>,
}

impl Decoded {
    /// Tokens of a single kind, in identifier order.
    pub fn tokens_of(&self, kind: TokenKind) -> impl Iterator<Item = &Token> + '_ {
        self.tokens.iter().filter(move |t| t.kind == kind)
    }

    pub fn diagram(&self) -> String {
        render(&self.identifier, &self.explanations)
    }
}

/// Tokenize and explain a VM size identifier.
pub fn explain_vm_size(identifier: &str) -> Result<Decoded, ParseError> {
    let tokens = tokenize(identifier)?;
    let explanations = explain_tokens(identifier, &tokens);
    debug!(identifier, explanations = explanations.len(), "explained");
    Ok(Decoded {
        identifier: identifier.to_string(),
        tokens,
        explanations,
    })
}

/// Runs the pipeline and serializes through the format registry.
pub struct PipelineExecutor {
    formats: FormatRegistry,
}

impl PipelineExecutor {
    /// Create executor with the default formats
    pub fn new() -> Self {
        Self {
            formats: FormatRegistry::with_defaults(),
        }
    }

    pub fn with_registry(formats: FormatRegistry) -> Self {
        Self { formats }
    }

    pub fn execute(&self, identifier: &str) -> Result<Decoded, ExecutionError> {
        Ok(explain_vm_size(identifier)?)
    }

    pub fn execute_and_serialize(
        &self,
        identifier: &str,
        format: &str,
    ) -> Result<String, ExecutionError> {
        // Check the format first so a typo is reported even for a bad identifier
        if !self.formats.has(format) {
            return Err(FormatError::FormatNotFound(format.to_string()).into());
        }
        let decoded = self.execute(identifier)?;
        Ok(self.formats.serialize(&decoded, format)?)
    }

    pub fn list_formats(&self) -> Vec<(String, String)> {
        self.formats
            .list_formats()
            .into_iter()
            .filter_map(|name| {
                let description = self.formats.get(&name)?.description().to_string();
                Some((name, description))
            })
            .collect()
    }
}

impl Default for PipelineExecutor {
    fn default() -> Self {
        Self::new()
    }
}
