//! Field explainer
//!
//! Turns tokens into human-readable text. Family codes and feature letters are looked
//! up in [tables](tables); every other kind is rendered from a template around the
//! token's value.

pub mod tables;

use crate::vmsize::token::{Token, TokenKind};

/// Explanation text anchored at a column of the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explanation {
    pub start: usize,
    pub text: String,
}

impl Explanation {
    pub fn new(start: usize, text: impl Into<String>) -> Self {
        Self {
            start,
            text: text.into(),
        }
    }

    /// The empty entry placed at the end of the identifier to close off the diagram.
    pub fn sentinel(identifier: &str) -> Self {
        Self::new(identifier.len(), "")
    }

    pub fn is_sentinel(&self) -> bool {
        self.text.is_empty()
    }
}

/// Explain a single token value.
pub fn explain(kind: TokenKind, value: &str) -> String {
    match kind {
        TokenKind::MachineTier => format!("{value} tier"),
        TokenKind::MachineFamily => {
            format!("{value} family: {}", tables::family_description(value))
        }
        TokenKind::MachineSubfamily => format!("{value} subfamily"),
        TokenKind::NumVCpu => format!("{value} vCPUs"),
        TokenKind::NumConstrainedVCpu => format!("constrained to {value} active vCPUs"),
        TokenKind::Feature => {
            format!("{value} feature: {}", tables::feature_description(value))
        }
        TokenKind::AcceleratorType => format!("{value} accelerator"),
        TokenKind::Version => {
            let generation = value.strip_prefix('v').unwrap_or(value);
            format!("version {generation}")
        }
    }
}

/// Explain every token of `identifier` in order, followed by the sentinel entry.
pub fn explain_tokens(identifier: &str, tokens: &[Token]) -> Vec<Explanation> {
    let mut explanations: Vec<Explanation> = tokens
        .iter()
        .map(|token| Explanation::new(token.start, explain(token.kind, &token.value)))
        .collect();
    explanations.push(Explanation::sentinel(identifier));
    explanations
}
