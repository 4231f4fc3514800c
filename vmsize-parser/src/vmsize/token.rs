//! Core token types shared by the tokenizer, the explainer and the output formats.

use serde::Serialize;
use std::fmt;

/// The grammar position a token was matched at.
///
/// The variants follow the order in which the components appear in an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    MachineTier,
    MachineFamily,
    MachineSubfamily,
    NumVCpu,
    NumConstrainedVCpu,
    Feature,
    AcceleratorType,
    Version,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::MachineTier => "machine-tier",
            TokenKind::MachineFamily => "machine-family",
            TokenKind::MachineSubfamily => "machine-subfamily",
            TokenKind::NumVCpu => "num-vcpu",
            TokenKind::NumConstrainedVCpu => "num-constrained-vcpu",
            TokenKind::Feature => "feature",
            TokenKind::AcceleratorType => "accelerator-type",
            TokenKind::Version => "version",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A typed substring of an identifier.
///
/// `start` is a byte offset into the identifier. Identifiers are ASCII by grammar, so
/// byte and character offsets agree for every token the tokenizer produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub start: usize,
    pub value: String,
    pub kind: TokenKind,
}

impl Token {
    pub fn new(kind: TokenKind, start: usize, value: impl Into<String>) -> Self {
        Self {
            start,
            value: value.into(),
            kind,
        }
    }

    /// Offset one past the last byte of the token.
    pub fn end(&self) -> usize {
        self.start + self.value.len()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}:{:?}", self.kind, self.start, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_end() {
        let token = Token::new(TokenKind::MachineTier, 0, "Standard");
        assert_eq!(token.end(), 8);
    }

    #[test]
    fn test_token_display() {
        let token = Token::new(TokenKind::Version, 13, "v3");
        assert_eq!(token.to_string(), "version@13:\"v3\"");
    }

    #[test]
    fn test_kind_serializes_kebab_case() {
        let json = serde_json::to_string(&TokenKind::NumConstrainedVCpu).unwrap();
        assert_eq!(json, "\"num-constrained-vcpu\"");
    }
}
