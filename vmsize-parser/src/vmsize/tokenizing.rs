//! Tokenizer
//!
//!     Splits a VM size identifier into typed tokens following a fixed positional
//!     grammar:
//!
//!         <tier> _ <family>[<subfamily>]<vcpus>[-<constrained>][<features>][_][<accelerator>][_][<version>]
//!
//!     Tier, family and vCPU count are mandatory. Every other component is optional
//!     and contributes no token when absent.
//!
//! Matching
//!
//!     Each component has its own matcher in [matchers](matchers), run in grammar
//!     order against a shared [Cursor](cursor::Cursor). A matcher reports presence
//!     through its `Option` result, so an absent component is never inferred from
//!     offsets. The feature run is matched whole and then split by
//!     [split_features](features::split_features).
//!
//!     Tokenization is all or nothing: the mandatory prefix must match and the whole
//!     identifier must be consumed, otherwise a [ParseError] is returned.

pub mod cursor;
pub mod features;
pub mod matchers;

use crate::vmsize::token::{Token, TokenKind};
use cursor::Cursor;
use thiserror::Error;
use tracing::{debug, trace};

/// Errors raised when an identifier does not follow the grammar.
///
/// Every variant carries the rejected identifier and the byte offset at which matching
/// stopped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid VM size '{input}': expected machine tier letters at offset {offset}")]
    MissingTier { input: String, offset: usize },
    #[error("Invalid VM size '{input}': expected '_' after the machine tier at offset {offset}")]
    MissingSeparator { input: String, offset: usize },
    #[error("Invalid VM size '{input}': unknown or missing machine family at offset {offset}")]
    UnknownFamily { input: String, offset: usize },
    #[error("Invalid VM size '{input}': expected vCPU count at offset {offset}")]
    MissingVCpu { input: String, offset: usize },
    #[error("Invalid VM size '{input}': unexpected '{rest}' at offset {offset}")]
    TrailingInput {
        input: String,
        offset: usize,
        rest: String,
    },
}

impl ParseError {
    pub fn input(&self) -> &str {
        match self {
            ParseError::MissingTier { input, .. }
            | ParseError::MissingSeparator { input, .. }
            | ParseError::UnknownFamily { input, .. }
            | ParseError::MissingVCpu { input, .. }
            | ParseError::TrailingInput { input, .. } => input,
        }
    }

    pub fn offset(&self) -> usize {
        match self {
            ParseError::MissingTier { offset, .. }
            | ParseError::MissingSeparator { offset, .. }
            | ParseError::UnknownFamily { offset, .. }
            | ParseError::MissingVCpu { offset, .. }
            | ParseError::TrailingInput { offset, .. } => *offset,
        }
    }
}

/// Tokenize a VM size identifier.
///
/// Tokens are returned in strictly increasing `start` order.
pub fn tokenize(identifier: &str) -> Result<Vec<Token>, ParseError> {
    let mut cursor = Cursor::new(identifier);
    let mut tokens = Vec::new();

    macro_rules! fail {
        ($variant:ident) => {
            ParseError::$variant {
                input: identifier.to_string(),
                offset: cursor.position(),
            }
        };
    }

    // Mandatory prefix
    let tier = matchers::machine_tier(&mut cursor).ok_or_else(|| fail!(MissingTier))?;
    tokens.push(tier.into_token(TokenKind::MachineTier));

    matchers::separator(&mut cursor).ok_or_else(|| fail!(MissingSeparator))?;

    let family = matchers::machine_family(&mut cursor).ok_or_else(|| fail!(UnknownFamily))?;
    tokens.push(family.into_token(TokenKind::MachineFamily));

    if let Some(subfamily) = matchers::machine_subfamily(&mut cursor) {
        tokens.push(subfamily.into_token(TokenKind::MachineSubfamily));
    }

    let vcpu = matchers::num_vcpu(&mut cursor).ok_or_else(|| fail!(MissingVCpu))?;
    tokens.push(vcpu.into_token(TokenKind::NumVCpu));

    // Optional tail
    if matchers::constrained_separator(&mut cursor).is_some() {
        if let Some(constrained) = matchers::num_constrained_vcpu(&mut cursor) {
            tokens.push(constrained.into_token(TokenKind::NumConstrainedVCpu));
        }
    }

    if let Some(run) = matchers::feature_run(&mut cursor) {
        tokens.extend(features::split_features(run));
    }

    matchers::separator(&mut cursor);

    if let Some(accelerator) = matchers::accelerator_type(&mut cursor) {
        tokens.push(accelerator.into_token(TokenKind::AcceleratorType));
    }

    matchers::separator(&mut cursor);

    if let Some(version) = matchers::version(&mut cursor) {
        tokens.push(version.into_token(TokenKind::Version));
    }

    if !cursor.is_at_end() {
        return Err(ParseError::TrailingInput {
            input: identifier.to_string(),
            offset: cursor.position(),
            rest: cursor.rest().to_string(),
        });
    }

    for token in &tokens {
        trace!(%token, "matched");
    }
    debug!(identifier, count = tokens.len(), "tokenized");

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds_and_values(identifier: &str) -> Vec<(TokenKind, String)> {
        tokenize(identifier)
            .unwrap()
            .into_iter()
            .map(|t| (t.kind, t.value))
            .collect()
    }

    fn count(tokens: &[Token], kind: TokenKind) -> usize {
        tokens.iter().filter(|t| t.kind == kind).count()
    }

    #[test]
    fn test_standard_d2s_v3() {
        let tokens = tokenize("Standard_D2s_v3").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::MachineTier, 0, "Standard"),
                Token::new(TokenKind::MachineFamily, 9, "D"),
                Token::new(TokenKind::NumVCpu, 10, "2"),
                Token::new(TokenKind::Feature, 11, "s"),
                Token::new(TokenKind::Version, 13, "v3"),
            ]
        );
        assert_eq!(count(&tokens, TokenKind::MachineSubfamily), 0);
        assert_eq!(count(&tokens, TokenKind::NumConstrainedVCpu), 0);
        assert_eq!(count(&tokens, TokenKind::AcceleratorType), 0);
    }

    #[test]
    fn test_family_prefers_bs_over_b() {
        let tokens = tokenize("Standard_Bs1").unwrap();
        assert_eq!(tokens[1], Token::new(TokenKind::MachineFamily, 9, "Bs"));
        assert_eq!(tokens[2], Token::new(TokenKind::NumVCpu, 11, "1"));
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn test_mv2_family() {
        assert_eq!(
            kinds_and_values("Standard_Mv28p_v2"),
            vec![
                (TokenKind::MachineTier, "Standard".into()),
                (TokenKind::MachineFamily, "Mv2".into()),
                (TokenKind::NumVCpu, "8".into()),
                (TokenKind::Feature, "p".into()),
                (TokenKind::Version, "v2".into()),
            ]
        );
    }

    #[test]
    fn test_full_grammar() {
        assert_eq!(
            kinds_and_values("Standard_NC24-4ads_A100_v4"),
            vec![
                (TokenKind::MachineTier, "Standard".into()),
                (TokenKind::MachineFamily, "N".into()),
                (TokenKind::MachineSubfamily, "C".into()),
                (TokenKind::NumVCpu, "24".into()),
                (TokenKind::NumConstrainedVCpu, "4".into()),
                (TokenKind::Feature, "a".into()),
                (TokenKind::Feature, "d".into()),
                (TokenKind::Feature, "s".into()),
                (TokenKind::AcceleratorType, "A100".into()),
                (TokenKind::Version, "v4".into()),
            ]
        );
    }

    #[test]
    fn test_feature_offsets() {
        let tokens = tokenize("Standard_D4adp_v5").unwrap();
        let features: Vec<_> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Feature)
            .map(|t| (t.start, t.value.as_str()))
            .collect();
        assert_eq!(features, vec![(11, "a"), (12, "d"), (13, "p")]);
    }

    #[test]
    fn test_np_feature_in_identifier() {
        let tokens = tokenize("Standard_E8NPs").unwrap();
        let features: Vec<_> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Feature)
            .map(|t| t.value.as_str())
            .collect();
        assert_eq!(features, vec!["NP", "s"]);
    }

    #[test]
    fn test_mandatory_prefix_only() {
        assert_eq!(
            kinds_and_values("Basic_A0"),
            vec![
                (TokenKind::MachineTier, "Basic".into()),
                (TokenKind::MachineFamily, "A".into()),
                (TokenKind::NumVCpu, "0".into()),
            ]
        );
    }

    #[test]
    fn test_constrained_separator_without_digit() {
        assert_eq!(
            kinds_and_values("Standard_M8-ms"),
            vec![
                (TokenKind::MachineTier, "Standard".into()),
                (TokenKind::MachineFamily, "M".into()),
                (TokenKind::NumVCpu, "8".into()),
                (TokenKind::Feature, "m".into()),
                (TokenKind::Feature, "s".into()),
            ]
        );
    }

    #[test]
    fn test_version_without_features() {
        assert_eq!(
            kinds_and_values("Standard_F2_v2"),
            vec![
                (TokenKind::MachineTier, "Standard".into()),
                (TokenKind::MachineFamily, "F".into()),
                (TokenKind::NumVCpu, "2".into()),
                (TokenKind::Version, "v2".into()),
            ]
        );
    }

    #[test]
    fn test_not_a_valid_size() {
        let err = tokenize("NotAValidSize").unwrap_err();
        assert_eq!(
            err,
            ParseError::MissingSeparator {
                input: "NotAValidSize".into(),
                offset: 13,
            }
        );
        assert!(err.to_string().contains("NotAValidSize"));
    }

    #[test]
    fn test_empty_identifier() {
        let err = tokenize("").unwrap_err();
        assert!(matches!(err, ParseError::MissingTier { offset: 0, .. }));
    }

    #[test]
    fn test_leading_separator_has_no_tier() {
        let err = tokenize("_D2").unwrap_err();
        assert!(matches!(err, ParseError::MissingTier { offset: 0, .. }));
    }

    #[test]
    fn test_unknown_family() {
        let err = tokenize("Standard_Z2").unwrap_err();
        assert!(matches!(err, ParseError::UnknownFamily { offset: 9, .. }));
    }

    #[test]
    fn test_missing_vcpu() {
        let err = tokenize("Standard_Ds_v3").unwrap_err();
        assert!(matches!(err, ParseError::MissingVCpu { offset: 10, .. }));
    }

    #[test]
    fn test_trailing_input() {
        let err = tokenize("Standard_D2s_v3_extra").unwrap_err();
        assert_eq!(err.offset(), 15);
        assert_eq!(err.input(), "Standard_D2s_v3_extra");
        assert!(matches!(
            err,
            ParseError::TrailingInput { ref rest, .. } if rest == "_extra"
        ));
    }

    #[test]
    fn test_non_ascii_is_rejected() {
        let err = tokenize("Standard_D2ä").unwrap_err();
        assert!(matches!(err, ParseError::TrailingInput { offset: 11, .. }));
    }
}
