//! Feature run splitting
//!
//! The additive features follow the vCPU count as one contiguous run of letters. Every
//! feature is a single letter except those introduced by `N`, which always take two
//! characters (`NP`). There is no single-letter `N` feature.

use super::cursor::Matched;
use crate::vmsize::token::{Token, TokenKind};

/// Character that opens a two-character feature code.
const TWO_CHAR_LEAD: u8 = b'N';

pub fn split_features(run: Matched<'_>) -> Vec<Token> {
    let bytes = run.text.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let width = if bytes[i] == TWO_CHAR_LEAD { 2 } else { 1 };
        // A trailing `N` only has itself left
        let end = (i + width).min(bytes.len());
        tokens.push(Token::new(
            TokenKind::Feature,
            run.start + i,
            &run.text[i..end],
        ));
        i = end;
    }

    tokens
}
