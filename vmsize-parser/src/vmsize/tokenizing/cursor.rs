//! Byte cursor over an identifier
//!
//! The grammar only ever accepts ASCII, so the cursor works on bytes and only advances
//! past bytes accepted by an ASCII predicate. The position therefore always sits on a
//! char boundary and slicing the source at it is safe even for non-ASCII input.

use crate::vmsize::token::{Token, TokenKind};

/// A span of the source consumed by a single matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matched<'a> {
    pub start: usize,
    pub text: &'a str,
}

impl<'a> Matched<'a> {
    pub fn into_token(self, kind: TokenKind) -> Token {
        Token::new(kind, self.start, self.text)
    }
}

#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// The unconsumed remainder of the source.
    pub fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos).copied()
    }

    /// Length of the run of bytes at the cursor accepted by `pred`, without consuming it.
    pub fn run_len(&self, pred: impl Fn(u8) -> bool) -> usize {
        self.rest().bytes().take_while(|b| pred(*b)).count()
    }

    /// Consume `len` bytes and return them as a match. Zero-length consumes nothing.
    pub fn advance(&mut self, len: usize) -> Option<Matched<'a>> {
        if len == 0 {
            return None;
        }
        let start = self.pos;
        self.pos += len;
        Some(Matched {
            start,
            text: &self.source[start..self.pos],
        })
    }

    /// Consume the longest non-empty run of bytes accepted by `pred`.
    pub fn take_while(&mut self, pred: impl Fn(u8) -> bool) -> Option<Matched<'a>> {
        let len = self.run_len(pred);
        self.advance(len)
    }

    /// Consume a single byte accepted by `pred`.
    pub fn take_one(&mut self, pred: impl Fn(u8) -> bool) -> Option<Matched<'a>> {
        match self.peek() {
            Some(b) if pred(b) => self.advance(1),
            _ => None,
        }
    }

    /// Consume `literal` if the remainder starts with it.
    pub fn eat(&mut self, literal: &str) -> Option<Matched<'a>> {
        if self.rest().starts_with(literal) {
            self.advance(literal.len())
        } else {
            None
        }
    }
}
