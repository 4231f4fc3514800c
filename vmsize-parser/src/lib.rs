//! # vmsize
//!
//! Decoder for cloud VM size identifiers such as `Standard_NC24ads_A100_v4`.
//!
//! File Layout
//!
//! The library is a short one-way pipeline. Every stage lives in its own module under
//! `src/vmsize` and only consumes the output of the previous stage:
//!
//! src/vmsize
//!   ├── token        Token and TokenKind, the tokenizer output
//!   ├── tokenizing   The positional grammar, one matcher per component
//!   ├── explaining   Static tables and templates turning tokens into text
//!   ├── formats      Output formats (the ASCII diagram)
//!   └── pipeline     Wires the stages together and serializes the result
//!
//! For the common case use [`explain_vm_size`].

pub mod vmsize;

pub use vmsize::explaining::{explain, Explanation};
pub use vmsize::formats::render;
pub use vmsize::pipeline::{explain_vm_size, Decoded, ExecutionError, PipelineExecutor};
pub use vmsize::token::{Token, TokenKind};
pub use vmsize::tokenizing::{tokenize, ParseError};
