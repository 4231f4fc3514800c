//! Output formats
//!
//! Every format implements [`registry::Formatter`] over a [`Decoded`] identifier:
//!
//!     diagram       ASCII tree connecting each token to its explanation
//!     token-json    The token list as pretty-printed JSON
//!
//! [`Decoded`]: crate::vmsize::pipeline::Decoded

pub mod diagram;
pub mod registry;
pub mod token_json;

pub use diagram::{render, DiagramFormatter};
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use token_json::TokenJsonFormatter;
