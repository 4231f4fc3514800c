//! Diagram format module declaration

#[allow(clippy::module_inception)]
pub mod diagram;

pub use diagram::{render, DiagramFormatter};
