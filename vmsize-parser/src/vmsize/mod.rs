//! Main module for vmsize library functionality

pub mod explaining;
pub mod formats;
pub mod pipeline;
pub mod token;
pub mod tokenizing;
