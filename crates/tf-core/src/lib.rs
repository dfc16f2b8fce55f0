//! Shared core for textfold: error taxonomy, codepoint classification,
//! and the mark-filter vocabulary used by the folding stages.

pub mod classify;
pub mod error;
pub mod options;

pub use error::{FoldError, Result};
pub use options::MarkFilter;
