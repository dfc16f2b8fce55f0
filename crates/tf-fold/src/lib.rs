//! textfold — Unicode folding / ASCII transliteration engine.
//!
//! Three composed stages, each a pure text-to-text function:
//! 1. Symbol mapper — fixed Windows-1252-era symbol substitutions
//! 2. Decomposer/filter — NFD, drop combining marks (all, or only on
//!    Latin bases), NFC recompose
//! 3. Pipeline — symbol mapping, Latin-only folding, sharp-s expansion,
//!    final NFKC pass

pub mod pipeline;
pub mod shave;
pub mod symbols;

pub use pipeline::{asciize, asciize_bytes, asciize_report, AsciizeReport};
pub use shave::{fold, shave_marks, shave_marks_latin};
pub use symbols::dewinize;
pub use tf_core::{FoldError, MarkFilter, Result};
