//! Transliteration pipeline — orchestrates the folding stages.

use crate::shave::shave_marks_latin;
use crate::symbols::dewinize;
use serde::{Deserialize, Serialize};
use tf_core::{FoldError, Result};
use tracing::debug;
use unicode_normalization::UnicodeNormalization;

/// Best-effort ASCII transliteration.
///
/// Stage order is load-bearing: symbol mapping runs first because
/// replacements like "(TM)" introduce Latin letters that must not count
/// as base characters during mark folding, and the sharp-s expansion runs
/// after folding because ß has no mark decomposition to strip. The final
/// NFKC pass collapses remaining compatibility equivalents (vulgar
/// fractions and the like).
///
/// Output is ASCII-biased, not ASCII-guaranteed: non-Latin scripts and
/// codepoints without a compatibility decomposition pass through.
pub fn asciize(text: &str) -> String {
    let mapped = dewinize(text);
    let folded = shave_marks_latin(&mapped);
    let expanded = folded.replace('ß', "ss");
    expanded.nfkc().collect()
}

/// Validating entry point: accepts raw bytes, rejects ill-formed UTF-8
/// once at the boundary, then runs the total `&str` pipeline.
pub fn asciize_bytes(bytes: &[u8]) -> Result<String> {
    let text = std::str::from_utf8(bytes).map_err(|e| {
        debug!(error = %e, "rejecting ill-formed input");
        FoldError::InvalidEncoding(e)
    })?;
    Ok(asciize(text))
}

/// Transliteration result with statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AsciizeReport {
    pub output: String,
    pub input_chars: usize,
    pub output_chars: usize,
    pub ascii_only: bool,
    pub stages: Vec<String>,
}

/// Run [`asciize`] and report what happened.
pub fn asciize_report(text: &str) -> AsciizeReport {
    let output = asciize(text);
    AsciizeReport {
        input_chars: text.chars().count(),
        output_chars: output.chars().count(),
        ascii_only: output.is_ascii(),
        stages: vec![
            "dewinize".into(),
            "shave_marks_latin".into(),
            "sharp_s".into(),
            "nfkc".into(),
        ],
        output,
    }
}
