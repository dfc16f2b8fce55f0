//! Decomposer/filter stage — diacritic removal over NFD.

use tf_core::classify::{is_combining_mark, is_latin_base};
use tf_core::MarkFilter;
use unicode_normalization::UnicodeNormalization;

/// Decompose to NFD, drop combining marks per `filter`, recompose to NFC.
///
/// The NFD sequence is scanned left to right carrying one piece of state:
/// whether the most recent base character was a Latin letter. The state
/// resets on every non-combining codepoint.
pub fn fold(text: &str, filter: MarkFilter) -> String {
    let (shaved, _) = text.nfd().fold(
        (String::with_capacity(text.len()), false),
        |(mut out, latin_base), c| {
            if is_combining_mark(c) {
                let drop = match filter {
                    MarkFilter::All => true,
                    MarkFilter::LatinOnly => latin_base,
                };
                if !drop {
                    out.push(c);
                }
                (out, latin_base)
            } else {
                out.push(c);
                (out, is_latin_base(c))
            }
        },
    );
    shaved.nfc().collect()
}

/// Remove all diacritic marks.
pub fn shave_marks(text: &str) -> String {
    fold(text, MarkFilter::All)
}

/// Remove diacritic marks from Latin base characters only, preserving
/// accents on other scripts.
pub fn shave_marks_latin(text: &str) -> String {
    fold(text, MarkFilter::LatinOnly)
}
