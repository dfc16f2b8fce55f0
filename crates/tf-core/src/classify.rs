//! Codepoint classification for the folding stages.

use unicode_normalization::char::canonical_combining_class;

/// True if `c` is a combining mark: canonical combining class != 0.
pub fn is_combining_mark(c: char) -> bool {
    canonical_combining_class(c) != 0
}

/// True if `c` counts as a Latin base character.
///
/// This is ASCII-letter membership, not Unicode Latin-script membership.
/// After NFD every precomposed Latin letter decomposes to an ASCII base
/// plus marks, so the narrow test covers the practical cases; widening it
/// would change which diacritics get stripped.
pub fn is_latin_base(c: char) -> bool {
    c.is_ascii_alphabetic()
}
