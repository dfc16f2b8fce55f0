//! Symbol mapper stage — fixed Windows-1252-era symbol substitutions.

use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;

/// Single-character replacements: "smart" punctuation to ASCII.
pub fn single_char_map() -> Vec<(char, &'static str)> {
    vec![
        ('\u{201A}', "'"),  // ‚ single low quote
        ('\u{0192}', "f"),  // ƒ latin small f with hook
        ('\u{201E}', "\""), // „ double low quote
        ('\u{02C6}', "^"),  // ˆ modifier circumflex
        ('\u{2039}', "<"),  // ‹ single left angle quote
        ('\u{2018}', "'"),  // ‘ left single quote
        ('\u{2019}', "'"),  // ’ right single quote
        ('\u{201C}', "\""), // “ left double quote
        ('\u{201D}', "\""), // ” right double quote
        ('\u{2022}', "-"),  // • bullet
        ('\u{2013}', "-"),  // – en dash
        ('\u{2014}', "-"),  // — em dash
        ('\u{02DC}', "~"),  // ˜ small tilde
        ('\u{203A}', ">"),  // › single right angle quote
    ]
}

/// Multi-character expansions. These win over single-character entries
/// when a key appears in both tables.
pub fn multi_char_map() -> Vec<(char, &'static str)> {
    vec![
        ('\u{20AC}', "EUR"),         // €
        ('\u{2026}', "..."),         // …
        ('\u{00C6}', "AE"),          // Æ
        ('\u{00E6}', "ae"),          // æ
        ('\u{0152}', "OE"),          // Œ
        ('\u{0153}', "oe"),          // œ
        ('\u{2122}', "(TM)"),        // ™
        ('\u{2030}', "<per mille>"), // ‰
        ('\u{2020}', "**"),          // †
        ('\u{2021}', "***"),         // ‡
    ]
}

static SYMBOL_MAP: LazyLock<HashMap<char, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for (c, rep) in single_char_map() {
        map.insert(c, rep);
    }
    // inserted last so multi-character entries take precedence
    for (c, rep) in multi_char_map() {
        map.insert(c, rep);
    }
    debug!(entries = map.len(), "symbol substitution table built");
    map
});

/// Replace Windows-1252 symbols with ASCII characters or sequences.
/// Unmapped codepoints pass through unchanged.
pub fn dewinize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match SYMBOL_MAP.get(&c) {
            Some(rep) => out.push_str(rep),
            None => out.push(c),
        }
    }
    out
}
