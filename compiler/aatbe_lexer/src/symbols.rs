//! Punctuation and operator table.

/// All symbols, longest first and reverse lexicographic within a length,
/// so the first prefix match at an offset is the longest one.
pub const SYMBOLS: &[&str] = &[
    "...", //
    "||", "|>", ">>", ">=", "==", "<|", "<=", "<<", "<-", "/=", "..", "->", "-=", "--", "+=",
    "++", "*=", "&&", "%=", "!=", //
    "~", "}", "|", "{", "^", "]", "[", "@", ">", "=", "<", ";", ":", "/", ".", "-", ",", "+",
    "*", ")", "(", "&", "%", "!",
];
