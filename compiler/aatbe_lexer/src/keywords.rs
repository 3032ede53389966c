//! Reserved words.
//!
//! Lookup buckets by length first: every keyword is 2-8 bytes long and
//! starts with a lowercase ASCII letter, so most identifiers are rejected
//! before any string comparison.

/// Whether `text` is a reserved keyword.
#[inline]
pub(crate) fn is_keyword(text: &str) -> bool {
    let bytes = text.as_bytes();
    let len = bytes.len();

    if !(2..=8).contains(&len) || !bytes[0].is_ascii_lowercase() {
        return false;
    }

    match len {
        2 => matches!(text, "as" | "fn" | "if" | "in"),
        3 => matches!(text, "for" | "use" | "val" | "var" | "ref" | "ptr"),
        4 => matches!(text, "else" | "enum" | "then" | "from" | "type" | "loop"),
        5 => matches!(text, "break" | "const" | "while"),
        6 => matches!(
            text,
            "global" | "return" | "struct" | "export" | "module" | "extern" | "public"
        ),
        8 => text == "continue",
        _ => false,
    }
}

/// Every reserved keyword, in no particular order.
pub const KEYWORDS: &[&str] = &[
    "as", "fn", "if", "in", "for", "use", "val", "var", "else", "enum", "then", "from", "type",
    "break", "const", "while", "global", "return", "struct", "export", "module", "continue",
    "ref", "ptr", "extern", "loop", "public",
];

#[cfg(test)]
mod tests;
