//! Query normalization.
//!
//! Canonicalizes raw search-box input into the comparison-stable form the
//! rest of the pipeline works on. The normalized string is part of every
//! classification result and of the conventional cache key, so the exact
//! transformation here is a published contract, not an implementation
//! detail.

/// Normalize raw input into its comparison-stable form.
///
/// Applies, in order:
///
/// 1. full-width to half-width folding for the alphanumeric block
///    (`０-９`, `Ａ-Ｚ`, `ａ-ｚ`);
/// 2. lowercasing;
/// 3. collapsing every whitespace run (including the ideographic space
///    U+3000) into a single ASCII space;
/// 4. trimming leading and trailing whitespace.
///
/// Full-width punctuation such as `？` and `，` is left as-is; the
/// pattern and format tiers downstream match both widths themselves.
/// The function is total and idempotent.
///
/// # Examples
///
/// ```
/// use sekisho::normalize::normalize;
///
/// assert_eq!(normalize("ＡＢＣ１２３"), "abc123");
/// assert_eq!(normalize("ビタミン   D"), "ビタミン d");
/// assert_eq!(normalize("   "), "");
/// ```
pub fn normalize(raw: &str) -> String {
    let lowered: String = raw
        .chars()
        .map(fold_fullwidth_alnum)
        .flat_map(char::to_lowercase)
        .collect();
    collapse_whitespace(&lowered)
}

/// Map a full-width alphanumeric code point to its half-width equivalent.
///
/// Only `０-９` (U+FF10..=U+FF19), `Ａ-Ｚ` (U+FF21..=U+FF3A) and `ａ-ｚ`
/// (U+FF41..=U+FF5A) are folded; every other code point passes through
/// unchanged.
fn fold_fullwidth_alnum(c: char) -> char {
    match c {
        '０'..='９' | 'Ａ'..='Ｚ' | 'ａ'..='ｚ' => {
            // The full-width forms sit at a fixed offset from ASCII.
            char::from_u32(c as u32 - 0xFEE0).unwrap_or(c)
        }
        _ => c,
    }
}

/// Collapse whitespace runs to single spaces and trim the ends.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
