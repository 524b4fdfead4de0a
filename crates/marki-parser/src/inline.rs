//! Inline marker scanning.
//!
//! Emphasis and code spans are recognized but not rendered; the parser only
//! reports them so unrendered markup shows up in trace logs.

use marki_core::InlineSign;

/// Byte offsets and kinds of every inline marker in `text`.
pub fn inline_signs(text: &str) -> Vec<(usize, InlineSign)> {
    text.char_indices()
        .filter_map(|(i, c)| InlineSign::from_char(c).map(|sign| (i, sign)))
        .collect()
}

/// Whether `text` carries any inline markup that is left as-is.
pub fn has_inline_markup(text: &str) -> bool {
    text.chars().any(|c| InlineSign::from_char(c).is_some())
}
