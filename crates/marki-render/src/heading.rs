//! Heading rendering.
//!
//! Headings are single-line and written as soon as they are parsed. The tag
//! is not followed by a line break.

/// Render a heading as `<hN>content</hN>`.
///
/// # Arguments
/// * `level` - Heading level (1-6)
/// * `content` - Trimmed heading text
pub fn render_heading(level: u8, content: &str) -> String {
    format!("<h{level}>{content}</h{level}>")
}
