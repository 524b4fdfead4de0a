//! Paragraph, blockquote and divider rendering.

/// Markup for a horizontal rule.
pub const DIVIDER: &str = "<div class=\"divider\"></div>";

/// Wrap lines in `tag`, each line on its own output line.
fn render_wrapped(tag: &str, lines: &[String]) -> String {
    let mut html = format!("<{tag}>\n");
    for line in lines {
        html.push_str(line);
        html.push('\n');
    }
    html.push_str(&format!("</{tag}>\n"));
    html
}

/// Render a paragraph.
pub fn render_paragraph(lines: &[String]) -> String {
    render_wrapped("p", lines)
}

/// Render a blockquote. Quotes of every depth become one plain `<div>`.
pub fn render_blockquote(lines: &[String]) -> String {
    render_wrapped("div", lines)
}

/// Render a horizontal rule.
pub fn render_divider() -> String {
    format!("{DIVIDER}\n")
}
