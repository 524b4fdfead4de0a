//! Marki Render
//!
//! This crate turns parsed blocks into HTML fragments and writes them to any
//! [`std::io::Write`] sink as soon as they are complete.
//!
//! # Fragments
//!
//! - **Headings** - `<h1>`..`<h6>`, no trailing line break
//! - **Paragraphs** - `<p>` with one source line per output line
//! - **Lists** - `<ol>`/`<ul>` with one `<li>` per item
//! - **Blockquotes** - a plain `<div>` regardless of depth
//! - **Images** - `<img alt=".." src="..">`
//! - **Horizontal rules** - `<div class="divider"></div>`
//!
//! # Example
//!
//! ```
//! use marki_render::Renderer;
//! use marki_parser::ParseEvent;
//!
//! let mut output = Vec::new();
//! let mut renderer = Renderer::new(&mut output);
//!
//! renderer.render_event(&ParseEvent::Heading {
//!     level: 1,
//!     content: "Hello World".to_string(),
//! }).unwrap();
//! ```

pub mod block;
pub mod heading;
pub mod image;
pub mod list;

pub use block::{render_blockquote, render_divider, render_paragraph, DIVIDER};
pub use heading::render_heading;
pub use image::render_image;
pub use list::{render_list, render_list_item, ListTag};

use std::io::Write;

use marki_core::Result;
use marki_parser::ParseEvent;

/// Render a single event to its HTML fragment.
pub fn render_to_string(event: &ParseEvent) -> Result<String> {
    let html = match event {
        ParseEvent::Heading { level, content } => render_heading(*level, content),
        ParseEvent::Paragraph(lines) => render_paragraph(lines),
        ParseEvent::OrderedList(items) => render_list(ListTag::Ordered, items),
        ParseEvent::UnorderedList(items) => render_list(ListTag::Unordered, items),
        ParseEvent::Blockquote(lines) => render_blockquote(lines),
        ParseEvent::Image(image) => render_image(image)?,
        ParseEvent::HorizontalRule => render_divider(),
    };
    Ok(html)
}

/// HTML renderer writing to a forward-only sink.
pub struct Renderer<W: Write> {
    /// Output writer
    writer: W,
    /// Bytes written so far
    written: usize,
}

impl<W: Write> Renderer<W> {
    /// Create a new renderer.
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Number of bytes written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Write a string to the output.
    fn write(&mut self, s: &str) -> std::io::Result<()> {
        self.writer.write_all(s.as_bytes())?;
        self.written += s.len();
        Ok(())
    }

    /// Render a single parse event.
    pub fn render_event(&mut self, event: &ParseEvent) -> Result<()> {
        let html = render_to_string(event)?;
        self.write(&html)?;
        Ok(())
    }

    /// Render a batch of events in order.
    pub fn render_events(&mut self, events: &[ParseEvent]) -> Result<()> {
        for event in events {
            self.render_event(event)?;
        }
        Ok(())
    }

    /// Flush and hand back the writer.
    pub fn into_inner(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marki_core::MarkiError;
    use marki_parser::ImageRef;

    fn render_all(events: &[ParseEvent]) -> Result<String> {
        let mut renderer = Renderer::new(Vec::new());
        renderer.render_events(events)?;
        let bytes = renderer.into_inner()?;
        Ok(String::from_utf8(bytes).unwrap())
    }

    #[test]
    fn test_render_heading_event() {
        let html = render_all(&[ParseEvent::Heading {
            level: 3,
            content: "Section".to_string(),
        }])
        .unwrap();
        assert_eq!(html, "<h3>Section</h3>");
    }

    #[test]
    fn test_render_in_order() {
        let html = render_all(&[
            ParseEvent::Paragraph(vec!["a".to_string()]),
            ParseEvent::HorizontalRule,
            ParseEvent::UnorderedList(vec!["b".to_string()]),
        ])
        .unwrap();
        assert_eq!(
            html,
            "<p>\na\n</p>\n<div class=\"divider\"></div>\n<ul>\n<li>b</li>\n</ul>\n"
        );
    }

    #[test]
    fn test_render_image_error() {
        let result = render_all(&[ParseEvent::Image(ImageRef::default())]);
        assert!(matches!(result, Err(MarkiError::EmptyImageTarget)));
    }

    #[test]
    fn test_written_counts_bytes() {
        let mut renderer = Renderer::new(Vec::new());
        renderer.render_event(&ParseEvent::HorizontalRule).unwrap();
        assert_eq!(renderer.written(), DIVIDER.len() + 1);
    }

    #[test]
    fn test_blockquote_event() {
        let html = render_to_string(&ParseEvent::Blockquote(vec!["q".to_string()])).unwrap();
        assert_eq!(html, "<div>\nq\n</div>\n");
    }
}
