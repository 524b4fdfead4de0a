//! The conversion loop.
//!
//! A [`Converter`] owns one parser and one renderer for the lifetime of a
//! single document. Lines go in one at a time; completed blocks are written
//! to the sink straight away, so nothing but the open block is buffered.

use log::{debug, trace};
use std::io::{BufRead, Write};

use marki_config::FeaturesConfig;
use marki_core::{Phase, Result};
use marki_parser::Parser as MarkdownParser;
use marki_render::Renderer;

/// Streams markdown lines into HTML.
pub struct Converter<W: Write> {
    parser: MarkdownParser,
    renderer: Renderer<W>,
}

impl<W: Write> Converter<W> {
    /// Create a converter with default features.
    pub fn new(writer: W) -> Self {
        Self::with_features(writer, &FeaturesConfig::default())
    }

    /// Create a converter with the given feature flags.
    pub fn with_features(writer: W, features: &FeaturesConfig) -> Self {
        let mut parser = MarkdownParser::new();
        parser.set_strip_inner_dashes(features.strip_inner_dashes);
        Self {
            parser,
            renderer: Renderer::new(writer),
        }
    }

    pub fn phase(&self) -> Phase {
        self.parser.state().phase
    }

    /// Parse one line and write every block it completed.
    pub fn feed_line(&mut self, line: &str) -> Result<()> {
        let events = self.parser.parse_line(line)?;
        for event in &events {
            trace!("Parse event: {:?}", event);
        }
        self.renderer.render_events(&events)
    }

    /// Emit the block still open at end of input and return the sink.
    pub fn finish(mut self) -> Result<W> {
        let events = self.parser.finalize();
        self.renderer.render_events(&events)?;
        debug!(
            "Finished conversion: {} lines, {} bytes of HTML",
            self.parser.state().line_number,
            self.renderer.written()
        );
        self.renderer.into_inner()
    }

    /// Convert everything `reader` yields, then finish.
    pub fn run<R: BufRead>(mut self, reader: R) -> Result<W> {
        for line in reader.lines() {
            self.feed_line(&line?)?;
        }
        self.finish()
    }
}
