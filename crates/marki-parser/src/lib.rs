//! Marki Parser
//!
//! A line-by-line block parser for a restricted markdown subset. Each line is
//! classified by its first character, multi-line blocks are buffered until a
//! line of another construct (or a blank line) closes them, and completed
//! blocks come out as [`ParseEvent`]s ready for rendering.
//!
//! # Example
//!
//! ```
//! use marki_parser::{Parser, ParseEvent};
//!
//! let mut parser = Parser::new();
//!
//! for event in parser.parse_line("# Hello World").unwrap() {
//!     match event {
//!         ParseEvent::Heading { level, content } => {
//!             println!("H{}: {}", level, content);
//!         }
//!         _ => {}
//!     }
//! }
//! ```

pub mod block;
pub mod classify;
pub mod image;
pub mod inline;

pub use block::{
    is_blank, is_rule_candidate, parse_blockquote, parse_heading, parse_horizontal_rule,
    parse_ordered_item, parse_unordered_item, Heading, MAX_HEADING_LEVEL,
};
pub use classify::{classify, signal_for, SIGNAL_CHARS};
pub use image::{parse_images, ImageRef};
pub use inline::{has_inline_markup, inline_signs};

use log::{debug, trace};
use marki_core::{BlockKind, BlockSignal, ParseState, Result};

/// Events emitted by the parser. Each one is a completed block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseEvent {
    Heading { level: u8, content: String },
    Paragraph(Vec<String>),
    OrderedList(Vec<String>),
    UnorderedList(Vec<String>),
    Blockquote(Vec<String>),
    Image(ImageRef),
    HorizontalRule,
}

impl ParseEvent {
    /// Build the event for a flushed multi-line block.
    pub fn from_block(kind: BlockKind, lines: Vec<String>) -> Self {
        match kind {
            BlockKind::Paragraph => ParseEvent::Paragraph(lines),
            BlockKind::OrderedList => ParseEvent::OrderedList(lines),
            BlockKind::UnorderedList => ParseEvent::UnorderedList(lines),
            BlockKind::Blockquote => ParseEvent::Blockquote(lines),
        }
    }
}

/// The construct a line resolves to once dash lines are dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Construct {
    Heading,
    OrderedItem,
    UnorderedItem,
    HorizontalRule,
    Blockquote,
    Image,
    Paragraph,
}

impl Construct {
    fn resolve(signal: BlockSignal, line: &str) -> Option<Self> {
        match signal {
            BlockSignal::Heading => Some(Construct::Heading),
            BlockSignal::OrderedItem => Some(Construct::OrderedItem),
            BlockSignal::DashLine if is_rule_candidate(line) => Some(Construct::HorizontalRule),
            BlockSignal::DashLine => Some(Construct::UnorderedItem),
            BlockSignal::Blockquote => Some(Construct::Blockquote),
            BlockSignal::Image => Some(Construct::Image),
            BlockSignal::LinkIgnored => None,
            BlockSignal::Normal => Some(Construct::Paragraph),
        }
    }

    /// The buffered block this construct extends, if any.
    fn block_kind(self) -> Option<BlockKind> {
        match self {
            Construct::OrderedItem => Some(BlockKind::OrderedList),
            Construct::UnorderedItem => Some(BlockKind::UnorderedList),
            Construct::Blockquote => Some(BlockKind::Blockquote),
            Construct::Paragraph => Some(BlockKind::Paragraph),
            Construct::Heading | Construct::HorizontalRule | Construct::Image => None,
        }
    }
}

/// Line-by-line block parser.
#[derive(Debug)]
pub struct Parser {
    state: ParseState,
    events: Vec<ParseEvent>,
    /// Remove every `-` from unordered items, not just the marker
    strip_inner_dashes: bool,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// Create a new parser with default settings.
    pub fn new() -> Self {
        Self {
            state: ParseState::new(),
            events: Vec::new(),
            strip_inner_dashes: true,
        }
    }

    pub fn state(&self) -> &ParseState {
        &self.state
    }

    /// Choose between stripping all dashes from unordered items (the
    /// default) or only the leading marker.
    pub fn set_strip_inner_dashes(&mut self, enabled: bool) {
        self.strip_inner_dashes = enabled;
    }

    /// Parse a single line and return the blocks it completed.
    ///
    /// Any error leaves the parser in an unspecified state; the document is
    /// meant to be abandoned.
    pub fn parse_line(&mut self, line: &str) -> Result<Vec<ParseEvent>> {
        self.events.clear();
        self.state.advance();

        let signal = classify(line);
        trace!("line {} ({}): {:?}", self.state.line_number, signal, line);

        let Some(construct) = Construct::resolve(signal, line) else {
            debug!("Dropping link line {}", self.state.line_number);
            return Ok(Vec::new());
        };

        // Close whatever the new line does not continue before reading it
        self.flush_unless(construct.block_kind());

        match construct {
            Construct::Heading => {
                let heading = parse_heading(line)?;
                self.events.push(ParseEvent::Heading {
                    level: heading.level,
                    content: heading.content,
                });
            }
            Construct::OrderedItem => {
                let item = parse_ordered_item(line)?;
                self.accumulate(BlockKind::OrderedList, item);
            }
            Construct::UnorderedItem => {
                let item = parse_unordered_item(line, self.strip_inner_dashes)?;
                self.accumulate(BlockKind::UnorderedList, item);
            }
            Construct::HorizontalRule => {
                if parse_horizontal_rule(line) {
                    self.events.push(ParseEvent::HorizontalRule);
                }
            }
            Construct::Blockquote => {
                let content = parse_blockquote(line)?;
                self.accumulate(BlockKind::Blockquote, content);
            }
            Construct::Image => {
                for image in parse_images(line)? {
                    self.events.push(ParseEvent::Image(image));
                }
            }
            Construct::Paragraph => {
                if is_blank(line) {
                    self.flush_unless(None);
                } else {
                    self.accumulate(BlockKind::Paragraph, line.trim().to_string());
                }
            }
        }

        Ok(self.take_events())
    }

    fn take_events(&mut self) -> Vec<ParseEvent> {
        std::mem::take(&mut self.events)
    }

    /// Emit the open block unless it is of kind `keep`.
    fn flush_unless(&mut self, keep: Option<BlockKind>) {
        if let Some((kind, lines)) = self.state.pending.take_unless(keep) {
            debug!("Flushing {} ({} lines)", kind, lines.len());
            self.events.push(ParseEvent::from_block(kind, lines));
        }
    }

    fn accumulate(&mut self, kind: BlockKind, content: String) {
        if has_inline_markup(&content) {
            trace!(
                "{} inline markers left unrendered in {}",
                inline_signs(&content).len(),
                kind
            );
        }
        if let Some((flushed, lines)) = self.state.pending.push(kind, content) {
            self.events.push(ParseEvent::from_block(flushed, lines));
        }
    }

    /// Parse a complete document.
    pub fn parse_document(&mut self, content: &str) -> Result<Vec<ParseEvent>> {
        let mut all_events = Vec::new();
        for line in content.lines() {
            all_events.extend(self.parse_line(line)?);
        }
        all_events.extend(self.finalize());
        Ok(all_events)
    }

    /// Finalize parsing, emitting the block still open at end of input.
    pub fn finalize(&mut self) -> Vec<ParseEvent> {
        self.events.clear();
        self.flush_unless(None);
        self.state.finish();
        self.take_events()
    }
}

// =============================================================================
// Tests
// =============================================================================
