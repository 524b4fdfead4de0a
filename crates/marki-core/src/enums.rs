//! Core enums for marki parsing state.
//!
//! These enums describe what a line starts with, which block is being
//! accumulated, and how far a conversion has progressed.

use serde::{Deserialize, Serialize};

/// Block signal derived from the first character of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockSignal {
    /// `#` heading
    Heading,
    /// `>` blockquote
    Blockquote,
    /// `-` unordered list item or horizontal rule
    DashLine,
    /// `!` image
    Image,
    /// `[` link or reference definition (dropped)
    LinkIgnored,
    /// Decimal digit, ordered list item
    OrderedItem,
    /// Anything else, including an empty line
    Normal,
}

impl std::fmt::Display for BlockSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockSignal::Heading => write!(f, "heading"),
            BlockSignal::Blockquote => write!(f, "blockquote"),
            BlockSignal::DashLine => write!(f, "dash"),
            BlockSignal::Image => write!(f, "image"),
            BlockSignal::LinkIgnored => write!(f, "link"),
            BlockSignal::OrderedItem => write!(f, "ordered"),
            BlockSignal::Normal => write!(f, "normal"),
        }
    }
}

/// Inline markers. Recognized, but never rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InlineSign {
    /// `*` emphasis
    Star,
    /// `` ` `` code span
    Code,
}

impl InlineSign {
    /// Map a character to its inline sign, if it has one.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '*' => Some(InlineSign::Star),
            '`' => Some(InlineSign::Code),
            _ => None,
        }
    }
}

impl std::fmt::Display for InlineSign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InlineSign::Star => write!(f, "star"),
            InlineSign::Code => write!(f, "code"),
        }
    }
}

/// Kind of multi-line block held by the accumulator.
///
/// The declaration order is the nominal flush order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BlockKind {
    Paragraph,
    OrderedList,
    UnorderedList,
    Blockquote,
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockKind::Paragraph => write!(f, "paragraph"),
            BlockKind::OrderedList => write!(f, "ordered list"),
            BlockKind::UnorderedList => write!(f, "unordered list"),
            BlockKind::Blockquote => write!(f, "blockquote"),
        }
    }
}

/// Progress of a single conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Phase {
    /// No line consumed yet
    #[default]
    Idle,
    /// Consuming lines
    Streaming,
    /// Input exhausted and final flush performed
    Done,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Idle => write!(f, "idle"),
            Phase::Streaming => write!(f, "streaming"),
            Phase::Done => write!(f, "done"),
        }
    }
}
