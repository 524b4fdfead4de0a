//! Parse state for line-by-line markdown conversion.
//!
//! [`PendingBlock`] is the accumulator for multi-line blocks. Only one block
//! can be open at a time, so the state is a single tagged value rather than
//! one buffer per block kind.

use crate::enums::{BlockKind, Phase};

/// The multi-line block currently being accumulated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PendingBlock {
    /// Nothing buffered
    #[default]
    Idle,
    /// Trimmed paragraph lines
    Paragraph(Vec<String>),
    /// Ordered list item contents
    OrderedList(Vec<String>),
    /// Unordered list item contents
    UnorderedList(Vec<String>),
    /// Blockquote line contents
    Blockquote(Vec<String>),
}

impl PendingBlock {
    fn open(kind: BlockKind) -> Self {
        match kind {
            BlockKind::Paragraph => PendingBlock::Paragraph(Vec::new()),
            BlockKind::OrderedList => PendingBlock::OrderedList(Vec::new()),
            BlockKind::UnorderedList => PendingBlock::UnorderedList(Vec::new()),
            BlockKind::Blockquote => PendingBlock::Blockquote(Vec::new()),
        }
    }

    /// Kind of the open block, `None` when idle.
    pub fn kind(&self) -> Option<BlockKind> {
        match self {
            PendingBlock::Idle => None,
            PendingBlock::Paragraph(_) => Some(BlockKind::Paragraph),
            PendingBlock::OrderedList(_) => Some(BlockKind::OrderedList),
            PendingBlock::UnorderedList(_) => Some(BlockKind::UnorderedList),
            PendingBlock::Blockquote(_) => Some(BlockKind::Blockquote),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, PendingBlock::Idle)
    }

    /// Close the open block and return its contents, leaving the state idle.
    ///
    /// An open block with no lines yields `None`.
    pub fn take(&mut self) -> Option<(BlockKind, Vec<String>)> {
        let kind = self.kind()?;
        match std::mem::take(self) {
            PendingBlock::Idle => None,
            PendingBlock::Paragraph(lines)
            | PendingBlock::OrderedList(lines)
            | PendingBlock::UnorderedList(lines)
            | PendingBlock::Blockquote(lines) => {
                if lines.is_empty() {
                    None
                } else {
                    Some((kind, lines))
                }
            }
        }
    }

    /// Close the open block unless it is of kind `keep`.
    pub fn take_unless(&mut self, keep: Option<BlockKind>) -> Option<(BlockKind, Vec<String>)> {
        if keep.is_some() && self.kind() == keep {
            None
        } else {
            self.take()
        }
    }

    /// Append a line to a block of `kind`.
    ///
    /// A block of another kind is closed first and returned so the caller can
    /// emit it before the new block grows.
    pub fn push(&mut self, kind: BlockKind, line: String) -> Option<(BlockKind, Vec<String>)> {
        let flushed = self.take_unless(Some(kind));
        if self.is_idle() {
            *self = Self::open(kind);
        }
        if let PendingBlock::Paragraph(lines)
        | PendingBlock::OrderedList(lines)
        | PendingBlock::UnorderedList(lines)
        | PendingBlock::Blockquote(lines) = self
        {
            lines.push(line);
        }
        flushed
    }
}

/// Per-conversion parse state.
#[derive(Debug, Clone, Default)]
pub struct ParseState {
    /// Conversion progress
    pub phase: Phase,
    /// Number of lines consumed so far
    pub line_number: usize,
    /// The open multi-line block
    pub pending: PendingBlock,
}

impl ParseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that another line is being consumed.
    pub fn advance(&mut self) {
        self.phase = Phase::Streaming;
        self.line_number += 1;
    }

    /// Mark the input as exhausted.
    pub fn finish(&mut self) {
        self.phase = Phase::Done;
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }
}
