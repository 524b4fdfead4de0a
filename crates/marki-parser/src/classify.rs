//! Line classification.
//!
//! Every line is routed by its first character alone. No lookahead happens
//! here; the block routines validate the rest of the line.

use marki_core::BlockSignal;

/// Characters with a dedicated block signal. Digits are handled separately.
pub const SIGNAL_CHARS: [(char, BlockSignal); 5] = [
    ('#', BlockSignal::Heading),
    ('>', BlockSignal::Blockquote),
    ('-', BlockSignal::DashLine),
    ('!', BlockSignal::Image),
    ('[', BlockSignal::LinkIgnored),
];

/// Map a leading character to its block signal.
pub fn signal_for(c: char) -> BlockSignal {
    if c.is_ascii_digit() {
        return BlockSignal::OrderedItem;
    }
    SIGNAL_CHARS
        .iter()
        .find(|(sign, _)| *sign == c)
        .map(|(_, signal)| *signal)
        .unwrap_or(BlockSignal::Normal)
}

/// Classify a line. An empty line is [`BlockSignal::Normal`].
pub fn classify(line: &str) -> BlockSignal {
    line.chars()
        .next()
        .map(signal_for)
        .unwrap_or(BlockSignal::Normal)
}
