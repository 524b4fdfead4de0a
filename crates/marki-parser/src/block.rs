//! Block parse routines.
//!
//! Each routine validates one line of its construct and returns the data the
//! parser accumulates or emits. Leading markers are counted over the
//! contiguous prefix only, so a `#` or `>` later in the text is content.

use log::debug;
use marki_core::{MarkiError, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Leading run of `#`
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#+").unwrap());

/// Leading run of ASCII digits
static ORDERED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+").unwrap());

/// Leading run of `>`
static BLOCKQUOTE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^>+").unwrap());

/// Deepest heading level.
pub const MAX_HEADING_LEVEL: usize = 6;

/// A parsed heading line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub level: u8,
    pub content: String,
}

/// Parse a heading line into its level and trimmed content.
pub fn parse_heading(line: &str) -> Result<Heading> {
    let run = HEADING_RE.find(line).map(|m| m.end()).unwrap_or(0);
    if run == 0 || run > MAX_HEADING_LEVEL {
        return Err(MarkiError::InvalidHeadingLevel(run));
    }

    let content = line[run..].trim();
    if content.is_empty() {
        return Err(MarkiError::EmptyHeadingContent);
    }

    Ok(Heading {
        level: run as u8,
        content: content.to_string(),
    })
}

/// Parse an ordered list item, dropping its `N.` marker.
///
/// The number is only validated, never kept.
pub fn parse_ordered_item(line: &str) -> Result<String> {
    let digits = ORDERED_RE
        .find(line)
        .map(|m| m.as_str())
        .ok_or_else(|| MarkiError::InvalidOrderedListItem(line.to_string()))?;

    if digits.parse::<u32>().is_err() {
        return Err(MarkiError::InvalidOrderedListItem(line.to_string()));
    }

    let marker = format!("{digits}.");
    Ok(line.replacen(&marker, "", 1).trim().to_string())
}

/// Whether a dash line should be tried as a horizontal rule.
pub fn is_rule_candidate(line: &str) -> bool {
    line.starts_with("---")
}

/// Parse an unordered list item.
///
/// With `strip_inner_dashes` every `-` in the line is removed, hyphens in the
/// text included. Otherwise only the leading marker goes.
pub fn parse_unordered_item(line: &str, strip_inner_dashes: bool) -> Result<String> {
    let rest = line
        .strip_prefix('-')
        .ok_or_else(|| MarkiError::InvalidUnorderedListItem(line.to_string()))?;

    let content = if strip_inner_dashes {
        line.replace('-', "")
    } else {
        rest.to_string()
    };
    Ok(content.trim().to_string())
}

/// Check that a line is a horizontal rule: nothing but dashes once trimmed.
pub fn parse_horizontal_rule(line: &str) -> bool {
    let dashes = line.chars().filter(|&c| c == '-').count();
    let matched = dashes > 0 && line.trim() == "-".repeat(dashes);
    if !matched {
        debug!("Invalid horizontal rule: {:?}", line);
    }
    matched
}

/// Parse a blockquote line. All nesting depths collapse into one quote.
pub fn parse_blockquote(line: &str) -> Result<String> {
    let depth = BLOCKQUOTE_RE.find(line).map(|m| m.end()).unwrap_or(0);
    if depth == 0 {
        return Err(MarkiError::InvalidBlockquoteStart(line.to_string()));
    }
    Ok(line[depth..].trim().to_string())
}

/// Whether a paragraph line closes the paragraph instead of extending it.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
