//! Error types for marki

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for marki operations.
///
/// The block variants are raised by the parse and generate routines. Any of
/// them aborts the conversion of the whole document.
#[derive(Error, Debug)]
pub enum MarkiError {
    /// Leading `#` run is empty or longer than six
    #[error("Expected a heading level between 1 and 6, found {0}")]
    InvalidHeadingLevel(usize),

    /// Heading text is empty after stripping the marker
    #[error("Content of heading is empty")]
    EmptyHeadingContent,

    /// Ordered list line without a parseable leading number
    #[error("Invalid ordered list item start: {0:?}")]
    InvalidOrderedListItem(String),

    /// Unordered list line that does not start with `-`
    #[error("Invalid unordered list item: {0:?}")]
    InvalidUnorderedListItem(String),

    /// Blockquote line that does not start with `>`
    #[error("Invalid block quote start: {0:?}")]
    InvalidBlockquoteStart(String),

    /// Mismatched or unopened image delimiter
    #[error("Invalid image: {0:?}")]
    InvalidImageSyntax(String),

    /// Image reference without a source
    #[error("Image source is empty")]
    EmptyImageTarget,

    /// Output file is already present
    #[error("File already exists: {}", .0.display())]
    DestinationAlreadyExists(PathBuf),

    /// IO error while reading input or writing output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Command-line parameter error
    #[error("Parameter error: {0}")]
    Parameter(String),
}

/// Result type alias for marki operations
pub type Result<T> = std::result::Result<T, MarkiError>;
