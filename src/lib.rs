//! Marki - a line-by-line markdown to HTML converter.
//!
//! The four entry points convert in-memory text or a byte stream into an
//! HTML string or a new file. Each is a single error boundary: the first
//! malformed line aborts the whole document, the error is logged, and the
//! caller gets an empty string (or no file). The `try_*` twins return the
//! error instead.
//!
//! # Example
//!
//! ```
//! assert_eq!(marki::convert_str("# Hello"), "<h1>Hello</h1>");
//! ```

pub mod converter;

pub use converter::Converter;
pub use marki_core::{MarkiError, Result};

use log::{error, warn};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read};
use std::path::Path;

use marki_config::FeaturesConfig;

/// Convert a markdown stream to an HTML string with the given features.
pub fn try_convert_with<R: Read>(markdown: R, features: &FeaturesConfig) -> Result<String> {
    let bytes = Converter::with_features(Vec::new(), features).run(BufReader::new(markdown))?;
    String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

/// Convert a markdown stream into a new file at `path`.
///
/// Fails with [`MarkiError::DestinationAlreadyExists`] without touching an
/// existing file. If conversion fails midway the partial file is removed.
pub fn try_convert_to_file_with<R: Read>(
    markdown: R,
    path: &Path,
    features: &FeaturesConfig,
) -> Result<()> {
    let file = File::options()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => MarkiError::DestinationAlreadyExists(path.to_path_buf()),
            _ => MarkiError::Io(e),
        })?;

    let result = Converter::with_features(BufWriter::new(file), features)
        .run(BufReader::new(markdown))
        .map(drop);

    if result.is_err() {
        // The writer is dropped by now; discard the partial output
        if let Err(e) = std::fs::remove_file(path) {
            warn!("Could not remove partial output {}: {}", path.display(), e);
        }
    }
    result
}

/// Convert markdown text to HTML, returning the error.
pub fn try_convert_str(markdown: &str) -> Result<String> {
    try_convert_with(markdown.as_bytes(), &FeaturesConfig::default())
}

/// Convert a UTF-8 markdown stream to HTML, returning the error.
pub fn try_convert_reader<R: Read>(markdown: R) -> Result<String> {
    try_convert_with(markdown, &FeaturesConfig::default())
}

/// Convert markdown text into a new HTML file, returning the error.
pub fn try_convert_str_to_file(markdown: &str, path: &Path) -> Result<()> {
    try_convert_to_file_with(markdown.as_bytes(), path, &FeaturesConfig::default())
}

/// Convert a markdown stream into a new HTML file, returning the error.
pub fn try_convert_reader_to_file<R: Read>(markdown: R, path: &Path) -> Result<()> {
    try_convert_to_file_with(markdown, path, &FeaturesConfig::default())
}

/// Convert markdown text to HTML. Returns an empty string on any error.
pub fn convert_str(markdown: &str) -> String {
    try_convert_str(markdown).unwrap_or_else(|e| {
        error!("Conversion failed: {}", e);
        String::new()
    })
}

/// Convert a UTF-8 markdown stream to HTML. Returns an empty string on any
/// error.
pub fn convert_reader<R: Read>(markdown: R) -> String {
    try_convert_reader(markdown).unwrap_or_else(|e| {
        error!("Conversion failed: {}", e);
        String::new()
    })
}

/// Convert markdown text into a new HTML file. Errors are logged; no file is
/// left behind.
pub fn convert_str_to_file(markdown: &str, path: &Path) {
    if let Err(e) = try_convert_str_to_file(markdown, path) {
        error!("Conversion to {} failed: {}", path.display(), e);
    }
}

/// Convert a markdown stream into a new HTML file. Errors are logged; no file
/// is left behind.
pub fn convert_reader_to_file<R: Read>(markdown: R, path: &Path) {
    if let Err(e) = try_convert_reader_to_file(markdown, path) {
        error!("Conversion to {} failed: {}", path.display(), e);
    }
}
