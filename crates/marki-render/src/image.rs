//! Image rendering.

use marki_core::{MarkiError, Result};
use marki_parser::ImageRef;

/// Render an image tag, rejecting references without a source.
pub fn render_image(image: &ImageRef) -> Result<String> {
    if image.target.is_empty() {
        return Err(MarkiError::EmptyImageTarget);
    }
    Ok(format!(
        "<img alt=\"{}\" src=\"{}\">\n",
        image.alt, image.target
    ))
}
