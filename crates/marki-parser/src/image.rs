//! Image reference parsing.
//!
//! Scans `![alt](target)` with a delimiter stack. The capture target starts
//! on the image source and flips every time a delimiter opens, so text inside
//! `[...]` lands in the alt buffer and text inside `(...)` in the target.
//! A `)` that empties the stack completes one reference; several references
//! may share a line.

use marki_core::{MarkiError, Result};

/// One parsed image reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageRef {
    pub alt: String,
    pub target: String,
}

/// Parse every image reference on an image line.
///
/// The first character (the `!`) is skipped. Unterminated trailing content
/// is kept as a final reference; an empty target is rejected when rendering.
pub fn parse_images(line: &str) -> Result<Vec<ImageRef>> {
    let mut images = Vec::new();
    let mut current = ImageRef::default();
    let mut capture_alt = false;
    let mut stack: Vec<char> = Vec::new();

    for c in line.chars().skip(1) {
        match c {
            '[' | '(' => {
                capture_alt = !capture_alt;
                stack.push(c);
            }
            ']' | ')' => {
                let open = if c == ']' { '[' } else { '(' };
                if stack.pop() != Some(open) {
                    return Err(MarkiError::InvalidImageSyntax(line.to_string()));
                }
                if c == ')' && stack.is_empty() {
                    images.push(std::mem::take(&mut current));
                    capture_alt = false;
                }
            }
            // Text between references
            _ if stack.is_empty() && !images.is_empty() => {}
            _ if capture_alt => current.alt.push(c),
            _ => current.target.push(c),
        }
    }

    if images.is_empty() || !stack.is_empty() {
        images.push(current);
    }

    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(alt: &str, target: &str) -> ImageRef {
        ImageRef {
            alt: alt.to_string(),
            target: target.to_string(),
        }
    }

    #[test]
    fn test_single_image() {
        assert_eq!(
            parse_images("![alt](img.png)").unwrap(),
            vec![image("alt", "img.png")]
        );
    }

    #[test]
    fn test_empty_alt() {
        assert_eq!(
            parse_images("![](pic.jpg)").unwrap(),
            vec![image("", "pic.jpg")]
        );
    }

    #[test]
    fn test_multiple_images_per_line() {
        assert_eq!(
            parse_images("![a](x.png) ![b](y.png)").unwrap(),
            vec![image("a", "x.png"), image("b", "y.png")]
        );
    }

    #[test]
    fn test_text_after_image_is_ignored() {
        assert_eq!(
            parse_images("![a](x.png) caption").unwrap(),
            vec![image("a", "x.png")]
        );
    }

    #[test]
    fn test_text_before_brackets_goes_to_target() {
        assert_eq!(parse_images("!hello").unwrap(), vec![image("", "hello")]);
    }

    #[test]
    fn test_bare_bang_has_empty_target() {
        assert_eq!(parse_images("!").unwrap(), vec![image("", "")]);
    }

    #[test]
    fn test_unterminated_reference_is_kept() {
        assert_eq!(
            parse_images("![alt](img.png").unwrap(),
            vec![image("alt", "img.png")]
        );
    }

    #[test]
    fn test_mismatched_delimiter() {
        assert!(matches!(
            parse_images("![alt)(img.png]"),
            Err(MarkiError::InvalidImageSyntax(_))
        ));
    }

    #[test]
    fn test_unopened_delimiter() {
        assert!(matches!(
            parse_images("!alt](img.png)"),
            Err(MarkiError::InvalidImageSyntax(_))
        ));
    }
}
