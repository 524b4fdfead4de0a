//! List rendering.
//!
//! Ordered and unordered lists share one layout: the wrapping tag, then one
//! `<li>` per item, each on its own line. Source numbering is not kept.

/// The wrapping tag of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListTag {
    /// `<ol>`
    Ordered,
    /// `<ul>`
    Unordered,
}

impl ListTag {
    pub fn name(self) -> &'static str {
        match self {
            ListTag::Ordered => "ol",
            ListTag::Unordered => "ul",
        }
    }
}

/// Render a list item.
pub fn render_list_item(content: &str) -> String {
    format!("<li>{content}</li>")
}

/// Render a complete list, one line per tag or item.
pub fn render_list(tag: ListTag, items: &[String]) -> String {
    let name = tag.name();
    let mut html = format!("<{name}>\n");
    for item in items {
        html.push_str(&render_list_item(item));
        html.push('\n');
    }
    html.push_str(&format!("</{name}>\n"));
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_list() {
        let items = vec!["First".to_string(), "Second".to_string()];
        assert_eq!(
            render_list(ListTag::Ordered, &items),
            "<ol>\n<li>First</li>\n<li>Second</li>\n</ol>\n"
        );
    }

    #[test]
    fn test_unordered_list() {
        let items = vec!["item one".to_string()];
        assert_eq!(
            render_list(ListTag::Unordered, &items),
            "<ul>\n<li>item one</li>\n</ul>\n"
        );
    }

    #[test]
    fn test_empty_item() {
        assert_eq!(render_list_item(""), "<li></li>");
    }
}
