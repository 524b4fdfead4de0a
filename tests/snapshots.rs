//! Snapshot tests for marki output.
//!
//! These tests capture whole rendered documents inline.
//! Run with `cargo insta review` to update snapshots.

use marki_parser::Parser;
use marki_render::Renderer;

/// Helper to render markdown to a string.
fn render(input: &str) -> String {
    let mut output = Vec::new();
    let mut parser = Parser::new();

    {
        let mut renderer = Renderer::new(&mut output);

        for line in input.lines() {
            for event in parser.parse_line(line).unwrap() {
                renderer.render_event(&event).unwrap();
            }
        }
        for event in parser.finalize() {
            renderer.render_event(&event).unwrap();
        }
    }

    String::from_utf8(output).unwrap()
}

// =============================================================================
// Heading Snapshots
// =============================================================================

#[test]
fn test_snapshot_heading_all_levels() {
    let input = "# H1\n## H2\n### H3\n#### H4\n##### H5\n###### H6";
    let output = render(input);
    insta::assert_snapshot!(output, @"<h1>H1</h1><h2>H2</h2><h3>H3</h3><h4>H4</h4><h5>H5</h5><h6>H6</h6>");
}

// =============================================================================
// Block Snapshots
// =============================================================================

#[test]
fn test_snapshot_paragraphs() {
    let input = r#"The first paragraph
spans two lines.

The second one does not."#;
    let output = render(input);
    insta::assert_snapshot!(output, @r"
    <p>
    The first paragraph
    spans two lines.
    </p>
    <p>
    The second one does not.
    </p>
    ");
}

#[test]
fn test_snapshot_lists() {
    let input = r#"1. Gather
2. Convert
- plain
- simple"#;
    let output = render(input);
    insta::assert_snapshot!(output, @r"
    <ol>
    <li>Gather</li>
    <li>Convert</li>
    </ol>
    <ul>
    <li>plain</li>
    <li>simple</li>
    </ul>
    ");
}

#[test]
fn test_snapshot_blockquote() {
    let input = "> Quoted\n>> deeper\n> back out";
    let output = render(input);
    insta::assert_snapshot!(output, @r"
    <div>
    Quoted
    deeper
    back out
    </div>
    ");
}

// =============================================================================
// Document Snapshots
// =============================================================================

#[test]
fn test_snapshot_document() {
    let input = r#"# Release notes
Short intro.
---
![logo](logo.png)
- faster
- smaller
[changelog]: https://example.com
> Thanks to everyone."#;
    let output = render(input);
    insta::assert_snapshot!(output, @r#"
    <h1>Release notes</h1><p>
    Short intro.
    </p>
    <div class="divider"></div>
    <img alt="logo" src="logo.png">
    <ul>
    <li>faster</li>
    <li>smaller</li>
    </ul>
    <div>
    Thanks to everyone.
    </div>
    "#);
}
