use crate::markdown::{InlineRewriter, LineParser, MarkdownParser};

fn to_html(markdown: &str) -> String {
    LineParser::default().parse_to_html(markdown)
}

#[test]
fn test_empty_input() {
    assert_eq!("", to_html(""));
}

#[test]
fn test_scenario() {
    let html = to_html("# Title\n- one\n- two\n* first\nHello **world**\n");

    assert_eq!(
        vec![
            "<h1>Title</h1>",
            "<ul>",
            "\t<li>one</li>",
            "\t<li>two</li>",
            "</ul>",
            "<ol>",
            "\t<li>first</li>",
            "</ol>",
            "<p>Hello <b>world</b></p>",
        ],
        html.split('\n').collect::<Vec<_>>()
    );
}

#[test]
fn test_heading_levels() {
    for level in 1..=6 {
        let markdown = format!("{}   Heading {}  \n", "#".repeat(level), level);
        assert_eq!(
            format!("<h{}>Heading {}</h{}>", level, level, level),
            to_html(&markdown)
        );
    }
}

#[test]
fn test_heading_skips_one_character() {
    assert_eq!("<h1>itle</h1>", to_html("#Title"));
    assert_eq!("<h2></h2>", to_html("##"));
}

#[test]
fn test_heading_inline_markup() {
    assert_eq!("<h2><b>Bold</b> and <em>em</em></h2>", to_html("## **Bold** and __em__"));
}

#[test]
fn test_lists_are_merged_after_headings() {
    let html = to_html("- a\nText\n# Late\n* x\n- b\n* y\n");

    assert_eq!(
        "<h1>Late</h1>\n<ul>\n\t<li>a</li>\n\t<li>b</li>\n</ul>\n<ol>\n\t<li>x</li>\n\t<li>y</li>\n</ol>\n<p>Text</p>",
        html
    );
}

#[test]
fn test_no_empty_lists() {
    assert_eq!("<ol>\n\t<li>only</li>\n</ol>", to_html("* only\n"));
    assert!(!to_html("plain\n").contains("<ul>"));
}

#[test]
fn test_list_marker_needs_space() {
    assert_eq!("<p>-not a list</p>\n<p>*neither</p>", to_html("-not a list\n*neither\n"));
}

#[test]
fn test_blank_lines_are_paragraphs() {
    assert_eq!("<p>one</p>\n<p></p>\n<p>two</p>", to_html("one\n\ntwo\n"));
}

#[test]
fn test_paragraphs_are_trimmed() {
    assert_eq!("<p>padded</p>", to_html("   padded \t\n"));
}

#[test]
fn test_line_endings() {
    let expected = "<h1>A</h1>\n<p>b</p>\n<p>c</p>";

    assert_eq!(expected, to_html("# A\nb\nc\n"));
    assert_eq!(expected, to_html("# A\r\nb\r\nc\r\n"));
    assert_eq!(expected, to_html("# A\rb\rc"));
}

#[test]
fn test_hash_directive() {
    assert_eq!("<p>900150983cd24fb0d6963f7d28e17f72</p>", to_html("[[abc]]"));
    assert_eq!(
        "\t<li>x 900150983cd24fb0d6963f7d28e17f72 y</li>",
        to_html("- x [[abc]] y").lines().nth(1).unwrap()
    );
}

#[test]
fn test_strip_directive() {
    assert_eq!("<p>ooa and hi</p>", to_html("((Cocoa)) and ((chi))"));
}

#[test]
fn test_rewriter_without_markers() {
    let rewriter = InlineRewriter::default();

    for line in ["<p>plain text</p>", "a * b _ c [ d ( e", "*single* _single_ [x] (y)"] {
        assert_eq!(line, rewriter.rewrite(line));
    }
}

#[test]
fn test_rewriter_non_greedy() {
    let rewriter = InlineRewriter::default();

    assert_eq!("<b>a</b> and <b>b</b>", rewriter.rewrite("**a** and **b**"));
    assert_eq!("<em>a</em>__", rewriter.rewrite("__a____"));
    assert_eq!("****", rewriter.rewrite("****"));
}

#[test]
fn test_rewriter_order() {
    let rewriter = InlineRewriter::default();

    // The hash is taken of the already rewritten bold markup
    assert_eq!(
        rewriter.rewrite("[[<b>x</b>]]"),
        rewriter.rewrite("[[**x**]]")
    );
    // Stripping happens last, after hashing
    assert_eq!("900150983d24fb0d6963f7d28e17f72", rewriter.rewrite("(([[abc]]))"));
}

#[test]
fn test_separator_characters_are_trimmed() {
    assert_eq!("<p>text</p>", to_html("\x1ctext\x1f\n"));
    assert_eq!("<h1>Title</h1>", to_html("# Title\x1d\n"));
    assert_eq!("<ul>\n\t<li>item</li>\n</ul>", to_html("- \x1eitem\u{a0}\n"));
}
