/*
 *  markdown2html convert a markdown file to html
 *  Copyright (C) 2022 Fionn Langhans
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  You should have received a copy of the GNU General Public License
 */
use super::{InlineRewriter, MarkdownParser};

/// Category of a single markdown source line
#[derive(PartialEq, Eq, Debug)]
pub enum Line<'a> {
    Heading(/* level: */ usize, /* text: */ &'a str),
    UnorderedItem(/* text: */ &'a str),
    OrderedItem(/* text: */ &'a str),
    Paragraph(/* text: */ &'a str),
}

/// Trims whitespace, counting the file, group, record and unit separators
/// (``\x1c`` to ``\x1f``) as whitespace too.
fn trim(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
}

/// Classifies a source line (without its line ending).
///
/// A heading's text starts one character after the leading ``#`` run, so
/// ``#Title`` has the text ``itle``. Lines starting with ``* `` are items of
/// the *ordered* list.
pub fn classify(line: &str) -> Line<'_> {
    let level = line.len() - line.trim_start_matches('#').len();

    if level > 0 {
        let rest = &line[level..];
        let skip = rest.chars().next().map_or(0, char::len_utf8);

        Line::Heading(level, trim(&rest[skip..]))
    } else if let Some(item) = line.strip_prefix("- ") {
        Line::UnorderedItem(trim(item))
    } else if let Some(item) = line.strip_prefix("* ") {
        Line::OrderedItem(trim(item))
    } else {
        Line::Paragraph(trim(line))
    }
}

/// Splits ``markdown`` into lines. ``\n``, ``\r\n`` and ``\r`` all end a line,
/// a final line ending doesn't start another (empty) line.
pub fn source_lines(markdown: &str) -> Vec<&str> {
    let bytes = markdown.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&markdown[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&markdown[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }

    if start < markdown.len() {
        lines.push(&markdown[start..]);
    }

    lines
}

/// Line based markdown to html converter
///
/// Headings are emitted as they are found. All list items are collected and
/// written afterwards as one ``<ul>`` and one ``<ol>`` block, followed by the
/// paragraphs. Every resulting line goes through the [`InlineRewriter`].
pub struct LineParser {
    rewriter: InlineRewriter,
}

impl LineParser {
    /// Returns the html lines for ``markdown`` in output order
    pub fn html_lines(&self, markdown: &str) -> Vec<String> {
        let mut html_lines = Vec::new();
        let mut unordered_list = Vec::new();
        let mut ordered_list = Vec::new();
        let mut paragraphs = Vec::new();

        for line in source_lines(markdown) {
            match classify(line) {
                Line::Heading(level, text) => {
                    html_lines.push(format!("<h{}>{}</h{}>", level, text, level))
                }
                Line::UnorderedItem(text) => unordered_list.push(format!("<li>{}</li>", text)),
                Line::OrderedItem(text) => ordered_list.push(format!("<li>{}</li>", text)),
                Line::Paragraph(text) => paragraphs.push(text),
            }
        }

        log::debug!(
            "Classified {} headings, {} unordered items, {} ordered items, {} paragraphs",
            html_lines.len(),
            unordered_list.len(),
            ordered_list.len(),
            paragraphs.len()
        );

        push_list(&mut html_lines, "ul", unordered_list);
        push_list(&mut html_lines, "ol", ordered_list);

        for paragraph in paragraphs {
            html_lines.push(format!("<p>{}</p>", paragraph.replace('\n', "<br />")));
        }

        html_lines
            .iter()
            .map(|line| self.rewriter.rewrite(line))
            .collect()
    }
}

fn push_list(html_lines: &mut Vec<String>, tag: &str, items: Vec<String>) {
    if items.is_empty() {
        return;
    }

    html_lines.push(format!("<{}>", tag));
    html_lines.extend(items.into_iter().map(|item| format!("\t{}", item)));
    html_lines.push(format!("</{}>", tag));
}

impl Default for LineParser {
    fn default() -> Self {
        LineParser {
            rewriter: InlineRewriter::new(),
        }
    }
}

impl MarkdownParser for LineParser {
    fn parse_to_html(&mut self, markdown: &str) -> String {
        self.html_lines(markdown).join("\n")
    }
}
