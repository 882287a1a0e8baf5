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
mod inline;
mod line;
pub use inline::InlineRewriter;
pub use line::LineParser;

/// Generic for parsing markdown to html
pub trait MarkdownParser {
    /// Returns HTML parsed from the input `markdown`
    ///
    /// # Arguments
    ///
    /// * `markdown`: Input markdown (headings, lists, paragraphs and inline directives)
    fn parse_to_html(&mut self, markdown: &str) -> String;
}
