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
use md5::{Digest, Md5};
use regex::{Captures, Regex};

/// Rewrites the inline markup of a single html line.
///
/// The passes run in a fixed order, each one on the result of the previous:
///
/// 1. ``**text**`` becomes ``<b>text</b>``
/// 2. ``__text__`` becomes ``<em>text</em>``
/// 3. ``[[text]]`` becomes the lowercase hex MD5 digest of ``text``
/// 4. ``((text))`` becomes ``text`` without any ``c`` or ``C``
pub struct InlineRewriter {
    bold: Regex,
    emphasis: Regex,
    hash: Regex,
    strip: Regex,
}

impl InlineRewriter {
    pub fn new() -> Self {
        // All patterns are constant, compiling them can't fail
        InlineRewriter {
            bold: Regex::new(r"\*\*(.+?)\*\*").unwrap(),
            emphasis: Regex::new(r"__(.+?)__").unwrap(),
            hash: Regex::new(r"\[\[(.+?)\]\]").unwrap(),
            strip: Regex::new(r"\(\((.+?)\)\)").unwrap(),
        }
    }

    pub fn rewrite(&self, line: &str) -> String {
        let line = self.bold.replace_all(line, "<b>$1</b>");
        let line = self.emphasis.replace_all(&line, "<em>$1</em>");
        let line = self
            .hash
            .replace_all(&line, |caps: &Captures| md5_hex(&caps[1]));
        let line = self
            .strip
            .replace_all(&line, |caps: &Captures| strip_c(&caps[1]));

        line.into_owned()
    }
}

impl Default for InlineRewriter {
    fn default() -> Self {
        Self::new()
    }
}

fn md5_hex(content: &str) -> String {
    format!("{:x}", Md5::digest(content.as_bytes()))
}

fn strip_c(content: &str) -> String {
    content.chars().filter(|c| !matches!(c, 'c' | 'C')).collect()
}
