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
use crate::markdown::{LineParser, MarkdownParser};
use anyhow::Context;
use std::{fs, path::Path};

/// Converts the markdown file ``markdown_file`` and writes the result to
/// ``html_file``, replacing its previous contents.
pub fn builder(markdown_file: &str, html_file: &str) -> anyhow::Result<()> {
    builder_with_fs(markdown_file, html_file, std_read_file, std_write_file)
}

fn std_read_file(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("Could not read {}", path.display()))
}

fn std_write_file(path: &Path, content: &str) -> anyhow::Result<()> {
    fs::write(path, content).with_context(|| format!("Could not write {}", path.display()))
}

/// Converts ``markdown_file`` to ``html_file`` using the given file accessors
///
/// The source is read completely before anything is written.
pub fn builder_with_fs<ReadFile, WriteFile>(
    markdown_file: &str,
    html_file: &str,
    fs_read_file: ReadFile,
    fs_write_file: WriteFile,
) -> anyhow::Result<()>
where
    ReadFile: Fn(&Path) -> anyhow::Result<String>,
    WriteFile: Fn(&Path, &str) -> anyhow::Result<()>,
{
    log::debug!("Processing file {}", markdown_file);

    let markdown = fs_read_file(Path::new(markdown_file))?;
    let html = LineParser::default().parse_to_html(markdown.as_str());

    fs_write_file(Path::new(html_file), html.as_str())?;

    log::debug!("Wrote {} bytes to {}", html.len(), html_file);

    Ok(())
}
