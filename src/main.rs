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
mod builder;
mod markdown;

#[cfg(test)]
mod tests;

use log::LevelFilter;
use simplelog::{CombinedLogger, TermLogger, TerminalMode};

use std::{path::Path, process::exit};

use clap::{error::ErrorKind, Parser};

/// Program to convert a markdown file to html
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None, trailing_var_arg = true)]
struct Args {
    /// Markdown file to convert
    #[clap(value_parser, allow_hyphen_values = true)]
    markdown_file: String,

    /// Html file to write, existing contents are replaced
    #[clap(value_parser, allow_hyphen_values = true)]
    html_file: String,

    /// Additional arguments are ignored
    #[clap(value_parser, hide = true, allow_hyphen_values = true)]
    ignored: Vec<String>,

    #[clap(short, long, value_parser, default_value_t = false)]
    verbose: bool,
}

fn print_usage_and_exit() -> ! {
    eprintln!("Usage: markdown2html README.md README.html");
    exit(1);
}

fn print_missing_file_and_exit(file: &str) -> ! {
    eprintln!("Missing {}", file);
    exit(1);
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => print_usage_and_exit(),
        },
    };

    let level_filter = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    CombinedLogger::init(vec![TermLogger::new(
        level_filter,
        simplelog::Config::default(),
        TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )])
    .expect("Failed initializing logger");

    if !args.ignored.is_empty() {
        log::debug!("Ignoring additional arguments: {:?}", args.ignored);
    }

    if !Path::new(&args.markdown_file).exists() {
        print_missing_file_and_exit(&args.markdown_file);
    }

    if let Err(err) = builder::builder(&args.markdown_file, &args.html_file) {
        log::error!("Converting {} failed: {:#}", args.markdown_file, err);
        exit(1);
    }

    log::debug!("Converted {} to {}", args.markdown_file, args.html_file);
}
