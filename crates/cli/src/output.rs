// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use clap::ValueEnum;
use serde::Serialize;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Write a value in the specified format
pub fn write<T, W>(out: &mut W, value: &T, format: OutputFormat) -> io::Result<()>
where
    T: Serialize + std::fmt::Display,
    W: Write,
{
    match format {
        OutputFormat::Text => writeln!(out, "{}", value),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
            writeln!(out, "{}", json)
        }
    }
}

/// Write a list of items
pub fn write_list<T, W>(out: &mut W, items: &[T], format: OutputFormat) -> io::Result<()>
where
    T: Serialize + std::fmt::Display,
    W: Write,
{
    match format {
        OutputFormat::Text => {
            for item in items {
                writeln!(out, "{}", item)?;
            }
            Ok(())
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(items).map_err(io::Error::other)?;
            writeln!(out, "{}", json)
        }
    }
}

/// Print a value to stdout in the specified format
pub fn print<T: Serialize + std::fmt::Display>(value: &T, format: OutputFormat) -> io::Result<()> {
    write(&mut io::stdout().lock(), value, format)
}

/// Print a list of items to stdout
pub fn print_list<T: Serialize + std::fmt::Display>(
    items: &[T],
    format: OutputFormat,
) -> io::Result<()> {
    write_list(&mut io::stdout().lock(), items, format)
}
