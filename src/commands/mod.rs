use eyre::{Context, Result};
use serde::Serialize;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::Path;

use crate::cli::OutputFormat;

pub mod analyze;
pub mod batch;
pub mod completions;
pub mod config;
pub mod dimensions;
pub mod profile;
pub mod scan;

/// Print a record in the chosen format
fn emit<T, FT, FM>(value: &T, format: OutputFormat, text: FT, markdown: FM) -> Result<()>
where
    T: Serialize + ?Sized,
    FT: FnOnce() -> String,
    FM: FnOnce() -> String,
{
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(value)?),
        OutputFormat::Text => println!("{}", text()),
        OutputFormat::Markdown => println!("{}", markdown()),
    }
    Ok(())
}

/// Read input from a file, or from stdin when it is not a terminal
fn read_input(file: Option<&Path>) -> Result<String> {
    if let Some(path) = file {
        return fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()));
    }

    let mut buffer = String::new();
    if !io::stdin().is_terminal() {
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
    }
    Ok(buffer)
}
