use eyre::{Context, Result};
use std::path::PathBuf;

use super::{emit, read_input};
use crate::analysis::{Message, Scorer, aggregate_messages};
use crate::cli::OutputFormat;
use crate::config::Config;
use crate::report;

pub fn run(file: Option<PathBuf>, format: OutputFormat, config: &Config) -> Result<()> {
    let input = read_input(file.as_deref())?;
    let messages: Vec<Message> = if input.trim().is_empty() {
        Vec::new()
    } else {
        serde_json::from_str(&input).context("Expected a JSON array of messages")?
    };

    let scorer = Scorer::default().with_max_chars(config.limits.max_text_chars);
    let result = aggregate_messages(&scorer, &messages)?;

    emit(
        &result,
        format,
        || report::batch_text(&result),
        || report::batch_markdown(&result),
    )
}
