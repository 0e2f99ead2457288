use eyre::Result;

use super::{emit, read_input};
use crate::analysis::Scorer;
use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::TextureError;
use crate::report;

pub fn run(text: Option<String>, context: Option<String>, format: OutputFormat, config: &Config) -> Result<()> {
    let text = match text {
        Some(t) => t,
        None => read_input(None)?.trim_end_matches(['\n', '\r']).to_string(),
    };

    if text.is_empty() {
        return Err(TextureError::InvalidInput("No text provided. Pass TEXT or pipe it to stdin.".to_string()).into());
    }

    let scorer = Scorer::default().with_max_chars(config.limits.max_text_chars);
    let analysis = scorer.score(&text, context.as_deref())?;

    log::info!(
        "Analyzed {} words: {} ({})",
        analysis.word_count,
        analysis.dominant_emotion,
        analysis.intensity_level
    );

    emit(
        &analysis,
        format,
        || report::analysis_text(&analysis),
        || report::analysis_markdown(&analysis),
    )
}
