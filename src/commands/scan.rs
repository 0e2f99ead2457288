use eyre::Result;
use std::path::PathBuf;

use super::emit;
use crate::analysis::Scorer;
use crate::cli::OutputFormat;
use crate::config::Config;
use crate::report;
use crate::store::{MessageStore, ScanOutcome};

pub fn run(
    db_path: Option<PathBuf>,
    limit: Option<usize>,
    sender: Option<String>,
    format: OutputFormat,
    config: &Config,
) -> Result<()> {
    let store = MessageStore::open(config.store_path(db_path.as_deref()))?;
    let limit = limit.unwrap_or(config.store.limit);
    let scorer = Scorer::default().with_max_chars(config.limits.max_text_chars);

    log::info!("Scanning {} (limit {}, sender {:?})", store.path().display(), limit, sender);

    let outcome = store.scan(&scorer, limit, sender.as_deref())?;

    match &outcome {
        ScanOutcome::NoMessages(none) => emit(
            &outcome,
            format,
            || report::no_messages_text(none),
            || format!("# Database Scan Results\n\n{}", none.message),
        ),
        ScanOutcome::Analyzed(result) => emit(
            &outcome,
            format,
            || report::batch_text(result),
            || report::batch_markdown(result),
        ),
    }
}
