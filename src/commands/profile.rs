use eyre::Result;
use std::path::PathBuf;

use super::emit;
use crate::analysis::profile::ProfileSummary;
use crate::analysis::{Message, ProfileTracker, Scorer};
use crate::cli::OutputFormat;
use crate::config::Config;
use crate::report;
use crate::store::MessageStore;

pub fn run(
    db_path: Option<PathBuf>,
    limit: Option<usize>,
    agent: Option<String>,
    format: OutputFormat,
    config: &Config,
) -> Result<()> {
    let store = MessageStore::open(config.store_path(db_path.as_deref()))?;
    let limit = limit.unwrap_or(config.store.limit);
    let scorer = Scorer::default().with_max_chars(config.limits.max_text_chars);

    // Oldest first so each arc reads forward in time
    let mut messages = store.fetch(limit, agent.as_deref())?;
    messages.reverse();

    let tracker = build_profiles(&scorer, &messages)?;
    log::info!("Built {} emotional profiles from {} messages", tracker.len(), messages.len());

    let summaries: Vec<ProfileSummary<'_>> = match agent.as_deref() {
        Some(name) => vec![tracker.profile(name)?.summary()],
        None => tracker.profiles().map(|p| p.summary()).collect(),
    };

    emit(
        &summaries,
        format,
        || render_all(&summaries, report::profile_text),
        || render_all(&summaries, report::profile_markdown),
    )
}

/// Record every non-empty message under its sender
fn build_profiles(scorer: &Scorer<'_>, messages: &[Message]) -> Result<ProfileTracker> {
    let mut tracker = ProfileTracker::new();
    for message in messages {
        let Some(content) = message.content.as_deref().filter(|c| !c.is_empty()) else {
            continue;
        };
        let sender = message.sender_or_unknown();
        let analysis = scorer.score(content, Some(sender))?;
        tracker.record_analysis(sender, analysis);
    }
    Ok(tracker)
}

fn render_all(summaries: &[ProfileSummary<'_>], render: fn(&ProfileSummary<'_>) -> String) -> String {
    if summaries.is_empty() {
        return "No messages found matching criteria".to_string();
    }
    summaries.iter().map(render).collect::<Vec<_>>().join("\n")
}
