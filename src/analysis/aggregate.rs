//! Batch aggregation across messages
//!
//! Each message is scored with its sender as context. The input order is the
//! emotional arc order and is never re-sorted.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::scorer::{Analysis, DimensionScores, Scorer, dominant, round2};
use crate::error::{TextureError, TextureResult};

const UNKNOWN_SENDER: &str = "UNKNOWN";
const UNKNOWN_TIMESTAMP: &str = "unknown";

/// A message supplied by a message source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub sender: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl Message {
    pub fn new(content: &str, sender: &str) -> Self {
        Self {
            content: Some(content.to_string()),
            sender: Some(sender.to_string()),
            timestamp: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: &str) -> Self {
        self.timestamp = Some(timestamp.to_string());
        self
    }

    pub fn sender_or_unknown(&self) -> &str {
        self.sender.as_deref().unwrap_or(UNKNOWN_SENDER)
    }
}

/// One analyzed message in a batch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageAnalysis {
    #[serde(flatten)]
    pub analysis: Analysis,
    pub sender: String,
    pub message_timestamp: String,
}

/// One point on the emotional arc
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArcPoint {
    pub sender: String,
    pub dominant: String,
    pub intensity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SenderStats {
    pub count: usize,
    pub avg_intensity: f64,
}

/// Aggregate view over a batch of analyses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchResult {
    pub total_messages: usize,
    pub analyzed_messages: usize,
    pub average_scores: DimensionScores,
    pub dominant_overall: String,
    pub emotional_arc: Vec<ArcPoint>,
    pub by_sender: IndexMap<String, SenderStats>,
    pub individual_analyses: Vec<MessageAnalysis>,
}

impl BatchResult {
    /// Derive every aggregate from the analyzed messages
    pub fn from_analyses(total_messages: usize, analyses: Vec<MessageAnalysis>) -> Self {
        let mut totals: IndexMap<String, (f64, usize)> = IndexMap::new();
        for item in &analyses {
            for (name, score) in &item.analysis.dimension_scores {
                let entry = totals.entry(name.clone()).or_insert((0.0, 0));
                entry.0 += score;
                entry.1 += 1;
            }
        }

        let average_scores: DimensionScores = totals
            .into_iter()
            .map(|(name, (sum, count))| (name, round2(sum / count as f64)))
            .collect();

        let dominant_overall = dominant(&average_scores).0;

        let emotional_arc = analyses
            .iter()
            .map(|item| ArcPoint {
                sender: item.sender.clone(),
                dominant: item.analysis.dominant_emotion.clone(),
                intensity: item.analysis.overall_intensity,
            })
            .collect();

        let mut grouped: IndexMap<String, (usize, f64)> = IndexMap::new();
        for item in &analyses {
            let entry = grouped.entry(item.sender.clone()).or_insert((0, 0.0));
            entry.0 += 1;
            entry.1 += item.analysis.overall_intensity;
        }
        let by_sender = grouped
            .into_iter()
            .map(|(sender, (count, sum))| {
                (
                    sender,
                    SenderStats {
                        count,
                        avg_intensity: round2(sum / count as f64),
                    },
                )
            })
            .collect();

        Self {
            total_messages,
            analyzed_messages: analyses.len(),
            average_scores,
            dominant_overall,
            emotional_arc,
            by_sender,
            individual_analyses: analyses,
        }
    }
}

/// Score a batch of messages, skipping those with empty content
pub fn aggregate_messages(scorer: &Scorer<'_>, messages: &[Message]) -> TextureResult<BatchResult> {
    if messages.is_empty() {
        return Err(TextureError::InvalidInput("Messages list cannot be empty".to_string()));
    }

    let mut analyses = Vec::with_capacity(messages.len());
    for message in messages {
        let Some(content) = message.content.as_deref().filter(|c| !c.is_empty()) else {
            log::debug!("Skipping empty message from {}", message.sender_or_unknown());
            continue;
        };

        let sender = message.sender_or_unknown();
        let analysis = scorer.score(content, Some(sender))?;
        analyses.push(MessageAnalysis {
            analysis,
            sender: sender.to_string(),
            message_timestamp: message
                .timestamp
                .clone()
                .unwrap_or_else(|| UNKNOWN_TIMESTAMP.to_string()),
        });
    }

    log::info!("Analyzed {} of {} messages", analyses.len(), messages.len());
    Ok(BatchResult::from_analyses(messages.len(), analyses))
}
