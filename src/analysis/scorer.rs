//! Single-text scoring
//!
//! Scores are match counts per 100 words, weighted per dimension, scaled by
//! an intensity modifier taken from amplifier and diminisher words.

use chrono::{DateTime, Local};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use super::registry::Registry;
use crate::error::{TextureError, TextureResult};

/// Modifier step per amplifier or diminisher match
const MODIFIER_STEP: f64 = 0.1;
const MODIFIER_MIN: f64 = 0.5;
const MODIFIER_MAX: f64 = 2.0;

/// Dimensions included in the emotional signature
const SIGNATURE_WIDTH: usize = 3;

/// Dimension name to score, in registry order
pub type DimensionScores = IndexMap<String, f64>;

/// Categorical overall intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntensityLevel {
    Subtle,
    Moderate,
    Strong,
    Intense,
}

impl IntensityLevel {
    /// Lower bounds are inclusive, upper bounds exclusive
    pub fn from_intensity(intensity: f64) -> Self {
        if intensity < 1.0 {
            IntensityLevel::Subtle
        } else if intensity < 3.0 {
            IntensityLevel::Moderate
        } else if intensity < 6.0 {
            IntensityLevel::Strong
        } else {
            IntensityLevel::Intense
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IntensityLevel::Subtle => "subtle",
            IntensityLevel::Moderate => "moderate",
            IntensityLevel::Strong => "strong",
            IntensityLevel::Intense => "intense",
        }
    }
}

impl std::fmt::Display for IntensityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of scoring one text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub timestamp: DateTime<Local>,
    pub text_length: usize,
    pub word_count: usize,
    pub context: Option<String>,
    pub dimension_scores: DimensionScores,
    pub dimension_matches: IndexMap<String, Vec<String>>,
    pub dominant_emotion: String,
    pub dominant_score: f64,
    pub overall_intensity: f64,
    pub intensity_level: IntensityLevel,
    pub intensity_modifier: f64,
    pub emotional_signature: String,
}

/// Scores text against a registry
#[derive(Debug, Clone, Copy)]
pub struct Scorer<'r> {
    registry: &'r Registry,
    max_chars: Option<usize>,
}

impl Default for Scorer<'static> {
    fn default() -> Self {
        Self::new(Registry::global())
    }
}

impl<'r> Scorer<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            max_chars: None,
        }
    }

    /// Reject texts longer than `max_chars` characters
    pub fn with_max_chars(mut self, max_chars: Option<usize>) -> Self {
        self.max_chars = max_chars;
        self
    }

    /// Score text, stamped with the current local time
    pub fn score(&self, text: &str, context: Option<&str>) -> TextureResult<Analysis> {
        self.score_at(text, context, Local::now())
    }

    /// Score text with an explicit timestamp
    pub fn score_at(&self, text: &str, context: Option<&str>, timestamp: DateTime<Local>) -> TextureResult<Analysis> {
        if text.is_empty() {
            return Err(TextureError::InvalidInput("Text must be a non-empty string".to_string()));
        }

        let text_length = text.chars().count();
        if let Some(max) = self.max_chars
            && text_length > max
        {
            return Err(TextureError::InvalidInput(format!(
                "Text is {} characters, limit is {}",
                text_length, max
            )));
        }

        let word_count = text.split_whitespace().count();

        let mut normalized = DimensionScores::with_capacity(self.registry.len());
        let mut dimension_matches = IndexMap::with_capacity(self.registry.len());

        for dimension in self.registry.dimensions() {
            let matches = dimension.find_matches(text);
            let raw = matches.len() as f64 * dimension.weight;
            let score = if word_count > 0 {
                raw / word_count as f64 * 100.0
            } else {
                0.0
            };

            normalized.insert(dimension.name.to_string(), round2(score));
            dimension_matches.insert(dimension.name.to_string(), unique(matches));
        }

        let modifier = self.intensity_modifier(text);

        let dimension_scores: DimensionScores = normalized
            .into_iter()
            .map(|(name, score)| (name, round2(score * modifier)))
            .collect();

        let (dominant_emotion, dominant_score) = dominant(&dimension_scores);

        let overall_intensity = if dimension_scores.is_empty() {
            0.0
        } else {
            round2(dimension_scores.values().sum::<f64>() / dimension_scores.len() as f64)
        };

        log::debug!(
            "Scored {} words: dominant={} intensity={} modifier={}",
            word_count,
            dominant_emotion,
            overall_intensity,
            modifier
        );

        Ok(Analysis {
            timestamp,
            text_length,
            word_count,
            context: context.map(|c| c.to_string()),
            emotional_signature: signature(&dimension_scores),
            dimension_scores,
            dimension_matches,
            dominant_emotion,
            dominant_score,
            overall_intensity,
            intensity_level: IntensityLevel::from_intensity(overall_intensity),
            intensity_modifier: round2(modifier),
        })
    }

    /// 1.0 plus 0.1 per amplifier minus 0.1 per diminisher, clamped to [0.5, 2.0]
    pub fn intensity_modifier(&self, text: &str) -> f64 {
        let amplifiers = self.registry.amplifier_count(text) as f64;
        let diminishers = self.registry.diminisher_count(text) as f64;
        let modifier = 1.0 + amplifiers * MODIFIER_STEP - diminishers * MODIFIER_STEP;
        modifier.clamp(MODIFIER_MIN, MODIFIER_MAX)
    }
}

/// Highest scoring dimension; the first in registry order wins ties
pub fn dominant(scores: &DimensionScores) -> (String, f64) {
    let mut best: Option<(&String, f64)> = None;
    for (name, &score) in scores {
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((name, score)),
        }
    }
    best.map(|(name, score)| (name.clone(), score))
        .unwrap_or_else(|| ("UNKNOWN".to_string(), 0.0))
}

/// Dimensions sorted by score descending, registry order breaking ties
pub fn ranked(scores: &DimensionScores) -> Vec<(&str, f64)> {
    let mut ranked: Vec<(&str, f64)> = scores.iter().map(|(n, &s)| (n.as_str(), s)).collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
}

/// Compact "DIM:score|DIM:score" of the top three non-zero dimensions
pub fn signature(scores: &DimensionScores) -> String {
    ranked(scores)
        .into_iter()
        .take(SIGNATURE_WIDTH)
        .filter(|(_, score)| *score > 0.0)
        .map(|(name, score)| format!("{}:{}", name, format_score(score)))
        .collect::<Vec<_>>()
        .join("|")
}

/// Render a score with at least one decimal place ("20.0", "16.67")
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{:.1}", score)
    } else {
        format!("{}", score)
    }
}

/// Round to two decimals, exact halves to even
pub fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

fn unique(matches: Vec<&str>) -> Vec<String> {
    matches
        .into_iter()
        .map(str::to_string)
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect()
}
