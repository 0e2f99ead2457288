//! Per-agent emotional profiles built over time
//!
//! Profiles live for the process lifetime only and grow without a cap.
//! Recording needs `&mut ProfileTracker`, so there is one writer at a time.

use chrono::{DateTime, Local};
use indexmap::IndexMap;
use serde::Serialize;

use super::scorer::{Analysis, DimensionScores, round2};
use crate::error::{TextureError, TextureResult};

/// One analysis as seen on an agent's arc
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArcSnapshot<'a> {
    pub timestamp: DateTime<Local>,
    pub dominant_emotion: &'a str,
    pub overall_intensity: f64,
    pub dimension_scores: &'a DimensionScores,
}

/// Serializable view of a profile
#[derive(Debug, Clone, Serialize)]
pub struct ProfileSummary<'a> {
    pub agent_name: &'a str,
    pub created_at: DateTime<Local>,
    pub last_updated: DateTime<Local>,
    pub total_analyses: usize,
    pub dominant_patterns: IndexMap<String, usize>,
    pub average_profile: IndexMap<String, f64>,
    pub emotional_arc: Vec<ArcSnapshot<'a>>,
}

/// An agent's append-only analysis history
#[derive(Debug, Clone)]
pub struct Profile {
    agent_name: String,
    created_at: DateTime<Local>,
    last_updated: DateTime<Local>,
    analyses: Vec<Analysis>,
}

impl Profile {
    pub fn new(agent_name: &str) -> Self {
        let now = Local::now();
        Self {
            agent_name: agent_name.to_string(),
            created_at: now,
            last_updated: now,
            analyses: Vec::new(),
        }
    }

    pub fn agent_name(&self) -> &str {
        &self.agent_name
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    pub fn last_updated(&self) -> DateTime<Local> {
        self.last_updated
    }

    pub fn analyses(&self) -> &[Analysis] {
        &self.analyses
    }

    pub fn add_analysis(&mut self, analysis: Analysis) {
        self.analyses.push(analysis);
        self.last_updated = Local::now();
    }

    /// Snapshots in recording order; call again to restart
    pub fn arc(&self) -> impl Iterator<Item = ArcSnapshot<'_>> + Clone + '_ {
        self.analyses.iter().map(|a| ArcSnapshot {
            timestamp: a.timestamp,
            dominant_emotion: &a.dominant_emotion,
            overall_intensity: a.overall_intensity,
            dimension_scores: &a.dimension_scores,
        })
    }

    /// How often each dimension was dominant, most frequent first.
    /// Equal counts keep the order in which the dimension was first seen.
    pub fn dominant_frequency(&self) -> Vec<(String, usize)> {
        let mut counts: IndexMap<&str, usize> = IndexMap::new();
        for analysis in &self.analyses {
            *counts.entry(analysis.dominant_emotion.as_str()).or_insert(0) += 1;
        }

        let mut frequency: Vec<(String, usize)> = counts.into_iter().map(|(d, c)| (d.to_string(), c)).collect();
        frequency.sort_by(|a, b| b.1.cmp(&a.1));
        frequency
    }

    /// Mean score per dimension, highest first
    pub fn average_profile(&self) -> Vec<(String, f64)> {
        let mut totals: IndexMap<&str, (f64, usize)> = IndexMap::new();
        for analysis in &self.analyses {
            for (name, score) in &analysis.dimension_scores {
                let entry = totals.entry(name.as_str()).or_insert((0.0, 0));
                entry.0 += score;
                entry.1 += 1;
            }
        }

        let mut averages: Vec<(String, f64)> = totals
            .into_iter()
            .map(|(name, (sum, count))| (name.to_string(), round2(sum / count as f64)))
            .collect();
        averages.sort_by(|a, b| b.1.total_cmp(&a.1));
        averages
    }

    pub fn summary(&self) -> ProfileSummary<'_> {
        ProfileSummary {
            agent_name: &self.agent_name,
            created_at: self.created_at,
            last_updated: self.last_updated,
            total_analyses: self.analyses.len(),
            dominant_patterns: self.dominant_frequency().into_iter().collect(),
            average_profile: self.average_profile().into_iter().collect(),
            emotional_arc: self.arc().collect(),
        }
    }
}

/// Profiles keyed by agent name
#[derive(Debug, Clone, Default)]
pub struct ProfileTracker {
    profiles: IndexMap<String, Profile>,
}

impl ProfileTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an analysis, creating the agent's profile on first use
    pub fn record_analysis(&mut self, agent_name: &str, analysis: Analysis) -> &Profile {
        let profile = self.profiles.entry(agent_name.to_string()).or_insert_with(|| {
            log::debug!("Creating emotional profile for {}", agent_name);
            Profile::new(agent_name)
        });
        profile.add_analysis(analysis);
        profile
    }

    pub fn get(&self, agent_name: &str) -> Option<&Profile> {
        self.profiles.get(agent_name)
    }

    /// Like `get`, but a missing agent is an error
    pub fn profile(&self, agent_name: &str) -> TextureResult<&Profile> {
        self.get(agent_name)
            .ok_or_else(|| TextureError::NotFound(format!("No emotional profile for agent: {}", agent_name)))
    }

    pub fn arc(&self, agent_name: &str) -> TextureResult<impl Iterator<Item = ArcSnapshot<'_>> + Clone + '_> {
        Ok(self.profile(agent_name)?.arc())
    }

    pub fn dominant_frequency(&self, agent_name: &str) -> TextureResult<Vec<(String, usize)>> {
        Ok(self.profile(agent_name)?.dominant_frequency())
    }

    pub fn average_profile(&self, agent_name: &str) -> TextureResult<Vec<(String, f64)>> {
        Ok(self.profile(agent_name)?.average_profile())
    }

    /// Agent names in the order their profiles were created
    pub fn agents(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(|k| k.as_str())
    }

    pub fn profiles(&self) -> impl Iterator<Item = &Profile> {
        self.profiles.values()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::scorer::{IntensityLevel, Scorer};

    fn analysis(dominant: &str, scores: &[(&str, f64)]) -> Analysis {
        let dimension_scores: DimensionScores = scores.iter().map(|(n, s)| (n.to_string(), *s)).collect();
        Analysis {
            timestamp: Local::now(),
            text_length: 0,
            word_count: 0,
            context: None,
            dimension_matches: IndexMap::new(),
            dominant_emotion: dominant.to_string(),
            dominant_score: scores.iter().map(|(_, s)| *s).fold(0.0, f64::max),
            overall_intensity: 1.0,
            intensity_level: IntensityLevel::Moderate,
            intensity_modifier: 1.0,
            emotional_signature: String::new(),
            dimension_scores,
        }
    }

    #[test]
    fn test_profile_initialization() {
        let profile = Profile::new("FORGE");
        assert_eq!(profile.agent_name(), "FORGE");
        assert!(profile.analyses().is_empty());
        assert_eq!(profile.created_at(), profile.last_updated());
    }

    #[test]
    fn test_add_analysis_updates_timestamp() {
        let mut profile = Profile::new("FORGE");
        let created = profile.created_at();
        profile.add_analysis(analysis("JOY", &[("JOY", 5.0)]));
        assert_eq!(profile.analyses().len(), 1);
        assert!(profile.last_updated() >= created);
    }

    #[test]
    fn test_arc_in_insertion_order_and_restartable() {
        let mut profile = Profile::new("FORGE");
        profile.add_analysis(analysis("JOY", &[("JOY", 5.0)]));
        profile.add_analysis(analysis("PEACE", &[("PEACE", 3.0)]));

        let first: Vec<_> = profile.arc().map(|s| s.dominant_emotion).collect();
        let second: Vec<_> = profile.arc().map(|s| s.dominant_emotion).collect();
        assert_eq!(first, vec!["JOY", "PEACE"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_dominant_frequency() {
        let mut profile = Profile::new("FORGE");
        for dominant in ["WARMTH", "JOY", "PEACE", "JOY", "PEACE", "JOY"] {
            profile.add_analysis(analysis(dominant, &[(dominant, 1.0)]));
        }
        assert_eq!(
            profile.dominant_frequency(),
            vec![
                ("JOY".to_string(), 3),
                ("PEACE".to_string(), 2),
                ("WARMTH".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_dominant_frequency_ties_keep_first_seen() {
        let mut profile = Profile::new("FORGE");
        for dominant in ["FEAR", "JOY", "JOY", "FEAR"] {
            profile.add_analysis(analysis(dominant, &[(dominant, 1.0)]));
        }
        let order: Vec<_> = profile.dominant_frequency().into_iter().map(|(d, _)| d).collect();
        assert_eq!(order, vec!["FEAR", "JOY"]);
    }

    #[test]
    fn test_average_profile() {
        let mut profile = Profile::new("FORGE");
        profile.add_analysis(analysis("JOY", &[("JOY", 4.0), ("WARMTH", 2.0)]));
        profile.add_analysis(analysis("JOY", &[("JOY", 6.0), ("WARMTH", 4.0)]));
        assert_eq!(
            profile.average_profile(),
            vec![("JOY".to_string(), 5.0), ("WARMTH".to_string(), 3.0)]
        );
    }

    #[test]
    fn test_average_profile_empty() {
        assert!(Profile::new("FORGE").average_profile().is_empty());
    }

    #[test]
    fn test_tracker_creates_lazily() {
        let mut tracker = ProfileTracker::new();
        assert!(tracker.get("FORGE").is_none());

        let profile = tracker.record_analysis("FORGE", analysis("JOY", &[("JOY", 1.0)]));
        assert_eq!(profile.agent_name(), "FORGE");
        assert_eq!(profile.analyses().len(), 1);

        tracker.record_analysis("FORGE", analysis("PEACE", &[("PEACE", 1.0)]));
        assert_eq!(tracker.len(), 1);
        assert_eq!(tracker.get("FORGE").unwrap().analyses().len(), 2);
    }

    #[test]
    fn test_tracker_unknown_agent() {
        let tracker = ProfileTracker::new();
        assert!(matches!(tracker.profile("NOBODY"), Err(TextureError::NotFound(_))));
        assert!(matches!(tracker.dominant_frequency("NOBODY"), Err(TextureError::NotFound(_))));
        assert!(matches!(tracker.average_profile("NOBODY"), Err(TextureError::NotFound(_))));
        assert!(tracker.arc("NOBODY").is_err());
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_tracker_queries() {
        let mut tracker = ProfileTracker::new();
        let scorer = Scorer::default();
        tracker.record_analysis("CLIO", scorer.score("I am so happy today", None).unwrap());
        tracker.record_analysis("CLIO", scorer.score("I feel calm and peaceful", None).unwrap());
        tracker.record_analysis("FORGE", scorer.score("We must keep going", None).unwrap());

        let arc: Vec<_> = tracker.arc("CLIO").unwrap().map(|s| s.dominant_emotion).collect();
        assert_eq!(arc, vec!["JOY", "PEACE"]);
        assert_eq!(tracker.dominant_frequency("FORGE").unwrap(), vec![("DETERMINATION".to_string(), 1)]);
        assert_eq!(tracker.average_profile("CLIO").unwrap().len(), 10);
        assert_eq!(tracker.agents().collect::<Vec<_>>(), vec!["CLIO", "FORGE"]);
    }

    #[test]
    fn test_summary() {
        let mut tracker = ProfileTracker::new();
        tracker.record_analysis("FORGE", analysis("JOY", &[("JOY", 2.0)]));
        let summary = tracker.get("FORGE").unwrap().summary();
        assert_eq!(summary.agent_name, "FORGE");
        assert_eq!(summary.total_analyses, 1);
        assert_eq!(summary.dominant_patterns["JOY"], 1);
        assert_eq!(summary.average_profile["JOY"], 2.0);
        assert_eq!(summary.emotional_arc.len(), 1);

        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["agent_name"], "FORGE");
        assert!(value.get("emotional_arc").is_some());
    }
}
