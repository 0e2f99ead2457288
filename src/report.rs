//! Text and Markdown renderers
//!
//! JSON and YAML come straight from serde; these produce the human-facing
//! layouts. Text output is colored when the terminal supports it.

use colored::*;

use crate::analysis::profile::ProfileSummary;
use crate::analysis::registry::DimensionInfo;
use crate::analysis::scorer::ranked;
use crate::analysis::{Analysis, BatchResult};
use crate::store::NoMessages;

const RULE_WIDTH: usize = 60;

pub fn analysis_text(analysis: &Analysis) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    out.push_str(&format!("{}\n", rule));
    out.push_str(&format!("{}\n", "EMOTIONAL TEXTURE ANALYSIS".bold()));
    out.push_str(&format!("{}\n\n", rule));

    out.push_str(&format!("Timestamp: {}\n", analysis.timestamp.to_rfc3339()));
    out.push_str(&format!(
        "Text Length: {} chars, {} words\n",
        analysis.text_length, analysis.word_count
    ));
    out.push_str(&format!("Context: {}\n\n", analysis.context.as_deref().unwrap_or("none")));

    out.push_str(&format!("{}\n", "DOMINANT EMOTION:".cyan()));
    out.push_str(&format!(
        "  {} (score: {:.2})\n\n",
        analysis.dominant_emotion.green().bold(),
        analysis.dominant_score
    ));

    out.push_str(&format!(
        "Overall Intensity: {:.2} ({})\n",
        analysis.overall_intensity, analysis.intensity_level
    ));
    out.push_str(&format!("Intensity Modifier: {:.2}\n\n", analysis.intensity_modifier));

    out.push_str(&format!("{}\n", "EMOTIONAL SIGNATURE:".cyan()));
    out.push_str(&format!("  {}\n\n", analysis.emotional_signature));

    out.push_str(&format!("{}\n", "DIMENSION SCORES:".cyan()));
    for (name, score) in ranked(&analysis.dimension_scores) {
        let marker = if score > 0.0 { "[OK]".green() } else { "[  ]".dimmed() };
        out.push_str(&format!("  {} {}: {:.2}\n", marker, name, score));
    }

    out.push('\n');
    out.push_str(&rule);
    out
}

pub fn analysis_markdown(analysis: &Analysis) -> String {
    let mut md = String::new();

    md.push_str("# Emotional Texture Analysis\n\n");
    md.push_str(&format!("**Timestamp:** {}\n", analysis.timestamp.to_rfc3339()));
    md.push_str(&format!(
        "**Text Length:** {} chars, {} words\n",
        analysis.text_length, analysis.word_count
    ));
    md.push_str(&format!(
        "**Context:** {}\n\n",
        analysis.context.as_deref().unwrap_or("none")
    ));

    md.push_str("## Dominant Emotion\n\n");
    md.push_str(&format!(
        "**{}** (score: {:.2})\n\n",
        analysis.dominant_emotion, analysis.dominant_score
    ));

    md.push_str("## Intensity\n\n");
    md.push_str(&format!(
        "- **Overall:** {:.2} ({})\n",
        analysis.overall_intensity, analysis.intensity_level
    ));
    md.push_str(&format!("- **Modifier:** {:.2}\n\n", analysis.intensity_modifier));

    md.push_str("## Emotional Signature\n\n");
    md.push_str(&format!("`{}`\n\n", analysis.emotional_signature));

    md.push_str("## Dimension Scores\n\n");
    md.push_str("| Dimension | Score |\n");
    md.push_str("|-----------|-------|\n");
    for (name, score) in ranked(&analysis.dimension_scores) {
        let indicator = if score > 0.0 { "+" } else { " " };
        md.push_str(&format!("| {} {} | {:.2} |\n", indicator, name, score));
    }

    md
}

pub fn batch_text(result: &BatchResult) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Analyzed {} of {} messages\n",
        result.analyzed_messages, result.total_messages
    ));
    out.push_str(&format!("Dominant: {}\n\n", result.dominant_overall.green().bold()));

    out.push_str(&format!("{}\n", "Average Scores:".cyan()));
    for (name, score) in ranked(&result.average_scores) {
        out.push_str(&format!("  {}: {:.2}\n", name, score));
    }

    if !result.by_sender.is_empty() {
        out.push_str(&format!("\n{}\n", "By Sender:".cyan()));
        for (sender, stats) in &result.by_sender {
            out.push_str(&format!(
                "  {:15} {:>4} messages, avg intensity {:.2}\n",
                sender, stats.count, stats.avg_intensity
            ));
        }
    }

    if !result.emotional_arc.is_empty() {
        out.push_str(&format!("\n{}\n", "Emotional Arc:".cyan()));
        for (i, point) in result.emotional_arc.iter().enumerate() {
            out.push_str(&format!(
                "  {:>3}. {} → {} ({:.2})\n",
                i + 1,
                point.sender,
                point.dominant,
                point.intensity
            ));
        }
    }

    out
}

pub fn batch_markdown(result: &BatchResult) -> String {
    let mut md = String::new();

    md.push_str("# Database Scan Results\n\n");
    md.push_str(&format!("**Messages Analyzed:** {}\n", result.analyzed_messages));
    md.push_str(&format!("**Dominant Emotion:** {}\n\n", result.dominant_overall));

    md.push_str("## Average Scores\n\n");
    for (name, score) in &result.average_scores {
        md.push_str(&format!("- **{}:** {:.2}\n", name, score));
    }

    if !result.by_sender.is_empty() {
        md.push_str("\n## By Sender\n\n");
        md.push_str("| Sender | Messages | Avg Intensity |\n");
        md.push_str("|--------|----------|---------------|\n");
        for (sender, stats) in &result.by_sender {
            md.push_str(&format!("| {} | {} | {:.2} |\n", sender, stats.count, stats.avg_intensity));
        }
    }

    md
}

pub fn no_messages_text(outcome: &NoMessages) -> String {
    let sender = outcome.filter.sender.as_deref().unwrap_or("any");
    format!(
        "{} (sender: {}, limit: {})",
        outcome.message.yellow(),
        sender,
        outcome.filter.limit
    )
}

pub fn dimensions_text(dimensions: &[DimensionInfo]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "EMOTIONAL DIMENSIONS".bold()));
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push('\n');
    for dimension in dimensions {
        out.push_str(&format!("\n{}:\n", dimension.name.cyan()));
        out.push_str(&format!("  {}\n", dimension.description));
    }
    out
}

pub fn dimensions_markdown(dimensions: &[DimensionInfo]) -> String {
    let mut md = String::from("# Emotional Dimensions\n\n");
    for dimension in dimensions {
        md.push_str(&format!("## {}\n\n{}\n\n", dimension.name, dimension.description));
    }
    md
}

pub fn profile_text(summary: &ProfileSummary<'_>) -> String {
    let mut out = String::new();

    out.push_str(&format!("{} {}\n", "Emotional profile:".bold(), summary.agent_name.green()));
    out.push_str(&format!(
        "  {:14} {}\n",
        "Created:".dimmed(),
        summary.created_at.format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str(&format!(
        "  {:14} {}\n",
        "Updated:".dimmed(),
        summary.last_updated.format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str(&format!("  {:14} {}\n\n", "Analyses:".dimmed(), summary.total_analyses));

    out.push_str(&format!("{}\n", "Dominant Patterns:".cyan()));
    for (name, count) in &summary.dominant_patterns {
        out.push_str(&format!("  {:15} {:>4}\n", name, count));
    }

    out.push_str(&format!("\n{}\n", "Average Profile:".cyan()));
    for (name, score) in &summary.average_profile {
        out.push_str(&format!("  {:15} {:>8.2}\n", name, score));
    }

    out.push_str(&format!("\n{}\n", "Emotional Arc:".cyan()));
    for (i, snapshot) in summary.emotional_arc.iter().enumerate() {
        out.push_str(&format!(
            "  {:>3}. {} ({:.2})\n",
            i + 1,
            snapshot.dominant_emotion,
            snapshot.overall_intensity
        ));
    }

    out
}

pub fn profile_markdown(summary: &ProfileSummary<'_>) -> String {
    let mut md = String::new();

    md.push_str(&format!("# Emotional Profile: {}\n\n", summary.agent_name));
    md.push_str(&format!("**Created:** {}\n", summary.created_at.to_rfc3339()));
    md.push_str(&format!("**Last Updated:** {}\n", summary.last_updated.to_rfc3339()));
    md.push_str(&format!("**Total Analyses:** {}\n\n", summary.total_analyses));

    md.push_str("## Dominant Patterns\n\n");
    md.push_str("| Dimension | Count |\n");
    md.push_str("|-----------|-------|\n");
    for (name, count) in &summary.dominant_patterns {
        md.push_str(&format!("| {} | {} |\n", name, count));
    }

    md.push_str("\n## Average Profile\n\n");
    for (name, score) in &summary.average_profile {
        md.push_str(&format!("- **{}:** {:.2}\n", name, score));
    }

    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::aggregate::{Message, aggregate_messages};
    use crate::analysis::profile::ProfileTracker;
    use crate::analysis::registry::Registry;
    use crate::analysis::scorer::Scorer;

    fn sample() -> Analysis {
        Scorer::default()
            .score("I love my warm family and feel happy", Some("FORGE"))
            .unwrap()
    }

    #[test]
    fn test_analysis_text() {
        let output = analysis_text(&sample());
        assert!(output.contains("EMOTIONAL TEXTURE ANALYSIS"));
        assert!(output.contains("DOMINANT EMOTION"));
        assert!(output.contains("Context: FORGE"));
        assert!(output.contains("WARMTH: "));
    }

    #[test]
    fn test_analysis_markdown() {
        let output = analysis_markdown(&sample());
        assert!(output.starts_with("# Emotional Texture Analysis"));
        assert!(output.contains("| Dimension | Score |"));
        assert!(output.contains("| + WARMTH |"));
        assert!(output.contains("|   FEAR | 0.00 |"));
    }

    #[test]
    fn test_batch_renderers() {
        let messages = vec![Message::new("happy", "FORGE"), Message::new("calm", "CLIO")];
        let result = aggregate_messages(&Scorer::default(), &messages).unwrap();

        let text = batch_text(&result);
        assert!(text.contains("Analyzed 2 of 2 messages"));
        assert!(text.contains("FORGE"));

        let md = batch_markdown(&result);
        assert!(md.contains("**Messages Analyzed:** 2"));
        assert!(md.contains("- **JOY:** 50.00"));
    }

    #[test]
    fn test_dimensions_renderers() {
        let dimensions = Registry::global().list();
        assert!(dimensions_text(&dimensions).contains("DETERMINATION"));
        let md = dimensions_markdown(&dimensions);
        assert!(md.contains("## CURIOSITY"));
        assert_eq!(md.matches("## ").count(), 10);
    }

    #[test]
    fn test_profile_renderers() {
        let mut tracker = ProfileTracker::new();
        tracker.record_analysis("FORGE", sample());
        let summary = tracker.get("FORGE").unwrap().summary();

        let text = profile_text(&summary);
        assert!(text.contains("FORGE"));
        assert!(text.contains("Dominant Patterns"));

        let md = profile_markdown(&summary);
        assert!(md.starts_with("# Emotional Profile: FORGE"));
        assert!(md.contains("| WARMTH | 1 |"));
    }
}
