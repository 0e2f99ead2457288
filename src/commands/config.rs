use colored::*;
use eyre::Result;

use super::emit;
use crate::cli::{ConfigAction, OutputFormat};
use crate::config::Config;

pub fn run(action: ConfigAction, config: &Config) -> Result<()> {
    match action {
        ConfigAction::Show { format } => show(OutputFormat::resolve(format), config),
    }
}

fn show(format: OutputFormat, config: &Config) -> Result<()> {
    if format == OutputFormat::Markdown {
        println!("{}", show_markdown(config)?);
        return Ok(());
    }
    emit(config, format, || show_text(config), String::new)
}

fn show_text(config: &Config) -> String {
    let store_path = config
        .store_path(None)
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not configured)".to_string());
    let max_chars = config
        .limits
        .max_text_chars
        .map(|n| n.to_string())
        .unwrap_or_else(|| "(unlimited)".to_string());

    let mut out = String::new();
    out.push_str(&format!("{}\n\n", "Texture Configuration".bold()));
    out.push_str(&format!("log_level: {}\n\n", config.log_level.as_filter()));
    out.push_str(&format!("{}:\n", "store".cyan()));
    out.push_str(&format!("  path: {}\n", store_path));
    out.push_str(&format!("  limit: {}\n\n", config.store.limit));
    out.push_str(&format!("{}:\n", "limits".cyan()));
    out.push_str(&format!("  max_text_chars: {}", max_chars));
    out
}

fn show_markdown(config: &Config) -> Result<String> {
    let yaml = serde_yaml::to_string(config)?;
    Ok(format!("# Texture Configuration\n\n```yaml\n{}```", yaml))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_show_text() {
        let mut config = Config::default();
        assert!(show_text(&config).contains("(not configured)"));

        config.store.path = Some(PathBuf::from("/data/comms.db"));
        config.limits.max_text_chars = Some(4096);
        let text = show_text(&config);
        assert!(text.contains("path: /data/comms.db"));
        assert!(text.contains("max_text_chars: 4096"));
    }

    #[test]
    fn test_show_markdown() {
        let md = show_markdown(&Config::default()).unwrap();
        assert!(md.starts_with("# Texture Configuration"));
        assert!(md.contains("limit: 100"));
    }
}
