use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;

mod analysis;
mod cli;
mod commands;
mod config;
mod error;
mod report;
mod store;

use cli::{Cli, Commands, OutputFormat};
use config::{Config, LogLevel};

fn setup_logging(log_level: LogLevel) -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("texture")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("texture.log");

    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    // RUST_LOG env var takes precedence, otherwise use config log_level
    let from_env = std::env::var("RUST_LOG").is_ok();
    let mut builder = env_logger::Builder::new();
    if from_env {
        builder.parse_default_env();
    } else {
        builder.filter_level(log_level.to_level_filter());
    }

    builder.target(env_logger::Target::Pipe(target)).init();

    info!("Logging initialized, writing to: {}", log_file.display());
    info!(
        "Log level: {} (from {})",
        log_level.as_filter(),
        if from_env { "RUST_LOG env" } else { "config" }
    );
    Ok(())
}

fn run(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Analyze { text, context, format } => {
            commands::analyze::run(text, context, OutputFormat::resolve(format), &config)
        }
        Commands::Scan {
            db_path,
            limit,
            sender,
            format,
        } => commands::scan::run(db_path, limit, sender, OutputFormat::resolve(format), &config),
        Commands::Batch { file, format } => commands::batch::run(file, OutputFormat::resolve(format), &config),
        Commands::Profile {
            db_path,
            limit,
            agent,
            format,
        } => commands::profile::run(db_path, limit, agent, OutputFormat::resolve(format), &config),
        Commands::Dimensions { format } => commands::dimensions::run(OutputFormat::resolve(format)),
        Commands::Config { action } => commands::config::run(action, &config),
        Commands::Completions { shell } => commands::completions::run(shell),
    }
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration before logging, so log messages in Config::load are silent
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    setup_logging(config.log_level).context("Failed to setup logging")?;

    info!("Starting texture with config from: {:?}", cli.config);

    run(cli, config)
}

fn main() {
    if let Err(e) = try_main() {
        log::error!("{:#}", e);
        eprintln!("{} Error: {:#}", "✗".red(), e);
        std::process::exit(1);
    }
}
