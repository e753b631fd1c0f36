use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use hsk_config::Config;
use tracing_subscriber::EnvFilter;

pub mod pipeline;


use self::pipeline::Job;

/// Convert a saved HSK vocabulary page into flashcard decks
#[derive(Parser, Debug)]
#[command(name = "hsk-deck", version)]
struct Args {
    /// Saved HTML page of one HSK level
    page: PathBuf,

    /// CEDICT-format French word list (.u8); produces French decks
    #[arg(long)]
    dictionary: Option<PathBuf>,

    /// Directory receiving the generated files
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::new(),
    };

    let job = Job {
        dictionary: args
            .dictionary
            .or_else(|| config.dictionary.path.as_ref().map(PathBuf::from)),
        out_dir: args
            .out_dir
            .unwrap_or_else(|| PathBuf::from(&config.deck.out_dir)),
        page: args.page,
        config,
    };

    let written = pipeline::run(&job)?;
    tracing::info!("Generated {} files in {}", written.len(), job.out_dir.display());

    Ok(())
}
