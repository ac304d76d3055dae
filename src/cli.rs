use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(
    name = "ytmeta",
    about = "YouTube video id, thumbnail and transcript extractor",
    version = env!("GIT_DESCRIBE"),
)]
pub struct Cli {
    /// YouTube video URL (reads from stdin if omitted)
    pub url: Option<String>,

    /// Transcript service endpoint
    #[arg(short, long)]
    pub endpoint: Option<String>,

    /// Output format: text (default), json
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Playback offset such as 1h2m3s, reported in seconds
    #[arg(short, long)]
    pub time: Option<String>,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Show video id, thumbnail and transcript source
    #[arg(short, long)]
    pub verbose: bool,
}
