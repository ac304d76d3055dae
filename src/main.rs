use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::ValueEnum;
use eyre::{Result, bail};
use log::{debug, info};

mod cli;

use cli::{Cli, OutputFormat};
use ytmeta::output::VideoReport;

fn setup_logging() -> Result<()> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("ytmeta.log");

    let target = Box::new(std::fs::OpenOptions::new().create(true).append(true).open(&log_file)?);

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized: {}", log_file.display());
    Ok(())
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ytmeta")
        .join("logs")
}

fn build_after_help(endpoint: &str) -> String {
    let log_path = log_dir().join("ytmeta.log");
    let config_path = ytmeta::config::config_path();

    format!(
        "\nTRANSCRIPT SERVICE:\n  {endpoint}\n\nConfig is read from: {}\nLogs are written to: {}",
        config_path.display(),
        log_path.display()
    )
}

fn resolve_format(cli_format: Option<OutputFormat>, config: &ytmeta::config::Config) -> OutputFormat {
    cli_format
        .or_else(|| {
            config
                .default_format
                .as_deref()
                .and_then(|f| OutputFormat::from_str(f, true).ok())
        })
        .unwrap_or(OutputFormat::Text)
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;

    // Load config file (non-fatal if missing/invalid)
    let config = ytmeta::config::Config::load().unwrap_or_default();

    let after_help = build_after_help(&config.endpoint(None));
    let cmd = <Cli as clap::CommandFactory>::command().after_help(after_help);
    let matches = cmd.get_matches();
    let cli = <Cli as clap::FromArgMatches>::from_arg_matches(&matches)?;

    let endpoint = config.endpoint(cli.endpoint.as_deref());
    let format = resolve_format(cli.format, &config);
    let start_seconds = cli.time.as_deref().map(ytmeta::timestamp::to_seconds);
    debug!("Transcript endpoint: {endpoint}, format: {format:?}");

    if cli.verbose {
        let config_path = ytmeta::config::config_path();
        if config_path.exists() {
            eprintln!("Config: {}", config_path.display());
        }
    }

    let client = reqwest::Client::new();

    // Collect URLs: from arg or stdin
    let urls = if let Some(ref url) = cli.url {
        vec![url.clone()]
    } else {
        let stdin = io::stdin();
        stdin.lock().lines().collect::<Result<Vec<_>, _>>()?
    };

    if urls.is_empty() {
        bail!("no URL provided\n\nUsage: ytmeta <URL>\n       echo <URL> | ytmeta");
    }

    let mut rendered = Vec::new();
    for url_input in &urls {
        let url_input = url_input.trim();
        if url_input.is_empty() {
            continue;
        }

        let video_id = ytmeta::extract_video_id(url_input)
            .ok_or_else(|| eyre::eyre!("could not extract video ID from: {url_input}\n\nSupported formats:\n  https://www.youtube.com/watch?v=ID\n  https://www.youtube.com/watch?...&v=ID\n  https://youtu.be/ID\n  https://www.youtube.com/embed/ID\n  https://www.youtube.com/v/ID\n  https://www.youtube.com/user/NAME#p/u/N/ID"))?;

        let transcript = ytmeta::transcript::get_transcript(&client, &endpoint, &video_id).await;
        let report = VideoReport {
            thumbnail_url: ytmeta::thumbnail_url(&video_id),
            video_id,
            start_seconds,
            transcript,
        };

        if cli.verbose {
            let source = if report.transcript.is_mock_transcript { "placeholder" } else { "service" };
            eprintln!(
                "Video: {}\nThumbnail: {}\nTranscript: {source}",
                report.video_id, report.thumbnail_url,
            );
        }

        rendered.push(match format {
            OutputFormat::Text => ytmeta::output::render_text(&report),
            OutputFormat::Json => ytmeta::output::render_json(&report)?,
        });
    }

    let rendered = rendered.join("\n\n");
    if let Some(ref path) = cli.output {
        std::fs::write(path, &rendered)?;
        if cli.verbose {
            eprintln!("Output written to: {}", path.display());
        }
    } else {
        println!("{rendered}");
    }

    Ok(())
}
