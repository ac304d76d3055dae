pub mod config;
pub mod output;
pub mod timestamp;
pub mod transcript;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Separator token followed by everything up to the next `#`, `&` or `?`.
/// The leading run is greedy, so the last separator on the first line wins.
/// Line terminators (`\r`, `\n`, U+2028, U+2029) end that first line.
static VIDEO_ID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\r\n\x{2028}\x{2029}]*(youtu\.be/|v/|u/[A-Za-z0-9_]/|embed/|watch\?v=|&v=)([^#&?]*)")
        .expect("Failed to compile video id regex")
});

const VIDEO_ID_LEN: usize = 11;

/// Transcript handed back to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptResult {
    pub transcript: String,
    pub is_mock_transcript: bool,
}

/// Where a transcript's text came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptOutcome {
    Real(String),
    Mock(String),
}

impl From<TranscriptOutcome> for TranscriptResult {
    fn from(outcome: TranscriptOutcome) -> Self {
        match outcome {
            TranscriptOutcome::Real(transcript) => TranscriptResult {
                transcript,
                is_mock_transcript: false,
            },
            TranscriptOutcome::Mock(transcript) => TranscriptResult {
                transcript,
                is_mock_transcript: true,
            },
        }
    }
}

/// Extract the video ID from a YouTube URL.
///
/// Recognizes `youtu.be/ID`, `/v/ID`, `/u/N/ID`, `/embed/ID`, `watch?v=ID` and `&v=ID`.
/// Only the length of the candidate is checked: any 11-character run is accepted.
pub fn extract_video_id(url: &str) -> Option<String> {
    let caps = VIDEO_ID_REGEX.captures(url)?;
    let candidate = caps.get(2)?.as_str();

    (candidate.chars().count() == VIDEO_ID_LEN).then(|| candidate.to_string())
}

/// Thumbnail image URL for a video ID
pub fn thumbnail_url(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{video_id}/0.jpg")
}
