use eyre::Result;
use serde::Serialize;

use crate::TranscriptResult;

/// Everything gathered for one video
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoReport {
    pub video_id: String,
    pub thumbnail_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_seconds: Option<u64>,
    #[serde(flatten)]
    pub transcript: TranscriptResult,
}

/// Render a report as plain text: a header block followed by the transcript
pub fn render_text(report: &VideoReport) -> String {
    let mut lines = vec![
        format!("Video: {}", report.video_id),
        format!("Thumbnail: {}", report.thumbnail_url),
    ];
    if let Some(start) = report.start_seconds {
        lines.push(format!("Start: {start}s"));
    }
    if report.transcript.is_mock_transcript {
        lines.push("Transcript: placeholder (service unavailable)".to_string());
    }
    lines.push(String::new());
    lines.push(report.transcript.transcript.clone());
    lines.join("\n")
}

/// Render a report as pretty-printed JSON
pub fn render_json(report: &VideoReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
