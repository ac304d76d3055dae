use eyre::{Result, bail, eyre};
use log::{debug, warn};
use serde::Deserialize;

use crate::{TranscriptOutcome, TranscriptResult};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/transcript";

const UNLABELED_FAILURE: &str = "Failed to fetch transcript";

/// Served when the transcript service cannot produce a transcript
pub const MOCK_TRANSCRIPT: &str = "Good morning class! Today we're going to be learning about fractions.
Fractions are a way to represent parts of a whole.
For example, if I have a pizza and cut it into 8 slices, each slice is 1/8 of the whole pizza.
Now, who can tell me what the top number in a fraction is called?
[Student responds]
That's right, it's called the numerator. And the bottom number?
[Student responds]
Correct! It's called the denominator.
Let's practice with some examples. If I have 3 out of 4 pieces of a chocolate bar, what fraction would that be?
[Students respond]
Yes, that would be 3/4. The numerator is 3, and the denominator is 4.
Now let's talk about equivalent fractions...";

#[derive(Debug, Deserialize)]
struct ServiceResponse {
    success: bool,
    transcript: Option<String>,
    #[serde(rename = "isMockTranscript")]
    is_mock_transcript: Option<bool>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ServiceError {
    error: Option<String>,
}

/// Fetch a transcript, substituting the placeholder on any failure.
///
/// Never fails: the `is_mock_transcript` flag is the only sign that the service was not used.
pub async fn get_transcript(client: &reqwest::Client, endpoint: &str, video_id: &str) -> TranscriptResult {
    match fetch_transcript(client, endpoint, video_id).await {
        Ok(outcome) => outcome.into(),
        Err(e) => {
            warn!("Error fetching YouTube transcript for {video_id}: {e:#}");
            TranscriptOutcome::Mock(MOCK_TRANSCRIPT.to_string()).into()
        }
    }
}

/// Ask the transcript service for a video's transcript
pub async fn fetch_transcript(client: &reqwest::Client, endpoint: &str, video_id: &str) -> Result<TranscriptOutcome> {
    debug!("Requesting transcript for {video_id} from {endpoint}");

    let body = serde_json::json!({ "videoId": video_id });

    let resp = client
        .post(endpoint)
        .header("Content-Type", "application/json")
        .json(&body)
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        let text = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ServiceError>(&text)
            .ok()
            .and_then(|e| e.error)
            .unwrap_or_else(|| UNLABELED_FAILURE.to_string());
        bail!("transcript service returned {status}: {message}");
    }

    let data: ServiceResponse = resp.json().await?;
    interpret(data)
}

fn interpret(data: ServiceResponse) -> Result<TranscriptOutcome> {
    if !data.success {
        bail!("{}", data.error.as_deref().unwrap_or(UNLABELED_FAILURE));
    }

    let transcript = data
        .transcript
        .filter(|t| !t.is_empty())
        .ok_or_else(|| eyre!("transcript service reported success without a transcript"))?;

    if data.is_mock_transcript.unwrap_or(false) {
        Ok(TranscriptOutcome::Mock(transcript))
    } else {
        Ok(TranscriptOutcome::Real(transcript))
    }
}
