use std::path::{Path, PathBuf};

use log::{error, info};
use thiserror::Error;

use crate::shared::constants::REQUEST_TIMEOUT;
use crate::transcription::domain::job::{TranscriptionJob, UploadRequest};
use crate::transcription::domain::transcript::TranscriptionResponse;

#[derive(Error, Debug)]
pub enum TranscriptionError {
    #[error("failed to read audio file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("failed to build upload request: {0}")]
    Request(#[source] reqwest::Error),
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("server returned {status}: {message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },
    #[error("failed to parse response: {0}")]
    InvalidResponse(#[source] reqwest::Error),
}

/// HTTP client for the diarized transcription service.
///
/// One `POST {server_url}/transcriptions/` per call, no retries; any failure
/// surfaces to the caller with a displayable message.
pub struct TranscriptionApiClient {
    http: reqwest::Client,
    server_url: String,
}

impl TranscriptionApiClient {
    pub fn new(server_url: impl Into<String>) -> Result<Self, TranscriptionError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(TranscriptionError::Client)?;
        Ok(Self {
            http,
            server_url: server_url.into(),
        })
    }

    /// Upload a recording and wait for the diarized transcript.
    pub async fn transcribe(
        &self,
        request: UploadRequest,
    ) -> Result<TranscriptionResponse, TranscriptionError> {
        let url = endpoint_url(&self.server_url);
        let file_name = request.file_name.clone();
        let form = build_form(request)?;

        info!("Uploading {file_name} to {url}");
        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                error!("Transcription request failed: {e}");
                TranscriptionError::Transport(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            error!("Transcription API returned {status}: {message}");
            return Err(TranscriptionError::Api { status, message });
        }

        let transcription = response
            .json::<TranscriptionResponse>()
            .await
            .map_err(|e| {
                error!("Failed to parse transcription response: {e}");
                TranscriptionError::InvalidResponse(e)
            })?;

        info!(
            "Transcribed {:.1}s of audio into {} segments",
            transcription.metadata.duration,
            transcription.segments.len()
        );
        Ok(transcription)
    }

    /// Read a local file and upload it.
    pub async fn transcribe_path(
        &self,
        path: &Path,
        job: TranscriptionJob,
    ) -> Result<TranscriptionResponse, TranscriptionError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| TranscriptionError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "audio".to_string());
        self.transcribe(UploadRequest::new(file_name, bytes, job)).await
    }
}

fn endpoint_url(server_url: &str) -> String {
    format!("{}/transcriptions/", server_url.trim_end_matches('/'))
}

fn build_form(request: UploadRequest) -> Result<reqwest::multipart::Form, TranscriptionError> {
    let mime = mime_for(&request.file_name);
    let part = reqwest::multipart::Part::bytes(request.bytes)
        .file_name(request.file_name)
        .mime_str(mime)
        .map_err(TranscriptionError::Request)?;

    Ok(reqwest::multipart::Form::new()
        .part("file", part)
        .text("language", request.job.language)
        .text("summarize", request.job.summarize.to_string()))
}

/// MIME type by file extension; the service sniffs the container anyway.
fn mime_for(file_name: &str) -> &'static str {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("wav") => "audio/wav",
        Some("mp3") => "audio/mpeg",
        Some("m4a") => "audio/mp4",
        Some("mp4") => "video/mp4",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("meeting.wav", "audio/wav")]
    #[case("MEETING.MP3", "audio/mpeg")]
    #[case("call.m4a", "audio/mp4")]
    #[case("recording.mp4", "video/mp4")]
    #[case("notes.ogg", "application/octet-stream")]
    #[case("noextension", "application/octet-stream")]
    fn test_mime_for(#[case] file_name: &str, #[case] expected: &str) {
        assert_eq!(mime_for(file_name), expected);
    }

    #[test]
    fn test_endpoint_url_normalizes_trailing_slash() {
        assert_eq!(
            endpoint_url("http://localhost:8000"),
            "http://localhost:8000/transcriptions/"
        );
        assert_eq!(
            endpoint_url("http://localhost:8000/"),
            "http://localhost:8000/transcriptions/"
        );
    }

    #[test]
    fn test_api_error_display_carries_server_message() {
        let err = TranscriptionError::Api {
            status: reqwest::StatusCode::BAD_GATEWAY,
            message: "upstream transcription failed".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("502"));
        assert!(text.contains("upstream transcription failed"));
    }
}
