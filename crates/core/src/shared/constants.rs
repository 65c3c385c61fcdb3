use std::time::Duration;

/// Audio containers accepted by the transcription service.
pub const AUDIO_EXTENSIONS: &[&str] = &["wav", "mp3", "m4a", "mp4"];

/// Transcription server reached when nothing else is configured.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";

/// Hint language sent with an upload unless overridden.
pub const DEFAULT_LANGUAGE: &str = "ja";

/// Long recordings can take minutes to transcribe and summarize.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(600);
