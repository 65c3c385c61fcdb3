use serde::{Deserialize, Serialize};

/// One speaker-attributed span of the transcript.
///
/// Segments arrive from the service in chronological order; that order is
/// preserved all the way to the screen. `start <= end` is assumed from the
/// service and not re-checked here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpeakerSegment {
    /// Speaker label assigned by the diarizer, e.g. "SPEAKER_01".
    pub speaker: String,
    /// Start time in seconds.
    pub start: f64,
    /// End time in seconds.
    pub end: f64,
    /// Transcribed utterance for the segment.
    pub text: String,
}

impl SpeakerSegment {
    /// Formatted `start - end` range, e.g. `0:07 - 1:02`.
    pub fn time_range(&self) -> String {
        format!(
            "{} - {}",
            format_timestamp(self.start),
            format_timestamp(self.end)
        )
    }
}

/// High-level metadata attached to a diarized transcript.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TranscriptMetadata {
    /// Detected or requested language code (e.g. "ja").
    pub language: String,
    /// Duration of the processed audio in seconds.
    pub duration: f64,
    #[serde(default)]
    pub summary: Option<String>,
}

impl TranscriptMetadata {
    /// The meeting summary, treating a missing or empty string as absent.
    pub fn summary_text(&self) -> Option<&str> {
        self.summary.as_deref().filter(|s| !s.is_empty())
    }
}

/// Response payload returned by the transcription endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TranscriptionResponse {
    pub segments: Vec<SpeakerSegment>,
    pub metadata: TranscriptMetadata,
}

/// Render a second offset as `M:SS`.
///
/// Minutes carry no leading zero and no upper bound; seconds are zero-padded
/// to two digits. Negative input clamps to `0:00`.
pub fn format_timestamp(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, "0:00")]
    #[case(7.0, "0:07")]
    #[case(59.9, "0:59")]
    #[case(62.0, "1:02")]
    #[case(130.0, "2:10")]
    #[case(3661.0, "61:01")]
    fn test_format_timestamp(#[case] seconds: f64, #[case] expected: &str) {
        assert_eq!(format_timestamp(seconds), expected);
    }

    #[test]
    fn test_format_timestamp_clamps_negative_input() {
        assert_eq!(format_timestamp(-3.0), "0:00");
    }

    #[test]
    fn test_time_range_formats_both_ends() {
        let segment = SpeakerSegment {
            speaker: "SPEAKER_00".to_string(),
            start: 7.2,
            end: 62.8,
            text: "おはようございます。".to_string(),
        };
        assert_eq!(segment.time_range(), "0:07 - 1:02");
    }

    #[test]
    fn test_summary_text_treats_empty_as_absent() {
        let mut metadata = TranscriptMetadata {
            language: "ja".to_string(),
            duration: 10.0,
            summary: None,
        };
        assert_eq!(metadata.summary_text(), None);

        metadata.summary = Some(String::new());
        assert_eq!(metadata.summary_text(), None);

        metadata.summary = Some("短い要約".to_string());
        assert_eq!(metadata.summary_text(), Some("短い要約"));
    }

    #[test]
    fn test_response_deserializes_service_payload_in_order() {
        let json = r#"{
            "segments": [
                {"speaker": "SPEAKER_00", "start": 0.0, "end": 4.5, "text": "本日の議題です。"},
                {"speaker": "SPEAKER_01", "start": 4.5, "end": 9.0, "text": "承知しました。"}
            ],
            "metadata": {"language": "ja", "duration": 9.0, "summary": "議題の確認。"}
        }"#;

        let response: TranscriptionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.segments.len(), 2);
        assert_eq!(response.segments[0].speaker, "SPEAKER_00");
        assert_eq!(response.segments[1].speaker, "SPEAKER_01");
        assert_eq!(response.segments[1].start, 4.5);
        assert_eq!(response.metadata.language, "ja");
        assert_eq!(response.metadata.summary_text(), Some("議題の確認。"));
    }

    #[test]
    fn test_response_without_summary_field() {
        let json = r#"{
            "segments": [],
            "metadata": {"language": "ja", "duration": 0.0}
        }"#;

        let response: TranscriptionResponse = serde_json::from_str(json).unwrap();
        assert!(response.segments.is_empty());
        assert_eq!(response.metadata.summary_text(), None);
    }
}
