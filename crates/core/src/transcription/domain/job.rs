use crate::shared::constants::DEFAULT_LANGUAGE;

/// Diarization preferences sent along with an upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranscriptionJob {
    /// Hint language for transcription (e.g. "ja").
    pub language: String,
    /// Whether to request a short meeting summary.
    pub summarize: bool,
}

impl Default for TranscriptionJob {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            summarize: true,
        }
    }
}

/// One upload to the transcription service.
///
/// Built once per submission, immutable afterwards, dropped when the call
/// settles.
#[derive(Clone, Debug)]
pub struct UploadRequest {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub job: TranscriptionJob,
}

impl UploadRequest {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>, job: TranscriptionJob) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
            job,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_defaults_to_japanese_with_summary() {
        let job = TranscriptionJob::default();
        assert_eq!(job.language, "ja");
        assert!(job.summarize);
    }

    #[test]
    fn test_upload_request_keeps_fields() {
        let request = UploadRequest::new("meeting.wav", vec![1, 2, 3], TranscriptionJob::default());
        assert_eq!(request.file_name, "meeting.wav");
        assert_eq!(request.bytes, vec![1, 2, 3]);
        assert_eq!(request.job.language, "ja");
    }
}
