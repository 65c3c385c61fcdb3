use gijiroku_core::transcription::domain::transcript::TranscriptionResponse;

/// Mutually exclusive states of the single-shot upload mutation.
#[derive(Debug, Clone)]
pub enum UploadState {
    Idle,
    Pending,
    Resolved(TranscriptionResponse),
    Rejected(String),
}

/// Tracks at most one in-flight transcription upload.
///
/// `begin` enters the pending state synchronously, before the request is
/// spawned, and refuses a second request while one is in flight. `settle`
/// records the outcome of the request started by the last `begin`; exactly
/// one settle follows each successful begin.
#[derive(Debug)]
pub struct UploadController {
    state: UploadState,
}

impl UploadController {
    pub fn new() -> Self {
        Self {
            state: UploadState::Idle,
        }
    }

    /// Enter the pending state. Returns false, changing nothing, if a
    /// request is already in flight.
    pub fn begin(&mut self) -> bool {
        if matches!(self.state, UploadState::Pending) {
            return false;
        }
        self.state = UploadState::Pending;
        true
    }

    pub fn settle(&mut self, result: Result<TranscriptionResponse, String>) {
        self.state = match result {
            Ok(response) => UploadState::Resolved(response),
            Err(message) => UploadState::Rejected(message),
        };
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, UploadState::Pending)
    }

    pub fn response(&self) -> Option<&TranscriptionResponse> {
        match &self.state {
            UploadState::Resolved(response) => Some(response),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            UploadState::Rejected(message) => Some(message),
            _ => None,
        }
    }
}
