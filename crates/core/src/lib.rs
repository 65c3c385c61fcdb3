pub mod shared;
pub mod transcription;
