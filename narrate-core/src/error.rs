use std::path::PathBuf;

use thiserror::Error;

/// Failure taxonomy for the synthesis pipeline. Every variant maps to a
/// distinct stage so the CLI can tell the user which step failed.
#[derive(Error, Debug)]
pub enum TtsError {
    #[error(
        "ElevenLabs API key not found. Set ELEVENLABS_API_KEY in the environment or a .env file"
    )]
    MissingApiKey,

    #[error("File not found: {0}")]
    NotFound(PathBuf),

    #[error("Unable to decode {0} with any supported encoding")]
    Decode(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("API connection failed: {0}")]
    ConnectionFailed(anyhow::Error),

    #[error("Speech synthesis failed ({status}): {detail}")]
    SynthesisFailed {
        status: reqwest::StatusCode,
        detail: String,
    },

    #[error("Request to ElevenLabs failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to save audio to {path}: {source}")]
    Save {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, TtsError>;
