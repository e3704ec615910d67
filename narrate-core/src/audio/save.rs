//! Audio persistence and output path derivation.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::info;

use crate::error::{Result, TtsError};

/// Writes the audio buffer to `path` and returns the number of bytes
/// written. A failed write is reported as-is; no cleanup is attempted.
pub fn save_audio(audio: &[u8], path: &Path) -> Result<usize> {
    std::fs::write(path, audio).map_err(|source| TtsError::Save {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), bytes = audio.len(), "audio saved");
    Ok(audio.len())
}

/// Derives the default output path from the input file's stem, the voice
/// name, and a second-granularity timestamp, e.g.
/// `draft_bella_20240102_030405.mp3`.
pub fn default_output_path(input: &Path, voice: &str, now: DateTime<Local>) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let timestamp = now.format("%Y%m%d_%H%M%S");
    PathBuf::from(format!("{stem}_{voice}_{timestamp}.mp3"))
}
