//! Core pipeline for the `narrate` CLI: load text, build an ElevenLabs
//! synthesis request, call the API, persist the returned audio.

pub mod audio;
pub mod error;
pub mod text;
pub mod tts;

pub use error::{Result, TtsError};
