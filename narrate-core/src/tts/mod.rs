pub mod catalog;
pub mod client;
pub mod request;

pub use catalog::VoiceCatalog;
pub use client::{ConnectionProbe, ElevenLabsClient, VoiceSummary};
pub use request::{ModelId, SynthesisRequest, VoiceSettings, RECOMMENDED_MAX_CHARS};
