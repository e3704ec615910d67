//! Synthesis request construction and the wire payload shape.

use serde::Serialize;
use strum::{Display, EnumString};

use super::catalog::VoiceCatalog;

/// Advisory limit above which callers should confirm before synthesizing.
/// Soft only; the request builder never rejects long text.
pub const RECOMMENDED_MAX_CHARS: usize = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Display, EnumString)]
pub enum ModelId {
    #[default]
    #[serde(rename = "eleven_turbo_v2_5")]
    #[strum(serialize = "eleven_turbo_v2_5")]
    TurboV25,

    #[serde(rename = "eleven_turbo_v2")]
    #[strum(serialize = "eleven_turbo_v2")]
    TurboV2,

    #[serde(rename = "eleven_multilingual_v2")]
    #[strum(serialize = "eleven_multilingual_v2")]
    MultilingualV2,

    #[serde(rename = "eleven_monolingual_v1")]
    #[strum(serialize = "eleven_monolingual_v1")]
    MonolingualV1,
}

impl ModelId {
    pub const ALL: [ModelId; 4] = [
        ModelId::TurboV25,
        ModelId::TurboV2,
        ModelId::MultilingualV2,
        ModelId::MonolingualV1,
    ];
}

/// Voice tuning parameters, forwarded to the service verbatim. The service
/// is the authority on valid ranges; nothing is clamped client-side.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct VoiceSettings {
    pub stability: f64,
    pub similarity_boost: f64,
    pub style: f64,
    pub use_speaker_boost: bool,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.5,
            similarity_boost: 0.75,
            style: 0.0,
            use_speaker_boost: true,
        }
    }
}

/// A validated synthesis request with the voice selector already resolved
/// to a provider voice id.
#[derive(Debug, Clone)]
pub struct SynthesisRequest {
    pub text: String,
    pub voice_id: String,
    pub model: ModelId,
    pub settings: VoiceSettings,
}

impl SynthesisRequest {
    pub fn build(
        catalog: &VoiceCatalog,
        text: String,
        voice: &str,
        model: ModelId,
        settings: VoiceSettings,
    ) -> Self {
        Self {
            text,
            voice_id: catalog.resolve(voice),
            model,
            settings,
        }
    }

    pub(crate) fn payload(&self) -> SynthesisPayload<'_> {
        SynthesisPayload {
            text: &self.text,
            model_id: self.model,
            voice_settings: self.settings,
        }
    }
}

/// JSON body for `POST /text-to-speech/{voice_id}`.
#[derive(Serialize)]
pub(crate) struct SynthesisPayload<'a> {
    pub text: &'a str,
    pub model_id: ModelId,
    pub voice_settings: VoiceSettings,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_model_wire_strings() {
        assert_eq!(ModelId::TurboV25.to_string(), "eleven_turbo_v2_5");
        assert_eq!(ModelId::MonolingualV1.to_string(), "eleven_monolingual_v1");
        assert_eq!(
            ModelId::from_str("eleven_multilingual_v2").unwrap(),
            ModelId::MultilingualV2
        );
        assert!(ModelId::from_str("eleven_v3").is_err());
    }

    #[test]
    fn test_build_resolves_catalog_voice() {
        let catalog = VoiceCatalog::builtin();
        let request = SynthesisRequest::build(
            &catalog,
            "hello".to_string(),
            "josh",
            ModelId::default(),
            VoiceSettings::default(),
        );
        assert_eq!(request.voice_id, "TxGEqnHWrfWFTfGW9XjX");
    }

    #[test]
    fn test_payload_shape() {
        let catalog = VoiceCatalog::builtin();
        let request = SynthesisRequest::build(
            &catalog,
            "hello".to_string(),
            "adam",
            ModelId::TurboV25,
            VoiceSettings::default(),
        );

        let json = serde_json::to_value(request.payload()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "text": "hello",
                "model_id": "eleven_turbo_v2_5",
                "voice_settings": {
                    "stability": 0.5,
                    "similarity_boost": 0.75,
                    "style": 0.0,
                    "use_speaker_boost": true,
                }
            })
        );
    }

    #[test]
    fn test_out_of_range_settings_are_forwarded() {
        // Range validation is deferred to the service.
        let settings = VoiceSettings {
            stability: 1.7,
            similarity_boost: -0.2,
            style: 42.0,
            use_speaker_boost: true,
        };
        let catalog = VoiceCatalog::builtin();
        let request = SynthesisRequest::build(
            &catalog,
            "x".to_string(),
            "adam",
            ModelId::default(),
            settings,
        );

        let json = serde_json::to_value(request.payload()).unwrap();
        assert_eq!(json["voice_settings"]["stability"], 1.7);
        assert_eq!(json["voice_settings"]["similarity_boost"], -0.2);
        assert_eq!(json["voice_settings"]["style"], 42.0);
    }
}
