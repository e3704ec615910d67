//! ElevenLabs HTTP client: connection probe and speech synthesis.

use anyhow::anyhow;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{Result, TtsError};

use super::request::SynthesisRequest;

const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io/v1";

/// Number of voices surfaced by the connection probe.
const PROBE_SAMPLE_LIMIT: usize = 10;

/// Length of the voice-id prefix shown in probe output.
const PROBE_ID_PREFIX_LEN: usize = 8;

pub struct ElevenLabsClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// One voice surfaced by the connection probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceSummary {
    pub name: String,
    pub id_prefix: String,
}

/// Diagnostic snapshot of the provider's voice listing.
#[derive(Debug, Clone)]
pub struct ConnectionProbe {
    pub total_voices: usize,
    pub samples: Vec<VoiceSummary>,
}

#[derive(Deserialize)]
struct VoicesResponse {
    voices: Vec<VoiceData>,
}

#[derive(Deserialize)]
struct VoiceData {
    voice_id: String,
    name: String,
}

impl ElevenLabsClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Points the client at a different base URL. Used by tests to target a
    /// mock server; production callers always use [`ElevenLabsClient::new`].
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Issues an authenticated read against the voice listing endpoint and
    /// reports the total voice count plus the first few entries. Failures
    /// are returned as values; this never panics past the boundary.
    pub async fn test_connection(&self) -> Result<ConnectionProbe> {
        let response = self
            .client
            .get(format!("{}/voices", self.base_url))
            .header("xi-api-key", &self.api_key)
            .send()
            .await
            .map_err(|e| TtsError::ConnectionFailed(anyhow!(e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TtsError::ConnectionFailed(anyhow!(
                "ElevenLabs API error {status}: {body}"
            )));
        }

        let voices_response: VoicesResponse = response
            .json()
            .await
            .map_err(|e| TtsError::ConnectionFailed(anyhow!("invalid voices response: {e}")))?;

        let total_voices = voices_response.voices.len();
        let samples = voices_response
            .voices
            .into_iter()
            .take(PROBE_SAMPLE_LIMIT)
            .map(|v| VoiceSummary {
                id_prefix: v.voice_id.chars().take(PROBE_ID_PREFIX_LEN).collect(),
                name: v.name,
            })
            .collect();

        debug!(total_voices, "connection probe succeeded");
        Ok(ConnectionProbe {
            total_voices,
            samples,
        })
    }

    /// Synthesizes speech for the request and returns the raw audio bytes.
    /// All-or-nothing: a non-2xx response yields a typed failure carrying
    /// the HTTP status and response body, never partial audio.
    pub async fn synthesize(&self, request: &SynthesisRequest) -> Result<Vec<u8>> {
        let url = format!("{}/text-to-speech/{}", self.base_url, request.voice_id);

        info!(
            voice_id = %request.voice_id,
            model = %request.model,
            text_chars = request.text.chars().count(),
            "requesting speech synthesis"
        );

        let response = self
            .client
            .post(&url)
            .header("xi-api-key", &self.api_key)
            .header("Accept", "audio/mpeg")
            .json(&request.payload())
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(TtsError::SynthesisFailed { status, detail });
        }

        let bytes = response.bytes().await?.to_vec();
        info!(audio_bytes = bytes.len(), "speech generated");
        Ok(bytes)
    }
}
