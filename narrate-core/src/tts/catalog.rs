//! Built-in voice name to provider id mapping.

use std::collections::HashMap;

/// Immutable mapping from short voice names to ElevenLabs voice ids. Built
/// once at client construction and never mutated.
#[derive(Debug, Clone)]
pub struct VoiceCatalog {
    voices: HashMap<&'static str, &'static str>,
}

impl VoiceCatalog {
    pub fn builtin() -> Self {
        let voices = HashMap::from([
            ("adam", "pNInz6obpgDQGcFmaJgB"),    // Male, deep
            ("bella", "EXAVITQu4vr4xnSDxMaL"),   // Female, soft
            ("arnold", "VR6AewLTigWG4xSOukaG"),  // Male, crisp
            ("josh", "TxGEqnHWrfWFTfGW9XjX"),    // Male, young
            ("dave", "CYw3kZ02Hs0563khs1Fj"),    // Male, British
            ("laura", "FGY2WhTYpPnrIDTdsKH5"),   // Female, upbeat
            ("charlie", "IKne3meq5aSn9XLyUdCD"), // Male, casual
            ("george", "JBFqnCBsd6RMkjVDRZzb"),  // Male, warm
        ]);
        Self { voices }
    }

    /// Resolves a voice selector to a provider voice id. Known names are
    /// looked up case-insensitively; anything else is passed through as a
    /// raw voice id so callers can use voices outside the built-in set.
    pub fn resolve(&self, name: &str) -> String {
        match self.voices.get(name.to_lowercase().as_str()) {
            Some(id) => (*id).to_owned(),
            None => name.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_names_resolve_to_catalog_ids() {
        let catalog = VoiceCatalog::builtin();
        assert_eq!(catalog.resolve("adam"), "pNInz6obpgDQGcFmaJgB");
        assert_eq!(catalog.resolve("bella"), "EXAVITQu4vr4xnSDxMaL");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = VoiceCatalog::builtin();
        assert_eq!(catalog.resolve("Bella"), "EXAVITQu4vr4xnSDxMaL");
        assert_eq!(catalog.resolve("GEORGE"), "JBFqnCBsd6RMkjVDRZzb");
    }

    #[test]
    fn test_unknown_name_passes_through() {
        let catalog = VoiceCatalog::builtin();
        assert_eq!(catalog.resolve("G3hRJZ8nXEfgXIpKdanG"), "G3hRJZ8nXEfgXIpKdanG");
    }
}
