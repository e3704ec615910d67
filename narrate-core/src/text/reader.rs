//! Input text loading with encoding fallback.

use std::fmt;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, TtsError};

/// Encodings attempted in order. UTF-8 is tried strictly first; the
/// single-byte encodings below are only consulted when it fails.
const FALLBACK_ENCODINGS: &[TextEncoding] = &[TextEncoding::Latin1, TextEncoding::Windows1252];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Latin1,
    Windows1252,
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Latin1 => "latin-1",
            TextEncoding::Windows1252 => "windows-1252",
        };
        write!(f, "{name}")
    }
}

impl TextEncoding {
    fn decode(self, bytes: &[u8]) -> Option<String> {
        match self {
            TextEncoding::Utf8 => std::str::from_utf8(bytes).ok().map(str::to_owned),
            TextEncoding::Latin1 => Some(encoding_rs::mem::decode_latin1(bytes).into_owned()),
            TextEncoding::Windows1252 => {
                let (text, _, had_errors) = encoding_rs::WINDOWS_1252.decode(bytes);
                (!had_errors).then(|| text.into_owned())
            }
        }
    }
}

/// Decoded input text plus the encoding that produced it, so the caller can
/// surface when a fallback was needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextContent {
    pub text: String,
    pub encoding: TextEncoding,
}

/// Reads a text file, trying UTF-8 first and falling back to legacy
/// single-byte encodings. Content is trimmed of surrounding whitespace.
pub fn read_text_file(path: &Path) -> Result<TextContent> {
    let bytes = std::fs::read(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => TtsError::NotFound(path.to_path_buf()),
        _ => TtsError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    if let Some(text) = TextEncoding::Utf8.decode(&bytes) {
        return Ok(TextContent {
            text: text.trim().to_owned(),
            encoding: TextEncoding::Utf8,
        });
    }

    for &encoding in FALLBACK_ENCODINGS {
        if let Some(text) = encoding.decode(&bytes) {
            debug!(%encoding, path = %path.display(), "decoded input with fallback encoding");
            return Ok(TextContent {
                text: text.trim().to_owned(),
                encoding,
            });
        }
    }

    Err(TtsError::Decode(path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_input(dir: &TempDir, name: &str, bytes: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn test_utf8_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = write_input(&dir, "input.txt", "  héllo wörld \n".as_bytes());

        let content = read_text_file(&path).unwrap();
        assert_eq!(content.text, "héllo wörld");
        assert_eq!(content.encoding, TextEncoding::Utf8);
    }

    #[test]
    fn test_latin1_fallback() {
        let dir = TempDir::new().unwrap();
        // 0xE9 is 'é' in latin-1 but an invalid UTF-8 sequence.
        let path = write_input(&dir, "input.txt", b"caf\xe9");

        let content = read_text_file(&path).unwrap();
        assert_eq!(content.text, "café");
        assert_eq!(content.encoding, TextEncoding::Latin1);
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.txt");

        let err = read_text_file(&path).unwrap_err();
        assert!(matches!(err, TtsError::NotFound(_)));
    }

    #[test]
    fn test_windows1252_decodes_what_latin1_skips() {
        // Byte-level check of the fallback table itself: latin-1 maps 0x93
        // to a C1 control, windows-1252 to a smart quote. Both decode, and
        // latin-1 comes first, so the file path reports latin-1.
        let dir = TempDir::new().unwrap();
        let path = write_input(&dir, "input.txt", b"\x93quoted\x94");

        let content = read_text_file(&path).unwrap();
        assert_eq!(content.encoding, TextEncoding::Latin1);
        assert_eq!(
            TextEncoding::Windows1252.decode(b"\x93quoted\x94").unwrap(),
            "\u{201c}quoted\u{201d}"
        );
    }

    #[test]
    fn test_trims_whitespace() {
        let dir = TempDir::new().unwrap();
        let path = write_input(&dir, "input.txt", b"\n\t  plain text  \r\n");

        let content = read_text_file(&path).unwrap();
        assert_eq!(content.text, "plain text");
    }
}
