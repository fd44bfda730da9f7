// Tue Oct 13 2026 - Alex

use crate::pixels::DecodeError;
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

/// Accepts payloads with or without `=` padding, as browsers do.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

static DATA_URI: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^data:(?P<mime>[^;,]*)(?P<params>(?:;[^;,]*)*),(?P<payload>.*)$")
        .expect("data URI pattern compiles")
});

/// Borrowed view of a `data:<mime>[;params],<payload>` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataUri<'a> {
    mime_type: &'a str,
    is_base64: bool,
    payload: &'a str,
}

impl<'a> DataUri<'a> {
    pub fn parse(input: &'a str) -> Result<Self, DecodeError> {
        let caps = DATA_URI.captures(input.trim()).ok_or(DecodeError::NotDataUri)?;

        let mime_type = caps.name("mime").map_or("", |m| m.as_str());
        let is_base64 = caps
            .name("params")
            .map_or(false, |p| p.as_str().split(';').any(|param| param.eq_ignore_ascii_case("base64")));
        let payload = caps.name("payload").map_or("", |m| m.as_str());

        Ok(Self {
            mime_type,
            is_base64,
            payload,
        })
    }

    pub fn encode(mime_type: &str, bytes: &[u8]) -> String {
        format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
    }

    pub fn mime_type(&self) -> &'a str {
        self.mime_type
    }

    pub fn is_base64(&self) -> bool {
        self.is_base64
    }

    pub fn is_image(&self) -> bool {
        self.mime_type.to_ascii_lowercase().starts_with("image/")
    }

    pub fn payload(&self) -> &'a str {
        self.payload
    }

    /// Decoded size guessed from the base64 length, without decoding.
    pub fn estimated_decoded_len(&self) -> usize {
        self.payload.len() * 3 / 4
    }

    pub fn decode_payload(&self) -> Result<Vec<u8>, DecodeError> {
        if !self.is_base64 {
            return Err(DecodeError::UnsupportedEncoding(self.mime_type.to_string()));
        }
        let compact: String = self.payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        Ok(LENIENT.decode(compact)?)
    }
}

pub fn mime_type_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "bmp" => Some("image/bmp"),
        "tif" | "tiff" => Some("image/tiff"),
        _ => None,
    }
}
