// Tue Oct 13 2026 - Alex

use crate::pixels::{DataUri, DecodeError, PixelBuffer};
use async_trait::async_trait;
use log::debug;

/// Turns an encoded image into pixels. Injected into the validator so the
/// analyzers can be driven from in-memory buffers.
#[async_trait]
pub trait ImageDecoder: Send + Sync {
    async fn decode(&self, encoded: &str) -> Result<PixelBuffer, DecodeError>;
}

pub const DEFAULT_MAX_PAYLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Decodes base64 `data:image/...` URIs with the `image` crate on a blocking
/// tokio thread.
#[derive(Debug, Clone)]
pub struct DataUriDecoder {
    max_payload_bytes: usize,
}

impl DataUriDecoder {
    pub fn new() -> Self {
        Self {
            max_payload_bytes: DEFAULT_MAX_PAYLOAD_BYTES,
        }
    }

    pub fn with_max_payload_bytes(mut self, limit: usize) -> Self {
        self.max_payload_bytes = limit;
        self
    }

    pub fn decode_blocking(&self, encoded: &str) -> Result<PixelBuffer, DecodeError> {
        let uri = DataUri::parse(encoded)?;
        if !uri.is_image() {
            return Err(DecodeError::NotAnImage(uri.mime_type().to_string()));
        }

        let estimated = uri.estimated_decoded_len();
        if estimated > self.max_payload_bytes {
            return Err(DecodeError::TooLarge {
                size: estimated,
                limit: self.max_payload_bytes,
            });
        }

        let bytes = uri.decode_payload()?;
        let rgba = image::load_from_memory(&bytes)?.to_rgba8();
        let (width, height) = rgba.dimensions();
        debug!("Decoded {} payload to {}x{}", uri.mime_type(), width, height);

        Ok(PixelBuffer::new(width, height, rgba.into_raw())?)
    }
}

impl Default for DataUriDecoder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageDecoder for DataUriDecoder {
    async fn decode(&self, encoded: &str) -> Result<PixelBuffer, DecodeError> {
        let decoder = self.clone();
        let encoded = encoded.to_owned();

        tokio::task::spawn_blocking(move || decoder.decode_blocking(&encoded))
            .await
            .map_err(|e| DecodeError::Interrupted(e.to_string()))?
    }
}
