// Mon Oct 12 2026 - Alex

use crate::analysis::AnalysisError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Not a data URI")]
    NotDataUri,
    #[error("Unsupported payload encoding for {0}: only base64 is supported")]
    UnsupportedEncoding(String),
    #[error("Not an image MIME type: {0}")]
    NotAnImage(String),
    #[error("Payload of {size} bytes exceeds limit of {limit} bytes")]
    TooLarge { size: usize, limit: usize },
    #[error("Base64 error: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Decoded buffer rejected: {0}")]
    Buffer(#[from] AnalysisError),
    #[error("Decode task interrupted: {0}")]
    Interrupted(String),
}
