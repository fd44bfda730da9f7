// Fri Oct 16 2026 - Alex

use crate::pixels::DecodeError;
use thiserror::Error;

pub const GENERIC_FAILURE: &str = "Analysis failed. Please try uploading a different chart image.";
pub const IMAGE_TOO_SMALL: &str = "Image too small. Please upload a clear chart screenshot (minimum 50KB).";

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Image too small: ~{size} bytes (minimum {minimum})")]
    ImageTooSmall { size: usize, minimum: usize },
    #[error("Invalid payload: {0}")]
    InvalidPayload(#[from] DecodeError),
    #[error("Analysis service failed: {0}")]
    Failed(String),
}

impl ServiceError {
    /// Text safe to show the person who uploaded the chart.
    pub fn user_message(&self) -> &'static str {
        match self {
            ServiceError::ImageTooSmall { .. } => IMAGE_TOO_SMALL,
            _ => GENERIC_FAILURE,
        }
    }
}
