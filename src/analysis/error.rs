// Tue Oct 13 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Malformed buffer: {0}")]
    MalformedBuffer(String),
    #[error("Pixel ({x}, {y}) out of bounds for {width}x{height} buffer")]
    OutOfBounds { x: u32, y: u32, width: u32, height: u32 },
}
