// Mon Oct 12 2026 - Alex

pub mod buffer;
pub mod data_uri;
pub mod decoder;
pub mod error;

pub use buffer::{PixelBuffer, Rgba};
pub use data_uri::DataUri;
pub use decoder::{DataUriDecoder, ImageDecoder};
pub use error::DecodeError;
