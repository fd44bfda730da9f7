// Tue Oct 13 2026 - Alex

pub mod candle;
pub mod color;
pub mod edge;
pub mod error;
pub mod grid;
pub mod platform;
pub mod sampling;
pub mod ticker;

#[cfg(test)]
pub(crate) mod testing;

pub use candle::{CandleColor, CandleProfile};
pub use color::ColorProfile;
pub use edge::{EdgeProfile, EdgeTier};
pub use error::AnalysisError;
pub use grid::GridProfile;
pub use platform::PlatformMatch;
pub use sampling::Region;
pub use ticker::TickerProfile;
