// Fri Oct 16 2026 - Alex

pub mod analysis;
pub mod config;
pub mod output;
pub mod pipeline;
pub mod pixels;
pub mod signal;
pub mod ui;
pub mod utils;
pub mod validation;

pub use config::Config;
pub use pipeline::{ChartPipeline, PipelineOutcome};
pub use pixels::{DataUriDecoder, ImageDecoder, PixelBuffer};
pub use signal::{ChartAnalysisService, MockAnalysisService, TradeSignal};
pub use validation::{ChartValidator, ValidationCheck, ValidationResult};
