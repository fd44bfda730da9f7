// Wed Oct 14 2026 - Alex

use crate::config::GateConfig;
use crate::pixels::PixelBuffer;

pub const REASON_ASPECT_RATIO: &str = "Image aspect ratio doesn't match typical trading charts. Please upload a screenshot from TradingView, Binance, or Coinbase.";

pub fn aspect_ratio_ok(buffer: &PixelBuffer, config: &GateConfig) -> bool {
    let ratio = buffer.aspect_ratio();
    ratio >= config.min_aspect_ratio && ratio <= config.max_aspect_ratio
}

pub fn resolution_ok(buffer: &PixelBuffer, config: &GateConfig) -> bool {
    buffer.width() >= config.min_width && buffer.height() >= config.min_height
}

pub fn aspect_ratio_label(config: &GateConfig) -> String {
    format!(
        "Invalid aspect ratio (expected {}:1 to {}:1)",
        config.min_aspect_ratio, config.max_aspect_ratio
    )
}

pub fn resolution_reason(config: &GateConfig) -> String {
    format!(
        "Image resolution too low. Please upload a higher quality chart screenshot (minimum {}x{}px).",
        config.min_width, config.min_height
    )
}
