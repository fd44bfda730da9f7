// Tue Oct 13 2026 - Alex

use crate::analysis::sampling::{fraction_floor, Region};
use crate::analysis::AnalysisError;
use crate::config::CandleConfig;
use crate::pixels::{PixelBuffer, Rgba};
use crate::utils::ratio;
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandleColor {
    Bullish,
    Bearish,
}

/// Classifies by channel dominance rather than by platform palette, so teal,
/// lime and classic green bodies all count as bullish.
pub fn classify(px: Rgba, config: &CandleConfig) -> Option<CandleColor> {
    let dominates = |lead: u8, opposing: u8, blue: u8| {
        lead >= config.min_intensity
            && lead as i16 - opposing as i16 >= config.primary_margin as i16
            && lead as i16 - blue as i16 >= config.secondary_margin as i16
    };

    if dominates(px.g, px.r, px.b) {
        Some(CandleColor::Bullish)
    } else if dominates(px.r, px.g, px.b) {
        Some(CandleColor::Bearish)
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandleProfile {
    pub green_count: usize,
    pub red_count: usize,
    pub sampled: usize,
}

impl CandleProfile {
    pub fn green_ratio(&self) -> f64 {
        ratio(self.green_count as u64, self.sampled as u64)
    }

    pub fn red_ratio(&self) -> f64 {
        ratio(self.red_count as u64, self.sampled as u64)
    }

    pub fn has_candlesticks(&self, config: &CandleConfig) -> bool {
        self.green_ratio() > config.min_ratio && self.red_ratio() > config.min_ratio
    }
}

pub fn candle_band(buffer: &PixelBuffer, config: &CandleConfig) -> Region {
    let height = buffer.height();
    Region::new(
        0,
        fraction_floor(height, config.band_top),
        buffer.width(),
        fraction_floor(height, config.band_bottom),
    )
}

pub fn detect_candles(buffer: &PixelBuffer, config: &CandleConfig) -> Result<CandleProfile, AnalysisError> {
    let band = candle_band(buffer, config);
    let mut profile = CandleProfile {
        green_count: 0,
        red_count: 0,
        sampled: 0,
    };

    for (x, y) in band.samples(config.sample_stride) {
        match classify(buffer.pixel(x, y)?, config) {
            Some(CandleColor::Bullish) => profile.green_count += 1,
            Some(CandleColor::Bearish) => profile.red_count += 1,
            None => {}
        }
        profile.sampled += 1;
    }

    debug!(
        "Candle band {:?}: {} green, {} red of {} samples",
        band, profile.green_count, profile.red_count, profile.sampled
    );
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::testing;

    #[test]
    fn test_classify_platform_palettes() {
        let config = CandleConfig::default();
        for green in [[0, 200, 81], [38, 166, 154], [34, 171, 148], [0, 230, 118]] {
            assert_eq!(classify(Rgba::rgb(green[0], green[1], green[2]), &config), Some(CandleColor::Bullish));
        }
        for red in [[255, 82, 82], [239, 83, 80], [244, 67, 54], [255, 60, 60]] {
            assert_eq!(classify(Rgba::rgb(red[0], red[1], red[2]), &config), Some(CandleColor::Bearish));
        }
    }

    #[test]
    fn test_classify_rejects_neutral_colors() {
        let config = CandleConfig::default();
        assert_eq!(classify(Rgba::rgb(128, 128, 128), &config), None);
        assert_eq!(classify(Rgba::rgb(240, 185, 11), &config), None);
        assert_eq!(classify(Rgba::rgb(41, 98, 255), &config), None);
        // dominant but too dim
        assert_eq!(classify(Rgba::rgb(0, 90, 0), &config), None);
    }

    #[test]
    fn test_green_and_red_blocks_detected() {
        let buffer = testing::candle_blocks(800, 400);
        let config = CandleConfig::default();
        let profile = detect_candles(&buffer, &config).unwrap();
        assert!(profile.green_count > 0);
        assert!(profile.red_count > 0);
        assert!(profile.has_candlesticks(&config));
    }

    #[test]
    fn test_single_color_is_not_enough() {
        let buffer = PixelBuffer::solid(800, 400, Rgba::rgb(0, 200, 81)).unwrap();
        let config = CandleConfig::default();
        let profile = detect_candles(&buffer, &config).unwrap();
        assert_eq!(profile.green_ratio(), 1.0);
        assert!(!profile.has_candlesticks(&config));
    }
}
