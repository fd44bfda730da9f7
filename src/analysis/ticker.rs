// Wed Oct 14 2026 - Alex

use crate::analysis::sampling::Region;
use crate::analysis::AnalysisError;
use crate::config::TickerConfig;
use crate::pixels::PixelBuffer;
use crate::utils::ratio;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickerProfile {
    pub bright_pixels: usize,
    pub sampled: usize,
}

impl TickerProfile {
    pub fn bright_ratio(&self) -> f64 {
        ratio(self.bright_pixels as u64, self.sampled as u64)
    }

    pub fn has_ticker_text(&self, config: &TickerConfig) -> bool {
        self.bright_ratio() > config.min_ratio
    }
}

/// Near-white pixels in the top-left corner, where the symbol and last price sit.
pub fn detect_ticker_text(buffer: &PixelBuffer, config: &TickerConfig) -> Result<TickerProfile, AnalysisError> {
    let region = Region::new(0, 0, config.region_width, config.region_height).clamp_to(buffer);
    let floor = config.brightness_floor;
    let mut profile = TickerProfile::default();

    for (x, y) in region.samples(config.sample_stride) {
        let px = buffer.pixel(x, y)?;
        if px.r > floor && px.g > floor && px.b > floor {
            profile.bright_pixels += 1;
        }
        profile.sampled += 1;
    }

    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixels::Rgba;

    #[test]
    fn test_white_text_block() {
        let buffer = PixelBuffer::from_fn(1000, 500, |x, y| {
            if (20..60).contains(&y) && (10..120).contains(&x) {
                Rgba::rgb(230, 230, 235)
            } else {
                Rgba::rgb(19, 23, 34)
            }
        })
        .unwrap();
        let profile = detect_ticker_text(&buffer, &TickerConfig::default()).unwrap();
        assert_eq!(profile.sampled, 34 * 100);
        assert!(profile.has_ticker_text(&TickerConfig::default()));
    }

    #[test]
    fn test_light_gray_is_not_text() {
        let buffer = PixelBuffer::solid(1000, 500, Rgba::rgb(200, 200, 200)).unwrap();
        let profile = detect_ticker_text(&buffer, &TickerConfig::default()).unwrap();
        assert_eq!(profile.bright_pixels, 0);
    }
}
