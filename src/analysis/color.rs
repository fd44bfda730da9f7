// Tue Oct 13 2026 - Alex

use crate::analysis::AnalysisError;
use crate::config::DarkThemeConfig;
use crate::pixels::PixelBuffer;
use crate::utils::ratio;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorProfile {
    pub dark_pixels: usize,
    pub sampled: usize,
}

impl ColorProfile {
    pub fn dark_ratio(&self) -> f64 {
        ratio(self.dark_pixels as u64, self.sampled as u64)
    }

    pub fn is_dark_theme(&self, config: &DarkThemeConfig) -> bool {
        self.dark_ratio() > config.min_dark_ratio
    }
}

/// Share of dark pixels over every `sample_stride`-th pixel of the buffer.
pub fn analyze_dark_theme(buffer: &PixelBuffer, config: &DarkThemeConfig) -> Result<ColorProfile, AnalysisError> {
    let mut dark_pixels = 0;
    let mut sampled = 0;

    for index in (0..buffer.pixel_count()).step_by(config.sample_stride.max(1)) {
        let px = buffer.pixel_at(index)?;
        if px.brightness() < config.darkness_threshold {
            dark_pixels += 1;
        }
        sampled += 1;
    }

    Ok(ColorProfile { dark_pixels, sampled })
}
