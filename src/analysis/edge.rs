// Wed Oct 14 2026 - Alex

use crate::analysis::AnalysisError;
use crate::config::EdgeConfig;
use crate::pixels::PixelBuffer;
use crate::utils::ratio;
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeTier {
    High,
    Moderate,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeProfile {
    pub edges: usize,
    pub sampled: usize,
}

impl EdgeProfile {
    pub fn density(&self) -> f64 {
        ratio(self.edges as u64, self.sampled as u64)
    }

    pub fn tier(&self, config: &EdgeConfig) -> EdgeTier {
        let density = self.density();
        if density > config.high_density {
            EdgeTier::High
        } else if density > config.moderate_density {
            EdgeTier::Moderate
        } else {
            EdgeTier::Low
        }
    }
}

/// Compares each interior sample with its right and lower neighbour.
pub fn estimate_edges(buffer: &PixelBuffer, config: &EdgeConfig) -> Result<EdgeProfile, AnalysisError> {
    let stride = config.sample_stride.max(1);
    let mut profile = EdgeProfile::default();

    for y in (1..buffer.height().saturating_sub(1)).step_by(stride) {
        for x in (1..buffer.width().saturating_sub(1)).step_by(stride) {
            let current = buffer.pixel(x, y)?.channel_sum();
            let right = buffer.pixel(x + 1, y)?.channel_sum();
            let down = buffer.pixel(x, y + 1)?.channel_sum();

            if current.abs_diff(right) > config.intensity_threshold
                || current.abs_diff(down) > config.intensity_threshold
            {
                profile.edges += 1;
            }
            profile.sampled += 1;
        }
    }

    debug!("Edges: {} of {} samples ({:.3})", profile.edges, profile.sampled, profile.density());
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::testing;
    use crate::pixels::Rgba;

    #[test]
    fn test_flat_image_has_no_edges() {
        let buffer = PixelBuffer::solid(640, 320, Rgba::rgb(90, 90, 90)).unwrap();
        let profile = estimate_edges(&buffer, &EdgeConfig::default()).unwrap();
        assert_eq!(profile.edges, 0);
        assert_eq!(profile.tier(&EdgeConfig::default()), EdgeTier::Low);
    }

    #[test]
    fn test_striped_image_is_dense() {
        let buffer = testing::chart_like(1200, 600);
        let profile = estimate_edges(&buffer, &EdgeConfig::default()).unwrap();
        assert!(profile.density() > 0.5);
        assert_eq!(profile.tier(&EdgeConfig::default()), EdgeTier::High);
    }

    #[test]
    fn test_tiers() {
        let config = EdgeConfig::default();
        let moderate = EdgeProfile { edges: 10, sampled: 100 };
        let high = EdgeProfile { edges: 13, sampled: 100 };
        let low = EdgeProfile { edges: 8, sampled: 100 };
        assert_eq!(moderate.tier(&config), EdgeTier::Moderate);
        assert_eq!(high.tier(&config), EdgeTier::High);
        assert_eq!(low.tier(&config), EdgeTier::Low);
    }

    #[test]
    fn test_tiny_buffer_has_no_samples() {
        let buffer = PixelBuffer::solid(2, 2, Rgba::rgb(0, 0, 0)).unwrap();
        let profile = estimate_edges(&buffer, &EdgeConfig::default()).unwrap();
        assert_eq!(profile.sampled, 0);
        assert_eq!(profile.density(), 0.0);
    }
}
