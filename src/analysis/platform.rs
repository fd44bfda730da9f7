// Wed Oct 14 2026 - Alex

use crate::analysis::sampling::Region;
use crate::analysis::AnalysisError;
use crate::config::PlatformConfig;
use crate::pixels::PixelBuffer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformMatch {
    pub name: String,
    pub matches: usize,
}

/// Top banner (logo, toolbar) and bottom-left corner (watermark).
pub fn signature_regions(buffer: &PixelBuffer, config: &PlatformConfig) -> [Region; 2] {
    let (width, height) = (buffer.width(), buffer.height());
    [
        Region::new(0, 0, width, config.banner_height).clamp_to(buffer),
        Region::new(0, height.saturating_sub(config.watermark_height), config.watermark_width, height)
            .clamp_to(buffer),
    ]
}

/// Counts brand-color hits per signature and returns the first signature,
/// in configured priority order, whose count exceeds `min_matches`.
pub fn detect_platform(buffer: &PixelBuffer, config: &PlatformConfig) -> Result<Option<PlatformMatch>, AnalysisError> {
    let mut counts = vec![0usize; config.signatures.len()];

    for region in signature_regions(buffer, config) {
        for (x, y) in region.samples(config.sample_stride) {
            let px = buffer.pixel(x, y)?;
            for (count, signature) in counts.iter_mut().zip(&config.signatures) {
                if signature.colors.iter().any(|color| px.near(color, signature.tolerance)) {
                    *count += 1;
                }
            }
        }
    }

    Ok(config
        .signatures
        .iter()
        .zip(counts)
        .find(|(_, count)| *count > config.min_matches)
        .map(|(signature, matches)| PlatformMatch {
            name: signature.name.clone(),
            matches,
        }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixels::Rgba;

    fn with_banner(color: Rgba) -> PixelBuffer {
        PixelBuffer::from_fn(1000, 500, |_, y| if y < 40 { color } else { Rgba::rgb(20, 20, 20) }).unwrap()
    }

    #[test]
    fn test_tradingview_blue_banner() {
        let buffer = with_banner(Rgba::rgb(41, 98, 255));
        let found = detect_platform(&buffer, &PlatformConfig::default()).unwrap().unwrap();
        assert_eq!(found.name, "TradingView");
        assert!(found.matches > 15);
    }

    #[test]
    fn test_binance_yellow_banner() {
        let buffer = with_banner(Rgba::rgb(240, 185, 11));
        let found = detect_platform(&buffer, &PlatformConfig::default()).unwrap().unwrap();
        assert_eq!(found.name, "Binance");
    }

    #[test]
    fn test_coinbase_blue_overlaps_tradingview_priority() {
        // (10, 82, 250) is near both the Coinbase and first TradingView blue
        let buffer = with_banner(Rgba::rgb(10, 82, 250));
        let found = detect_platform(&buffer, &PlatformConfig::default()).unwrap().unwrap();
        assert_eq!(found.name, "TradingView");
    }

    #[test]
    fn test_no_platform_colors() {
        let buffer = PixelBuffer::solid(1000, 500, Rgba::rgb(20, 20, 20)).unwrap();
        assert_eq!(detect_platform(&buffer, &PlatformConfig::default()).unwrap(), None);
    }

    #[test]
    fn test_regions_clamped_on_small_images() {
        let buffer = PixelBuffer::solid(150, 60, Rgba::rgb(0, 0, 0)).unwrap();
        let [banner, corner] = signature_regions(&buffer, &PlatformConfig::default());
        assert_eq!(banner, Region::new(0, 0, 150, 60));
        assert_eq!(corner, Region::new(0, 0, 150, 60));
    }
}
