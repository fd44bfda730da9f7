// Wed Oct 14 2026 - Alex

use crate::analysis::sampling::{fraction_ceil, fraction_floor};
use crate::analysis::AnalysisError;
use crate::config::GridConfig;
use crate::pixels::{PixelBuffer, Rgba};
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridProfile {
    pub horizontal_lines: usize,
    pub vertical_lines: usize,
    pub rows_scanned: usize,
    pub columns_scanned: usize,
}

impl GridProfile {
    pub fn has_grid(&self) -> bool {
        self.horizontal_lines >= 1 && self.vertical_lines >= 1
    }
}

/// Low-saturation pixel inside the mid-gray band used for gridlines.
pub fn is_grid_pixel(px: Rgba, config: &GridConfig) -> bool {
    px.r.abs_diff(px.g) < config.channel_tolerance
        && px.g.abs_diff(px.b) < config.channel_tolerance
        && (config.gray_min..=config.gray_max).contains(&px.r)
}

fn qualifies(count: usize, length: u32, config: &GridConfig) -> bool {
    count as f64 > length as f64 / config.line_divisor as f64
}

fn scan_row(buffer: &PixelBuffer, y: u32, config: &GridConfig) -> Result<bool, AnalysisError> {
    let mut count = 0;
    for x in (0..buffer.width()).step_by(config.pixel_stride.max(1)) {
        if is_grid_pixel(buffer.pixel(x, y)?, config) {
            count += 1;
        }
    }
    Ok(qualifies(count, buffer.width(), config))
}

fn scan_column(buffer: &PixelBuffer, x: u32, config: &GridConfig) -> Result<bool, AnalysisError> {
    let mut count = 0;
    for y in (0..buffer.height()).step_by(config.pixel_stride.max(1)) {
        if is_grid_pixel(buffer.pixel(x, y)?, config) {
            count += 1;
        }
    }
    Ok(qualifies(count, buffer.height(), config))
}

pub fn detect_grid(buffer: &PixelBuffer, config: &GridConfig) -> Result<GridProfile, AnalysisError> {
    let (width, height) = (buffer.width(), buffer.height());
    let mut profile = GridProfile::default();

    let row_step = (height / config.scanline_divisions).max(1) as usize;
    let rows = fraction_floor(height, config.row_band.0)..fraction_ceil(height, config.row_band.1);
    for y in rows.step_by(row_step) {
        profile.rows_scanned += 1;
        if scan_row(buffer, y, config)? {
            profile.horizontal_lines += 1;
        }
    }

    let column_step = (width / config.scanline_divisions).max(1) as usize;
    let columns = fraction_floor(width, config.column_band.0)..fraction_ceil(width, config.column_band.1);
    for x in columns.step_by(column_step) {
        profile.columns_scanned += 1;
        if scan_column(buffer, x, config)? {
            profile.vertical_lines += 1;
        }
    }

    debug!(
        "Grid: {}/{} rows, {}/{} columns qualify",
        profile.horizontal_lines, profile.rows_scanned, profile.vertical_lines, profile.columns_scanned
    );
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::testing;

    #[test]
    fn test_mid_gray_with_lines_has_grid() {
        let buffer = testing::grid_pattern(1200, 600, Rgba::rgb(100, 100, 100), Rgba::rgb(60, 60, 60), 40);
        let profile = detect_grid(&buffer, &GridConfig::default()).unwrap();
        assert!(profile.has_grid());
    }

    #[test]
    fn test_dark_theme_gridlines_detected_structurally() {
        // Background is below the gray band, so only the lines themselves count.
        let buffer = testing::grid_pattern(1200, 600, Rgba::rgb(15, 17, 22), Rgba::rgb(60, 62, 66), 40);
        let profile = detect_grid(&buffer, &GridConfig::default()).unwrap();
        assert!(profile.horizontal_lines >= 1);
        assert!(profile.vertical_lines >= 1);
        assert!(profile.has_grid());
    }

    #[test]
    fn test_black_image_has_no_grid() {
        let buffer = PixelBuffer::solid(1200, 600, Rgba::rgb(0, 0, 0)).unwrap();
        let profile = detect_grid(&buffer, &GridConfig::default()).unwrap();
        assert!(!profile.has_grid());
        assert_eq!(profile.rows_scanned, 11);
        assert_eq!(profile.columns_scanned, 12);
    }

    #[test]
    fn test_horizontal_only_is_not_a_grid() {
        let buffer = PixelBuffer::from_fn(1200, 600, |_, y| {
            if y % 40 == 0 {
                Rgba::rgb(60, 60, 60)
            } else {
                Rgba::rgb(0, 0, 0)
            }
        })
        .unwrap();
        let profile = detect_grid(&buffer, &GridConfig::default()).unwrap();
        assert!(profile.horizontal_lines >= 1);
        assert_eq!(profile.vertical_lines, 0);
        assert!(!profile.has_grid());
    }

    #[test]
    fn test_saturated_pixels_are_not_grid() {
        let config = GridConfig::default();
        assert!(is_grid_pixel(Rgba::rgb(60, 62, 66), &config));
        assert!(!is_grid_pixel(Rgba::rgb(60, 100, 66), &config));
        assert!(!is_grid_pixel(Rgba::rgb(200, 200, 200), &config));
        assert!(!is_grid_pixel(Rgba::rgb(10, 10, 10), &config));
    }
}
