// Tue Oct 13 2026 - Alex

use crate::pixels::PixelBuffer;

/// Half-open pixel rectangle `[x0, x1) x [y0, y1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl Region {
    pub fn new(x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn full(buffer: &PixelBuffer) -> Self {
        Self::new(0, 0, buffer.width(), buffer.height())
    }

    pub fn clamp_to(self, buffer: &PixelBuffer) -> Self {
        let x1 = self.x1.min(buffer.width());
        let y1 = self.y1.min(buffer.height());
        Self::new(self.x0.min(x1), self.y0.min(y1), x1, y1)
    }

    pub fn is_empty(&self) -> bool {
        self.x0 >= self.x1 || self.y0 >= self.y1
    }

    /// Grid of sample points, `stride` apart on both axes, row by row.
    pub fn samples(&self, stride: usize) -> impl Iterator<Item = (u32, u32)> + '_ {
        let stride = stride.max(1);
        (self.y0..self.y1)
            .step_by(stride)
            .flat_map(move |y| (self.x0..self.x1).step_by(stride).map(move |x| (x, y)))
    }
}

/// `floor(dimension * fraction)`.
pub fn fraction_floor(dimension: u32, fraction: f64) -> u32 {
    (dimension as f64 * fraction).floor() as u32
}

/// Smallest integer `n` with `n >= dimension * fraction`, i.e. the exclusive
/// bound for `i < dimension * fraction`.
pub fn fraction_ceil(dimension: u32, fraction: f64) -> u32 {
    ((dimension as f64 * fraction).ceil() as u32).min(dimension)
}
