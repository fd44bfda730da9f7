// Mon Oct 12 2026 - Alex

use crate::analysis::AnalysisError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn channel_sum(&self) -> u32 {
        self.r as u32 + self.g as u32 + self.b as u32
    }

    pub fn brightness(&self) -> f64 {
        self.channel_sum() as f64 / 3.0
    }

    /// True when every channel is strictly within `tolerance` of `color`.
    pub fn near(&self, color: &[u8; 3], tolerance: u8) -> bool {
        self.r.abs_diff(color[0]) < tolerance
            && self.g.abs_diff(color[1]) < tolerance
            && self.b.abs_diff(color[2]) < tolerance
    }
}

/// Decoded RGBA pixels in row-major order, four bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub const CHANNELS: usize = 4;

    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, AnalysisError> {
        if width == 0 || height == 0 {
            return Err(AnalysisError::MalformedBuffer(format!(
                "zero-sized image {}x{}",
                width, height
            )));
        }

        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(Self::CHANNELS))
            .ok_or_else(|| AnalysisError::MalformedBuffer(format!("{}x{} overflows", width, height)))?;

        if data.len() != expected {
            return Err(AnalysisError::MalformedBuffer(format!(
                "expected {} bytes for {}x{}, got {}",
                expected,
                width,
                height,
                data.len()
            )));
        }

        Ok(Self { width, height, data })
    }

    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self, AnalysisError>
    where
        F: FnMut(u32, u32) -> Rgba,
    {
        let mut data = Vec::with_capacity(width as usize * height as usize * Self::CHANNELS);
        for y in 0..height {
            for x in 0..width {
                let px = f(x, y);
                data.extend_from_slice(&[px.r, px.g, px.b, px.a]);
            }
        }
        Self::new(width, height, data)
    }

    pub fn solid(width: u32, height: u32, color: Rgba) -> Result<Self, AnalysisError> {
        Self::from_fn(width, height, |_, _| color)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    pub fn pixel(&self, x: u32, y: u32) -> Result<Rgba, AnalysisError> {
        if x >= self.width || y >= self.height {
            return Err(AnalysisError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.pixel_at(y as usize * self.width as usize + x as usize)
    }

    /// Pixel by flat index into the row-major pixel sequence.
    pub fn pixel_at(&self, index: usize) -> Result<Rgba, AnalysisError> {
        let start = index * Self::CHANNELS;
        match self.data.get(start..start + Self::CHANNELS) {
            Some(px) => Ok(Rgba::new(px[0], px[1], px[2], px[3])),
            None => Err(AnalysisError::OutOfBounds {
                x: (index % self.width as usize) as u32,
                y: (index / self.width as usize) as u32,
                width: self.width,
                height: self.height,
            }),
        }
    }
}
