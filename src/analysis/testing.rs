// Wed Oct 14 2026 - Alex

//! Synthetic buffers shared by the unit tests.

use crate::pixels::{DataUri, PixelBuffer, Rgba};
use std::io::Cursor;

pub const BACKGROUND: Rgba = Rgba::rgb(19, 23, 34);
pub const BULL: Rgba = Rgba::rgb(0, 200, 81);
pub const BEAR: Rgba = Rgba::rgb(239, 83, 80);

/// Dark chart with 2px candle bodies every 4px across the middle 80% of rows,
/// alternating bull and bear every body.
pub fn chart_like(width: u32, height: u32) -> PixelBuffer {
    let top = height / 10;
    let bottom = height - height / 10;
    PixelBuffer::from_fn(width, height, |x, y| {
        if y >= top && y < bottom && x % 4 < 2 {
            if (x / 4) % 2 == 0 {
                BULL
            } else {
                BEAR
            }
        } else {
            BACKGROUND
        }
    })
    .unwrap()
}

/// Left half green, right half red, on a dark background outside the middle band.
pub fn candle_blocks(width: u32, height: u32) -> PixelBuffer {
    PixelBuffer::from_fn(width, height, |x, y| {
        if y < height / 4 || y >= height * 3 / 4 {
            BACKGROUND
        } else if x < width / 2 {
            BULL
        } else {
            BEAR
        }
    })
    .unwrap()
}

/// One pixel lines every `spacing` pixels on both axes.
pub fn grid_pattern(width: u32, height: u32, background: Rgba, line: Rgba, spacing: u32) -> PixelBuffer {
    PixelBuffer::from_fn(width, height, |x, y| {
        if x % spacing == 0 || y % spacing == 0 {
            line
        } else {
            background
        }
    })
    .unwrap()
}

pub fn png_data_uri(buffer: &PixelBuffer) -> String {
    let image = image::RgbaImage::from_raw(buffer.width(), buffer.height(), buffer.data().to_vec()).unwrap();
    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, image::ImageOutputFormat::Png).unwrap();
    DataUri::encode("image/png", bytes.get_ref())
}
