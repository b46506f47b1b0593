//! Planar-to-RGB decoding.
//!
//! The conversion walks the raster in the same order the engine's own
//! extraction path does: output columns from the last physical row to the
//! first, byte-groups within each column in descending order, bits within
//! each byte most-significant first. Changing any of this changes the byte
//! stream consumers see, so the loop is kept literal rather than tidy.

use crate::error::DecodeError;
use crate::raster::{PlaneRaster, RgbImage};

/// Per-level channel scale: 255 / 3.
const LEVEL_SCALE: i32 = 85;

/// Decode a 4-plane packed raster into a linear RGB image.
///
/// The output axes are swapped relative to the raw plane geometry: the
/// decoded width is the raster's `ysize` and the decoded height its
/// `xsize`.
///
/// Planes 1-3 map to blue, green, red: a set bit contributes level 1, a
/// clear bit level 3. A set bit in the fourth (highlight) plane decrements
/// all three levels. Levels scale by 85 to 8-bit channels, emitted R, G, B.
///
/// # Errors
///
/// - [`DecodeError::NoSource`] when the raster holds no data, either
///   dimension is zero, `ysize` is not byte-aligned, or the data is shorter
///   than the geometry requires.
/// - [`DecodeError::UnsupportedDepth`] when fewer than 4 planes are
///   present.
pub fn decode_planes(raster: &PlaneRaster) -> Result<RgbImage, DecodeError> {
    if raster.data().is_empty() || raster.xsize() == 0 || raster.ysize() == 0 {
        return Err(DecodeError::NoSource);
    }
    if raster.planes() < 4 {
        return Err(DecodeError::UnsupportedDepth);
    }

    let width = raster.ysize() as usize;
    let height = raster.xsize() as usize;
    let psize = raster.psize() as usize;
    let stride = height;
    let data = raster.data();

    // Plane rows are packed 8 pixels to the byte; a ysize that is not a
    // multiple of 8 would truncate to psize * 8 emitted pixels per row and
    // leave the image shorter than its claimed width. A short buffer would
    // read out of bounds in the C original. Both are missing-source
    // conditions here.
    if width % 8 != 0 || data.len() < 4 * psize * stride {
        return Err(DecodeError::NoSource);
    }

    let mut pixels = Vec::with_capacity(width * height * 3);

    for x in (0..height).rev() {
        for j in (0..psize).rev() {
            let plane1 = data[j * stride + x];
            let plane2 = data[(j + psize) * stride + x];
            let plane3 = data[(j + 2 * psize) * stride + x];
            let plane4 = data[(j + 3 * psize) * stride + x];

            let mut mask = 0x80u8;
            for _ in 0..8 {
                let mut red = if plane3 & mask != 0 { 1i32 } else { 3 };
                let mut green = if plane2 & mask != 0 { 1i32 } else { 3 };
                let mut blue = if plane1 & mask != 0 { 1i32 } else { 3 };
                if plane4 & mask != 0 {
                    red -= 1;
                    green -= 1;
                    blue -= 1;
                }
                pixels.push((red * LEVEL_SCALE) as u8);
                pixels.push((green * LEVEL_SCALE) as u8);
                pixels.push((blue * LEVEL_SCALE) as u8);
                mask >>= 1;
            }
        }
    }

    Ok(RgbImage::new(width as u32, height as u32, pixels))
}
