//! Raw planar raster input and decoded RGB output types.

/// A raw planar framebuffer as deposited by the engine's raster backend.
///
/// # Byte layout
///
/// The buffer holds `planes * psize` byte-rows of `xsize` bytes each, where
/// `psize = ysize / 8` (8 pixels packed per byte along the y axis). The byte
/// for plane `p`, byte-group `j`, raster column `x` lives at
/// `(p * psize + j) * xsize + x`.
#[derive(Debug, Clone)]
pub struct PlaneRaster {
    xsize: u32,
    ysize: u32,
    planes: u32,
    data: Vec<u8>,
}

impl PlaneRaster {
    /// Wrap raw plane data with its geometry.
    ///
    /// No validation happens here; [`decode_planes`](crate::decode_planes)
    /// rejects rasters whose data is missing or too shallow.
    pub fn new(xsize: u32, ysize: u32, planes: u32, data: Vec<u8>) -> Self {
        Self {
            xsize,
            ysize,
            planes,
            data,
        }
    }

    /// Raster columns (becomes the decoded image's height).
    pub fn xsize(&self) -> u32 {
        self.xsize
    }

    /// Raster rows (becomes the decoded image's width).
    pub fn ysize(&self) -> u32 {
        self.ysize
    }

    /// Number of one-bit planes.
    pub fn planes(&self) -> u32 {
        self.planes
    }

    /// Byte-rows per plane.
    pub fn psize(&self) -> u32 {
        self.ysize / 8
    }

    /// Raw plane bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// An owned linear RGB image.
///
/// Invariant: `pixels.len() == width * height * 3`, established at
/// construction and never broken afterwards. A decode either produces a
/// fully populated image or nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RgbImage {
    pub(crate) fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize * 3);
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel bytes in R, G, B order, row by row.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Consume the image, yielding the pixel buffer.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }
}
