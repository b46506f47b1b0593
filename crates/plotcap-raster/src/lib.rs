//! # plotcap-raster - Planar framebuffer decoding
//!
//! The plotting engine renders raster output into a stack of single-bit
//! planes: three base planes (blue, green, red) plus one highlight plane,
//! packed 8 pixels per byte. This crate converts that format into a plain
//! linear RGB buffer.
//!
//! ## Raster geometry
//!
//! The engine stores the raster *rotated*: the natural output width equals
//! the plane's row count and the natural output height equals its column
//! count, so [`decode_planes`] swaps axes relative to the raw plane
//! geometry. See [`PlaneRaster`] for the byte layout.
//!
//! ## Color quantization
//!
//! Each pixel gets a 2-bit level per channel from the base planes, nudged
//! down one step when the highlight bit is set, then scaled by 85 to an
//! 8-bit channel. The arithmetic is deliberately preserved bit-for-bit from
//! the engine's own extraction path; downstream consumers depend on the
//! exact byte values it produces.

mod decode;
mod error;
mod raster;

pub use decode::decode_planes;
pub use error::DecodeError;
pub use raster::{PlaneRaster, RgbImage};
