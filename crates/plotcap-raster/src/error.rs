//! Error types for raster decoding.

use std::fmt;

/// Errors that can occur when decoding a planar raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// No raster data available (empty planes or a zero dimension).
    NoSource,
    /// Fewer than the 4 one-bit planes a true-color decode requires.
    UnsupportedDepth,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::NoSource => write!(f, "no raster data available"),
            DecodeError::UnsupportedDepth => {
                write!(f, "raster has fewer than 4 bit planes")
            }
        }
    }
}

impl std::error::Error for DecodeError {}
