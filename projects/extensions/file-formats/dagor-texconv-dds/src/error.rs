//! Errors raised while decoding a DDS file.

use crate::dds::DdsFormat;
use thiserror::Error;

/// Errors that can occur when decoding the top mip level of a DDS file.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DdsDecodeError {
    /// Magic header missing or the file is shorter than a DDS header.
    #[error("Not a DDS file")]
    NotADds,

    /// The file is a DDS, but its pixel format cannot be decoded.
    #[error("Unsupported DDS pixel format: {0:?}")]
    UnsupportedFormat(DdsFormat),

    /// The pixel format has no alpha plane, which every packed texture needs.
    #[error("DDS pixel format {0:?} has no alpha channel")]
    MissingAlpha(DdsFormat),

    /// Width or height is zero.
    #[error("Invalid texture dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// The file ends before the top mip level does.
    #[error("Truncated texture data: required {required} bytes, got {actual} bytes")]
    Truncated { required: usize, actual: usize },
}
