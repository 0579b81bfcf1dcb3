//! Uncompressed 32-bit formats.

use super::{ensure_len, top_level_size};
use crate::dds::DdsInfo;
use crate::error::DdsDecodeError;
use image::RgbaImage;

/// Copies a tightly packed R8G8B8A8 top mip level.
pub fn decode_rgba8888(info: &DdsInfo, payload: &[u8]) -> Result<RgbaImage, DdsDecodeError> {
    let size = top_level_size(info, 4, 1);
    ensure_len(payload, size)?;
    RgbaImage::from_raw(info.width, info.height, payload[..size].to_vec()).ok_or(
        DdsDecodeError::InvalidDimensions {
            width: info.width,
            height: info.height,
        },
    )
}

/// Swizzles a tightly packed B8G8R8A8 top mip level into RGBA order.
pub fn decode_bgra8888(info: &DdsInfo, payload: &[u8]) -> Result<RgbaImage, DdsDecodeError> {
    let size = top_level_size(info, 4, 1);
    ensure_len(payload, size)?;

    let mut rgba = Vec::with_capacity(size);
    for texel in payload[..size].chunks_exact(4) {
        rgba.extend_from_slice(&[texel[2], texel[1], texel[0], texel[3]]);
    }

    RgbaImage::from_raw(info.width, info.height, rgba).ok_or(DdsDecodeError::InvalidDimensions {
        width: info.width,
        height: info.height,
    })
}
