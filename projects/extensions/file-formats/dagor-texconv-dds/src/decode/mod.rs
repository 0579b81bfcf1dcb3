//! Decoding of the top mip level of a DDS file into an RGBA8 image.
//!
//! Only mip 0 of a 2D texture is decoded; remaining mip levels, cube faces
//! and array slices are ignored.

pub mod block;
pub mod uncompressed;

use crate::dds::{parse_dds, DdsFormat, DdsInfo};
use crate::error::DdsDecodeError;
use block::{block_decoder, BlockDecoder, BLOCK_PITCH};
use image::{Rgba, RgbaImage};

/// Decodes the top mip level of a DDS file into an RGBA8 image.
///
/// # Errors
///
/// - [`DdsDecodeError::NotADds`] if the header cannot be parsed.
/// - [`DdsDecodeError::MissingAlpha`] for formats without an alpha plane.
/// - [`DdsDecodeError::UnsupportedFormat`] for formats that cannot be decoded.
/// - [`DdsDecodeError::InvalidDimensions`] for zero width or height.
/// - [`DdsDecodeError::Truncated`] if the file ends before the top mip level does.
pub fn decode_dds(data: &[u8]) -> Result<RgbaImage, DdsDecodeError> {
    let info = parse_dds(data).ok_or(DdsDecodeError::NotADds)?;
    if info.width == 0 || info.height == 0 {
        return Err(DdsDecodeError::InvalidDimensions {
            width: info.width,
            height: info.height,
        });
    }

    let format = info.format;
    if !format.has_alpha() {
        return Err(DdsDecodeError::MissingAlpha(format));
    }

    let payload = &data[info.data_offset..];
    match format {
        DdsFormat::RGBA8888 => uncompressed::decode_rgba8888(&info, payload),
        DdsFormat::BGRA8888 => uncompressed::decode_bgra8888(&info, payload),
        _ => match (format.block_size(), block_decoder(format)) {
            (Some(block_size), Some(decoder)) => {
                decode_blocks(&info, payload, block_size, decoder)
            }
            _ => Err(DdsDecodeError::UnsupportedFormat(format)),
        },
    }
}

/// Number of bytes required for the top mip level, or [`usize::MAX`] on overflow.
pub(crate) fn top_level_size(info: &DdsInfo, bytes_per_unit: usize, unit_dim: u32) -> usize {
    let units_wide = info.width.div_ceil(unit_dim) as usize;
    let units_high = info.height.div_ceil(unit_dim) as usize;
    units_wide
        .checked_mul(units_high)
        .and_then(|units| units.checked_mul(bytes_per_unit))
        .unwrap_or(usize::MAX)
}

/// Ensures `payload` holds at least `required` bytes.
pub(crate) fn ensure_len(payload: &[u8], required: usize) -> Result<(), DdsDecodeError> {
    if payload.len() < required {
        return Err(DdsDecodeError::Truncated {
            required,
            actual: payload.len(),
        });
    }
    Ok(())
}

/// Decodes a block compressed top mip level, cropping edge blocks to the image size.
fn decode_blocks(
    info: &DdsInfo,
    payload: &[u8],
    block_size: usize,
    decode_block: BlockDecoder,
) -> Result<RgbaImage, DdsDecodeError> {
    ensure_len(payload, top_level_size(info, block_size, 4))?;

    let blocks_wide = info.width.div_ceil(4) as usize;
    let mut image = RgbaImage::new(info.width, info.height);
    let mut texels = [0u8; 4 * BLOCK_PITCH];

    for (block_index, block) in payload.chunks_exact(block_size).enumerate() {
        let block_y = block_index / blocks_wide;
        let block_x = block_index % blocks_wide;
        if block_y as u32 * 4 >= info.height {
            break;
        }

        decode_block(block, &mut texels, BLOCK_PITCH);
        for y in 0..4 {
            let pixel_y = (block_y * 4 + y) as u32;
            if pixel_y >= info.height {
                break;
            }
            for x in 0..4 {
                let pixel_x = (block_x * 4 + x) as u32;
                if pixel_x >= info.width {
                    break;
                }
                let offset = y * BLOCK_PITCH + x * 4;
                let texel = &texels[offset..offset + 4];
                image.put_pixel(
                    pixel_x,
                    pixel_y,
                    Rgba([texel[0], texel[1], texel[2], texel[3]]),
                );
            }
        }
    }

    Ok(image)
}
