//! Reading packed textures from disk into channel planes.

use crate::channel_remap::DecodedImage;
use crate::error::DecodeError;
use dagor_texconv_dds::decode_dds;
use lightweight_mmap::handles::*;
use lightweight_mmap::mmap::*;
use std::path::Path;

/// Memory maps the file at `path` and decodes its top mip level.
///
/// # Errors
///
/// - [`DecodeError::Open`] if the file cannot be opened or sized.
/// - [`DecodeError::Empty`] if the file has no content.
/// - [`DecodeError::Map`] if the file cannot be mapped.
/// - [`DecodeError::Dds`] if the content is not a decodable 4-channel DDS.
pub fn decode_file(path: &Path) -> Result<DecodedImage, DecodeError> {
    let handle = ReadOnlyFileHandle::open(path)?;
    let size = handle.size()? as usize;
    if size == 0 {
        return Err(DecodeError::Empty);
    }

    let mapping = ReadOnlyMmap::new(&handle, 0, size)?;
    decode_bytes(mapping.as_slice())
}

/// Decodes an in-memory DDS file.
pub fn decode_bytes(data: &[u8]) -> Result<DecodedImage, DecodeError> {
    if data.is_empty() {
        return Err(DecodeError::Empty);
    }
    let rgba = decode_dds(data)?;
    Ok(DecodedImage::from_rgba(&rgba))
}
