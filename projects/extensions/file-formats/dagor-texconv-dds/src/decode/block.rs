//! Block compressed formats, decoded with `bcdec_rs`.
//!
//! BC1 three-colour blocks decode index 3 as transparent black. The colour
//! halves of BC2 and BC3 always use the four colour mode.

use crate::dds::DdsFormat;

/// Byte width of one decoded 4x4 block row: 4 texels of 4 bytes.
pub const BLOCK_PITCH: usize = 4 * 4;

/// Decodes one compressed block into 16 RGBA8 texels, rows `BLOCK_PITCH` bytes apart.
pub type BlockDecoder = fn(&[u8], &mut [u8], usize);

/// The decoder for `format`, or [`None`] if it is not a supported block format.
pub fn block_decoder(format: DdsFormat) -> Option<BlockDecoder> {
    match format {
        DdsFormat::BC1 => Some(bcdec_rs::bc1 as BlockDecoder),
        DdsFormat::BC2 => Some(bcdec_rs::bc2 as BlockDecoder),
        DdsFormat::BC3 => Some(bcdec_rs::bc3 as BlockDecoder),
        DdsFormat::BC7 => Some(bcdec_rs::bc7 as BlockDecoder),
        _ => None,
    }
}
