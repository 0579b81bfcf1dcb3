use super::{constants::*, likely_dds};
use endian_writer::{EndianReader, LittleEndianReader};

/// Pixel format of the top mip level of a DDS file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DdsFormat {
    /// This is a DDS file, but not in a format we know.
    Unknown,
    /// a.k.a. DXT1
    BC1,
    /// a.k.a. DXT2/3
    BC2,
    /// a.k.a. DXT4/5
    BC3,
    BC6H,
    BC7,
    /// 32-bit, R in the lowest byte.
    RGBA8888,
    /// 32-bit, B in the lowest byte.
    BGRA8888,
    /// 24-bit, no alpha.
    BGR888,
}

impl DdsFormat {
    /// Size in bytes of one 4x4 block, or [`None`] for formats that are not block compressed.
    pub const fn block_size(self) -> Option<usize> {
        match self {
            DdsFormat::BC1 => Some(8),
            DdsFormat::BC2 | DdsFormat::BC3 | DdsFormat::BC6H | DdsFormat::BC7 => Some(16),
            _ => None,
        }
    }

    /// Whether texels of this format carry an alpha channel.
    /// [`DdsFormat::Unknown`] is assumed to; it is rejected as unsupported instead.
    pub const fn has_alpha(self) -> bool {
        !matches!(self, DdsFormat::BGR888)
    }
}

/// Header information of a DDS file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DdsInfo {
    pub format: DdsFormat,
    pub width: u32,
    pub height: u32,
    /// Number of mip levels in the file; always at least 1.
    pub mipmap_count: u32,
    /// Offset of the top mip level from the start of the file.
    pub data_offset: usize,
}

/// Attempts to parse the header of a DDS file from the given slice.
///
/// # Return
///
/// `None` if the file is not a DDS file, or if the length is insufficient
/// to read the headers. Unknown pixel formats are returned as
/// [`DdsFormat::Unknown`] rather than `None`.
///
/// For DX10 headers, the `DXGI_FORMAT` field determines the format.
#[inline]
pub fn parse_dds(data: &[u8]) -> Option<DdsInfo> {
    if !likely_dds(data) {
        return None;
    }

    // SAFETY: likely_dds checked data.len() >= DDS_HEADER_SIZE (128); every
    // legacy header field read below ends before that.
    let mut reader = unsafe { LittleEndianReader::new(data.as_ptr()) };
    let flags = unsafe { reader.read_u32_at(DDS_FLAGS_OFFSET as isize) };
    let height = unsafe { reader.read_u32_at(DDS_HEIGHT_OFFSET as isize) };
    let width = unsafe { reader.read_u32_at(DDS_WIDTH_OFFSET as isize) };
    let raw_mipmap_count = unsafe { reader.read_u32_at(DDS_MIPMAP_COUNT_OFFSET as isize) };
    let pixel_flags = unsafe { reader.read_u32_at(DDS_PIXELFORMAT_FLAGS_OFFSET as isize) };
    let fourcc = unsafe { reader.read_u32_at(FOURCC_OFFSET as isize) };

    let mipmap_count = if (flags & DDSD_MIPMAPCOUNT) != 0 {
        raw_mipmap_count.max(1)
    } else {
        1
    };

    let (format, data_offset) = if fourcc == FOURCC_DX10 {
        if data.len() < DDS_HEADER_SIZE + DX10_HEADER_SIZE {
            return None;
        }

        // SAFETY: checked data.len() >= 148 above.
        let dxgi_format = unsafe { reader.read_u32_at(DX10_FORMAT_OFFSET as isize) };
        (
            format_from_dxgi(dxgi_format),
            DDS_HEADER_SIZE + DX10_HEADER_SIZE,
        )
    } else if (pixel_flags & DDPF_FOURCC) != 0 {
        (format_from_fourcc(fourcc), DDS_HEADER_SIZE)
    } else if (pixel_flags & DDPF_RGB) != 0 {
        (detect_uncompressed_format(data, pixel_flags), DDS_HEADER_SIZE)
    } else {
        // Luminance, YUV, alpha-only etc.
        (DdsFormat::Unknown, DDS_HEADER_SIZE)
    };

    Some(DdsInfo {
        format,
        width,
        height,
        mipmap_count,
        data_offset,
    })
}

fn format_from_fourcc(fourcc: u32) -> DdsFormat {
    match fourcc {
        FOURCC_DXT1 => DdsFormat::BC1,
        FOURCC_DXT2 | FOURCC_DXT3 => DdsFormat::BC2,
        FOURCC_DXT4 | FOURCC_DXT5 => DdsFormat::BC3,
        _ => DdsFormat::Unknown,
    }
}

fn format_from_dxgi(dxgi_format: u32) -> DdsFormat {
    match dxgi_format {
        DXGI_FORMAT_BC1_TYPELESS | DXGI_FORMAT_BC1_UNORM | DXGI_FORMAT_BC1_UNORM_SRGB => {
            DdsFormat::BC1
        }
        DXGI_FORMAT_BC2_TYPELESS | DXGI_FORMAT_BC2_UNORM | DXGI_FORMAT_BC2_UNORM_SRGB => {
            DdsFormat::BC2
        }
        DXGI_FORMAT_BC3_TYPELESS | DXGI_FORMAT_BC3_UNORM | DXGI_FORMAT_BC3_UNORM_SRGB => {
            DdsFormat::BC3
        }
        DXGI_FORMAT_BC6H_TYPELESS | DXGI_FORMAT_BC6H_UF16 | DXGI_FORMAT_BC6H_SF16 => {
            DdsFormat::BC6H
        }
        DXGI_FORMAT_BC7_TYPELESS | DXGI_FORMAT_BC7_UNORM | DXGI_FORMAT_BC7_UNORM_SRGB => {
            DdsFormat::BC7
        }
        DXGI_FORMAT_R8G8B8A8_TYPELESS
        | DXGI_FORMAT_R8G8B8A8_UNORM
        | DXGI_FORMAT_R8G8B8A8_UNORM_SRGB
        | DXGI_FORMAT_R8G8B8A8_UINT => DdsFormat::RGBA8888,
        DXGI_FORMAT_B8G8R8A8_UNORM
        | DXGI_FORMAT_B8G8R8A8_TYPELESS
        | DXGI_FORMAT_B8G8R8A8_UNORM_SRGB => DdsFormat::BGRA8888,
        _ => DdsFormat::Unknown,
    }
}

/// Detects an uncompressed legacy format from its bit count and channel masks.
///
/// # Preconditions
///
/// The caller has checked `DDPF_RGB` and that `data` holds a full header.
fn detect_uncompressed_format(data: &[u8], pixel_flags: u32) -> DdsFormat {
    // SAFETY: the caller guarantees a full 128 byte header.
    let mut reader = unsafe { LittleEndianReader::new(data.as_ptr()) };
    let (bit_count, r_mask, g_mask, b_mask, a_mask) = unsafe {
        (
            reader.read_u32_at(DDS_PIXELFORMAT_RGBBITCOUNT_OFFSET as isize),
            reader.read_u32_at(DDS_PIXELFORMAT_RBITMASK_OFFSET as isize),
            reader.read_u32_at(DDS_PIXELFORMAT_GBITMASK_OFFSET as isize),
            reader.read_u32_at(DDS_PIXELFORMAT_BBITMASK_OFFSET as isize),
            reader.read_u32_at(DDS_PIXELFORMAT_ABITMASK_OFFSET as isize),
        )
    };
    let has_alpha = (pixel_flags & DDPF_ALPHAPIXELS) != 0;

    match (bit_count, has_alpha, (r_mask, g_mask, b_mask, a_mask)) {
        (24, _, (BGR888_RED_MASK, BGR888_GREEN_MASK, BGR888_BLUE_MASK, 0)) => DdsFormat::BGR888,
        (
            32,
            true,
            (RGBA8888_RED_MASK, RGBA8888_GREEN_MASK, RGBA8888_BLUE_MASK, RGBA8888_ALPHA_MASK),
        ) => DdsFormat::RGBA8888,
        (
            32,
            true,
            (BGRA8888_RED_MASK, BGRA8888_GREEN_MASK, BGRA8888_BLUE_MASK, BGRA8888_ALPHA_MASK),
        ) => DdsFormat::BGRA8888,
        _ => DdsFormat::Unknown,
    }
}
