//! Common test imports and synthetic DDS builders.
#![allow(unused_imports)]

pub use rstest::rstest;

pub use crate::dds::constants::*;
use crate::dds::DdsFormat;
use endian_writer::{EndianWriter, LittleEndianWriter};

/// Total size of DDS header + DX10 header (used in tests)
pub const DDS_DX10_TOTAL_HEADER_SIZE: usize = DDS_HEADER_SIZE + DX10_HEADER_SIZE;

/// Writes the magic, size, flags and dimensions shared by every header.
fn write_header_base(data: &mut [u8], width: u32, height: u32) {
    assert!(data.len() >= DDS_HEADER_SIZE);
    let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };

    unsafe {
        writer.write_u32_at(DDS_MAGIC, 0);
        writer.write_u32_at(124, DDS_SIZE_OFFSET as isize);
        writer.write_u32_at(
            DDSD_CAPS | DDSD_HEIGHT | DDSD_WIDTH | DDSD_PIXELFORMAT | DDSD_LINEARSIZE,
            DDS_FLAGS_OFFSET as isize,
        );
        writer.write_u32_at(height, DDS_HEIGHT_OFFSET as isize);
        writer.write_u32_at(width, DDS_WIDTH_OFFSET as isize);
    }
}

/// Repeats `unit` to fill `len` bytes; zero fills if `unit` is empty.
fn fill_payload(len: usize, unit: &[u8]) -> Vec<u8> {
    if unit.is_empty() {
        return vec![0u8; len];
    }
    unit.iter().copied().cycle().take(len).collect()
}

/// Creates a legacy (FOURCC) block compressed DDS whose top mip level repeats `block`.
pub fn create_bc_dds(format: DdsFormat, width: u32, height: u32, block: &[u8]) -> Vec<u8> {
    let (fourcc, block_size) = match format {
        DdsFormat::BC1 => (b"DXT1", 8),
        DdsFormat::BC2 => (b"DXT3", 16),
        DdsFormat::BC3 => (b"DXT5", 16),
        _ => panic!("{format:?} has no legacy FOURCC"),
    };
    let blocks = width.div_ceil(4) as usize * height.div_ceil(4) as usize;

    let mut data = vec![0u8; DDS_HEADER_SIZE];
    write_header_base(&mut data, width, height);
    data[FOURCC_OFFSET..FOURCC_OFFSET + 4].copy_from_slice(fourcc);
    unsafe {
        let mut writer = LittleEndianWriter::new(data.as_mut_ptr());
        writer.write_u32_at(DDPF_FOURCC, DDS_PIXELFORMAT_FLAGS_OFFSET as isize);
    }

    data.extend(fill_payload(blocks * block_size, block));
    data
}

/// Creates a DDS with a DX10 header; `payload` is appended verbatim.
pub fn create_dx10_dds(dxgi_format: u32, width: u32, height: u32, payload: &[u8]) -> Vec<u8> {
    let mut data = vec![0u8; DDS_DX10_TOTAL_HEADER_SIZE];
    write_header_base(&mut data, width, height);
    data[FOURCC_OFFSET..FOURCC_OFFSET + 4].copy_from_slice(b"DX10");
    unsafe {
        let mut writer = LittleEndianWriter::new(data.as_mut_ptr());
        writer.write_u32_at(DDPF_FOURCC, DDS_PIXELFORMAT_FLAGS_OFFSET as isize);
        writer.write_u32_at(dxgi_format, DX10_FORMAT_OFFSET as isize);
    }

    data.extend_from_slice(payload);
    data
}

/// Creates a legacy uncompressed DDS (RGBA8888, BGRA8888 or BGR888);
/// `payload` is appended verbatim.
pub fn create_uncompressed_dds(format: DdsFormat, width: u32, height: u32, payload: &[u8]) -> Vec<u8> {
    let (bit_count, flags, masks) = match format {
        DdsFormat::RGBA8888 => (
            32,
            DDPF_RGB | DDPF_ALPHAPIXELS,
            [RGBA8888_RED_MASK, RGBA8888_GREEN_MASK, RGBA8888_BLUE_MASK, RGBA8888_ALPHA_MASK],
        ),
        DdsFormat::BGRA8888 => (
            32,
            DDPF_RGB | DDPF_ALPHAPIXELS,
            [BGRA8888_RED_MASK, BGRA8888_GREEN_MASK, BGRA8888_BLUE_MASK, BGRA8888_ALPHA_MASK],
        ),
        DdsFormat::BGR888 => (
            24,
            DDPF_RGB,
            [BGR888_RED_MASK, BGR888_GREEN_MASK, BGR888_BLUE_MASK, 0],
        ),
        _ => panic!("{format:?} is not an uncompressed format"),
    };

    let mut data = vec![0u8; DDS_HEADER_SIZE];
    write_header_base(&mut data, width, height);
    unsafe {
        let mut writer = LittleEndianWriter::new(data.as_mut_ptr());
        writer.write_u32_at(flags, DDS_PIXELFORMAT_FLAGS_OFFSET as isize);
        writer.write_u32_at(bit_count, DDS_PIXELFORMAT_RGBBITCOUNT_OFFSET as isize);
        writer.write_u32_at(masks[0], DDS_PIXELFORMAT_RBITMASK_OFFSET as isize);
        writer.write_u32_at(masks[1], DDS_PIXELFORMAT_GBITMASK_OFFSET as isize);
        writer.write_u32_at(masks[2], DDS_PIXELFORMAT_BBITMASK_OFFSET as isize);
        writer.write_u32_at(masks[3], DDS_PIXELFORMAT_ABITMASK_OFFSET as isize);
    }

    data.extend_from_slice(payload);
    data
}
