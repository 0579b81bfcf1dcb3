//! Synthetic packed textures for batch tests.
#![allow(dead_code)]

use endian_writer::{EndianWriter, LittleEndianWriter};
use image::{Rgba, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};

const DDS_HEADER_SIZE: usize = 0x80;
const DDS_MAGIC: u32 = u32::from_le_bytes(*b"DDS ");
const DDSD_CAPS_HEIGHT_WIDTH_PIXELFORMAT: u32 = 0x1 | 0x2 | 0x4 | 0x1000;
const DDPF_ALPHAPIXELS: u32 = 0x1;
const DDPF_RGB: u32 = 0x40;

/// A legacy uncompressed DDS header with a single mip level.
fn uncompressed_header(
    width: u32,
    height: u32,
    bit_count: u32,
    flags: u32,
    masks: [u32; 4],
) -> Vec<u8> {
    let mut data = vec![0u8; DDS_HEADER_SIZE];
    unsafe {
        let mut writer = LittleEndianWriter::new(data.as_mut_ptr());
        writer.write_u32_at(DDS_MAGIC, 0x00);
        writer.write_u32_at(124, 0x04);
        writer.write_u32_at(DDSD_CAPS_HEIGHT_WIDTH_PIXELFORMAT, 0x08);
        writer.write_u32_at(height, 0x0C);
        writer.write_u32_at(width, 0x10);
        writer.write_u32_at(32, 0x4C);
        writer.write_u32_at(flags, 0x50);
        writer.write_u32_at(bit_count, 0x58);
        writer.write_u32_at(masks[0], 0x5C);
        writer.write_u32_at(masks[1], 0x60);
        writer.write_u32_at(masks[2], 0x64);
        writer.write_u32_at(masks[3], 0x68);
    }
    data
}

/// Encodes `image` as an uncompressed RGBA8888 DDS with a single mip level.
pub fn rgba_dds(image: &RgbaImage) -> Vec<u8> {
    let mut data = uncompressed_header(
        image.width(),
        image.height(),
        32,
        DDPF_RGB | DDPF_ALPHAPIXELS,
        [0x0000_00FF, 0x0000_FF00, 0x00FF_0000, 0xFF00_0000],
    );
    data.extend_from_slice(image.as_raw());
    data
}

/// A three channel BGR888 DDS where every pixel is `[r, g, b]`.
pub fn uniform_bgr_dds(width: u32, height: u32, [r, g, b]: [u8; 3]) -> Vec<u8> {
    let mut data = uncompressed_header(
        width,
        height,
        24,
        DDPF_RGB,
        [0x00FF_0000, 0x0000_FF00, 0x0000_00FF, 0],
    );
    data.extend([b, g, r].repeat((width * height) as usize));
    data
}

/// An RGBA8888 DDS where every pixel is `pixel`.
pub fn uniform_rgba_dds(width: u32, height: u32, pixel: [u8; 4]) -> Vec<u8> {
    rgba_dds(&RgbaImage::from_pixel(width, height, Rgba(pixel)))
}

/// Writes `bytes` to `dir/name` and returns the path.
pub fn write_file(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, bytes).unwrap();
    path
}

/// Writes a 4x4 uniform RGBA8888 DDS to `dir/name`.
pub fn write_uniform_dds(dir: &Path, name: &str, pixel: [u8; 4]) -> PathBuf {
    write_file(dir, name, &uniform_rgba_dds(4, 4, pixel))
}

/// Names of all entries in `dir`, sorted.
pub fn list_dir(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Asserts that the PNG at `path` is 8-bit RGB with every pixel equal to `expected`.
pub fn assert_uniform_png(path: &Path, expected: [u8; 3]) {
    let image = image::open(path).unwrap();
    assert_eq!(image.color(), image::ColorType::Rgb8, "{}", path.display());
    let rgb = image.to_rgb8();
    assert!(
        rgb.pixels().all(|p| p.0 == expected),
        "{} is not uniformly {expected:?}",
        path.display()
    );
}
