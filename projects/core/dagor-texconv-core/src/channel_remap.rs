//! Splitting packed textures into single purpose maps.
//!
//! | Convention | Output      | R | G | B   |
//! |------------|-------------|---|---|-----|
//! | `_d`       | Albedo      | R | G | B   |
//! | `_d`       | AO          | A | A | A   |
//! | `_n`       | Normal      | A | G | 255 |
//! | `_n`       | Roughness   | R | R | R   |
//! | `_n`       | Metal       | B | B | B   |
//!
//! The normal map's blue (Z) channel is a constant 255 plane. It is not
//! reconstructed from X and Y, so non-flat normals come out slightly off
//! unit length.
//!
//! Everything here is pure; writing the results is left to the caller.

use crate::naming::NamingConvention;
use crate::postfix::{OutputKind, PostfixConfig};
use image::{GrayImage, ImageFormat, Luma, Rgb, RgbImage, RgbaImage};
use std::path::Path;

/// A channel of a decoded texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red = 0,
    Green = 1,
    Blue = 2,
    Alpha = 3,
}

/// A single 8-bit channel raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelPlane(GrayImage);

impl ChannelPlane {
    /// Extracts one channel of an RGBA raster.
    pub fn extract(source: &RgbaImage, channel: Channel) -> Self {
        let index = channel as usize;
        Self(GrayImage::from_fn(source.width(), source.height(), |x, y| {
            Luma([source.get_pixel(x, y).0[index]])
        }))
    }

    /// A plane where every sample is `value`.
    pub fn constant(width: u32, height: u32, value: u8) -> Self {
        Self(GrayImage::from_pixel(width, height, Luma([value])))
    }

    pub fn width(&self) -> u32 {
        self.0.width()
    }

    pub fn height(&self) -> u32 {
        self.0.height()
    }

    /// Sample at `(x, y)`.
    ///
    /// # Panics
    ///
    /// If the coordinates are out of bounds.
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.0.get_pixel(x, y).0[0]
    }
}

/// A decoded texture, split into its four planes.
///
/// All planes share the same dimensions. An opaque source still has an
/// alpha plane; it is simply filled with 255.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    red: ChannelPlane,
    green: ChannelPlane,
    blue: ChannelPlane,
    alpha: ChannelPlane,
}

impl DecodedImage {
    pub fn from_rgba(source: &RgbaImage) -> Self {
        Self {
            red: ChannelPlane::extract(source, Channel::Red),
            green: ChannelPlane::extract(source, Channel::Green),
            blue: ChannelPlane::extract(source, Channel::Blue),
            alpha: ChannelPlane::extract(source, Channel::Alpha),
        }
    }

    pub fn width(&self) -> u32 {
        self.red.width()
    }

    pub fn height(&self) -> u32 {
        self.red.height()
    }

    pub fn channel(&self, channel: Channel) -> &ChannelPlane {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
            Channel::Alpha => &self.alpha,
        }
    }
}

/// An RGB map assembled from three planes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedImage(RgbImage);

impl DerivedImage {
    /// Merges three planes into the R, G and B channels.
    ///
    /// # Panics
    ///
    /// If the planes differ in size.
    pub fn merge(red: &ChannelPlane, green: &ChannelPlane, blue: &ChannelPlane) -> Self {
        let (width, height) = (red.width(), red.height());
        assert!(
            green.width() == width
                && green.height() == height
                && blue.width() == width
                && blue.height() == height,
            "planes must share dimensions"
        );

        let mut image = RgbImage::new(width, height);
        for (((pixel, r), g), b) in image
            .pixels_mut()
            .zip(red.0.pixels())
            .zip(green.0.pixels())
            .zip(blue.0.pixels())
        {
            *pixel = Rgb([r.0[0], g.0[0], b.0[0]]);
        }
        Self(image)
    }

    /// Copies one plane into all three channels.
    pub fn grayscale(plane: &ChannelPlane) -> Self {
        Self::merge(plane, plane, plane)
    }

    pub fn width(&self) -> u32 {
        self.0.width()
    }

    pub fn height(&self) -> u32 {
        self.0.height()
    }

    pub fn as_rgb(&self) -> &RgbImage {
        &self.0
    }

    /// Writes the map as an 8-bit RGB PNG, replacing any existing file.
    pub fn save_png(&self, path: &Path) -> Result<(), image::ImageError> {
        self.0.save_with_format(path, ImageFormat::Png)
    }
}

/// A derived map together with its output kind and file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemappedImage {
    pub kind: OutputKind,
    pub file_name: String,
    pub image: DerivedImage,
}

/// Albedo `(R, G, B)` and AO `(A, A, A)`.
pub fn albedo_ao(image: &DecodedImage) -> [DerivedImage; 2] {
    [
        DerivedImage::merge(&image.red, &image.green, &image.blue),
        DerivedImage::grayscale(&image.alpha),
    ]
}

/// Normal `(A, G, 255)`, roughness `(R, R, R)` and metal `(B, B, B)`.
pub fn normal_rough_metal(image: &DecodedImage) -> [DerivedImage; 3] {
    let white = ChannelPlane::constant(image.width(), image.height(), u8::MAX);
    [
        DerivedImage::merge(&image.alpha, &image.green, &white),
        DerivedImage::grayscale(&image.red),
        DerivedImage::grayscale(&image.blue),
    ]
}

/// Derives every map of `convention` from `image` and names it after `stem`.
///
/// Returns nothing for [`NamingConvention::Unrecognized`], or when `stem`
/// does not end in the convention's suffix.
pub fn remap(
    image: &DecodedImage,
    convention: NamingConvention,
    stem: &str,
    postfixes: &PostfixConfig,
) -> Vec<RemappedImage> {
    let derived: Vec<DerivedImage> = match convention {
        NamingConvention::AlbedoAO => albedo_ao(image).into(),
        NamingConvention::NormalRoughMetal => normal_rough_metal(image).into(),
        NamingConvention::Unrecognized => return Vec::new(),
    };

    convention
        .output_kinds()
        .iter()
        .zip(derived)
        .filter_map(|(kind, image)| {
            let file_name = convention.output_file_name(stem, postfixes.postfix(*kind))?;
            Some(RemappedImage {
                kind: *kind,
                file_name,
                image,
            })
        })
        .collect()
}
