//! Classification of packed textures by the trailing suffix of their base name.

use crate::postfix::OutputKind;
use std::path::Path;

/// File extension of packed textures, without the dot.
pub const DDS_EXTENSION: &str = "dds";

/// Channel packing convention of a texture, decided from its base name.
///
/// The match is case-sensitive and anchored at the end of the base name,
/// so `door_d_old` is [`NamingConvention::Unrecognized`] while `door_old_d`
/// is [`NamingConvention::AlbedoAO`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamingConvention {
    /// `*_d`: colour in RGB, ambient occlusion in alpha.
    AlbedoAO,
    /// `*_n`: roughness in R, normal Y in G, metalness in B, normal X in A.
    NormalRoughMetal,
    /// Anything else. Never converted.
    Unrecognized,
}

impl NamingConvention {
    /// Classifies a base name (file name without extension).
    pub fn classify(stem: &str) -> Self {
        if stem.ends_with(Self::AlbedoAO.suffix()) {
            Self::AlbedoAO
        } else if stem.ends_with(Self::NormalRoughMetal.suffix()) {
            Self::NormalRoughMetal
        } else {
            Self::Unrecognized
        }
    }

    /// Classifies a path by its file stem.
    pub fn classify_path(path: &Path) -> Self {
        path.file_stem()
            .and_then(|stem| stem.to_str())
            .map_or(Self::Unrecognized, Self::classify)
    }

    /// The trailing suffix that identifies this convention.
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::AlbedoAO => "_d",
            Self::NormalRoughMetal => "_n",
            Self::Unrecognized => "",
        }
    }

    /// The maps derived from a texture of this convention, in output order.
    pub const fn output_kinds(self) -> &'static [OutputKind] {
        match self {
            Self::AlbedoAO => &[OutputKind::Albedo, OutputKind::Ao],
            Self::NormalRoughMetal => &[
                OutputKind::Normal,
                OutputKind::Roughness,
                OutputKind::Metal,
            ],
            Self::Unrecognized => &[],
        }
    }

    /// The base name with this convention's suffix removed.
    ///
    /// Returns [`None`] if the stem does not end in the suffix, or the
    /// convention is [`NamingConvention::Unrecognized`].
    pub fn strip_suffix(self, stem: &str) -> Option<&str> {
        if self == Self::Unrecognized {
            return None;
        }
        stem.strip_suffix(self.suffix())
    }

    /// File name of a derived map: the stripped base name, the postfix and `.png`.
    pub fn output_file_name(self, stem: &str, postfix: &str) -> Option<String> {
        self.strip_suffix(stem)
            .map(|base| format!("{base}{postfix}.png"))
    }
}

/// Whether a file name carries the `.dds` extension, ignoring case.
pub fn has_dds_extension(file_name: &str) -> bool {
    let lower = file_name.to_ascii_lowercase();
    lower.len() > DDS_EXTENSION.len()
        && lower.ends_with(DDS_EXTENSION)
        && lower[..lower.len() - DDS_EXTENSION.len()].ends_with('.')
}
