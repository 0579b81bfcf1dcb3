//! Error types for texture conversion.
//!
//! Only [`BatchError`] stops a batch, and only before any file is touched.
//! [`DecodeError`] and [`FileError`] are per-file: they are reported to the
//! [`BatchObserver`](crate::BatchObserver) and recorded in the
//! [`BatchResult`](crate::BatchResult), and the batch moves on.

use crate::postfix::OutputKind;
use dagor_texconv_dds::DdsDecodeError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Invalid [`PostfixConfig`](crate::PostfixConfig), detected before a batch starts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    /// No postfix was supplied for an output kind.
    #[error("Missing postfix for {0} maps")]
    MissingPostfix(OutputKind),

    /// The postfix for an output kind is empty.
    #[error("Postfix for {0} maps must not be empty")]
    EmptyPostfix(OutputKind),

    /// The postfix would place the output outside of the output directory.
    #[error("Postfix for {kind} maps must not contain path separators: {value:?}")]
    InvalidPostfix { kind: OutputKind, value: String },

    /// Two output kinds share a postfix, so their maps would overwrite each other.
    #[error("{first} and {second} maps share the postfix {value:?}")]
    DuplicatePostfix {
        first: OutputKind,
        second: OutputKind,
        value: String,
    },
}

/// Failure to read an input file as a packed texture.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Error opening file handle
    #[error("Failed to open file: {0}")]
    Open(#[from] lightweight_mmap::handles::HandleOpenError),

    /// Error creating memory mapping
    #[error("Failed to map file: {0}")]
    Map(#[from] lightweight_mmap::mmap::MmapError),

    /// The file has no content.
    #[error("File is empty")]
    Empty,

    /// The content is not a decodable DDS with four channels.
    #[error(transparent)]
    Dds(#[from] DdsDecodeError),
}

/// Failure while converting a single input file.
#[derive(Debug, Error)]
pub enum FileError {
    /// The input could not be decoded; nothing was written for it.
    #[error("{0}")]
    Decode(#[from] DecodeError),

    /// One derived image could not be written. Sibling outputs are unaffected.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// An earlier input of the same batch already owns this output file.
    /// The map was not written.
    #[error("{} is already produced by {}", path.display(), first.display())]
    OutputConflict { path: PathBuf, first: PathBuf },
}

/// Errors that prevent a batch from starting.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("Failed to read input directory {}: {source}", path.display())]
    ReadInputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create output directory {}: {source}", path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
