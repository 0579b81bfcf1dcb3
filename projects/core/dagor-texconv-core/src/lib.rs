#![doc = include_str!("../README.MD")]

pub mod batch;
pub mod channel_remap;
pub mod decode;
pub mod error;
pub mod naming;
pub mod postfix;

#[cfg(test)]
pub(crate) mod test_prelude;

pub use batch::{
    BatchObserver, BatchOutcome, BatchProcessor, BatchResult, BatchStatus, CallbackObserver,
    FileOutcome, FileReport, NoopObserver, SkipReason,
};
pub use channel_remap::{
    remap, Channel, ChannelPlane, DecodedImage, DerivedImage, RemappedImage,
};
pub use decode::{decode_bytes, decode_file};
pub use error::{BatchError, ConfigurationError, DecodeError, FileError};
pub use naming::NamingConvention;
pub use postfix::{OutputKind, PostfixConfig};
