#![doc = include_str!("../README.MD")]

#[cfg(test)]
pub mod test_prelude;

pub mod dds;
pub mod decode;
pub mod error;

pub use dds::{likely_dds, parse_dds, DdsFormat, DdsInfo};
pub use decode::decode_dds;
pub use error::DdsDecodeError;
