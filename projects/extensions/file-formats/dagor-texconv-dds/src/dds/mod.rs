/// Shared constants between modules.
pub mod constants;

/// Determine if a file is a DDS file.
pub mod likely_dds;

/// Parse the header of a DDS file.
pub mod parse_dds;

pub use likely_dds::*;
pub use parse_dds::*;
