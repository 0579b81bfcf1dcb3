use bytesize::ByteSize;
use core::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Name of the output directory created inside the input directory when
/// no output directory is given.
pub const DEFAULT_OUTPUT_DIR_NAME: &str = "converted_textures";

/// Canonicalizes a CLI path argument that must name an existing directory.
pub fn canonicalize_input_dir(value: &str) -> Result<PathBuf, String> {
    let path = fs::canonicalize(Path::new(value)).map_err(|e| format!("Invalid path: {e}"))?;
    if !path.is_dir() {
        return Err(format!("Not a directory: {}", path.display()));
    }
    Ok(path)
}

/// The output directory used when none is given on the command line.
pub fn default_output_dir(input: &Path) -> PathBuf {
    input.join(DEFAULT_OUTPUT_DIR_NAME)
}

/// A wrapper around [`ByteSize`] that represents throughput in bytes per second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Throughput(pub ByteSize);

impl Throughput {
    /// Throughput of `bytes` processed over `elapsed`. Zero if no time passed.
    pub fn from_elapsed(bytes: u64, elapsed: Duration) -> Self {
        let seconds = elapsed.as_secs_f64();
        if seconds > 0.0 {
            Self(ByteSize((bytes as f64 / seconds) as u64))
        } else {
            Self(ByteSize(0))
        }
    }
}

impl fmt::Display for Throughput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/s", self.0)
    }
}
