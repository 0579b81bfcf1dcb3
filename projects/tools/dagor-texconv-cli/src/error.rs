use dagor_texconv_core::BatchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Batch(#[from] BatchError),
    #[error("{failed} of {total} textures failed to convert")]
    Failures { failed: usize, total: usize },
}
