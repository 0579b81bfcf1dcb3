//! Converting every packed texture in a directory.
//!
//! A batch is set up by [`BatchProcessor::run`]: the postfixes are
//! validated, the input directory is scanned and the output directory is
//! created. Failures up to that point are returned as [`BatchError`].
//! From then on every file is handled in isolation; its failures are
//! reported to the [`BatchObserver`] and recorded in its [`FileReport`],
//! and the next file is processed regardless.

mod enumerate;
mod observer;
#[cfg(feature = "multithreaded")]
mod parallel;
mod report;

pub use observer::{BatchObserver, CallbackObserver, NoopObserver};
pub use report::{BatchOutcome, BatchResult, BatchStatus, FileOutcome, FileReport, SkipReason};

use crate::channel_remap::remap;
use crate::decode::decode_file;
use crate::error::{BatchError, FileError};
use crate::naming::NamingConvention;
use crate::postfix::PostfixConfig;
pub use enumerate::find_dds_files;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Splits every packed texture of an input directory into separate maps.
#[derive(Debug, Clone, Default)]
pub struct BatchProcessor {
    postfixes: PostfixConfig,
}

impl BatchProcessor {
    pub fn new(postfixes: PostfixConfig) -> Self {
        Self { postfixes }
    }

    pub fn postfixes(&self) -> &PostfixConfig {
        &self.postfixes
    }

    /// Converts the `.dds` files directly inside `input_dir`, one at a time,
    /// in file name order, writing PNG maps into `output_dir`.
    ///
    /// # Returns
    ///
    /// - [`BatchOutcome::EmptyInput`] if there is nothing to convert. The
    ///   output directory is not created in that case.
    /// - [`BatchOutcome::Completed`] otherwise, even when some files failed.
    ///
    /// # Errors
    ///
    /// Only when the batch cannot start: invalid postfixes, an unreadable
    /// input directory or an output directory that cannot be created.
    pub fn run<O>(
        &self,
        input_dir: &Path,
        output_dir: &Path,
        observer: &O,
    ) -> Result<BatchOutcome, BatchError>
    where
        O: BatchObserver + ?Sized,
    {
        let Some(files) = self.prepare(input_dir, output_dir, observer)? else {
            return Ok(BatchOutcome::EmptyInput);
        };

        let owners = claim_outputs(&files, &self.postfixes);
        let total = files.len();
        let mut result = BatchResult::default();
        for (index, path) in files.into_iter().enumerate() {
            let report = process_file(path, output_dir, &self.postfixes, &owners);
            notify(observer, &report);
            observer.on_progress(index + 1, total);
            result.reports.push(report);
        }

        log_summary(&result);
        Ok(BatchOutcome::Completed(result))
    }

    /// Validates, scans `input_dir` and creates `output_dir`.
    /// Returns [`None`] when there are no files to convert.
    fn prepare<O>(
        &self,
        input_dir: &Path,
        output_dir: &Path,
        observer: &O,
    ) -> Result<Option<Vec<PathBuf>>, BatchError>
    where
        O: BatchObserver + ?Sized,
    {
        self.postfixes.validate()?;

        let files = find_dds_files(input_dir).map_err(|source| BatchError::ReadInputDir {
            path: input_dir.to_path_buf(),
            source,
        })?;
        if files.is_empty() {
            info!("No .dds files found in {}", input_dir.display());
            return Ok(None);
        }

        fs::create_dir_all(output_dir).map_err(|source| BatchError::CreateOutputDir {
            path: output_dir.to_path_buf(),
            source,
        })?;

        info!(
            "Converting {} textures from {} into {}",
            files.len(),
            input_dir.display(),
            output_dir.display()
        );
        observer.on_start(files.len());
        Ok(Some(files))
    }
}

/// Output file name to the first input, in file name order, that produces it.
type OutputOwners = HashMap<String, PathBuf>;

/// Assigns every output file name of the batch to the first input producing it.
///
/// Inputs such as `wall_d.dds` and `wall_d.DDS` map to the same outputs; only
/// the first may write them, so the result does not depend on processing order.
fn claim_outputs(files: &[PathBuf], postfixes: &PostfixConfig) -> OutputOwners {
    let mut owners = OutputOwners::new();
    for path in files {
        let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };
        let convention = NamingConvention::classify(stem);
        for kind in convention.output_kinds() {
            if let Some(name) = convention.output_file_name(stem, postfixes.postfix(*kind)) {
                owners.entry(name).or_insert_with(|| path.clone());
            }
        }
    }
    owners
}

/// Classifies, decodes, remaps and writes a single file.
fn process_file(
    path: PathBuf,
    output_dir: &Path,
    postfixes: &PostfixConfig,
    owners: &OutputOwners,
) -> FileReport {
    let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
        warn!("Skipping {}: name is not valid UTF-8", path.display());
        return FileReport {
            path,
            outcome: FileOutcome::Skipped(SkipReason::NonUtf8Name),
            input_bytes: 0,
        };
    };
    let stem = stem.to_owned();

    // Unrecognised files are never read, so they cannot fail.
    let convention = NamingConvention::classify(&stem);
    if convention == NamingConvention::Unrecognized {
        debug!("Skipping {}: unrecognised naming", path.display());
        return FileReport {
            path,
            outcome: FileOutcome::Skipped(SkipReason::UnrecognizedNaming),
            input_bytes: 0,
        };
    }

    let input_bytes = fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
    let image = match decode_file(&path) {
        Ok(image) => image,
        Err(e) => {
            warn!("Failed to decode {}: {e}", path.display());
            return FileReport {
                path,
                outcome: FileOutcome::Failed {
                    errors: vec![FileError::Decode(e)],
                    outputs: Vec::new(),
                },
                input_bytes,
            };
        }
    };
    debug!(
        "Decoded {} ({}x{}) as {convention:?}",
        path.display(),
        image.width(),
        image.height()
    );

    let mut outputs = Vec::new();
    let mut errors = Vec::new();
    for remapped in remap(&image, convention, &stem, postfixes) {
        let target = output_dir.join(&remapped.file_name);
        if let Some(first) = owners.get(&remapped.file_name).filter(|owner| **owner != path) {
            warn!(
                "Not writing {}: already produced by {}",
                target.display(),
                first.display()
            );
            errors.push(FileError::OutputConflict {
                path: target,
                first: first.clone(),
            });
            continue;
        }
        match remapped.image.save_png(&target) {
            Ok(()) => {
                debug!("Wrote {}", target.display());
                outputs.push(target);
            }
            Err(source) => {
                warn!("Failed to write {}: {source}", target.display());
                errors.push(FileError::Write {
                    path: target,
                    source,
                });
            }
        }
    }

    let outcome = if errors.is_empty() {
        FileOutcome::Converted { outputs }
    } else {
        FileOutcome::Failed { errors, outputs }
    };
    FileReport {
        path,
        outcome,
        input_bytes,
    }
}

/// Forwards the outcome of a file to the observer.
fn notify<O>(observer: &O, report: &FileReport)
where
    O: BatchObserver + ?Sized,
{
    match &report.outcome {
        FileOutcome::Converted { outputs } => observer.on_converted(&report.path, outputs),
        FileOutcome::Skipped(_) => observer.on_skipped(&report.path),
        FileOutcome::Failed { errors, .. } => {
            for error in errors {
                observer.on_error(&report.path, error);
            }
        }
    }
}

fn log_summary(result: &BatchResult) {
    info!(
        "Batch finished: {} converted, {} skipped, {} failed",
        result.converted_count(),
        result.skipped_count(),
        result.failed_count()
    );
}
