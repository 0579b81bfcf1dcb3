use crate::error::FileError;
use std::path::PathBuf;

/// Why a file was left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The base name ends in neither `_d` nor `_n`.
    UnrecognizedNaming,
    /// The base name is not valid UTF-8, so it cannot be classified.
    NonUtf8Name,
}

/// What happened to a single input file.
#[derive(Debug)]
pub enum FileOutcome {
    /// Every derived map was written.
    Converted { outputs: Vec<PathBuf> },
    /// Nothing was attempted.
    Skipped(SkipReason),
    /// Decoding failed, or at least one derived map could not be written.
    /// `outputs` lists the maps that were written regardless.
    Failed {
        errors: Vec<FileError>,
        outputs: Vec<PathBuf>,
    },
}

impl FileOutcome {
    pub fn is_converted(&self) -> bool {
        matches!(self, FileOutcome::Converted { .. })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, FileOutcome::Skipped(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FileOutcome::Failed { .. })
    }

    /// Paths of the maps written for this file.
    pub fn outputs(&self) -> &[PathBuf] {
        match self {
            FileOutcome::Converted { outputs } | FileOutcome::Failed { outputs, .. } => outputs,
            FileOutcome::Skipped(_) => &[],
        }
    }

    pub fn errors(&self) -> &[FileError] {
        match self {
            FileOutcome::Failed { errors, .. } => errors,
            _ => &[],
        }
    }
}

/// Outcome of one input file.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: FileOutcome,
    /// Size of the input file. Zero if it was skipped or could not be read.
    pub input_bytes: u64,
}

/// Whether every attempted file converted cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchStatus {
    Success,
    CompletedWithFailures,
}

/// Per file results of a batch, in processing order.
#[derive(Debug, Default)]
pub struct BatchResult {
    pub reports: Vec<FileReport>,
}

impl BatchResult {
    pub fn total(&self) -> usize {
        self.reports.len()
    }

    pub fn converted_count(&self) -> usize {
        self.reports.iter().filter(|r| r.outcome.is_converted()).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.reports.iter().filter(|r| r.outcome.is_skipped()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.reports.iter().filter(|r| r.outcome.is_failed()).count()
    }

    /// Total number of errors across all files.
    pub fn error_count(&self) -> usize {
        self.reports.iter().map(|r| r.outcome.errors().len()).sum()
    }

    /// Total size of every input file that was read.
    pub fn bytes_read(&self) -> u64 {
        self.reports.iter().map(|r| r.input_bytes).sum()
    }

    pub fn status(&self) -> BatchStatus {
        if self.failed_count() == 0 {
            BatchStatus::Success
        } else {
            BatchStatus::CompletedWithFailures
        }
    }

    /// The outcome for the input whose file name is `file_name`.
    pub fn outcome_for(&self, file_name: &str) -> Option<&FileOutcome> {
        self.reports
            .iter()
            .find(|r| r.path.file_name().is_some_and(|n| n == file_name))
            .map(|r| &r.outcome)
    }
}

/// How a batch ended.
#[derive(Debug)]
pub enum BatchOutcome {
    /// The input directory holds no `.dds` files. Nothing was created.
    EmptyInput,
    Completed(BatchResult),
}

impl BatchOutcome {
    /// The result, if any file was found.
    pub fn result(&self) -> Option<&BatchResult> {
        match self {
            BatchOutcome::EmptyInput => None,
            BatchOutcome::Completed(result) => Some(result),
        }
    }
}
