use super::{
    claim_outputs, notify, process_file, BatchObserver, BatchOutcome, BatchProcessor, BatchResult,
};
use crate::error::BatchError;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use std::path::Path;
use std::sync::{Mutex, PoisonError};

impl BatchProcessor {
    /// Same as [`BatchProcessor::run`], with files processed in parallel on
    /// the rayon thread pool.
    ///
    /// Observer calls are serialised, and `completed` still increases by one
    /// per call. Reports come back in the same order as a sequential run.
    pub fn run_parallel<O>(
        &self,
        input_dir: &Path,
        output_dir: &Path,
        observer: &O,
    ) -> Result<BatchOutcome, BatchError>
    where
        O: BatchObserver + Sync + ?Sized,
    {
        let Some(files) = self.prepare(input_dir, output_dir, observer)? else {
            return Ok(BatchOutcome::EmptyInput);
        };

        let owners = claim_outputs(&files, &self.postfixes);
        let total = files.len();
        let completed = Mutex::new(0usize);
        let reports = files
            .into_par_iter()
            .map(|path| {
                let report = process_file(path, output_dir, &self.postfixes, &owners);

                let mut completed = completed.lock().unwrap_or_else(PoisonError::into_inner);
                *completed += 1;
                notify(observer, &report);
                observer.on_progress(*completed, total);
                report
            })
            .collect();

        let result = BatchResult { reports };
        super::log_summary(&result);
        Ok(BatchOutcome::Completed(result))
    }
}
