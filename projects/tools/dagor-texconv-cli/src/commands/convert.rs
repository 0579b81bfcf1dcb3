use crate::error::CliError;
use crate::util::{canonicalize_input_dir, default_output_dir, Throughput};
use argh::FromArgs;
use bytesize::ByteSize;
use dagor_texconv_core::{
    BatchObserver, BatchOutcome, BatchProcessor, BatchResult, BatchStatus, FileError, OutputKind,
    PostfixConfig,
};
use log::info;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(FromArgs, Debug)]
/// Convert packed _d / _n textures in a directory into separate PNG maps
#[argh(subcommand, name = "convert")]
pub struct ConvertCmd {
    /// input directory path
    #[argh(option, from_str_fn(canonicalize_input_dir))]
    pub input: PathBuf,

    /// output directory path [default: <input>/converted_textures]
    #[argh(option)]
    pub output: Option<PathBuf>,

    /// postfix of albedo maps [default: _Albedo]
    #[argh(option)]
    pub albedo: Option<String>,

    /// postfix of ambient occlusion maps [default: _AO]
    #[argh(option)]
    pub ao: Option<String>,

    /// postfix of normal maps [default: _Normal]
    #[argh(option)]
    pub normal: Option<String>,

    /// postfix of roughness maps [default: _Roughness]
    #[argh(option)]
    pub roughness: Option<String>,

    /// postfix of metalness maps [default: _Metal]
    #[argh(option)]
    pub metal: Option<String>,

    /// process one file at a time
    #[argh(switch)]
    pub sequential: bool,
}

impl ConvertCmd {
    /// Postfixes from the command line, falling back to the defaults.
    fn postfixes(&self) -> PostfixConfig {
        let overrides = [
            (OutputKind::Albedo, &self.albedo),
            (OutputKind::Ao, &self.ao),
            (OutputKind::Normal, &self.normal),
            (OutputKind::Roughness, &self.roughness),
            (OutputKind::Metal, &self.metal),
        ];

        overrides
            .into_iter()
            .fold(PostfixConfig::default(), |config, (kind, value)| match value {
                Some(value) => config.with_postfix(kind, value.as_str()),
                None => config,
            })
    }
}

/// Prints progress to stdout and failures to stderr.
struct ConsoleObserver;

impl BatchObserver for ConsoleObserver {
    fn on_start(&self, total: usize) {
        println!("Found {total} textures to process\n");
    }

    fn on_progress(&self, completed: usize, total: usize) {
        println!("Processed {completed}/{total} textures...");
    }

    fn on_error(&self, path: &Path, error: &FileError) {
        eprintln!("Failed to convert {}: {error}", display_name(path));
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn handle_convert_command(cmd: ConvertCmd) -> Result<(), CliError> {
    let output = cmd
        .output
        .clone()
        .unwrap_or_else(|| default_output_dir(&cmd.input));
    let processor = BatchProcessor::new(cmd.postfixes());
    info!("Using postfixes {:?}", processor.postfixes());

    let start = Instant::now();
    let outcome = if cmd.sequential {
        processor.run(&cmd.input, &output, &ConsoleObserver)?
    } else {
        run_parallel(&processor, &cmd.input, &output)?
    };

    let result = match outcome {
        BatchOutcome::EmptyInput => {
            println!("No .dds files found in {}.", cmd.input.display());
            return Ok(());
        }
        BatchOutcome::Completed(result) => result,
    };

    print_summary(&result, &output, start);
    match result.status() {
        BatchStatus::Success => Ok(()),
        BatchStatus::CompletedWithFailures => Err(CliError::Failures {
            failed: result.failed_count(),
            total: result.total(),
        }),
    }
}

#[cfg(feature = "multithreaded")]
fn run_parallel(
    processor: &BatchProcessor,
    input: &Path,
    output: &Path,
) -> Result<BatchOutcome, dagor_texconv_core::BatchError> {
    processor.run_parallel(input, output, &ConsoleObserver)
}

#[cfg(not(feature = "multithreaded"))]
fn run_parallel(
    processor: &BatchProcessor,
    input: &Path,
    output: &Path,
) -> Result<BatchOutcome, dagor_texconv_core::BatchError> {
    processor.run(input, output, &ConsoleObserver)
}

fn print_summary(result: &BatchResult, output: &Path, start: Instant) {
    let elapsed = start.elapsed();
    let bytes_read = result.bytes_read();

    println!("\n=== Conversion Complete ===");
    println!("Converted: {}", result.converted_count());
    println!("Skipped: {}", result.skipped_count());
    println!("Failed: {}", result.failed_count());
    println!("Output directory: {}", output.display());
    println!("Time taken: {elapsed:.2?}");
    println!("Data read: {}", ByteSize(bytes_read));
    println!("Throughput: {}", Throughput::from_elapsed(bytes_read, elapsed));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(args: &[&str]) -> ConvertCmd {
        ConvertCmd::from_args(&["convert"], args).unwrap()
    }

    #[test]
    fn postfixes_default_when_not_given() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = command(&["--input", dir.path().to_str().unwrap()]);

        assert_eq!(cmd.postfixes(), PostfixConfig::default());
        assert!(cmd.output.is_none());
        assert!(!cmd.sequential);
    }

    #[test]
    fn postfix_options_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = command(&[
            "--input",
            dir.path().to_str().unwrap(),
            "--ao",
            "_Occlusion",
            "--metal",
            "_Metallic",
            "--sequential",
        ]);

        let postfixes = cmd.postfixes();
        assert_eq!(postfixes.postfix(OutputKind::Ao), "_Occlusion");
        assert_eq!(postfixes.postfix(OutputKind::Metal), "_Metallic");
        assert_eq!(postfixes.postfix(OutputKind::Albedo), "_Albedo");
        assert!(cmd.sequential);
    }

    #[test]
    fn empty_input_succeeds_without_creating_output() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = command(&["--input", dir.path().to_str().unwrap()]);

        assert!(handle_convert_command(cmd).is_ok());
        assert!(!dir.path().join("converted_textures").exists());
    }

    #[test]
    fn failed_files_fail_the_command() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken_d.dds"), b"broken").unwrap();
        let cmd = command(&["--input", dir.path().to_str().unwrap(), "--sequential"]);

        assert!(matches!(
            handle_convert_command(cmd),
            Err(CliError::Failures {
                failed: 1,
                total: 1
            })
        ));
    }

    #[test]
    fn empty_postfix_fails_before_converting() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken_d.dds"), b"broken").unwrap();
        let cmd = command(&["--input", dir.path().to_str().unwrap(), "--albedo", ""]);

        assert!(matches!(
            handle_convert_command(cmd),
            Err(CliError::Batch(_))
        ));
        assert!(!dir.path().join("converted_textures").exists());
    }
}
