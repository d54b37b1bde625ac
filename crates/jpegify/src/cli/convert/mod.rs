//! The default `convert` command: input folder → JPEGs in the output folder.

mod progress;
mod prompt;
mod summary;

use clap::Args;
use jpegify_core::{
    available_workers, validate_workers, Config, ConversionSummary, Jpegify, JpegifyError,
};
use std::path::PathBuf;
use std::process::ExitCode;

use super::theme;
use progress::BarReporter;
use prompt::{is_attended, prompt_workers, wait_for_enter};
use summary::print_summary;

/// Arguments for the `convert` command.
#[derive(Args, Debug, Default)]
pub struct ConvertArgs {
    /// Input folder (defaults to `input` next to the executable)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output folder (defaults to `output` next to the executable)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of parallel workers (skips the prompt)
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Exit without waiting for Enter
    #[arg(long)]
    pub no_pause: bool,

    /// Print the final summary as JSON on stdout
    #[arg(long)]
    pub summary_json: bool,
}

/// Why a run stopped before converting anything.
#[derive(Debug)]
enum Abort {
    /// Operator cancelled the worker prompt
    Cancelled,
    /// Any other fatal condition, with the message to show
    Fatal(String),
}

impl From<anyhow::Error> for Abort {
    fn from(e: anyhow::Error) -> Self {
        Abort::Fatal(e.to_string())
    }
}

/// Execute the convert command.
///
/// Per-file failures still exit 0; fatal conditions exit 1. Either way the
/// console waits for Enter first unless pausing is disabled.
pub async fn execute(args: ConvertArgs, config: Config) -> anyhow::Result<ExitCode> {
    let pause = config.prompt.pause_on_exit && !args.no_pause && is_attended();
    let summary_json = args.summary_json;

    let code = match run(args, config).await {
        Ok(summary) => {
            if summary_json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            }
            ExitCode::SUCCESS
        }
        Err(Abort::Cancelled) => {
            theme::print_warning("Cancelled.");
            ExitCode::FAILURE
        }
        Err(Abort::Fatal(message)) => {
            theme::print_error(&message);
            ExitCode::FAILURE
        }
    };

    if pause {
        wait_for_enter()?;
    }
    Ok(code)
}

async fn run(args: ConvertArgs, config: Config) -> Result<ConversionSummary, Abort> {
    let jpegify = build(&args, config);
    theme::print_banner(jpegify.input_dir(), jpegify.output_dir());

    let files = jpegify.prepare().map_err(|e| Abort::Fatal(describe(&e, &jpegify)))?;
    if files.is_empty() {
        return Err(Abort::Fatal(format!(
            "No {} files in {}",
            extension_list(jpegify.config()),
            jpegify.input_dir().display()
        )));
    }
    tracing::info!("Found {} image(s) to convert", files.len());

    let max = available_workers();
    let workers = match args.workers {
        Some(n) => validate_workers(n, max).map_err(|e| Abort::Fatal(e.to_string()))?,
        None if is_attended() => prompt_workers(max)?.ok_or(Abort::Cancelled)?,
        None => {
            tracing::info!("No terminal attached; using all {} cores", max);
            max
        }
    };

    eprintln!("  Converting {} image(s) with {} worker(s)...", files.len(), workers);
    eprintln!();

    let reporter = BarReporter::new(files.len() as u64);
    let (_, summary) = jpegify.convert_all(&files, workers, reporter).await;

    print_summary(&summary);
    Ok(summary)
}

/// Apply `--input` / `--output` over the configured folders.
fn build(args: &ConvertArgs, config: Config) -> Jpegify {
    let base = Config::base_dir();
    let cwd = std::env::current_dir().unwrap_or_else(|_| base.clone());

    let input = match &args.input {
        Some(dir) => jpegify_core::config::resolve_dir(&cwd, dir),
        None => config.input_dir(&base),
    };
    let output = match &args.output {
        Some(dir) => jpegify_core::config::resolve_dir(&cwd, dir),
        None => config.output_dir(&base),
    };
    Jpegify::with_dirs(config, input, output)
}

/// Operator-facing message for a failed `prepare`.
fn describe(error: &JpegifyError, jpegify: &Jpegify) -> String {
    match error {
        JpegifyError::InputDirMissing(path) => format!(
            "Input folder not found: {}\n    Create it and put your {} images inside.",
            path.display(),
            extension_list(jpegify.config())
        ),
        other => other.to_string(),
    }
}

/// "webp / avif" style list of the configured extensions.
fn extension_list(config: &Config) -> String {
    config
        .processing
        .supported_formats
        .iter()
        .map(|f| f.trim_start_matches('.').to_lowercase())
        .collect::<Vec<_>>()
        .join(" / ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn convert_args_default_flags_are_off() {
        let args = ConvertArgs::default();
        assert!(args.input.is_none());
        assert!(args.output.is_none());
        assert!(args.workers.is_none());
        assert!(!args.no_pause);
        assert!(!args.summary_json);
    }

    #[test]
    fn extension_list_joins_formats() {
        assert_eq!(extension_list(&Config::default()), "webp / avif");
    }

    #[test]
    fn build_uses_configured_dirs_next_to_exe() {
        let jpegify = build(&ConvertArgs::default(), Config::default());
        let base = Config::base_dir();
        assert_eq!(jpegify.input_dir(), base.join("input"));
        assert_eq!(jpegify.output_dir(), base.join("output"));
    }

    #[test]
    fn build_prefers_flags() {
        let args = ConvertArgs {
            input: Some(PathBuf::from("/data/in")),
            output: Some(PathBuf::from("/data/out")),
            ..ConvertArgs::default()
        };
        let jpegify = build(&args, Config::default());
        assert_eq!(jpegify.input_dir(), Path::new("/data/in"));
        assert_eq!(jpegify.output_dir(), Path::new("/data/out"));
    }

    #[test]
    fn describe_missing_input_mentions_formats() {
        let jpegify = build(&ConvertArgs::default(), Config::default());
        let err = JpegifyError::InputDirMissing(PathBuf::from("/nope/input"));
        let message = describe(&err, &jpegify);
        assert!(message.contains("/nope/input"));
        assert!(message.contains("webp / avif"));
    }

    #[tokio::test]
    async fn run_fails_on_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let args = ConvertArgs {
            input: Some(dir.path().join("absent")),
            output: Some(dir.path().join("out")),
            workers: Some(1),
            ..ConvertArgs::default()
        };
        let result = run(args, Config::default()).await;
        assert!(matches!(result, Err(Abort::Fatal(m)) if m.contains("Input folder not found")));
    }

    #[tokio::test]
    async fn run_fails_on_empty_input() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("in")).unwrap();
        let args = ConvertArgs {
            input: Some(dir.path().join("in")),
            output: Some(dir.path().join("out")),
            workers: Some(1),
            ..ConvertArgs::default()
        };
        let result = run(args, Config::default()).await;
        assert!(matches!(result, Err(Abort::Fatal(m)) if m.starts_with("No webp / avif files")));
    }

    #[tokio::test]
    async fn run_rejects_out_of_range_worker_flag() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in");
        std::fs::create_dir(&input).unwrap();
        std::fs::write(input.join("a.webp"), b"x").unwrap();
        let args = ConvertArgs {
            input: Some(input),
            output: Some(dir.path().join("out")),
            workers: Some(0),
            ..ConvertArgs::default()
        };
        let result = run(args, Config::default()).await;
        assert!(matches!(result, Err(Abort::Fatal(m)) if m.contains("Worker count")));
    }

    #[tokio::test]
    async fn run_converts_with_worker_flag() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in");
        std::fs::create_dir(&input).unwrap();
        image::DynamicImage::new_rgb8(6, 6)
            .save_with_format(input.join("ok.webp"), image::ImageFormat::WebP)
            .unwrap();
        std::fs::write(input.join("bad.webp"), b"nope").unwrap();

        let args = ConvertArgs {
            input: Some(input),
            output: Some(dir.path().join("out")),
            workers: Some(1),
            ..ConvertArgs::default()
        };
        let summary = run(args, Config::default()).await.unwrap();
        assert_eq!(summary.total, 2);
        assert_eq!(summary.succeeded, 1);
        assert_eq!(summary.failed, 1);
        assert!(dir.path().join("out").join("ok.jpg").is_file());
    }
}
