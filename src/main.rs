use std::io;
use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use contentprint::cmd::{find, fingerprint, scan};
use contentprint::domain::error::CommandError;
use contentprint::domain::report::{PipelineInput, PipelineInputSource, PipelineReport};
use contentprint::engine::fingerprint::FingerprintMode;
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Debug, Parser)]
#[command(
    name = "contentprint",
    version,
    about = "Whitespace-insensitive content fingerprints"
)]
struct Cli {
    #[arg(long, global = true, default_value_t = false)]
    emit_pipeline: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fingerprint files, or stdin when no path is given.
    Fingerprint(FingerprintArgs),
    /// Fingerprint every file under a directory and group duplicates.
    Scan(ScanArgs),
    /// List files under a directory matching a fingerprint.
    Find(FindArgs),
}

#[derive(Debug, clap::Args)]
struct FingerprintArgs {
    /// Input files; `-` reads stdin.
    paths: Vec<PathBuf>,

    /// Collapse CRLF and lone CR to LF before filtering.
    #[arg(long, default_value_t = false)]
    normalize: bool,
}

#[derive(Debug, clap::Args)]
struct ScanArgs {
    #[arg(long)]
    path: PathBuf,

    #[arg(long, default_value_t = false)]
    normalize: bool,

    #[arg(long, default_value_t = false)]
    duplicates_only: bool,
}

#[derive(Debug, clap::Args)]
struct FindArgs {
    #[arg(long, allow_negative_numbers = true)]
    fingerprint: i64,

    #[arg(long)]
    path: PathBuf,

    #[arg(long, default_value_t = false)]
    normalize: bool,
}

#[derive(Serialize)]
struct CliError<'a> {
    error: &'a str,
    message: String,
    code: i32,
    details: Value,
}

fn main() {
    process::exit(run());
}

fn run() -> i32 {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => return handle_parse_error(error),
    };

    let emit_pipeline = cli.emit_pipeline;
    match cli.command {
        Commands::Fingerprint(args) => run_fingerprint(args, emit_pipeline),
        Commands::Scan(args) => run_scan(args, emit_pipeline),
        Commands::Find(args) => run_find(args, emit_pipeline),
    }
}

fn handle_parse_error(error: clap::Error) -> i32 {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            print!("{error}");
            0
        }
        _ => {
            emit_error(
                "input_usage_error",
                error.to_string(),
                json!({"kind": "cli_parse_error"}),
                3,
            );
            3
        }
    }
}

fn mode_from_flag(normalize: bool) -> FingerprintMode {
    if normalize {
        FingerprintMode::Normalized
    } else {
        FingerprintMode::Raw
    }
}

fn run_fingerprint(args: FingerprintArgs, emit_pipeline: bool) -> i32 {
    let options = fingerprint::FingerprintCommandOptions {
        mode: mode_from_flag(args.normalize),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let exit_code = match fingerprint::run(&args.paths, stdin.lock(), stdout.lock(), options) {
        Ok(_) => 0,
        Err(error) => {
            let (exit_code, error_kind) = map_command_error(&error);
            emit_error(
                error_kind,
                error.to_string(),
                json!({"command": "fingerprint"}),
                exit_code,
            );
            exit_code
        }
    };

    if emit_pipeline {
        emit_pipeline_report(&build_fingerprint_pipeline_report(&args, options));
    }
    exit_code
}

fn run_scan(args: ScanArgs, emit_pipeline: bool) -> i32 {
    let options = scan::ScanCommandOptions {
        mode: mode_from_flag(args.normalize),
        duplicates_only: args.duplicates_only,
    };

    let stdout = io::stdout();
    let exit_code = match scan::run(&args.path, stdout.lock(), options) {
        Ok(_) => 0,
        Err(error) => {
            let (exit_code, error_kind) = map_command_error(&error);
            emit_error(
                error_kind,
                error.to_string(),
                json!({"command": "scan", "path": &args.path}),
                exit_code,
            );
            exit_code
        }
    };

    if emit_pipeline {
        emit_pipeline_report(&PipelineReport::new(
            "scan",
            PipelineInput::new(vec![PipelineInputSource::path(
                "root",
                args.path.display().to_string(),
            )]),
            scan::pipeline_steps(),
            scan::deterministic_guards(),
        ));
    }
    exit_code
}

fn run_find(args: FindArgs, emit_pipeline: bool) -> i32 {
    let mode = mode_from_flag(args.normalize);

    let stdout = io::stdout();
    let exit_code = match find::run(&args.path, args.fingerprint, mode, stdout.lock()) {
        Ok(report) => find::exit_code(&report),
        Err(error) => {
            let (exit_code, error_kind) = map_command_error(&error);
            emit_error(
                error_kind,
                error.to_string(),
                json!({"command": "find", "path": &args.path}),
                exit_code,
            );
            exit_code
        }
    };

    if emit_pipeline {
        emit_pipeline_report(&PipelineReport::new(
            "find",
            PipelineInput::new(vec![PipelineInputSource::path(
                "root",
                args.path.display().to_string(),
            )]),
            find::pipeline_steps(),
            find::deterministic_guards(),
        ));
    }
    exit_code
}

fn map_command_error(error: &CommandError) -> (i32, &'static str) {
    match error {
        CommandError::Fingerprint(_) | CommandError::Scan(_) => (3, "input_usage_error"),
        CommandError::WriteOutput { .. } => (1, "internal_error"),
    }
}

fn build_fingerprint_pipeline_report(
    args: &FingerprintArgs,
    options: fingerprint::FingerprintCommandOptions,
) -> PipelineReport {
    let sources = if args.paths.is_empty() {
        vec![PipelineInputSource::stdin("input")]
    } else {
        args.paths
            .iter()
            .map(|path| {
                if path.as_os_str() == fingerprint::STDIN_LABEL {
                    PipelineInputSource::stdin("input")
                } else {
                    PipelineInputSource::path("input", path.display().to_string())
                }
            })
            .collect()
    };

    PipelineReport::new(
        "fingerprint",
        PipelineInput::new(sources),
        fingerprint::pipeline_steps(options),
        fingerprint::deterministic_guards(),
    )
}

fn emit_pipeline_report(report: &PipelineReport) {
    match serde_json::to_string(report) {
        Ok(serialized) => eprintln!("{serialized}"),
        Err(error) => emit_error(
            "internal_error",
            format!("failed to serialize pipeline report: {error}"),
            json!({"command": "emit_pipeline"}),
            1,
        ),
    }
}

fn emit_error(error: &'static str, message: String, details: Value, code: i32) {
    let payload = CliError {
        error,
        message,
        code,
        details,
    };
    match serde_json::to_string(&payload) {
        Ok(serialized) => eprintln!("{serialized}"),
        Err(_) => eprintln!(
            "{{\"error\":\"internal_error\",\"message\":\"failed to serialize error\",\"code\":1}}"
        ),
    }
}
