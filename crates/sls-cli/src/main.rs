// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use serde::Serialize;
use sls_cli::segment_text;
use sls_core::SlsError;
use std::env;
use std::fmt;
use std::io::Read;
use std::process;

#[derive(Debug)]
enum CliError {
    Sls(SlsError),
    Io {
        context: String,
        source: std::io::Error,
    },
    InvalidInput(String),
}

impl CliError {
    fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::Sls(SlsError::InvalidInput(_)) | Self::InvalidInput(_) => "invalid_input",
            Self::Sls(SlsError::NumericalIssue(_)) => "numerical_issue",
            Self::Sls(SlsError::ResourceLimit(_)) => "resource_limit",
            Self::Io { .. } => "io_error",
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sls(err) => write!(f, "{err}"),
            Self::Io { context, source } => write!(f, "{context}: {source}"),
            Self::InvalidInput(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Sls(err) => Some(err),
            Self::Io { source, .. } => Some(source),
            Self::InvalidInput(_) => None,
        }
    }
}

impl From<SlsError> for CliError {
    fn from(value: SlsError) -> Self {
        Self::Sls(value)
    }
}

#[derive(Serialize)]
struct ErrorEnvelope {
    error: ErrorPayload,
}

#[derive(Serialize)]
struct ErrorPayload {
    code: String,
    message: String,
}

fn main() {
    if let Err(err) = run() {
        emit_structured_error(&err);
        process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    let args = env::args().skip(1).collect::<Vec<_>>();

    let mut json = false;
    for arg in &args {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                return Ok(());
            }
            "-V" | "--version" => {
                print_version();
                return Ok(());
            }
            "--json" => json = true,
            other => {
                return Err(CliError::invalid_input(format!(
                    "unknown argument '{other}'; expected --json, --help, or --version"
                )));
            }
        }
    }

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .map_err(|source| CliError::io("failed to read stdin", source))?;

    let rendered = segment_text(input.as_str(), json)?;
    print!("{rendered}");
    if json {
        println!();
    }
    Ok(())
}

fn emit_structured_error(err: &CliError) {
    let envelope = ErrorEnvelope {
        error: ErrorPayload {
            code: err.code().to_string(),
            message: err.to_string(),
        },
    };
    match serde_json::to_string(&envelope) {
        Ok(encoded) => eprintln!("{encoded}"),
        Err(_) => eprintln!("{{\"error\":{{\"code\":\"{}\"}}}}", err.code()),
    }
}

fn print_version() {
    println!("sls {}", env!("CARGO_PKG_VERSION"));
}

fn print_help() {
    println!(
        "sls {}\n\nReads one segmentation problem from stdin and writes the optimal\npiecewise-linear partition to stdout.\n\nINPUT (whitespace-separated):\n  n          point count\n  x_i y_i    n coordinate pairs\n  C          per-segment penalty, finite and >= 0\n\nOUTPUT:\n  m          segment count\n  a b        m inclusive index ranges over the x-sorted points\n\nUSAGE:\n  sls [OPTIONS] < input.txt\n\nOPTIONS:\n  --json          Emit the full result as JSON, diagnostics included\n  -h, --help      Show help\n  -V, --version   Show version",
        env!("CARGO_PKG_VERSION")
    );
}
