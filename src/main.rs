mod config;
mod echo;

use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{Level, error};
use tracing_subscriber::{EnvFilter, fmt};

/// Diagnostics go to stderr and stay quiet unless `RUST_LOG` asks for more;
/// stdout carries only the echoed configuration.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Level::WARN.to_string()));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

fn emit(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()
}

fn main() -> ExitCode {
    init_tracing();

    let outcome = echo::run();

    if let Err(e) = emit(outcome.output()) {
        error!(error = %e, "Failed to write to stdout");
        return ExitCode::FAILURE;
    }

    outcome.exit_code()
}
