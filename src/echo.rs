//! Configuration echo runner.
//!
//! Resolves `appsettings.json` next to the executable, projects the known
//! fields and renders the report. Everything is rendered into a buffer
//! before anything is written, so a failure never leaves half a report.

use crate::config::{self, AppSettings, ConfigError, ConfigSnapshot};
use std::path::Path;
use std::process::ExitCode;
use tracing::{debug, info};

const REPORT_HEADER: &str = "=== Configuration Values ===";
const REPORT_FOOTER: &str = "=== Success ===";

/// Terminal state of a run together with the text to print on stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success(String),
    FileNotFound(String),
    OtherError(String),
}

impl Outcome {
    pub fn output(&self) -> &str {
        match self {
            Outcome::Success(text) | Outcome::FileNotFound(text) | Outcome::OtherError(text) => {
                text
            }
        }
    }

    pub fn status(&self) -> u8 {
        match self {
            Outcome::Success(_) => 0,
            Outcome::FileNotFound(_) | Outcome::OtherError(_) => 1,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.status())
    }
}

/// Echo the configuration found beside the running executable.
pub fn run() -> Outcome {
    match config::executable_dir() {
        Ok(dir) => run_in(&dir),
        Err(e) => failure(e),
    }
}

/// Echo the configuration found in `dir`.
pub fn run_in(dir: &Path) -> Outcome {
    let path = config::config_path(dir);

    match ConfigSnapshot::load(&path) {
        Ok(snapshot) => {
            let settings = AppSettings::from_snapshot(&snapshot);
            info!(path = %path.display(), "Configuration echoed");
            Outcome::Success(render_report(&settings, &path))
        }
        Err(e) => failure(e),
    }
}

fn failure(err: ConfigError) -> Outcome {
    debug!(error = %err, "Configuration echo failed");
    let text = render_failure(&err);
    match err {
        ConfigError::NotFound { .. } => Outcome::FileNotFound(text),
        _ => Outcome::OtherError(text),
    }
}

/// Render the success report. Missing values keep their label.
pub fn render_report(settings: &AppSettings, path: &Path) -> String {
    let fields = [
        ("Application Name", &settings.application_name),
        ("Version", &settings.version),
        ("Description", &settings.description),
        ("Environment", &settings.environment),
        ("Logging Level", &settings.log_level),
    ];

    let mut out = String::new();
    out.push_str(REPORT_HEADER);
    out.push('\n');
    for (label, value) in fields {
        out.push_str(&format!("{}: {}\n", label, value.as_deref().unwrap_or("")));
    }
    out.push_str(&format!("Configuration loaded from: {}\n", path.display()));
    out.push_str(REPORT_FOOTER);
    out.push('\n');
    out
}

/// Render a failure as printed on stdout.
pub fn render_failure(err: &ConfigError) -> String {
    let mut out = format!("ERROR: {}\n", err);
    if let ConfigError::NotFound { .. } = err {
        out.push_str(&format!(
            "Please ensure {} is in the same directory as the executable.\n",
            config::CONFIG_FILE_NAME
        ));
    }
    out
}
