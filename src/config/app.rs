//! Application fields echoed by the runner.

use super::ConfigSnapshot;

pub const APPLICATION_NAME: &str = "AppSettings.ApplicationName";
pub const VERSION: &str = "AppSettings.Version";
pub const DESCRIPTION: &str = "AppSettings.Description";
pub const ENVIRONMENT: &str = "AppSettings.Environment";
pub const LOG_LEVEL: &str = "Logging.Level";

/// Application-level settings. Any of them may be absent from the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppSettings {
    /// Display name of the application.
    pub application_name: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
    /// Deployment environment, e.g. "Development" or "Production".
    pub environment: Option<String>,
    /// Logging verbosity as written in the file; only echoed, never applied.
    pub log_level: Option<String>,
}

impl AppSettings {
    pub fn from_snapshot(snapshot: &ConfigSnapshot) -> Self {
        let get = |path: &str| snapshot.get_str(path).map(str::to_owned);

        Self {
            application_name: get(APPLICATION_NAME),
            version: get(VERSION),
            description: get(DESCRIPTION),
            environment: get(ENVIRONMENT),
            log_level: get(LOG_LEVEL),
        }
    }
}
