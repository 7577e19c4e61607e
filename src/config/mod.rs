//! Locating and loading `appsettings.json` from beside the running executable.
//!
//! The file is parsed with serde_json into a flattened [`ConfigSnapshot`];
//! no schema is enforced and unknown keys are kept but never read.

mod app;
mod error;
mod snapshot;

pub use app::AppSettings;
pub use error::ConfigError;
pub use snapshot::ConfigSnapshot;

use std::path::{Path, PathBuf};
use std::{env, fs, io};
use tracing::{debug, info, trace};

/// Name of the configuration file expected next to the executable.
pub const CONFIG_FILE_NAME: &str = "appsettings.json";

/// Directory holding the running binary, with symlinks resolved.
pub fn executable_dir() -> Result<PathBuf, ConfigError> {
    let exe = env::current_exe()
        .and_then(fs::canonicalize)
        .map_err(ConfigError::Locate)?;

    let dir = exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        ConfigError::Locate(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} has no parent directory", exe.display()),
        ))
    })?;

    debug!(exe = %exe.display(), dir = %dir.display(), "Resolved executable directory");
    Ok(dir)
}

/// Path of the configuration file inside `dir`.
pub fn config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE_NAME)
}

impl ConfigSnapshot {
    /// Load a snapshot from a JSON file at the given path.
    ///
    /// Returns [`ConfigError::NotFound`] when `path` is not an existing
    /// regular file; read and parse failures map to the other variants.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path)?;
        let snapshot = Self::from_json_str(&content)?;

        if snapshot.is_empty() {
            info!(path = %path.display(), "Configuration file holds no values");
        }
        debug!(path = %path.display(), entries = snapshot.len(), "Configuration loaded");
        trace!(keys = ?snapshot.keys().collect::<Vec<_>>(), "Configuration keys");
        Ok(snapshot)
    }
}
