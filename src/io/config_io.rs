use std::fs;
use std::path::{Path, PathBuf};

use crate::io::trip_io::TripError;
use crate::model::config::AppConfig;

/// File name looked up when no `--config` path is given
pub const CONFIG_FILE_NAME: &str = "itinerary.toml";

/// Walk up from `start` looking for `itinerary.toml`
pub fn discover_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Read and parse a config file
pub fn read_config(path: &Path) -> Result<AppConfig, TripError> {
    let text = fs::read_to_string(path).map_err(|e| TripError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| TripError::ConfigParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load configuration: an explicit path must exist; otherwise the nearest
/// `itinerary.toml` above `start` is used, and defaults when there is none.
pub fn load_config(explicit: Option<&Path>, start: &Path) -> Result<AppConfig, TripError> {
    let path = match explicit {
        Some(p) => Some(p.to_path_buf()),
        None => discover_config(start),
    };
    match path {
        Some(p) => {
            tracing::info!(path = %p.display(), "loading config");
            read_config(&p)
        }
        None => {
            tracing::debug!("no config file found, using defaults");
            Ok(AppConfig::default())
        }
    }
}
