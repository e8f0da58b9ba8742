//! Runtime configuration read from the environment.
//!
//! | Variable                   | Default               |
//! |----------------------------|-----------------------|
//! | `HUNT_CATALOG_PATH`        | `data/landmarks.json` |
//! | `HUNT_PERMISSIONS_GRANTED` | `true`                |
//! | `HUNT_LOCATION_ENABLED`    | `true`                |
//! | `HUNT_MAX_GEOFENCES`       | `100`                 |
//!
//! The default catalog path is resolved against the repository root, so the
//! binary finds it from any working directory. An explicit
//! `HUNT_CATALOG_PATH` is used as given.
//!
//! Unparseable values fall back to the default with a warning.

use std::path::{Path, PathBuf};
use std::str::FromStr;

const DEFAULT_CATALOG_PATH: &str = "data/landmarks.json";
const DEFAULT_MAX_GEOFENCES: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuntConfig {
    pub catalog_path: PathBuf,
    pub permissions_granted: bool,
    pub location_enabled: bool,
    pub max_geofences: usize,
}

impl Default for HuntConfig {
    fn default() -> Self {
        Self {
            catalog_path: Self::repo_root().join(DEFAULT_CATALOG_PATH),
            permissions_granted: true,
            location_enabled: true,
            max_geofences: DEFAULT_MAX_GEOFENCES,
        }
    }
}

impl HuntConfig {
    /// Workspace root, two levels above this crate's manifest.
    pub fn repo_root() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..")
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            catalog_path: lookup("HUNT_CATALOG_PATH")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.catalog_path),
            permissions_granted: parse_or(
                &lookup,
                "HUNT_PERMISSIONS_GRANTED",
                defaults.permissions_granted,
            ),
            location_enabled: parse_or(&lookup, "HUNT_LOCATION_ENABLED", defaults.location_enabled),
            max_geofences: parse_or(&lookup, "HUNT_MAX_GEOFENCES", defaults.max_geofences),
        }
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Debug,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(key, value = %raw, ?default, "Invalid config value, using default");
            default
        }
    }
}
