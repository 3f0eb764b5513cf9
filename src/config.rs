//! Server configuration loaded from TOML.

use crate::error::ConfigError;
use serde::Deserialize;
use std::borrow::Cow;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "WORKOUT_CATALOG_CONFIG";

/// Environment variable overriding `catalog_path`.
pub const CATALOG_PATH_ENV: &str = "WORKOUT_CATALOG_PATH";

const APP_DIR: &str = "workout-catalog";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Catalog JSON file. `~` is expanded to the home directory.
    pub catalog_path: PathBuf,
    /// Results returned by a search that does not ask for a limit
    pub default_limit: usize,
    /// Upper bound on any requested limit
    pub max_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: dirs::data_dir()
                .map(|dir| dir.join(APP_DIR).join("catalog.json"))
                .unwrap_or_else(|| PathBuf::from("catalog.json")),
            default_limit: 10,
            max_limit: 100,
        }
    }
}

impl Config {
    /// Resolves and loads configuration from the process environment.
    ///
    /// Lookup order: `explicit` → `$WORKOUT_CATALOG_CONFIG` →
    /// `<config dir>/workout-catalog/config.toml` (only if it exists) → defaults.
    /// `$WORKOUT_CATALOG_PATH` then overrides the catalog path.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::resolve(explicit, |key| std::env::var_os(key), dirs::config_dir())
    }

    /// [`load`](Self::load) with the environment and config directory supplied by the caller.
    fn resolve<E>(
        explicit: Option<&Path>,
        env: E,
        config_dir: Option<PathBuf>,
    ) -> Result<Self, ConfigError>
    where
        E: Fn(&str) -> Option<OsString>,
    {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| env(CONFIG_ENV).map(PathBuf::from))
            .or_else(|| {
                config_dir
                    .map(|dir| dir.join(APP_DIR).join("config.toml"))
                    .filter(|path| path.is_file())
            });

        let mut config = match path {
            Some(path) => Self::read_file(&path)?,
            None => {
                tracing::debug!("No config file found, using defaults");
                Self::default()
            }
        };

        if let Some(catalog_path) = env(CATALOG_PATH_ENV) {
            config.catalog_path = PathBuf::from(catalog_path);
        }

        config.finish()
    }

    /// Reads and validates a TOML config file. Missing keys take their default values.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        Self::read_file(path)?.finish()
    }

    fn read_file(path: &Path) -> Result<Self, ConfigError> {
        tracing::info!("Loading config from {}", path.display());
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Expands the catalog path and checks limits.
    fn finish(mut self) -> Result<Self, ConfigError> {
        if let Some(expanded) = self
            .catalog_path
            .to_str()
            .map(|raw| expand_tilde(raw).into_owned())
        {
            self.catalog_path = PathBuf::from(expanded);
        }

        if self.default_limit == 0 || self.max_limit == 0 {
            return Err(ConfigError::Invalid("limits must be at least 1".to_string()));
        }
        if self.default_limit > self.max_limit {
            return Err(ConfigError::Invalid(format!(
                "default_limit ({}) exceeds max_limit ({})",
                self.default_limit, self.max_limit
            )));
        }

        Ok(self)
    }

    /// Limit to apply for a request, falling back to the default and capped at the maximum.
    ///
    /// Always at least 1, even for a hand-built config with a zero maximum.
    pub fn effective_limit(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.default_limit)
            .min(self.max_limit)
            .max(1)
    }
}

/// Expands tilde (`~`) in a path to the user's home directory.
///
/// - `~/foo` becomes `/home/user/foo`
/// - `~` becomes `/home/user`
/// - Other paths are returned unchanged
pub fn expand_tilde(path: &str) -> Cow<'_, str> {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return Cow::Owned(home.join(stripped).display().to_string());
        }
    } else if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return Cow::Owned(home.display().to_string());
    }
    Cow::Borrowed(path)
}
