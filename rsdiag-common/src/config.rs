//! Bootstrap configuration loading and path resolution
//!
//! Every setting follows the same priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable overriding the snapshot path
pub const SNAPSHOT_ENV: &str = "RSDIAG_SNAPSHOT";

/// Environment variable overriding the report path
pub const OUTPUT_ENV: &str = "RSDIAG_OUTPUT";

/// Environment variable naming the TOML config file
pub const CONFIG_ENV: &str = "RSDIAG_CONFIG";

/// Built-in defaults used when nothing else is configured
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledDefaults {
    pub snapshot_file: PathBuf,
    /// Well-known report location, relative to the working directory
    pub output_file: PathBuf,
    pub log_level: String,
}

impl Default for CompiledDefaults {
    fn default() -> Self {
        Self {
            snapshot_file: PathBuf::from("diagnostics.json"),
            output_file: PathBuf::from("output.log"),
            log_level: "info".to_string(),
        }
    }
}

/// Contents of the optional `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TomlConfig {
    /// Collaborator snapshot to read
    #[serde(default)]
    pub snapshot_file: Option<PathBuf>,

    /// Where to write the report
    #[serde(default)]
    pub output_file: Option<PathBuf>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default)]
    pub level: Option<String>,
}

impl TomlConfig {
    /// Parse a config file that is required to exist
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Cannot read config file {}: {}", path.display(), e))
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Load the explicit config file, else the platform default, else defaults
    ///
    /// An explicitly named file must exist. A missing default file is not an
    /// error; the returned [`ConfigOrigin`] says which case applied so the
    /// caller can log it once its subscriber is installed.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<(Self, ConfigOrigin)> {
        Self::load_with_default(explicit, default_config_file())
    }

    fn load_with_default(
        explicit: Option<&Path>,
        default_file: Option<PathBuf>,
    ) -> Result<(Self, ConfigOrigin)> {
        if let Some(path) = explicit {
            return Ok((Self::load(path)?, ConfigOrigin::Explicit(path.to_path_buf())));
        }

        match default_file {
            Some(path) if path.exists() => Ok((Self::load(&path)?, ConfigOrigin::Default(path))),
            Some(path) => Ok((Self::default(), ConfigOrigin::Missing(path))),
            None => Ok((Self::default(), ConfigOrigin::NoConfigDir)),
        }
    }
}

/// Where the bootstrap configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    /// File named on the command line or in `RSDIAG_CONFIG`
    Explicit(PathBuf),
    /// Platform default file
    Default(PathBuf),
    /// Platform default file does not exist
    Missing(PathBuf),
    /// No platform config directory
    NoConfigDir,
}

impl ConfigOrigin {
    /// Warning to surface when built-in defaults were used
    pub fn fallback_warning(&self) -> Option<String> {
        match self {
            ConfigOrigin::Explicit(_) | ConfigOrigin::Default(_) => None,
            ConfigOrigin::Missing(path) => Some(format!(
                "No config file at {}, using built-in defaults",
                path.display()
            )),
            ConfigOrigin::NoConfigDir => {
                Some("Could not determine config directory, using built-in defaults".to_string())
            }
        }
    }

    /// Report the origin through `tracing`
    ///
    /// Must be called after the subscriber is initialized.
    pub fn log(&self) {
        match self {
            ConfigOrigin::Explicit(path) | ConfigOrigin::Default(path) => {
                debug!("Using config file {}", path.display());
            }
            _ => {
                if let Some(message) = self.fallback_warning() {
                    warn!("{}", message);
                }
            }
        }
    }
}

/// Platform config file location (`<config_dir>/rsdiag/config.toml`)
pub fn default_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("rsdiag").join("config.toml"))
}

/// Resolve one path setting through the four-tier priority order
pub fn resolve_path(
    cli_arg: Option<&Path>,
    env_var_name: &str,
    toml_value: Option<&Path>,
    default: &Path,
) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(env_var_name) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }

    // Priority 3: TOML config file
    if let Some(path) = toml_value {
        return path.to_path_buf();
    }

    // Priority 4: Compiled default
    default.to_path_buf()
}

/// Fully resolved settings for one report run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub snapshot_file: PathBuf,
    pub output_file: PathBuf,
    pub log_level: String,
}

impl ResolvedConfig {
    /// Merge CLI overrides, environment, TOML and compiled defaults
    pub fn resolve(
        cli_snapshot: Option<&Path>,
        cli_output: Option<&Path>,
        toml: &TomlConfig,
    ) -> Self {
        let defaults = CompiledDefaults::default();

        Self {
            snapshot_file: resolve_path(
                cli_snapshot,
                SNAPSHOT_ENV,
                toml.snapshot_file.as_deref(),
                &defaults.snapshot_file,
            ),
            output_file: resolve_path(
                cli_output,
                OUTPUT_ENV,
                toml.output_file.as_deref(),
                &defaults.output_file,
            ),
            log_level: toml
                .logging
                .level
                .clone()
                .unwrap_or(defaults.log_level),
        }
    }
}
