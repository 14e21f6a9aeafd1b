//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/rscalc/rscalc.toml`
//! 3. Local config: `./.rscalc.toml` (working directory)
//! 4. Environment variables: `RSCALC_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// Unified configuration for rscalc.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Default result document path, used when `--output` is not given.
    /// The reference behavior writes one fixed named output file.
    pub output_path: PathBuf,
    /// Pretty-print result documents (default: true)
    pub pretty: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("expressionResult.json"),
            pretty: true,
        }
    }
}

/// Get the XDG config directory for rscalc.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "rscalc").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("rscalc.toml"))
}

/// Get the path to the local config file in a working directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".rscalc.toml")
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory to look up `.rscalc.toml` in
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/rscalc/rscalc.toml`
    /// 3. Local config: `<local_dir>/.rscalc.toml`
    /// 4. Environment variables: `RSCALC_*` prefix
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut builder = Config::builder();

        if let Some(global_path) = global_config_path() {
            builder = builder.add_source(File::from(global_path).required(false));
        }

        if let Some(dir) = local_dir {
            builder = builder.add_source(File::from(local_config_path(dir)).required(false));
        }

        builder = builder.add_source(Environment::with_prefix("RSCALC"));

        builder
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| ApplicationError::Config {
                message: e.to_string(),
            })
    }
}

/// Template written by `rscalc config init`.
pub fn config_template() -> String {
    let defaults = Settings::default();
    format!(
        "# rscalc configuration\n\
         #\n\
         # Result document path used when --output is not given.\n\
         output_path = \"{}\"\n\
         # Pretty-print result documents.\n\
         pretty = {}\n",
        defaults.output_path.display(),
        defaults.pretty
    )
}
