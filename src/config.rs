//! Loading of `.brewlink.json`.
//!
//! ```json
//! { "CellarPath": "/usr/local/Cellar", "SoftwarePath": "/opt/software" }
//! ```

use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::package::Roots;
use crate::runtime::Runtime;
use crate::runtime::path::resolve_against;

/// File looked up next to the executable.
pub const CONFIG_FILE_NAME: &str = ".brewlink.json";

/// Environment variable holding an explicit config path.
pub const CONFIG_ENV: &str = "BREWLINK_CONFIG";

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    #[serde(rename = "CellarPath")]
    pub cellar_path: PathBuf,
    #[serde(rename = "SoftwarePath")]
    pub software_path: PathBuf,
}

impl Config {
    /// Find the config file to use.
    ///
    /// An explicit path always wins; otherwise the first existing of
    /// `<exe dir>/.brewlink.json` and `<config dir>/brewlink/config.json`.
    #[tracing::instrument(skip(runtime))]
    pub fn locate<R: Runtime>(runtime: &R, explicit: Option<&Path>) -> Result<PathBuf, Error> {
        if let Some(path) = explicit {
            if !runtime.exists(path) {
                return Err(Error::config(path, "config file does not exist"));
            }
            return Ok(path.to_path_buf());
        }

        let candidates = default_candidates(runtime);
        for candidate in &candidates {
            debug!("Looking for config in {:?}", candidate);
            if runtime.exists(candidate) {
                return Ok(candidate.clone());
            }
        }

        let searched = candidates
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Err(Error::config(
            candidates.first().cloned().unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME)),
            format!(
                "no config file found (searched: {}); set --config or {}",
                searched, CONFIG_ENV
            ),
        ))
    }

    /// Read, parse and validate the config at `path`.
    ///
    /// A relative `path` is taken from the current directory, so the roots
    /// always come out absolute.
    #[tracing::instrument(skip(runtime))]
    pub fn load<R: Runtime>(runtime: &R, path: &Path) -> Result<Self, Error> {
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            let cwd = runtime.current_dir().map_err(|e| {
                Error::config(path, format!("cannot resolve config path: {:#}", e))
            })?;
            resolve_against(&cwd, path)
        };

        let contents = runtime
            .read_to_string(&path)
            .map_err(|e| Error::config(&path, format!("cannot read config file: {:#}", e)))?;
        let config = Self::parse(&contents, &path)?;
        config.validate(runtime, &path)?;
        Ok(config)
    }

    /// Parse JSON contents; relative roots are taken relative to the config file,
    /// which should itself be absolute.
    pub fn parse(contents: &str, path: &Path) -> Result<Self, Error> {
        let mut config: Config = serde_json::from_str(contents)
            .map_err(|e| Error::config(path, format!("invalid config file: {}", e)))?;

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        config.cellar_path = resolve_against(base, &config.cellar_path);
        config.software_path = resolve_against(base, &config.software_path);
        debug!("Loaded config: {:?}", config);
        Ok(config)
    }

    /// Both roots must exist before anything else runs.
    pub fn validate<R: Runtime>(&self, runtime: &R, path: &Path) -> Result<(), Error> {
        if !runtime.is_dir(&self.software_path) {
            return Err(Error::config(
                path,
                format!(
                    "SoftwarePath {} does not exist",
                    self.software_path.display()
                ),
            ));
        }
        if !runtime.is_dir(&self.cellar_path) {
            return Err(Error::config(
                path,
                format!("CellarPath {} does not exist", self.cellar_path.display()),
            ));
        }
        Ok(())
    }

    pub fn roots(&self) -> Roots {
        Roots::new(self.cellar_path.clone(), self.software_path.clone())
    }
}

fn default_candidates<R: Runtime>(runtime: &R) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    match runtime.current_exe() {
        Ok(exe) => {
            if let Some(dir) = exe.parent() {
                candidates.push(dir.join(CONFIG_FILE_NAME));
            }
        }
        Err(e) => debug!("Cannot locate executable: {}", e),
    }
    if let Some(dir) = runtime.config_dir() {
        candidates.push(dir.join("brewlink").join("config.json"));
    }
    candidates
}
