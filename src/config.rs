use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Server configuration.
///
/// Loaded from an optional YAML file, with environment variables taking
/// precedence over file values. Every key has a default, so running with
/// no configuration at all is fine:
///
/// ```yaml
/// listen_addr: "127.0.0.1:8080"
/// document_root: "htdocs"
/// ```
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address the listener binds. A port of 0 asks the OS for a free one.
    pub listen_addr: String,
    /// Directory request paths are resolved against.
    pub document_root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
            document_root: PathBuf::from("htdocs"),
        }
    }
}

impl Config {
    /// Loads configuration from the file named by `MINIHTTPD_CONFIG` (if
    /// set), then applies `LISTEN` and `DOCUMENT_ROOT` overrides.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var_os("MINIHTTPD_CONFIG") {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };

        if let Ok(addr) = std::env::var("LISTEN") {
            cfg.listen_addr = addr;
        }
        if let Some(root) = std::env::var_os("DOCUMENT_ROOT") {
            cfg.document_root = PathBuf::from(root);
        }

        Ok(cfg)
    }

    /// Parses a YAML configuration file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("cannot read config file {:?}: {}", path, e))?;
        let cfg = serde_yaml::from_str(&text)
            .map_err(|e| anyhow::anyhow!("cannot parse config file {:?}: {}", path, e))?;
        Ok(cfg)
    }
}
