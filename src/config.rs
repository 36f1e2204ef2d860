use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;

/// Environment variable naming an optional YAML config file.
pub const CONFIG_PATH_ENV: &str = "MICROHTTP_CONFIG";
/// Environment variable overriding the listen address.
pub const LISTEN_ENV: &str = "LISTEN";

const DEFAULT_WHITELIST: &[&str] = &[
    "/index.html",
    "/spring.svg",
    "/spring.png",
    "/resources.html",
    "/styles.css",
    "/app.js",
    "/links.html",
    "/forms.html",
    "/classic.html",
    "/events.html",
    "/events.js",
];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
    /// Connections served at once
    pub workers: usize,
    /// Upper bound on bytes read while looking for the end of the request head
    pub read_limit: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    pub root: PathBuf,
    pub whitelist: Vec<String>,
    /// Whitelisted paths whose `{time}` placeholder is filled in per request
    pub templated: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:9999".to_string(),
            workers: 64,
            read_limit: 4096,
        }
    }
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("public"),
            whitelist: DEFAULT_WHITELIST.iter().map(|p| p.to_string()).collect(),
            templated: vec!["/classic.html".to_string()],
        }
    }
}

impl Config {
    /// Defaults, overlaid by the YAML file named in `MICROHTTP_CONFIG`, then
    /// by the `LISTEN` address.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_file(&path)?,
            Err(_) => Self::default(),
        };

        if let Ok(addr) = std::env::var(LISTEN_ENV) {
            cfg.server.listen_addr = addr;
        }

        Ok(cfg)
    }

    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path))?;
        Self::from_yaml_str(&raw).with_context(|| format!("invalid config file {}", path))
    }

    pub fn from_yaml_str(raw: &str) -> anyhow::Result<Self> {
        let cfg: Config = serde_yaml::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.server.workers == 0 {
            anyhow::bail!("server.workers must be at least 1");
        }
        if self.server.read_limit < 4 {
            anyhow::bail!("server.read_limit is too small to hold a request head");
        }
        if let Some(bad) = self.static_files.whitelist.iter().find(|p| !p.starts_with('/')) {
            anyhow::bail!("static_files.whitelist entry {:?} must start with '/'", bad);
        }
        Ok(())
    }
}
