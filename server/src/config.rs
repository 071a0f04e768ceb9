use std::path::PathBuf;

use anyhow::Context;

pub const PORT_VAR: &str = "WORKOUT_LOGGER_PORT";
pub const DIST_VAR: &str = "WORKOUT_LOGGER_DIST";
pub const LOG_DIR_VAR: &str = "WORKOUT_LOGGER_LOG_DIR";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    /// Trunk output of the frontend
    pub dist_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            dist_dir: PathBuf::from("frontend/dist"),
            log_dir: PathBuf::from("server/log"),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(port) = lookup(PORT_VAR) {
            config.port = port
                .trim()
                .parse()
                .with_context(|| format!("{PORT_VAR} is not a valid port: {port:?}"))?;
        }

        if let Some(dist_dir) = lookup(DIST_VAR) {
            config.dist_dir = dist_dir.into();
        }

        if let Some(log_dir) = lookup(LOG_DIR_VAR) {
            config.log_dir = log_dir.into();
        }

        Ok(config)
    }
}
