//! # Application configuration
//!
//! This module contains the configuration for the application

use chainstat::report::Source;

use std::path::PathBuf;

/// Environment variables prefix
const ENV_PREFIX: &str = "CHAINSTAT_";

/// Report rendering format
#[derive(Debug, Default, Deserialize, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Deserialize, Serialize)]
/// Application config
pub struct Config {
    #[serde(default = "default_sources")]
    sources: Vec<PathBuf>,
    #[serde(default)]
    format: Format,
}

fn default_sources() -> Vec<PathBuf> {
    vec![
        PathBuf::from("7000.json"),
        PathBuf::from("7001.json"),
        PathBuf::from("7002.json"),
    ]
}

impl Config {
    /// Try to create config from env
    pub fn try_from_env() -> anyhow::Result<Self> {
        Self::try_from_vars(std::env::vars())
    }

    /// Try to create config from the provided variables
    fn try_from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(ENV_PREFIX)
            .from_iter(vars)
            .map_err(|e| anyhow::anyhow!("could not load config from environment: {}", e))
            .and_then(Self::validate)
    }

    /// Override sources; ignored if `sources` is empty
    pub fn with_sources(mut self, sources: Vec<PathBuf>) -> Self {
        if !sources.is_empty() {
            self.sources = sources;
        }
        self
    }

    /// Override output format
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Get sources, labeled by their position
    pub fn sources(&self) -> Vec<Source> {
        self.sources
            .iter()
            .enumerate()
            .map(|(i, p)| Source::numbered(i, p))
            .collect()
    }

    /// Get output format
    pub fn format(&self) -> Format {
        self.format
    }

    fn validate(self) -> anyhow::Result<Self> {
        if self.sources.is_empty() {
            anyhow::bail!("no source provided");
        }
        Ok(self)
    }
}
