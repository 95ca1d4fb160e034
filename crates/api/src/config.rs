use anyhow::{Context, Result};
use ingest::GrouperConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub classifier: ClassifierConfig,
    pub grouping: GrouperConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    pub endpoint: String,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_addr: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            classifier: ClassifierConfig {
                endpoint: classify::DEFAULT_ENDPOINT.to_string(),
                request_timeout_secs: classify::DEFAULT_TIMEOUT.as_secs(),
            },
            grouping: GrouperConfig::default(),
            server: ServerConfig {
                bind_addr: "0.0.0.0:3000".to_string(),
            },
            logging: LoggingConfig {
                format: LogFormat::Pretty,
            },
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whichever `FND_*` variables `lookup` returns
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(endpoint) = lookup("FND_ENDPOINT") {
            config.classifier.endpoint = endpoint;
        }
        if let Some(raw) = lookup("FND_TIMEOUT_SECS") {
            config.classifier.request_timeout_secs = raw
                .trim()
                .parse()
                .context(format!("FND_TIMEOUT_SECS is not a number of seconds: {:?}", raw))?;
        }
        if let Some(raw) = lookup("FND_GROUP_SIZE") {
            let group_size: usize = raw
                .trim()
                .parse()
                .context(format!("FND_GROUP_SIZE is not a positive integer: {:?}", raw))?;
            anyhow::ensure!(group_size >= 1, "FND_GROUP_SIZE must be at least 1");
            config.grouping.group_size = group_size;
        }
        if let Some(addr) = lookup("FND_BIND_ADDR") {
            config.server.bind_addr = addr;
        }
        if let Some(raw) = lookup("FND_LOG_FORMAT") {
            config.logging.format = match raw.trim().to_ascii_lowercase().as_str() {
                "json" => LogFormat::Json,
                "pretty" | "text" => LogFormat::Pretty,
                other => anyhow::bail!("Unsupported FND_LOG_FORMAT: {}", other),
            };
        }

        Ok(config)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.classifier.request_timeout_secs)
    }
}
