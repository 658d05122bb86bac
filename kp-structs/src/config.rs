use anyhow::Result;
use kp_problems::Limits;
use kp_utils::load_json;
use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, EnvFilter};

/// `RUST_LOG` overrides `level` when set. Logs always go to stderr so that
/// stdout carries only program output.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `"json"` or `"pretty"`.
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

impl LoggingConfig {
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
            _ => {
                fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
    /// Largest request body accepted by `POST /solve`.
    pub max_body_bytes: u64,
    pub limits: Limits,
    pub logging: LoggingConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5115,
            max_body_bytes: 1024 * 1024,
            limits: Limits::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ServerConfig {
    /// `config` is a json string or a path to a json file. Missing fields
    /// take their defaults.
    pub fn load(config: &str) -> Result<Self> {
        load_json::<ServerConfig>(config)
    }
}
