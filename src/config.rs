//! Application configuration loaded from environment variables.

use std::net::{Ipv4Addr, SocketAddr};

use serde::Deserialize;

/// Log output format for the stdout subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable single-line output.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Application configuration loaded from environment variables.
///
/// Built once at startup and shared read-only for the lifetime of the process.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Deployment environment name, reported by `/api` and the `app_info` metric.
    #[serde(default = "default_app_env")]
    pub app_env: String,

    /// TCP port the HTTP listener binds on `0.0.0.0`.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log format: `text` or `json`.
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_app_env() -> String {
    "development".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_env: default_app_env(),
            port: default_port(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    ///
    /// A variable that is present but fails to parse (e.g. `PORT=abc`) is an
    /// error; defaults only apply to unset variables.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Build configuration from an explicit set of `(NAME, value)` pairs.
    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars)
    }

    /// Address the HTTP server listens on.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
