use std::{path::Path, path::PathBuf, time::Duration};

use ais_relay_core::{EntityTemplate, Mmsi};
use config::{Case, Config, ConfigError, File, FileFormat};
use serde::Deserialize;

pub static DEFAULT_CONFIG_PATH: &str = "var/config.yml";
pub static DEFAULT_DATASET_PATH: &str = "var/ais_vessels.csv";
pub static INTEGRATION_NAME: &str = "ais-relay";

pub const MIN_REFRESH_INTERVAL_SECONDS: u64 = 1;
pub const MAX_REFRESH_INTERVAL_SECONDS: u64 = 60;
pub const MIN_PUBLISH_INTERVAL_SECONDS: u64 = 1;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    pub lattice_ip: String,
    pub lattice_bearer_token: String,
    #[serde(default)]
    pub sandbox_token: Option<String>,
    pub entity_update_rate_seconds: u64,
    pub ais_generate_interval_seconds: i64,
    pub vessel_mmsi: Vec<Mmsi>,
    #[serde(default = "default_dataset_path")]
    pub dataset_path: PathBuf,
    #[serde(default)]
    pub log_level: LogLevel,
    #[serde(default = "default_publish_timeout", with = "humantime_serde")]
    pub publish_timeout: Duration,
    #[serde(default = "default_entity_expiry", with = "humantime_serde")]
    pub entity_expiry: Duration,
    #[serde(default)]
    pub max_retries: u32,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl Settings {
    /// Reads the yaml file at `path`, any key can be overridden through environment variables
    /// prefixed with `AIS_RELAY_`, e.g. `AIS_RELAY_LATTICE_BEARER_TOKEN`.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(
                File::from(path.as_ref())
                    .format(FileFormat::Yaml)
                    .required(true),
            )
            .add_source(
                config::Environment::with_prefix("AIS_RELAY")
                    .prefix_separator("_")
                    .separator("__")
                    .convert_case(Case::Kebab),
            )
            .build()?
            .try_deserialize()
    }

    /// How often every tracked vessel advances one record in the dataset, clamped to
    /// [`MIN_REFRESH_INTERVAL_SECONDS`, `MAX_REFRESH_INTERVAL_SECONDS`].
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(clamp_refresh_interval(self.ais_generate_interval_seconds))
    }

    /// How often the cache is published, a zero rate publishes every
    /// [`MIN_PUBLISH_INTERVAL_SECONDS`].
    pub fn publish_interval(&self) -> Duration {
        Duration::from_secs(self.entity_update_rate_seconds.max(MIN_PUBLISH_INTERVAL_SECONDS))
    }

    pub fn lattice_url(&self) -> String {
        let ip = &self.lattice_ip;
        let base = if ip.starts_with("http://") || ip.starts_with("https://") {
            ip.clone()
        } else {
            format!("https://{ip}")
        };
        format!("{}/api/v1/entities", base.trim_end_matches('/'))
    }

    pub fn entity_template(&self) -> EntityTemplate {
        EntityTemplate {
            integration_name: INTEGRATION_NAME.into(),
            expiry: chrono::Duration::from_std(self.entity_expiry)
                .unwrap_or_else(|_| EntityTemplate::default().expiry),
        }
    }
}

pub fn clamp_refresh_interval(seconds: i64) -> u64 {
    seconds.clamp(
        MIN_REFRESH_INTERVAL_SECONDS as i64,
        MAX_REFRESH_INTERVAL_SECONDS as i64,
    ) as u64
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATASET_PATH)
}

fn default_publish_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_entity_expiry() -> Duration {
    Duration::from_secs(5 * 60)
}

impl From<&LogLevel> for tracing::Level {
    fn from(value: &LogLevel) -> Self {
        match value {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}
