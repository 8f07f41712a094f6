use crate::constants::{DEFAULT_LOG_FILE_NAME, ENV_PREFIX};
use config::{Config, Environment, File};
use serde::{self, Deserialize};
use simatic_address::ChannelAddressConfig;
use simatic_error::{SimaticError, SimaticResult};
use std::{ops::Deref, str::FromStr, sync::Arc};
use tracing::Level;

#[derive(Debug, Clone)]
pub struct Settings(Arc<Inner>);

impl Deref for Settings {
    type Target = Inner;
    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl Settings {
    /// Load settings from an optional TOML file, then apply environment
    /// overrides (`SIMATIC__<SECTION>__<KEY>`).
    pub fn new(config_path: &str) -> SimaticResult<Self> {
        let builder = Config::builder()
            .add_source(File::with_name(config_path).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            );
        let inner: Inner = builder.build()?.try_deserialize()?;
        Ok(Self(Arc::new(inner)))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Inner {
    #[serde(default)]
    pub general: General,
    #[serde(default)]
    pub log: Log,
    /// Channel address configurations to validate
    #[serde(default)]
    pub channels: Vec<ChannelAddressConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct General {
    /// One of `trace`, `debug`, `info`, `warn`, `error`
    #[serde(default = "General::log_level_default")]
    pub log_level: String,
}

impl Default for General {
    fn default() -> Self {
        General {
            log_level: General::log_level_default(),
        }
    }
}

impl General {
    fn log_level_default() -> String {
        "info".into()
    }

    pub fn level(&self) -> SimaticResult<Level> {
        Level::from_str(self.log_level.trim()).map_err(|_| {
            SimaticError::ConfigurationError(format!(
                "invalid general.log_level '{}'",
                self.log_level
            ))
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Log {
    /// Directory of the rolling log file; file logging is off when unset
    #[serde(default)]
    pub dir: Option<String>,
    #[serde(default = "Log::file_name_default")]
    pub file_name: String,
}

impl Default for Log {
    fn default() -> Self {
        Log {
            dir: None,
            file_name: Log::file_name_default(),
        }
    }
}

impl Log {
    fn file_name_default() -> String {
        DEFAULT_LOG_FILE_NAME.into()
    }
}
