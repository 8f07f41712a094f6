// Constants for the simatic tooling

/// The default configuration file name, looked up in the working directory
/// when no path is given.
pub const DEFAULT_CONFIG_FILE_NAME: &str = "simatic.toml";

/// Prefix of environment variables overriding configuration values,
/// e.g. `SIMATIC__GENERAL__LOG_LEVEL=debug`.
pub const ENV_PREFIX: &str = "SIMATIC";

pub const DEFAULT_LOG_FILE_NAME: &str = "simatic.log";
