//! Layered client configuration.
//!
//! Sources, lowest precedence first:
//! 1. `ClientConfig::default()`
//! 2. `drivetest.toml` in the working directory (optional)
//! 3. `DRIVETEST_*` environment variables, e.g. `DRIVETEST_BASE_URL`

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use drivetest_domain::{ClientConfig, DomainError};
use thiserror::Error;
use tracing::debug;

/// Prefix of the environment variables read by the loader.
pub const ENV_PREFIX: &str = "DRIVETEST";

/// Default configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "drivetest.toml";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or a value has the wrong type.
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// The values were read but do not form a usable configuration.
    #[error("invalid configuration: {0}")]
    Invalid(#[from] DomainError),
}

/// Builds a `ClientConfig` from a file and the environment.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    file: PathBuf,
    env: Option<config::Map<String, String>>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Loader reading `drivetest.toml` and the process environment.
    #[must_use]
    pub fn new() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_CONFIG_FILE),
            env: None,
        }
    }

    /// Reads the given TOML file instead of `drivetest.toml`.
    #[must_use]
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        self.file = path.as_ref().to_path_buf();
        self
    }

    /// Uses `vars` in place of the process environment.
    #[must_use]
    pub fn with_env<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env = Some(
            vars.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// Merges all sources and validates the result.
    ///
    /// A `timeout_ms` of `0` disables the timeout.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Load` if a source is unreadable or a value has
    /// the wrong type, and `ConfigError::Invalid` if the base URL is unusable.
    pub fn load(&self) -> Result<ClientConfig, ConfigError> {
        let settings = Config::builder()
            .add_source(
                File::from(self.file.as_path())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .source(self.env.clone()),
            )
            .build()?;

        let mut config: ClientConfig = settings.try_deserialize()?;
        if config.timeout_ms == Some(0) {
            config.timeout_ms = None;
        }
        config.base()?;

        debug!(
            base_url = %config.base_url,
            timeout_ms = ?config.timeout_ms,
            accept_invalid_certs = config.accept_invalid_certs,
            "configuration loaded"
        );
        Ok(config)
    }
}
