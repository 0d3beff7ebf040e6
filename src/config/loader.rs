//! Layered configuration loader
//!
//! Settings come from an optional TOML file with `SLACK_*` environment
//! variables layered on top.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat, Map};

use crate::config::error::ConfigError;
use crate::config::provider::ConfigProvider;

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "SLACK";

/// Configuration loader
///
/// Sources, in order of priority (lowest first):
/// 1. the TOML file given with `--config`, if any
/// 2. `SLACK_*` environment variables
///
/// In the file the webhook is written without the prefix:
///
/// ```toml
/// webhook_url = "https://hooks.slack.com/services/T000/B000/XXXX"
/// ```
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Specific configuration file path
    config_file: Option<PathBuf>,
    /// Variables to use instead of the process environment
    environment: Option<Map<String, String>>,
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new(config_file: Option<PathBuf>) -> Self {
        Self {
            config_file,
            environment: None,
        }
    }

    /// Read the environment layer from `vars` instead of the process environment
    pub fn with_environment<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.environment = Some(
            vars.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// Load configuration from all sources
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file does not exist or cannot be parsed.
    /// Missing settings are not an error here; they are reported when read.
    pub fn load(&self) -> Result<LayeredConfig, ConfigError> {
        let builder = Config::builder();

        let builder = match self.config_file {
            Some(ref path) => Self::add_file_source(builder, path)?,
            None => builder,
        };

        // SLACK_WEBHOOK_URL -> webhook_url
        let builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .source(self.environment.clone()),
        );

        let inner = builder.build()?;
        Ok(LayeredConfig { inner })
    }

    fn add_file_source(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
        path: &Path,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::file_not_found(path.display().to_string()));
        }

        Ok(builder.add_source(File::from(path).format(FileFormat::Toml).required(true)))
    }
}

/// Merged view over every configured source
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    inner: Config,
}

impl LayeredConfig {
    /// Map a setting name such as `SLACK_WEBHOOK_URL` to its key (`webhook_url`)
    fn normalize_key(key: &str) -> String {
        let prefix = format!("{}_", ENV_PREFIX);
        key.strip_prefix(&prefix).unwrap_or(key).to_lowercase()
    }
}

impl ConfigProvider for LayeredConfig {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get_string(&Self::normalize_key(key)).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::provider::WEBHOOK_URL_KEY;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_normalize_key() {
        assert_eq!(LayeredConfig::normalize_key("SLACK_WEBHOOK_URL"), "webhook_url");
        assert_eq!(LayeredConfig::normalize_key("webhook_url"), "webhook_url");
    }

    const FILE_URL: &str = "https://hooks.slack.com/services/T0/B0/file";
    const ENV_URL: &str = "https://hooks.slack.com/services/T0/B0/env";

    fn config_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"webhook_url = "{}""#, FILE_URL).unwrap();
        file
    }

    #[test]
    fn test_load_from_file() {
        let file = config_file();

        let config = ConfigLoader::new(Some(file.path().to_path_buf()))
            .with_environment(Vec::<(String, String)>::new())
            .load()
            .unwrap();

        assert_eq!(config.get(WEBHOOK_URL_KEY).as_deref(), Some(FILE_URL));
    }

    #[test]
    fn test_load_from_environment() {
        let config = ConfigLoader::default()
            .with_environment([(WEBHOOK_URL_KEY, ENV_URL), ("UNRELATED_VAR", "x")])
            .load()
            .unwrap();

        assert_eq!(config.get(WEBHOOK_URL_KEY).as_deref(), Some(ENV_URL));
        assert_eq!(config.get("UNRELATED_VAR"), None);
    }

    #[test]
    fn test_environment_overrides_file() {
        let file = config_file();

        let config = ConfigLoader::new(Some(file.path().to_path_buf()))
            .with_environment([(WEBHOOK_URL_KEY, ENV_URL)])
            .load()
            .unwrap();

        assert_eq!(config.get(WEBHOOK_URL_KEY).as_deref(), Some(ENV_URL));
    }

    #[test]
    fn test_missing_setting_reads_as_none() {
        let config = ConfigLoader::default()
            .with_environment(Vec::<(String, String)>::new())
            .load()
            .unwrap();

        assert_eq!(config.get(WEBHOOK_URL_KEY), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_load_from_non_utf8_path() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(OsStr::from_bytes(b"slack-\xff.toml"));
        std::fs::write(&path, format!("webhook_url = \"{}\"\n", FILE_URL)).unwrap();

        let config = ConfigLoader::new(Some(path))
            .with_environment(Vec::<(String, String)>::new())
            .load()
            .unwrap();

        assert_eq!(config.get(WEBHOOK_URL_KEY).as_deref(), Some(FILE_URL));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let err = ConfigLoader::new(Some(path)).load().unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "webhook_url = = nope").unwrap();

        let result = ConfigLoader::new(Some(file.path().to_path_buf())).load();
        assert!(matches!(result, Err(ConfigError::Other(_))));
    }

    #[test]
    fn test_load_without_file() {
        assert!(ConfigLoader::default().load().is_ok());
    }
}
