use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{env, path::Path};
use url::Url;

const DEFAULT_CONFIG_FILE_NAME: &str = "ghlookup.yaml";
const CONFIG_PATH_ENV: &str = "GHLOOKUP_CONFIG";

const DEFAULT_BASE_URL: &str = "https://api.github.com";
const DEFAULT_USER_AGENT: &str = "ghlookup";
const DEFAULT_API_VERSION: &str = "2022-11-28";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub log_level: LogLevel,
    #[serde(default)]
    pub api: ApiConfig,
}

impl Config {
    /// Loads the config from `$GHLOOKUP_CONFIG` or `ghlookup.yaml`, falling
    /// back to defaults when the file does not exist.
    pub async fn load() -> Result<Config> {
        let path =
            env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE_NAME.to_owned());

        Config::load_from(path).await
    }

    pub async fn load_from(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();

        let exists = tokio::fs::try_exists(path)
            .await
            .with_context(|| format!("Cannot access config file {}", path.display()))?;

        if !exists {
            log::debug!("no config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let config_string = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Cannot read config file {}", path.display()))?;

        let config = serde_yaml::from_str::<Config>(&config_string)
            .with_context(|| format!("Cannot parse config file {}", path.display()))?;

        Ok(config)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "ApiConfig::default_base_url")]
    pub base_url: String,
    #[serde(default = "ApiConfig::default_user_agent")]
    pub user_agent: String,
    #[serde(default = "ApiConfig::default_version")]
    pub version: String,
}

impl ApiConfig {
    pub fn base_url(&self) -> Result<Url> {
        Url::parse(&self.base_url)
            .with_context(|| format!("Invalid api base url {}", self.base_url))
    }

    fn default_base_url() -> String {
        DEFAULT_BASE_URL.to_owned()
    }

    fn default_user_agent() -> String {
        DEFAULT_USER_AGENT.to_owned()
    }

    fn default_version() -> String {
        DEFAULT_API_VERSION.to_owned()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: ApiConfig::default_base_url(),
            user_agent: ApiConfig::default_user_agent(),
            version: ApiConfig::default_version(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{fs::File, io::Write};
    use tempdir::TempDir;

    #[tokio::test]
    async fn should_use_defaults_when_file_is_missing() -> Result<()> {
        let dir = TempDir::new("config")?;

        let config = Config::load_from(dir.path().join("missing.yaml")).await?;

        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.api.base_url, "https://api.github.com");
        assert_eq!(config.api.user_agent, "ghlookup");
        assert_eq!(config.api.version, "2022-11-28");

        dir.close()?;
        Ok(())
    }

    #[tokio::test]
    async fn should_load_config_file() -> Result<()> {
        let dir = TempDir::new("config")?;
        let path = dir.path().join("ghlookup.yaml");
        File::create(&path)?.write_all(
            b"log_level: debug\napi:\n  base_url: http://localhost:8080/api\n  user_agent: tester\n",
        )?;

        let config = Config::load_from(&path).await?;

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.api.base_url, "http://localhost:8080/api");
        assert_eq!(config.api.user_agent, "tester");
        assert_eq!(config.api.version, "2022-11-28");

        dir.close()?;
        Ok(())
    }

    #[tokio::test]
    async fn should_fail_on_malformed_file() -> Result<()> {
        let dir = TempDir::new("config")?;
        let path = dir.path().join("ghlookup.yaml");
        File::create(&path)?.write_all(b"log_level: loud\n")?;

        assert!(Config::load_from(&path).await.is_err());

        dir.close()?;
        Ok(())
    }

    #[tokio::test]
    async fn should_fail_when_config_path_is_unreachable() -> Result<()> {
        let dir = TempDir::new("config")?;
        let not_a_dir = dir.path().join("plain");
        File::create(&not_a_dir)?;

        assert!(Config::load_from(not_a_dir.join("ghlookup.yaml")).await.is_err());

        dir.close()?;
        Ok(())
    }

    #[test]
    fn should_reject_invalid_base_url() {
        let api = ApiConfig {
            base_url: "not a url".to_owned(),
            ..ApiConfig::default()
        };

        assert!(api.base_url().is_err());
    }

    #[test]
    fn should_map_log_level() {
        assert_eq!(log::Level::from(LogLevel::Info), log::Level::Info);
        assert_eq!(log::Level::from(LogLevel::Trace), log::Level::Trace);
    }
}
