use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variables consulted for the weather API key, in order.
const API_KEY_ENV_VARS: &[&str] = &["KATA_WEATHER_API_KEY", "API_KEY"];

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Task list settings
    #[serde(default)]
    pub tasks: TasksConfig,

    /// Guessing game settings
    #[serde(default)]
    pub guess: GuessConfig,

    /// Weather settings
    #[serde(default)]
    pub weather: WeatherConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TasksConfig {
    /// Path to the task list file. Relative paths resolve against the
    /// working directory, matching how the program has always behaved.
    #[serde(default = "default_task_file")]
    pub file: String,
}

fn default_task_file() -> String {
    "to-do-list.txt".to_string()
}

impl Default for TasksConfig {
    fn default() -> Self {
        Self {
            file: default_task_file(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GuessConfig {
    /// Lower bound of the secret number (inclusive)
    #[serde(default = "default_guess_min")]
    pub min: i64,
    /// Upper bound of the secret number (inclusive)
    #[serde(default = "default_guess_max")]
    pub max: i64,
}

fn default_guess_min() -> i64 {
    1
}

fn default_guess_max() -> i64 {
    100
}

impl Default for GuessConfig {
    fn default() -> Self {
        Self {
            min: default_guess_min(),
            max: default_guess_max(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Geocoding endpoint base URL
    #[serde(default = "default_geocode_url")]
    pub geocode_url: String,

    /// Current conditions endpoint base URL
    #[serde(default = "default_weather_url")]
    pub weather_url: String,

    /// API key for both endpoints. Environment variables take precedence;
    /// see [`WeatherConfig::api_key`].
    #[serde(default)]
    pub api_key: Option<String>,
}

fn default_geocode_url() -> String {
    "https://maps.googleapis.com/maps/api/geocode/json".to_string()
}

fn default_weather_url() -> String {
    "https://weather.googleapis.com/v1/currentConditions:lookup".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            geocode_url: default_geocode_url(),
            weather_url: default_weather_url(),
            api_key: None,
        }
    }
}

impl WeatherConfig {
    /// Resolve the API key: `KATA_WEATHER_API_KEY`, then `API_KEY`,
    /// then the config file value.
    pub fn api_key(&self) -> Option<String> {
        for var in API_KEY_ENV_VARS {
            if let Ok(key) = std::env::var(var) {
                if !key.is_empty() {
                    return Some(key);
                }
            }
        }
        self.api_key.clone()
    }
}

impl Config {
    /// Load configuration from file, creating default if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path (used by tests)
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            let config = Self::default();
            config.save_to(config_path)?;
            return Ok(config);
        }

        let contents =
            std::fs::read_to_string(config_path).context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save configuration, creating the parent directory if needed
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(config_path, contents).context("Failed to write config file")?;

        tracing::debug!("Config saved to {}", config_path.display());
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("kata");
        Ok(config_dir.join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.tasks.file, "to-do-list.txt");
        assert_eq!(config.guess.min, 1);
        assert_eq!(config.guess.max, 100);
        assert!(config.weather.geocode_url.contains("maps.googleapis.com"));
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kata").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.guess.max, 100);

        // Second load reads the file back
        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.tasks.file, config.tasks.file);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[guess]\nmax = 50\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.guess.min, 1);
        assert_eq!(config.guess.max, 50);
        assert_eq!(config.tasks.file, "to-do-list.txt");
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not valid toml [[").unwrap();

        assert!(Config::load_from(&path).is_err());
    }
}
