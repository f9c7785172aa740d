use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable overriding the config file location.
const CONFIG_PATH_ENV: &str = "POGODA_CONFIG";

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Add an error
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Add a warning
    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// UI theme persisted in the `theme` cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a cookie value. Unknown values are treated as absent so a
    /// stale or tampered cookie never breaks the page.
    pub fn from_cookie_value(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,

    /// City catalog settings
    #[serde(default)]
    pub cities: CitiesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind (e.g. "127.0.0.1" or "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory with the front end's static assets
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Theme served to clients that have not picked one yet
    #[serde(default)]
    pub default_theme: Theme,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CitiesConfig {
    /// Optional JSON file with the city catalog (array of strings).
    /// When unset the built-in list is used.
    #[serde(default)]
    pub catalog_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from file, falling back to defaults when no
    /// file exists.
    ///
    /// The path is `$POGODA_CONFIG` if set, otherwise
    /// `<config dir>/pogoda/config.toml`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if an existing file cannot be read or
    /// parsed. A missing file is not an error.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::info!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file is missing, unreadable, or not
    /// valid TOML for this schema.
    pub fn load_from(path: &std::path::Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        Ok(config)
    }

    /// Load configuration and validate it
    ///
    /// Returns the config along with any validation warnings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if validation fails with critical
    /// errors, or any [`ConfigError`] from [`Config::load`].
    pub fn load_validated() -> Result<(Self, ValidationResult), ConfigError> {
        let config = Self::load()?;
        let validation = config.validate();

        if !validation.is_valid() {
            return Err(ConfigError::Invalid(validation.error_summary()));
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok((config, validation))
    }

    /// Validate the configuration, collecting errors and warnings.
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        if self.server.host.trim().is_empty() {
            result.add_error("server.host", "host must not be empty");
        }

        if self.server.port == 0 {
            result.add_error("server.port", "port 0 is not a usable listen port");
        }

        if !self.server.static_dir.is_dir() {
            result.add_warning(
                "server.static_dir",
                format!(
                    "static directory {} does not exist",
                    self.server.static_dir.display()
                ),
            );
        }

        if let Some(path) = &self.cities.catalog_file {
            if !path.is_file() {
                result.add_error(
                    "cities.catalog_file",
                    format!("catalog file {} does not exist", path.display()),
                );
            }
        }

        result
    }

    fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pogoda")
            .join("config.toml")
    }
}
