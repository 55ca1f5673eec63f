use crate::error::ConfigError;
use serde::Deserialize;
use std::env;
use std::path::Path;

pub const DEFAULT_MODEL: &str = "gpt-4";
pub const DEFAULT_TEMPERATURE: f64 = 0.3;
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_TITLE: &str = "Penilai Prompt Engineering";

/// Raw shape of the TOML config file. Keys are grouped the same way the
/// hosted secret store nests them.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(default)]
    openai: OpenAiSection,
    #[serde(default)]
    app: AppSection,
}

#[derive(Debug, Default, Deserialize)]
struct OpenAiSection {
    api_key: Option<String>,
    model: Option<String>,
    temperature: Option<f64>,
    api_base: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct AppSection {
    title: Option<String>,
    debug: Option<bool>,
}

/// Resolved process-wide configuration.
///
/// Built once at startup and passed by reference to every component that
/// needs it; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key for the model endpoint
    pub api_key: String,
    /// Model identifier to request
    pub model: String,
    /// Sampling temperature, 0 to 2
    pub temperature: f64,
    /// Base URL of the model endpoint
    pub api_base: String,
    /// Title shown above plain-text reports
    pub app_title: String,
    /// Dump raw model payloads to stderr
    pub debug: bool,
}

impl Config {
    /// Load configuration from an optional TOML file, with process
    /// environment variables as the fallback source for any value the file
    /// does not provide.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(p) => Self::read_file(p)?,
            None => FileConfig::default(),
        };
        Self::resolve(file)
    }

    fn read_file(path: &Path) -> Result<FileConfig, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Unparsable {
            path: path.to_path_buf(),
            source,
        })
    }

    fn resolve(file: FileConfig) -> Result<Self, ConfigError> {
        let api_key = file
            .openai
            .api_key
            .or_else(|| env_var("OPENAI_API_KEY"))
            .ok_or(ConfigError::MissingApiKey)?;

        let model = file
            .openai
            .model
            .or_else(|| env_var("OPENAI_MODEL"))
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let temperature = match file.openai.temperature {
            Some(value) => value,
            None => match env_var("OPENAI_TEMPERATURE") {
                Some(raw) => parse_temperature(&raw)?,
                None => DEFAULT_TEMPERATURE,
            },
        };
        if !(0.0..=2.0).contains(&temperature) {
            return Err(ConfigError::TemperatureOutOfRange(temperature));
        }

        let api_base = file
            .openai
            .api_base
            .or_else(|| env_var("OPENAI_API_BASE"))
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let app_title = file
            .app
            .title
            .or_else(|| env_var("APP_TITLE"))
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());

        let debug = file
            .app
            .debug
            .or_else(|| env_var("APP_DEBUG").map(|v| truthy(&v)))
            .unwrap_or(false);

        Ok(Self {
            api_key,
            model,
            temperature,
            api_base,
            app_title,
            debug,
        })
    }
}

fn parse_temperature(raw: &str) -> Result<f64, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidTemperature(raw.to_string()))
}

/// Empty environment values count as unset.
fn env_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
