//! Runtime configuration.
//!
//! Layers, later wins: defaults, TOML file, environment (`.env` is loaded
//! first), command-line overrides applied by the binary.

use crate::display::ExcludeKeys;
use crate::prospect::ProspectField;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const DEFAULT_CONFIG_FILE: &str = "coldmail.toml";

pub const ENV_BACKEND_URL: &str = "BACKEND_URL";
pub const ENV_BACKEND_TIMEOUT: &str = "BACKEND_TIMEOUT_SECS";
pub const ENV_LLM_API_KEY: &str = "GROQ_API_KEY";
pub const ENV_MONGO_URI: &str = "MONGO_URI";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Invalid backend URL '{0}': {1}")]
    InvalidUrl(String, url::ParseError),
    #[error("Backend URL must use http or https: {0}")]
    UnsupportedScheme(String),
    #[error("Invalid value for {var}: {value}")]
    InvalidEnv { var: &'static str, value: String },
    #[error("Unknown section in display.exclusions: {0}")]
    UnknownSection(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BackendConfig {
    pub base_url: Url,
    /// No timeout when unset.
    pub timeout_secs: Option<u64>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: parse_base_url(DEFAULT_BACKEND_URL).expect("default backend URL is valid"),
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FeedbackConfig {
    #[serde(default)]
    pub require_person_name: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayConfig {
    pub exclusions: ExcludeKeys,
}

/// Credentials of collaborators the page does not call itself. They are
/// read so startup can report what is configured.
#[derive(Clone, Default)]
pub struct Credentials {
    pub llm_api_key: Option<String>,
    pub mongo_uri: Option<String>,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("llm_api_key", &self.llm_api_key.as_ref().map(|_| "<redacted>"))
            .field("mongo_uri", &self.mongo_uri.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub backend: BackendConfig,
    pub feedback: FeedbackConfig,
    pub display: DisplayConfig,
    pub credentials: Credentials,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    backend: FileBackend,
    #[serde(default)]
    feedback: FeedbackConfig,
    #[serde(default)]
    display: FileDisplay,
}

#[derive(Debug, Default, Deserialize)]
struct FileBackend {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct FileDisplay {
    #[serde(default)]
    exclusions: HashMap<String, Vec<String>>,
}

impl Config {
    /// Full load: `path` (or `coldmail.toml` if present), then process
    /// environment. `.env` is expected to be loaded into the environment
    /// by the caller.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };
        config.apply_env(|var| std::env::var(var).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file: FileConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_file_config(file)
    }

    fn from_file_config(file: FileConfig) -> Result<Self, ConfigError> {
        let mut backend = BackendConfig::default();
        if let Some(url) = file.backend.base_url {
            backend.base_url = parse_base_url(&url)?;
        }
        backend.timeout_secs = file.backend.timeout_secs;

        Ok(Self {
            backend,
            feedback: file.feedback,
            display: DisplayConfig {
                exclusions: parse_exclusions(file.display.exclusions)?,
            },
            credentials: Credentials::default(),
        })
    }

    /// Applies environment overrides read through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        if let Some(url) = lookup(ENV_BACKEND_URL) {
            self.backend.base_url = parse_base_url(&url)?;
        }
        if let Some(raw) = lookup(ENV_BACKEND_TIMEOUT) {
            let secs = raw.trim().parse::<u64>().map_err(|_| ConfigError::InvalidEnv {
                var: ENV_BACKEND_TIMEOUT,
                value: raw.clone(),
            })?;
            self.backend.timeout_secs = Some(secs);
        }
        if let Some(key) = lookup(ENV_LLM_API_KEY) {
            self.credentials.llm_api_key = Some(key);
        }
        if let Some(uri) = lookup(ENV_MONGO_URI) {
            self.credentials.mongo_uri = Some(uri);
        }
        Ok(())
    }

    pub fn set_backend_url(&mut self, url: &str) -> Result<(), ConfigError> {
        self.backend.base_url = parse_base_url(url)?;
        Ok(())
    }

    /// Names of collaborator credentials that are not set.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.credentials.llm_api_key.is_none() {
            missing.push(ENV_LLM_API_KEY);
        }
        if self.credentials.mongo_uri.is_none() {
            missing.push(ENV_MONGO_URI);
        }
        missing
    }
}

pub fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidUrl(raw.to_string(), e))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(ConfigError::UnsupportedScheme(raw.to_string())),
    }
}

fn parse_exclusions(raw: HashMap<String, Vec<String>>) -> Result<ExcludeKeys, ConfigError> {
    raw.into_iter().try_fold(ExcludeKeys::new(), |acc, (section, keys)| {
        let field =
            ProspectField::from_key(&section).ok_or_else(|| ConfigError::UnknownSection(section.clone()))?;
        Ok(acc.exclude(field, keys))
    })
}
