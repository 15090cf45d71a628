use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GenerateConfig {
    /// Binding tree JSON produced by the bindings parser
    #[serde(default = "default_input_path")]
    pub input_path: String,

    /// Root directory receiving `headers/` and `src/`
    #[serde(default = "default_output_path")]
    pub output_path: String,

    /// Bindings version the tree was parsed from. Only reported.
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Proxy the bindings downloader would use. Only reported.
    #[serde(default)]
    pub proxy: Option<String>,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: Option<bool>,
}

fn default_input_path() -> String {
    "./bindings.json".to_string()
}

fn default_output_path() -> String {
    ".".to_string()
}

fn default_schema_version() -> String {
    "2.2074".to_string()
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            output_path: default_output_path(),
            schema_version: default_schema_version(),
            proxy: None,
            verbose: Some(false),
        }
    }
}

impl GenerateConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a file. The loaded values are not validated
    /// here so that CLI flags can still be merged on top.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output_path.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "Output path must not be empty".to_string(),
            ));
        }

        let input_path = Path::new(&self.input_path);
        if !input_path.is_file() {
            return Err(ConfigError::InvalidConfig(format!(
                "Binding tree does not exist: {}",
                self.input_path
            )));
        }

        Ok(())
    }

    /// Merge with another configuration, with other taking precedence
    pub fn merge(&mut self, other: &GenerateConfig) {
        if other.input_path != default_input_path() {
            self.input_path = other.input_path.clone();
        }
        if other.output_path != default_output_path() {
            self.output_path = other.output_path.clone();
        }
        if other.schema_version != default_schema_version() {
            self.schema_version = other.schema_version.clone();
        }
        if other.proxy.is_some() {
            self.proxy = other.proxy.clone();
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
    }

    /// Get effective verbose setting
    pub fn is_verbose(&self) -> bool {
        self.verbose.unwrap_or(false)
    }
}
