//! Runtime settings, layered from `config.toml` and `CURRICULA_*` environment
//! variables.

use std::path::Path;

use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use curricula_api::DEFAULT_CALLER_HEADER;
use curricula_core::{policy::RegistryPolicy, validation::ValidationConfig};
use serde::Deserialize;

/// Runtime server configuration. Every field has a default, so an absent
/// config file is not an error.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
  pub host:          String,
  pub port:          u16,
  /// Trusted header carrying the principal authenticated upstream.
  pub caller_header: String,
  pub policy:        RegistryPolicy,
  pub validation:    ValidationConfig,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:          "127.0.0.1".to_string(),
      port:          8080,
      caller_header: DEFAULT_CALLER_HEADER.to_string(),
      policy:        RegistryPolicy::default(),
      validation:    ValidationConfig::default(),
    }
  }
}

impl ServerConfig {
  /// Read `path` (if it exists), then apply environment overrides such as
  /// `CURRICULA_PORT=9000` or `CURRICULA_POLICY__STUDENTS_ONLY=false`.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    Self::from_builder(
      Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(environment()),
    )
  }

  fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
    builder.build()?.try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

fn environment() -> Environment {
  Environment::with_prefix("CURRICULA")
    .prefix_separator("_")
    .separator("__")
    .try_parsing(true)
}
