// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::backends::local::HandlerOptions;
use crate::errors::ConfigError;

/// Main configuration structure for a sequential pipeline.
///
/// Steps run in the order they are listed. Loaded from YAML, or from TOML
/// when the file name ends in `.toml`.
///
/// # Fields
/// * `name` - Pipeline name used in log events (optional)
/// * `steps` - Ordered step definitions
///
/// # Example
/// ```yaml
/// name: preload
/// steps:
///   - assign: greeting
///     handler: constant
///     options:
///       value: "hello"
///   - assign: message
///     handler: template
///     options:
///       template: "{greeting}, world"
/// ```
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub steps: Vec<StepConfig>,
}

/// Configuration for a single pipeline step.
///
/// `assign` and `handler` are optional at parse time so that validation can
/// report every missing field at once instead of failing on the first one.
///
/// # Fields
/// * `assign` - Key the step's outcome is stored under
/// * `handler` - Name of a built-in local handler
/// * `options` - Handler-specific options
///
/// # Example
/// ```yaml
/// assign: "slow_value"
/// handler: delay
/// options:
///   millis: 200
///   value: "ready"
/// ```
#[derive(Debug, Deserialize, Default)]
pub struct StepConfig {
    #[serde(default)]
    pub assign: Option<String>,
    #[serde(default)]
    pub handler: Option<String>,
    #[serde(default)]
    pub options: HandlerOptions,
}

/// Parse a YAML configuration from a string
pub fn parse_yaml_config(content: &str) -> Result<Config, ConfigError> {
    Ok(serde_yaml::from_str(content)?)
}

/// Parse a TOML configuration from a string
pub fn parse_toml_config(content: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Load a config file; the format follows the file extension
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let is_toml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("toml"))
        .unwrap_or(false);

    if is_toml {
        parse_toml_config(&content)
    } else {
        parse_yaml_config(&content)
    }
}

/// Load and validate a config file
///
/// Every validation problem is collected into a single
/// [`ConfigError::Validation`].
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(path)?;
    crate::config::validate_config(&cfg).map_err(ConfigError::Validation)?;
    Ok(cfg)
}
