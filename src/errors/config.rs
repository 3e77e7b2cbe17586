// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while building a pipeline, before any step runs.

use thiserror::Error;

/// Errors that can occur while loading, validating or building a pipeline.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A handler descriptor was built without an `assign` key.
    #[error("Handler descriptor is missing an 'assign' key")]
    MissingAssign,

    /// A handler descriptor was built without a unit of work.
    #[error("Handler descriptor '{assign}' has no unit of work")]
    MissingUnitOfWork { assign: String },

    /// A configured step has no (or an empty) `assign` key.
    #[error("Step #{index} is missing an 'assign' key")]
    UnnamedStep { index: usize },

    /// A configured step does not name a handler.
    #[error("Step '{assign}' does not name a handler")]
    MissingHandler { assign: String },

    /// A configured step names a handler that is not registered.
    #[error("Step '{assign}' references unknown handler '{handler}'")]
    UnknownHandler { assign: String, handler: String },

    /// A handler option is missing or has the wrong shape.
    #[error("Step '{assign}' has invalid option '{option}': {reason}")]
    InvalidOption {
        assign: String,
        option: String,
        reason: String,
    },

    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to parse TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// Every problem found by configuration validation.
    #[error("Configuration validation failed:\n{}", join_errors(.0))]
    Validation(Vec<ConfigError>),
}

fn join_errors(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(|e| format!("  - {}", e))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_lists_every_error() {
        let error = ConfigError::Validation(vec![
            ConfigError::UnnamedStep { index: 0 },
            ConfigError::UnknownHandler {
                assign: "b".to_string(),
                handler: "nope".to_string(),
            },
        ]);

        let message = error.to_string();
        assert!(message.starts_with("Configuration validation failed:"));
        assert!(message.contains("  - Step #0 is missing an 'assign' key"));
        assert!(message.contains("  - Step 'b' references unknown handler 'nope'"));
    }
}
