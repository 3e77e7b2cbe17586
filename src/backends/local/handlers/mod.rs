// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod constant;
pub mod delay;
pub mod fail;
pub mod lookup;
pub mod template;

pub use constant::*;
pub use delay::*;
pub use fail::*;
pub use lookup::*;
pub use template::*;

use serde_json::Value;
use std::collections::HashMap;

use crate::errors::ConfigError;

/// Handler-specific options as they appear in a step configuration.
pub type HandlerOptions = HashMap<String, Value>;

fn invalid_option(assign: &str, option: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidOption {
        assign: assign.to_string(),
        option: option.to_string(),
        reason: reason.into(),
    }
}

/// Read an optional string option.
pub(crate) fn string_option(
    assign: &str,
    options: &HandlerOptions,
    option: &str,
) -> Result<Option<String>, ConfigError> {
    match options.get(option) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(other) => Err(invalid_option(
            assign,
            option,
            format!("expected a string, found {}", other),
        )),
    }
}

/// Read a string option that must be present.
pub(crate) fn required_string_option(
    assign: &str,
    options: &HandlerOptions,
    option: &str,
) -> Result<String, ConfigError> {
    string_option(assign, options, option)?
        .ok_or_else(|| invalid_option(assign, option, "option is required"))
}

/// Read an optional non-negative integer option.
pub(crate) fn u64_option(
    assign: &str,
    options: &HandlerOptions,
    option: &str,
) -> Result<Option<u64>, ConfigError> {
    match options.get(option) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value.as_u64().map(Some).ok_or_else(|| {
            invalid_option(
                assign,
                option,
                format!("expected a non-negative integer, found {}", value),
            )
        }),
    }
}
