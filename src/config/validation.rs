// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Configuration validation for pipeline definitions.
//!
//! Validation runs before any handler is instantiated and reports every
//! problem it finds, not only the first:
//!
//! 1. **Named steps**: each step has a non-empty `assign` key
//! 2. **Handler references**: each step names a handler the local backend knows
//! 3. **Handler options**: the named handler accepts the step's options
//!
//! Duplicate `assign` keys are legal (the later step wins) and are only
//! logged as a warning.
//!
//! # Examples
//!
//! ```rust
//! use prehandler::config::{parse_yaml_config, validate_config};
//!
//! let config = parse_yaml_config(
//!     r#"
//! steps:
//!   - assign: a
//!     handler: constant
//!   - handler: nope
//! "#,
//! )?;
//!
//! let errors = validate_config(&config).unwrap_err();
//! assert_eq!(errors.len(), 2);
//! # Ok::<(), prehandler::errors::ConfigError>(())
//! ```

use std::collections::HashMap;

use crate::backends::local::LocalHandlerFactory;
use crate::config::{Config, StepConfig};
use crate::errors::ConfigError;
use crate::observability::messages::validation::{DuplicateAssignKey, InvalidStepConfig};
use crate::observability::messages::StructuredLog;

/// Validate every step of a configuration.
///
/// # Returns
///
/// * `Ok(())` - every step is buildable
/// * `Err(Vec<ConfigError>)` - all problems found, in step order
pub fn validate_config(config: &Config) -> Result<(), Vec<ConfigError>> {
    let errors: Vec<ConfigError> = config
        .steps
        .iter()
        .enumerate()
        .filter_map(|(index, step)| validate_step(index, step).err())
        .collect();

    for error in &errors {
        InvalidStepConfig { error }.log();
    }

    for (assign, occurrences) in find_duplicate_assign_keys(config) {
        DuplicateAssignKey {
            assign: &assign,
            occurrences,
        }
        .log();
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_step(index: usize, step: &StepConfig) -> Result<(), ConfigError> {
    let assign = match step.assign.as_deref() {
        Some(assign) if !assign.trim().is_empty() => assign,
        _ => return Err(ConfigError::UnnamedStep { index }),
    };

    let handler = step
        .handler
        .as_deref()
        .ok_or_else(|| ConfigError::MissingHandler {
            assign: assign.to_string(),
        })?;

    if !LocalHandlerFactory::is_handler_available(handler) {
        return Err(ConfigError::UnknownHandler {
            assign: assign.to_string(),
            handler: handler.to_string(),
        });
    }

    LocalHandlerFactory::create_unit_of_work(assign, handler, &step.options)?;
    Ok(())
}

/// `assign` keys used by more than one step, with their occurrence count,
/// in order of first appearance.
pub fn find_duplicate_assign_keys(config: &Config) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order = Vec::new();

    for assign in config.steps.iter().filter_map(|step| step.assign.as_deref()) {
        let count = counts.entry(assign).or_insert(0);
        if *count == 0 {
            order.push(assign);
        }
        *count += 1;
    }

    order
        .into_iter()
        .filter_map(|assign| {
            let count = counts[assign];
            (count > 1).then(|| (assign.to_string(), count))
        })
        .collect()
}
