// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for configuration validation warnings and errors.

use crate::errors::ConfigError;
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Several steps assign to the same key; the last one wins.
///
/// # Log Level
/// `warn!` - Allowed, but usually a mistake
///
/// # Example
/// ```
/// use prehandler::observability::messages::validation::DuplicateAssignKey;
///
/// let msg = DuplicateAssignKey {
///     assign: "user",
///     occurrences: 2,
/// };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct DuplicateAssignKey<'a> {
    pub assign: &'a str,
    pub occurrences: usize,
}

impl Display for DuplicateAssignKey<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Key '{}' is assigned by {} steps; the last step's result wins",
            self.assign, self.occurrences
        )
    }
}

impl StructuredLog for DuplicateAssignKey<'_> {
    fn log(&self) {
        tracing::warn!(
            assign = self.assign,
            occurrences = self.occurrences,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "duplicate_assign_key",
            span_name = name,
            assign = self.assign,
            occurrences = self.occurrences,
        )
    }
}

/// A configured step failed validation.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct InvalidStepConfig<'a> {
    pub error: &'a ConfigError,
}

impl Display for InvalidStepConfig<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Invalid step configuration: {}", self.error)
    }
}

impl StructuredLog for InvalidStepConfig<'_> {
    fn log(&self) {
        tracing::error!(error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("invalid_step_config", span_name = name, error = %self.error)
    }
}
