// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for step execution events.

use crate::errors::StepError;
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// Step execution started.
///
/// # Log Level
/// `debug!` - Per-step detail
///
/// # Example
/// ```
/// use prehandler::observability::messages::step::StepStarted;
///
/// let msg = StepStarted {
///     assign: "user",
///     index: 0,
///     kind: "deferred",
///     handler: "delay",
///     input_entries: 0,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct StepStarted<'a> {
    pub assign: &'a str,
    pub index: usize,
    pub kind: &'a str,
    pub handler: &'a str,
    pub input_entries: usize,
}

impl Display for StepStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Step #{} '{}' started ({} {}): {} prior results",
            self.index, self.assign, self.kind, self.handler, self.input_entries
        )
    }
}

impl StructuredLog for StepStarted<'_> {
    fn log(&self) {
        tracing::debug!(
            assign = self.assign,
            index = self.index,
            kind = self.kind,
            handler = self.handler,
            input_entries = self.input_entries,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "step",
            span_name = name,
            assign = self.assign,
            index = self.index,
            kind = self.kind,
            handler = self.handler,
        )
    }
}

/// Step settled successfully.
///
/// # Log Level
/// `debug!` - Per-step detail
pub struct StepCompleted<'a> {
    pub assign: &'a str,
    pub index: usize,
    pub duration: Duration,
}

impl Display for StepCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Step #{} '{}' completed in {:?}",
            self.index, self.assign, self.duration
        )
    }
}

impl StructuredLog for StepCompleted<'_> {
    fn log(&self) {
        tracing::debug!(
            assign = self.assign,
            index = self.index,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "step_completed",
            span_name = name,
            assign = self.assign,
            index = self.index,
        )
    }
}

/// Step settled with a failure. The failure is stored and the pipeline
/// moves on.
///
/// # Log Level
/// `warn!` - Degraded result the caller has to inspect
///
/// # Example
/// ```
/// use prehandler::errors::StepError;
/// use prehandler::observability::messages::step::StepFailed;
/// use std::time::Duration;
///
/// let error = StepError::failed("connection refused");
/// let msg = StepFailed {
///     assign: "profile",
///     index: 1,
///     error: &error,
///     duration: Duration::from_millis(12),
/// };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct StepFailed<'a> {
    pub assign: &'a str,
    pub index: usize,
    pub error: &'a StepError,
    pub duration: Duration,
}

impl Display for StepFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Step #{} '{}' failed after {:?}: {}; continuing with next step",
            self.index, self.assign, self.duration, self.error
        )
    }
}

impl StructuredLog for StepFailed<'_> {
    fn log(&self) {
        tracing::warn!(
            assign = self.assign,
            index = self.index,
            error = %self.error,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "step_failed",
            span_name = name,
            assign = self.assign,
            index = self.index,
            error = %self.error,
        )
    }
}
