// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for pipeline run lifecycle events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Pipeline run started.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use prehandler::observability::messages::pipeline::PipelineStarted;
///
/// let msg = PipelineStarted {
///     pipeline: "preload",
///     step_count: 2,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct PipelineStarted<'a> {
    pub pipeline: &'a str,
    pub step_count: usize,
}

impl Display for PipelineStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Starting pipeline '{}' with {} steps",
            self.pipeline, self.step_count
        )
    }
}

impl StructuredLog for PipelineStarted<'_> {
    fn log(&self) {
        tracing::info!(
            pipeline = self.pipeline,
            step_count = self.step_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "pipeline",
            span_name = name,
            pipeline = self.pipeline,
            step_count = self.step_count,
        )
    }
}

/// Pipeline run completed. Always emitted: a pipeline run cannot fail, only
/// individual steps can.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use prehandler::observability::messages::pipeline::PipelineCompleted;
/// use std::time::Duration;
///
/// let msg = PipelineCompleted {
///     pipeline: "preload",
///     step_count: 3,
///     failed_count: 1,
///     duration: Duration::from_millis(250),
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct PipelineCompleted<'a> {
    pub pipeline: &'a str,
    pub step_count: usize,
    pub failed_count: usize,
    pub duration: std::time::Duration,
}

impl Display for PipelineCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Pipeline '{}' completed: {} steps, {} failed, in {:?}",
            self.pipeline, self.step_count, self.failed_count, self.duration
        )
    }
}

impl StructuredLog for PipelineCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            pipeline = self.pipeline,
            step_count = self.step_count,
            failed_count = self.failed_count,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "pipeline_completed",
            span_name = name,
            pipeline = self.pipeline,
            step_count = self.step_count,
            failed_count = self.failed_count,
            duration = ?self.duration,
        )
    }
}
