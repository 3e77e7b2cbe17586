// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! * `pipeline` - pipeline run lifecycle (start, completion)
//! * `step` - step execution (start, completion, failure)
//! * `validation` - configuration validation warnings and errors

use tracing::Span;

pub mod pipeline;
pub mod step;
pub mod validation;

/// A log message that knows its own level and structured fields.
pub trait StructuredLog {
    /// Emit the message as a tracing event.
    fn log(&self);

    /// Build a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
