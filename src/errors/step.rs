// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The single runtime failure kind of a pipeline: a step failure.
//!
//! A step failure is never raised to the pipeline caller. It is stored in the
//! accumulator under the failing step's key, so it has to be cheap to clone and
//! comparable in tests.

use std::any::Any;
use thiserror::Error;

/// Outcome of a single unit of work.
pub type StepResult = Result<serde_json::Value, StepError>;

/// Failure of one pipeline step.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StepError {
    /// The unit of work returned an error, or its future resolved to one.
    #[error("{message}")]
    Failed { message: String },

    /// The unit of work panicked, either while being invoked or while its
    /// future was being polled.
    #[error("step panicked: {message}")]
    Panicked { message: String },
}

impl StepError {
    pub fn failed(message: impl Into<String>) -> Self {
        StepError::Failed {
            message: message.into(),
        }
    }

    /// Build a `Panicked` error from a payload caught with `catch_unwind`.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(text) = payload.downcast_ref::<&str>() {
            (*text).to_string()
        } else if let Some(text) = payload.downcast_ref::<String>() {
            text.clone()
        } else {
            "non-string panic payload".to_string()
        };
        StepError::Panicked { message }
    }

    pub fn message(&self) -> &str {
        match self {
            StepError::Failed { message } | StepError::Panicked { message } => message,
        }
    }
}

impl From<anyhow::Error> for StepError {
    fn from(error: anyhow::Error) -> Self {
        StepError::failed(format!("{:#}", error))
    }
}

impl From<String> for StepError {
    fn from(message: String) -> Self {
        StepError::failed(message)
    }
}

impl From<&str> for StepError {
    fn from(message: &str) -> Self {
        StepError::failed(message)
    }
}
