// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::{StepError, StepResult};
use crate::pipeline::Accumulator;
use crate::traits::ImmediateHandler;

pub const DEFAULT_FAILURE_MESSAGE: &str = "step failed";

/// Fail handler - always fails with the configured message
pub struct FailHandler {
    message: String,
}

impl FailHandler {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for FailHandler {
    fn default() -> Self {
        Self::new(DEFAULT_FAILURE_MESSAGE)
    }
}

impl ImmediateHandler for FailHandler {
    fn handle(&self, _acc: &Accumulator) -> StepResult {
        Err(StepError::failed(self.message.clone()))
    }

    fn name(&self) -> &'static str {
        "fail"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_fails() {
        let outcome = FailHandler::new("boom").handle(&Accumulator::new());
        assert_eq!(outcome, Err(StepError::failed("boom")));

        let outcome = FailHandler::default().handle(&Accumulator::new());
        assert_eq!(outcome, Err(StepError::failed(DEFAULT_FAILURE_MESSAGE)));
    }
}
