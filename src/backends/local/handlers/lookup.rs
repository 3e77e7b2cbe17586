// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::{StepError, StepResult};
use crate::pipeline::Accumulator;
use crate::traits::ImmediateHandler;

/// Lookup handler - copies the successful result of an earlier step
pub struct LookupHandler {
    key: String,
}

impl LookupHandler {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl ImmediateHandler for LookupHandler {
    fn handle(&self, acc: &Accumulator) -> StepResult {
        match acc.get(&self.key) {
            Some(Ok(value)) => Ok(value.clone()),
            Some(Err(error)) => Err(StepError::failed(format!(
                "step '{}' failed: {}",
                self.key, error
            ))),
            None => Err(StepError::failed(format!(
                "no result stored under '{}'",
                self.key
            ))),
        }
    }

    fn name(&self) -> &'static str {
        "lookup"
    }
}
