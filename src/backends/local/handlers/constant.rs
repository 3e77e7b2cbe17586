// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::Value;

use crate::errors::StepResult;
use crate::pipeline::Accumulator;
use crate::traits::ImmediateHandler;

/// Constant handler - returns the configured value, ignoring prior results
pub struct ConstantHandler {
    value: Value,
}

impl ConstantHandler {
    pub fn new(value: Value) -> Self {
        Self { value }
    }
}

impl ImmediateHandler for ConstantHandler {
    fn handle(&self, _acc: &Accumulator) -> StepResult {
        Ok(self.value.clone())
    }

    fn name(&self) -> &'static str {
        "constant"
    }
}
