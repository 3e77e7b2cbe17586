// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

use crate::errors::StepResult;
use crate::pipeline::Accumulator;
use crate::traits::DeferredHandler;

/// Delay handler - resolves to the configured value once a timer fires
pub struct DelayHandler {
    delay: Duration,
    value: Value,
}

impl DelayHandler {
    pub fn new(delay: Duration, value: Value) -> Self {
        Self { delay, value }
    }
}

#[async_trait]
impl DeferredHandler for DelayHandler {
    async fn handle(&self, _acc: Accumulator) -> StepResult {
        tokio::time::sleep(self.delay).await;
        Ok(self.value.clone())
    }

    fn name(&self) -> &'static str {
        "delay"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Instant;

    #[tokio::test]
    async fn test_resolves_after_delay() {
        let handler = DelayHandler::new(Duration::from_millis(30), json!("late"));

        let start = Instant::now();
        let outcome = handler.handle(Accumulator::new()).await;

        assert_eq!(outcome, Ok(json!("late")));
        assert!(start.elapsed() >= Duration::from_millis(30));
    }
}
