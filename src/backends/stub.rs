// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::errors::StepResult;
use crate::pipeline::Accumulator;
use crate::traits::{DeferredHandler, ImmediateHandler};

/// Shared log of the accumulators a handler was invoked with
#[derive(Clone, Default)]
pub struct CallRecorder(Arc<Mutex<Vec<Accumulator>>>);

impl CallRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, acc: Accumulator) {
        self.0.lock().unwrap().push(acc);
    }

    pub fn calls(&self) -> Vec<Accumulator> {
        self.0.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.0.lock().unwrap().len()
    }
}

/// An immediate handler that records its input and returns a fixed outcome
pub struct RecordingImmediate {
    pub recorder: CallRecorder,
    pub outcome: StepResult,
}

impl RecordingImmediate {
    pub fn new(recorder: CallRecorder, outcome: StepResult) -> Self {
        Self { recorder, outcome }
    }
}

impl ImmediateHandler for RecordingImmediate {
    fn handle(&self, acc: &Accumulator) -> StepResult {
        self.recorder.record(acc.clone());
        self.outcome.clone()
    }

    fn name(&self) -> &'static str {
        "recording_immediate"
    }
}

/// A deferred handler that records its input, waits, then returns a fixed outcome
pub struct RecordingDeferred {
    pub recorder: CallRecorder,
    pub delay: Duration,
    pub outcome: StepResult,
}

impl RecordingDeferred {
    pub fn new(recorder: CallRecorder, delay: Duration, outcome: StepResult) -> Self {
        Self {
            recorder,
            delay,
            outcome,
        }
    }
}

#[async_trait]
impl DeferredHandler for RecordingDeferred {
    async fn handle(&self, acc: Accumulator) -> StepResult {
        self.recorder.record(acc);
        tokio::time::sleep(self.delay).await;
        self.outcome.clone()
    }

    fn name(&self) -> &'static str {
        "recording_deferred"
    }
}

/// A handler that panics instead of returning, for failure isolation tests
pub struct PanickingHandler {
    pub message: &'static str,
}

impl ImmediateHandler for PanickingHandler {
    fn handle(&self, _acc: &Accumulator) -> StepResult {
        panic!("{}", self.message)
    }

    fn name(&self) -> &'static str {
        "panicking"
    }
}
