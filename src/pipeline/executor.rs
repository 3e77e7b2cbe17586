// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use futures::future::{self, BoxFuture, FutureExt};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::Instant;
use tracing::Instrument;

use crate::errors::{StepError, StepResult};
use crate::observability::messages::{pipeline::*, step::*, StructuredLog};
use crate::pipeline::{Accumulator, HandlerDescriptor, UnitOfWork};

const ANONYMOUS_PIPELINE: &str = "anonymous";
const CLOSURE_HANDLER: &str = "closure";

/// Run `descriptors` in order and resolve to the merged accumulator.
///
/// The returned future never fails: a step that returns an error or panics
/// has that failure stored under its `assign` key, and the next step runs
/// with it in its input.
///
/// # Examples
/// ```
/// use prehandler::pipeline::{prehandler, HandlerDescriptor};
/// use prehandler::errors::StepError;
/// use serde_json::json;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let results = prehandler(vec![
///     HandlerDescriptor::immediate("a", |_| Ok(json!("A"))),
///     HandlerDescriptor::immediate("b", |_| Err(StepError::failed("boom"))),
///     HandlerDescriptor::deferred("c", |acc| async move {
///         Ok(json!(acc.error("b").is_some()))
///     }),
/// ])
/// .await;
///
/// assert_eq!(results.value("a"), Some(&json!("A")));
/// assert_eq!(results.error("b").map(|e| e.message()), Some("boom"));
/// assert_eq!(results.value("c"), Some(&json!(true)));
/// # });
/// ```
pub async fn prehandler<I>(descriptors: I) -> Accumulator
where
    I: IntoIterator<Item = HandlerDescriptor>,
{
    let descriptors: Vec<HandlerDescriptor> = descriptors.into_iter().collect();
    execute(ANONYMOUS_PIPELINE, &descriptors).await
}

/// An owned, reusable sequential pipeline.
///
/// Each call to [`Prehandler::run`] starts from a fresh, empty accumulator;
/// nothing carries over between runs.
#[derive(Debug, Clone, Default)]
pub struct Prehandler {
    name: Option<String>,
    descriptors: Vec<HandlerDescriptor>,
}

impl Prehandler {
    pub fn new(descriptors: Vec<HandlerDescriptor>) -> Self {
        Self {
            name: None,
            descriptors,
        }
    }

    /// Name used in log events for this pipeline.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(ANONYMOUS_PIPELINE)
    }

    /// Append a step to the end of the pipeline.
    pub fn push(&mut self, descriptor: HandlerDescriptor) {
        self.descriptors.push(descriptor);
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// `assign` keys in step order, duplicates included.
    pub fn assign_keys(&self) -> impl Iterator<Item = &str> {
        self.descriptors.iter().map(HandlerDescriptor::assign)
    }

    pub async fn run(&self) -> Accumulator {
        execute(self.name(), &self.descriptors).await
    }
}

impl From<Vec<HandlerDescriptor>> for Prehandler {
    fn from(descriptors: Vec<HandlerDescriptor>) -> Self {
        Self::new(descriptors)
    }
}

impl FromIterator<HandlerDescriptor> for Prehandler {
    fn from_iter<I: IntoIterator<Item = HandlerDescriptor>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

async fn execute(pipeline: &str, descriptors: &[HandlerDescriptor]) -> Accumulator {
    let start_msg = PipelineStarted {
        pipeline,
        step_count: descriptors.len(),
    };
    let span = start_msg.span("pipeline_execution");

    async move {
        start_msg.log();
        let start_time = Instant::now();

        let mut acc = Accumulator::new();
        let mut failed_count = 0;

        for (index, descriptor) in descriptors.iter().enumerate() {
            let outcome = run_step(index, descriptor, acc.clone()).await;
            if outcome.is_err() {
                failed_count += 1;
            }
            acc = acc.merge(descriptor.assign(), outcome);
        }

        PipelineCompleted {
            pipeline,
            step_count: descriptors.len(),
            failed_count,
            duration: start_time.elapsed(),
        }
        .log();

        acc
    }
    .instrument(span)
    .await
}

async fn run_step(index: usize, descriptor: &HandlerDescriptor, input: Accumulator) -> StepResult {
    let assign = descriptor.assign();
    StepStarted {
        assign,
        index,
        kind: descriptor.kind().as_str(),
        handler: descriptor.work().handler_name().unwrap_or(CLOSURE_HANDLER),
        input_entries: input.len(),
    }
    .log();

    let start_time = Instant::now();
    let outcome = normalize(descriptor.work(), input).await;
    let duration = start_time.elapsed();

    match &outcome {
        Ok(_) => StepCompleted {
            assign,
            index,
            duration,
        }
        .log(),
        Err(error) => StepFailed {
            assign,
            index,
            error,
            duration,
        }
        .log(),
    }

    outcome
}

/// Turn either flavour of unit of work into a pending outcome.
///
/// Immediate units are invoked right away and their outcome wrapped in a
/// ready future. A panic is caught and becomes `StepError::Panicked` whether
/// it happens while invoking the unit, or while polling the future a deferred
/// unit returned.
fn normalize(work: &UnitOfWork, input: Accumulator) -> BoxFuture<'static, StepResult> {
    match work {
        UnitOfWork::Immediate { work, .. } => {
            let outcome = catch_unwind(AssertUnwindSafe(|| work(&input)))
                .unwrap_or_else(|payload| Err(StepError::from_panic(payload)));
            future::ready(outcome).boxed()
        }
        UnitOfWork::Deferred { work, .. } => match catch_unwind(AssertUnwindSafe(|| work(input))) {
            Ok(pending) => AssertUnwindSafe(pending)
                .catch_unwind()
                .map(|settled| settled.unwrap_or_else(|payload| Err(StepError::from_panic(payload))))
                .boxed(),
            Err(payload) => future::ready(Err(StepError::from_panic(payload))).boxed(),
        },
    }
}
