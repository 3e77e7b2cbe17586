use async_trait::async_trait;

use crate::errors::StepResult;
use crate::pipeline::Accumulator;

/// A handler that computes its outcome synchronously.
///
/// Wrapped into a pipeline step with
/// [`UnitOfWork::from_immediate_handler`](crate::pipeline::UnitOfWork::from_immediate_handler).
pub trait ImmediateHandler: Send + Sync {
    fn handle(&self, acc: &Accumulator) -> StepResult;

    fn name(&self) -> &'static str;
}

/// A handler whose outcome arrives later.
///
/// Wrapped into a pipeline step with
/// [`UnitOfWork::from_deferred_handler`](crate::pipeline::UnitOfWork::from_deferred_handler).
#[async_trait]
pub trait DeferredHandler: Send + Sync {
    async fn handle(&self, acc: Accumulator) -> StepResult;

    fn name(&self) -> &'static str;
}
