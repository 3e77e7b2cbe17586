// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use futures::future::{BoxFuture, FutureExt};
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use crate::errors::{ConfigError, StepResult};
use crate::pipeline::Accumulator;
use crate::traits::{DeferredHandler, ImmediateHandler};

/// Synchronous unit of work: reads the snapshot, returns the outcome.
pub type ImmediateFn = dyn Fn(&Accumulator) -> StepResult + Send + Sync;

/// Asynchronous unit of work: takes the snapshot, returns a pending outcome.
pub type DeferredFn = dyn Fn(Accumulator) -> BoxFuture<'static, StepResult> + Send + Sync;

/// Which flavour of unit of work a step carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkKind {
    Immediate,
    Deferred,
}

impl WorkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkKind::Immediate => "immediate",
            WorkKind::Deferred => "deferred",
        }
    }
}

/// The work a pipeline step performs.
///
/// The variant is fixed when the unit is constructed; the executor never
/// probes a returned value to decide whether it is pending. `handler` holds
/// the handler's name when the unit wraps a handler trait object, and is
/// `None` for plain closures.
#[derive(Clone)]
pub enum UnitOfWork {
    Immediate {
        work: Arc<ImmediateFn>,
        handler: Option<&'static str>,
    },
    Deferred {
        work: Arc<DeferredFn>,
        handler: Option<&'static str>,
    },
}

impl UnitOfWork {
    pub fn immediate<F>(work: F) -> Self
    where
        F: Fn(&Accumulator) -> StepResult + Send + Sync + 'static,
    {
        UnitOfWork::Immediate {
            work: Arc::new(work),
            handler: None,
        }
    }

    pub fn deferred<F, Fut>(work: F) -> Self
    where
        F: Fn(Accumulator) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = StepResult> + Send + 'static,
    {
        UnitOfWork::Deferred {
            work: Arc::new(move |acc: Accumulator| work(acc).boxed()),
            handler: None,
        }
    }

    pub fn from_immediate_handler(handler: Arc<dyn ImmediateHandler>) -> Self {
        let name = handler.name();
        UnitOfWork::Immediate {
            work: Arc::new(move |acc: &Accumulator| handler.handle(acc)),
            handler: Some(name),
        }
    }

    pub fn from_deferred_handler(handler: Arc<dyn DeferredHandler>) -> Self {
        let name = handler.name();
        UnitOfWork::Deferred {
            work: Arc::new(move |acc: Accumulator| {
                let handler = handler.clone();
                async move { handler.handle(acc).await }.boxed()
            }),
            handler: Some(name),
        }
    }

    pub fn kind(&self) -> WorkKind {
        match self {
            UnitOfWork::Immediate { .. } => WorkKind::Immediate,
            UnitOfWork::Deferred { .. } => WorkKind::Deferred,
        }
    }

    /// Name of the wrapped handler, if this unit was built from one.
    pub fn handler_name(&self) -> Option<&'static str> {
        match self {
            UnitOfWork::Immediate { handler, .. } | UnitOfWork::Deferred { handler, .. } => *handler,
        }
    }
}

impl fmt::Debug for UnitOfWork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnitOfWork::{:?}", self.kind())
    }
}

/// One named pipeline step: where to store the outcome, and what to run.
///
/// Two descriptors in the same pipeline may share an `assign` key. The later
/// step's outcome overwrites the earlier one.
///
/// # Examples
/// ```
/// use prehandler::pipeline::{HandlerDescriptor, WorkKind};
/// use serde_json::json;
///
/// let greeting = HandlerDescriptor::immediate("greeting", |_| Ok(json!("hello")));
/// let fetched = HandlerDescriptor::deferred("fetched", |_| async { Ok(json!(42)) });
///
/// assert_eq!(greeting.assign(), "greeting");
/// assert_eq!(fetched.kind(), WorkKind::Deferred);
/// ```
#[derive(Debug, Clone)]
pub struct HandlerDescriptor {
    assign: String,
    work: UnitOfWork,
}

impl HandlerDescriptor {
    pub fn builder() -> HandlerDescriptorBuilder {
        HandlerDescriptorBuilder::default()
    }

    /// Shorthand for a step with an immediate unit of work.
    pub fn immediate<F>(assign: impl Into<String>, work: F) -> Self
    where
        F: Fn(&Accumulator) -> StepResult + Send + Sync + 'static,
    {
        Self {
            assign: assign.into(),
            work: UnitOfWork::immediate(work),
        }
    }

    /// Shorthand for a step with a deferred unit of work.
    pub fn deferred<F, Fut>(assign: impl Into<String>, work: F) -> Self
    where
        F: Fn(Accumulator) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = StepResult> + Send + 'static,
    {
        Self {
            assign: assign.into(),
            work: UnitOfWork::deferred(work),
        }
    }

    pub fn assign(&self) -> &str {
        &self.assign
    }

    pub fn work(&self) -> &UnitOfWork {
        &self.work
    }

    pub fn kind(&self) -> WorkKind {
        self.work.kind()
    }
}

/// Validating builder for [`HandlerDescriptor`].
///
/// Missing pieces are reported when the pipeline is built, never when the
/// step would run.
#[derive(Default)]
pub struct HandlerDescriptorBuilder {
    assign: Option<String>,
    work: Option<UnitOfWork>,
}

impl HandlerDescriptorBuilder {
    pub fn assign(mut self, assign: impl Into<String>) -> Self {
        self.assign = Some(assign.into());
        self
    }

    pub fn work(mut self, work: UnitOfWork) -> Self {
        self.work = Some(work);
        self
    }

    pub fn immediate<F>(self, work: F) -> Self
    where
        F: Fn(&Accumulator) -> StepResult + Send + Sync + 'static,
    {
        self.work(UnitOfWork::immediate(work))
    }

    pub fn deferred<F, Fut>(self, work: F) -> Self
    where
        F: Fn(Accumulator) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = StepResult> + Send + 'static,
    {
        self.work(UnitOfWork::deferred(work))
    }

    pub fn build(self) -> Result<HandlerDescriptor, ConfigError> {
        let assign = match self.assign {
            Some(assign) if !assign.trim().is_empty() => assign,
            _ => return Err(ConfigError::MissingAssign),
        };
        let work = self
            .work
            .ok_or_else(|| ConfigError::MissingUnitOfWork {
                assign: assign.clone(),
            })?;
        Ok(HandlerDescriptor { assign, work })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_produces_descriptor() {
        let descriptor = HandlerDescriptor::builder()
            .assign("a")
            .immediate(|_| Ok(json!("A")))
            .build()
            .unwrap();

        assert_eq!(descriptor.assign(), "a");
        assert_eq!(descriptor.kind(), WorkKind::Immediate);
    }

    #[test]
    fn test_builder_rejects_missing_assign() {
        let result = HandlerDescriptor::builder()
            .deferred(|_| async { Ok(json!(1)) })
            .build();
        assert!(matches!(result, Err(ConfigError::MissingAssign)));
    }

    #[test]
    fn test_builder_rejects_blank_assign() {
        let result = HandlerDescriptor::builder()
            .assign("   ")
            .immediate(|_| Ok(json!(1)))
            .build();
        assert!(matches!(result, Err(ConfigError::MissingAssign)));
    }

    #[test]
    fn test_builder_rejects_missing_unit_of_work() {
        let result = HandlerDescriptor::builder().assign("lonely").build();
        match result {
            Err(ConfigError::MissingUnitOfWork { assign }) => assert_eq!(assign, "lonely"),
            other => panic!("expected MissingUnitOfWork, got {:?}", other.map(|d| d.kind())),
        }
    }

    #[test]
    fn test_unit_of_work_debug_names_variant() {
        let work = UnitOfWork::deferred(|_| async { Ok(json!(null)) });
        assert_eq!(format!("{:?}", work), "UnitOfWork::Deferred");
        assert_eq!(work.kind().as_str(), "deferred");
        assert_eq!(work.handler_name(), None);
    }

    #[test]
    fn test_handler_backed_units_carry_handler_name() {
        use crate::backends::local::{ConstantHandler, DelayHandler};
        use std::time::Duration;

        let constant = UnitOfWork::from_immediate_handler(Arc::new(ConstantHandler::new(json!(1))));
        let delay = UnitOfWork::from_deferred_handler(Arc::new(DelayHandler::new(
            Duration::ZERO,
            json!(2),
        )));

        assert_eq!(constant.handler_name(), Some("constant"));
        assert_eq!(constant.kind(), WorkKind::Immediate);
        assert_eq!(delay.handler_name(), Some("delay"));
        assert_eq!(delay.kind(), WorkKind::Deferred);
    }
}
