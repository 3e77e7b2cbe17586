// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The sequential handler pipeline.
//!
//! A pipeline is an ordered list of [`HandlerDescriptor`]s. Running it folds
//! the list into a single [`Accumulator`]: every step sees the results of all
//! steps before it, steps run strictly one after another, and a failing step
//! stores its error under its own key instead of stopping the run.

mod accumulator;
mod descriptor;
mod executor;
#[cfg(test)]
mod integration_tests;

pub use accumulator::Accumulator;
pub use descriptor::{
    DeferredFn, HandlerDescriptor, HandlerDescriptorBuilder, ImmediateFn, UnitOfWork, WorkKind,
};
pub use executor::{prehandler, Prehandler};

/// Run a pipeline built from the listed descriptors.
///
/// Variadic form of [`prehandler()`](crate::pipeline::prehandler).
///
/// ```
/// use prehandler::pipeline::HandlerDescriptor;
/// use serde_json::json;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let results = prehandler::prehandler!(
///     HandlerDescriptor::immediate("a", |_| Ok(json!("A"))),
///     HandlerDescriptor::deferred("b", |_| async { Ok(json!("B")) }),
/// )
/// .await;
/// assert_eq!(results.len(), 2);
/// # });
/// ```
#[macro_export]
macro_rules! prehandler {
    ($($descriptor:expr),* $(,)?) => {
        $crate::pipeline::prehandler(::std::vec![$($descriptor),*])
    };
}
