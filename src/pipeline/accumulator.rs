// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::{StepError, StepResult};

#[derive(Debug, Clone, Default)]
struct Slots {
    /// Keys in the order they were first assigned.
    order: Vec<String>,
    outcomes: HashMap<String, StepResult>,
}

/// The growing key -> outcome map threaded through a pipeline.
///
/// An `Accumulator` is a cheap, shareable snapshot. Every step receives a
/// clone of the snapshot built by the steps before it; the executor then
/// produces the next snapshot with [`Accumulator::merge`]. Merging is
/// copy-on-write: when a step kept its snapshot alive, the merge copies the
/// slots instead of changing what the step is holding.
///
/// Failed steps live in the map like any other entry, as `Err(StepError)`.
/// Callers detect per-step failures by inspecting entries, there is no
/// separate error channel.
///
/// # Examples
/// ```
/// use prehandler::pipeline::Accumulator;
/// use prehandler::errors::StepError;
/// use serde_json::json;
///
/// let empty = Accumulator::new();
/// let first = empty.clone().merge("a", Ok(json!("A")));
/// let second = first.clone().merge("b", Err(StepError::failed("boom")));
///
/// assert!(empty.is_empty());
/// assert_eq!(first.len(), 1);
/// assert_eq!(second.value("a"), Some(&json!("A")));
/// assert_eq!(second.error("b").map(|e| e.message()), Some("boom"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Accumulator(Arc<Slots>);

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce the next snapshot: this one plus `key -> outcome`.
    ///
    /// An existing entry under `key` is overwritten in place and keeps its
    /// original position in iteration order.
    pub fn merge(mut self, key: impl Into<String>, outcome: StepResult) -> Self {
        let key = key.into();
        let slots = Arc::make_mut(&mut self.0);
        if !slots.outcomes.contains_key(&key) {
            slots.order.push(key.clone());
        }
        slots.outcomes.insert(key, outcome);
        self
    }

    pub fn get(&self, key: &str) -> Option<&StepResult> {
        self.0.outcomes.get(key)
    }

    /// Successful value stored under `key`, if any.
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.get(key).and_then(|outcome| outcome.as_ref().ok())
    }

    /// Failure stored under `key`, if any.
    pub fn error(&self, key: &str) -> Option<&StepError> {
        self.get(key).and_then(|outcome| outcome.as_ref().err())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.outcomes.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.order.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.order.iter().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StepResult)> {
        self.0
            .order
            .iter()
            .filter_map(|key| self.0.outcomes.get(key).map(|outcome| (key.as_str(), outcome)))
    }

    /// Entries whose step failed.
    pub fn errors(&self) -> impl Iterator<Item = (&str, &StepError)> {
        self.iter()
            .filter_map(|(key, outcome)| outcome.as_ref().err().map(|error| (key, error)))
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// Render the accumulator as a JSON object.
    ///
    /// Failed entries become `{"error": "<message>"}`.
    pub fn to_json(&self) -> Value {
        let mut object = Map::new();
        for (key, outcome) in self.iter() {
            let rendered = match outcome {
                Ok(value) => value.clone(),
                Err(error) => serde_json::json!({ "error": error.to_string() }),
            };
            object.insert(key.to_string(), rendered);
        }
        Value::Object(object)
    }
}

/// Equality compares entries, not insertion order.
impl PartialEq for Accumulator {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0.outcomes == other.0.outcomes
    }
}

impl<K: Into<String>> FromIterator<(K, StepResult)> for Accumulator {
    fn from_iter<I: IntoIterator<Item = (K, StepResult)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Accumulator::new(), |acc, (key, outcome)| acc.merge(key, outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_accumulator_is_empty() {
        let acc = Accumulator::new();
        assert!(acc.is_empty());
        assert_eq!(acc.len(), 0);
        assert!(!acc.has_errors());
        assert_eq!(acc.to_json(), json!({}));
    }

    #[test]
    fn test_merge_does_not_touch_shared_snapshot() {
        let before = Accumulator::new().merge("a", Ok(json!("A")));
        let held_by_step = before.clone();

        let after = before.merge("b", Ok(json!("B")));

        assert_eq!(held_by_step.len(), 1);
        assert!(!held_by_step.contains_key("b"));
        assert_eq!(after.len(), 2);
    }

    #[test]
    fn test_duplicate_key_last_write_wins_and_keeps_position() {
        let acc = Accumulator::new()
            .merge("x", Ok(json!("first")))
            .merge("y", Ok(json!(1)))
            .merge("x", Ok(json!("second")));

        assert_eq!(acc.len(), 2);
        assert_eq!(acc.value("x"), Some(&json!("second")));
        assert_eq!(acc.keys().collect::<Vec<_>>(), vec!["x", "y"]);
    }

    #[test]
    fn test_error_entries_are_reported() {
        let acc = Accumulator::new()
            .merge("ok", Ok(json!(true)))
            .merge("bad", Err(StepError::failed("boom")));

        assert!(acc.has_errors());
        assert_eq!(acc.value("bad"), None);
        assert_eq!(acc.error("ok"), None);
        let errors: Vec<_> = acc.errors().map(|(key, _)| key).collect();
        assert_eq!(errors, vec!["bad"]);
    }

    #[test]
    fn test_to_json_renders_errors_and_preserves_order() {
        let acc = Accumulator::new()
            .merge("z", Ok(json!({"n": 1})))
            .merge("a", Err(StepError::failed("nope")));

        let rendered = serde_json::to_string(&acc.to_json()).unwrap();
        assert_eq!(rendered, r#"{"z":{"n":1},"a":{"error":"nope"}}"#);
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let left: Accumulator = vec![("a", Ok(json!(1))), ("b", Ok(json!(2)))]
            .into_iter()
            .collect();
        let right: Accumulator = vec![("b", Ok(json!(2))), ("a", Ok(json!(1)))]
            .into_iter()
            .collect();
        assert_eq!(left, right);
    }
}
