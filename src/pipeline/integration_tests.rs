// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Pipeline tests driven through the handler traits, using the recording stub
//! handlers and the built-in local handlers.

use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

use crate::backends::local::{ConstantHandler, DelayHandler, FailHandler, TemplateHandler};
use crate::backends::stub::{CallRecorder, PanickingHandler, RecordingDeferred, RecordingImmediate};
use crate::errors::{StepError, StepResult};
use crate::pipeline::{prehandler, Accumulator, HandlerDescriptor, Prehandler, UnitOfWork};

fn immediate(assign: &str, recorder: &CallRecorder, outcome: StepResult) -> HandlerDescriptor {
    HandlerDescriptor::builder()
        .assign(assign)
        .work(UnitOfWork::from_immediate_handler(Arc::new(
            RecordingImmediate::new(recorder.clone(), outcome),
        )))
        .build()
        .unwrap()
}

fn deferred(
    assign: &str,
    recorder: &CallRecorder,
    millis: u64,
    outcome: StepResult,
) -> HandlerDescriptor {
    HandlerDescriptor::builder()
        .assign(assign)
        .work(UnitOfWork::from_deferred_handler(Arc::new(
            RecordingDeferred::new(recorder.clone(), Duration::from_millis(millis), outcome),
        )))
        .build()
        .unwrap()
}

fn acc(entries: Vec<(&str, StepResult)>) -> Accumulator {
    entries.into_iter().collect()
}

#[tokio::test]
async fn test_asynchronous_handlers_see_prior_results() {
    let (rec_a, rec_b, rec_c) = (CallRecorder::new(), CallRecorder::new(), CallRecorder::new());

    let results = prehandler(vec![
        deferred("a", &rec_a, 35, Ok(json!("RESULT A"))),
        deferred("b", &rec_b, 15, Ok(json!("RESULT B"))),
        deferred("c", &rec_c, 0, Ok(json!("RESULT C"))),
    ])
    .await;

    assert_eq!(
        results,
        acc(vec![
            ("a", Ok(json!("RESULT A"))),
            ("b", Ok(json!("RESULT B"))),
            ("c", Ok(json!("RESULT C"))),
        ])
    );

    assert_eq!(rec_a.call_count(), 1);
    assert_eq!(rec_a.calls()[0], Accumulator::new());
    assert_eq!(rec_b.call_count(), 1);
    assert_eq!(rec_b.calls()[0], acc(vec![("a", Ok(json!("RESULT A")))]));
    assert_eq!(rec_c.call_count(), 1);
    assert_eq!(
        rec_c.calls()[0],
        acc(vec![("a", Ok(json!("RESULT A"))), ("b", Ok(json!("RESULT B")))])
    );
}

#[tokio::test]
async fn test_asynchronous_handler_errors_handled_graciously() {
    let recorder = CallRecorder::new();
    let boom = StepError::failed("boom");

    let results = prehandler(vec![
        deferred("a", &recorder, 20, Ok(json!("A"))),
        deferred("b", &recorder, 5, Err(boom.clone())),
        immediate("c", &recorder, Ok(json!("C"))),
    ])
    .await;

    assert_eq!(results.value("a"), Some(&json!("A")));
    assert_eq!(results.value("c"), Some(&json!("C")));
    assert_eq!(results.error("b"), Some(&boom));

    let calls = recorder.calls();
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[2], acc(vec![("a", Ok(json!("A"))), ("b", Err(boom))]));
}

#[tokio::test]
async fn test_panicking_handler_is_isolated() {
    let recorder = CallRecorder::new();

    let results = prehandler(vec![
        HandlerDescriptor::builder()
            .assign("explodes")
            .work(UnitOfWork::from_immediate_handler(Arc::new(PanickingHandler {
                message: "handler blew up",
            })))
            .build()
            .unwrap(),
        immediate("after", &recorder, Ok(json!("fine"))),
    ])
    .await;

    assert_eq!(
        results.error("explodes"),
        Some(&StepError::Panicked {
            message: "handler blew up".to_string()
        })
    );
    assert_eq!(results.value("after"), Some(&json!("fine")));
    assert!(matches!(
        recorder.calls()[0].error("explodes"),
        Some(StepError::Panicked { .. })
    ));
}

#[tokio::test]
async fn test_local_handlers_compose() {
    let pipeline: Prehandler = vec![
        HandlerDescriptor::builder()
            .assign("name")
            .work(UnitOfWork::from_deferred_handler(Arc::new(DelayHandler::new(
                Duration::from_millis(10),
                json!("ada"),
            ))))
            .build()
            .unwrap(),
        HandlerDescriptor::builder()
            .assign("greeting")
            .work(UnitOfWork::from_immediate_handler(Arc::new(ConstantHandler::new(
                json!("hello"),
            ))))
            .build()
            .unwrap(),
        HandlerDescriptor::builder()
            .assign("broken")
            .work(UnitOfWork::from_immediate_handler(Arc::new(FailHandler::new("nope"))))
            .build()
            .unwrap(),
        HandlerDescriptor::builder()
            .assign("message")
            .work(UnitOfWork::from_immediate_handler(Arc::new(
                TemplateHandler::parse("{greeting}, {name} ({broken})").unwrap(),
            )))
            .build()
            .unwrap(),
    ]
    .into();

    let results = pipeline.run().await;

    assert_eq!(results.value("message"), Some(&json!("hello, ada (<error: nope>)")));
    assert_eq!(
        results.to_json(),
        json!({
            "name": "ada",
            "greeting": "hello",
            "broken": {"error": "nope"},
            "message": "hello, ada (<error: nope>)"
        })
    );
}

#[tokio::test]
async fn test_duplicate_keys_overwrite_in_merge_order() {
    let recorder = CallRecorder::new();

    let results = prehandler(vec![
        deferred("x", &recorder, 10, Ok(json!("first"))),
        immediate("x", &recorder, Ok(json!("second"))),
    ])
    .await;

    assert_eq!(results, acc(vec![("x", Ok(json!("second")))]));
    assert_eq!(recorder.calls()[1], acc(vec![("x", Ok(json!("first")))]));
}
