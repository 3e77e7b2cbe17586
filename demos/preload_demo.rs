// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Preload two slow values, then render a view from them.
//!
//! The view only renders once the pipeline has settled; a failed value is
//! rendered as its error instead of taking the whole view down.

use prehandler::errors::StepError;
use prehandler::{prehandler, Accumulator, HandlerDescriptor};
use serde_json::json;
use std::time::Duration;

fn render(results: &Accumulator) {
    println!("Welcome to the preload demo");
    for key in ["myPromise", "myOtherPromise", "broken"] {
        match results.get(key) {
            Some(Ok(value)) => println!("{}: {}", key, value),
            Some(Err(error)) => println!("{}: <error: {}>", key, error),
            None => println!("{}: <missing>", key),
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("prehandler=debug")
        .init();

    println!("Loading...");

    let results = prehandler(vec![
        HandlerDescriptor::deferred("myPromise", |_| async {
            tokio::time::sleep(Duration::from_millis(300)).await;
            Ok(json!("myPromise resolved value."))
        }),
        HandlerDescriptor::deferred("myOtherPromise", |_| async {
            tokio::time::sleep(Duration::from_millis(200)).await;
            Ok(json!("myOtherPromise resolved value."))
        }),
        HandlerDescriptor::immediate("broken", |_| {
            Err(StepError::failed("this value could not be loaded"))
        }),
    ])
    .await;

    render(&results);
}
