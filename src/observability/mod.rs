// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! All diagnostic and operational log lines of the pipeline come from the
//! message types in [`messages`]. Each message is a small struct with a
//! `Display` implementation and a [`messages::StructuredLog`] implementation
//! that emits it at the right level with its fields attached.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::pipeline` - pipeline run lifecycle
//! * `messages::step` - per-step execution events
//! * `messages::validation` - configuration validation warnings and errors
//!
//! # Usage
//!
//! ```rust
//! use prehandler::observability::messages::{pipeline::PipelineStarted, StructuredLog};
//!
//! PipelineStarted {
//!     pipeline: "preload",
//!     step_count: 3,
//! }
//! .log();
//! ```

pub mod messages;
