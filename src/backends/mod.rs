// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Handler backends for pipeline steps.
//!
//! # Available Backends
//!
//! ## Local Backend
//! In-process Rust handlers a configuration can reference by name:
//! - **Values**: `constant`, `delay`
//! - **Accumulator access**: `lookup`, `template`
//! - **Testing failure isolation**: `fail`
//!
//! ## Stub Backend (Test-Only)
//! Recording and panicking handlers for executor tests. Only available in test
//! builds.
//!
//! # Architecture
//!
//! ```text
//! Configuration → Factory → UnitOfWork → HandlerDescriptor → Prehandler
//! ```
//!
//! # Examples
//!
//! ```rust
//! use prehandler::backends::local::LocalHandlerFactory;
//! use prehandler::pipeline::WorkKind;
//! use serde_json::json;
//! use std::collections::HashMap;
//!
//! let options = HashMap::from([("value".to_string(), json!("hello"))]);
//! let work = LocalHandlerFactory::create_unit_of_work("greeting", "constant", &options)?;
//! assert_eq!(work.kind(), WorkKind::Immediate);
//! # Ok::<(), prehandler::errors::ConfigError>(())
//! ```

pub mod local;
#[cfg(test)]
pub mod stub;
