// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends;       // handler backends
pub mod config;         // config loading + runtime builder
pub mod errors;         // error handling
pub mod observability;
pub mod pipeline;       // sequential executor
pub mod traits;         // handler abstractions

pub use pipeline::{prehandler, Accumulator, HandlerDescriptor, Prehandler, UnitOfWork};
