// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod step;

pub use config::ConfigError;
pub use step::{StepError, StepResult};
