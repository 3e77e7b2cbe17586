// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;
mod runtime;
mod validation;


pub use loader::{
    load_and_validate_config, load_config, parse_toml_config, parse_yaml_config, Config,
    StepConfig,
};
pub use runtime::RuntimeBuilder;
pub use validation::{find_duplicate_assign_keys, validate_config};
