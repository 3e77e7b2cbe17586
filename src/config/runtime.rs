// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::backends::local::LocalHandlerFactory;
use crate::config::{validate_config, Config};
use crate::errors::ConfigError;
use crate::pipeline::{HandlerDescriptor, Prehandler};

/// Pipeline runtime builder - turns a configuration into a ready-to-run [`Prehandler`].
///
/// All configuration problems surface here, at build time. Once a
/// `Prehandler` exists, running it cannot fail; only its steps can.
///
/// # Examples
///
/// ```
/// use prehandler::config::{parse_yaml_config, RuntimeBuilder};
///
/// let config = parse_yaml_config(
///     r#"
/// name: demo
/// steps:
///   - assign: a
///     handler: constant
///     options: { value: 1 }
/// "#,
/// )?;
///
/// let pipeline = RuntimeBuilder::from_config(&config)?;
/// assert_eq!(pipeline.len(), 1);
/// assert_eq!(pipeline.name(), "demo");
/// # Ok::<(), prehandler::errors::ConfigError>(())
/// ```
pub struct RuntimeBuilder;

impl RuntimeBuilder {
    /// Validate `cfg` and build one descriptor per step, in order.
    pub fn from_config(cfg: &Config) -> Result<Prehandler, ConfigError> {
        validate_config(cfg).map_err(ConfigError::Validation)?;

        let mut pipeline = Prehandler::default();
        for (index, step) in cfg.steps.iter().enumerate() {
            let assign = step
                .assign
                .as_deref()
                .ok_or(ConfigError::UnnamedStep { index })?;
            let handler = step
                .handler
                .as_deref()
                .ok_or_else(|| ConfigError::MissingHandler {
                    assign: assign.to_string(),
                })?;

            let work = LocalHandlerFactory::create_unit_of_work(assign, handler, &step.options)?;
            pipeline.push(HandlerDescriptor::builder().assign(assign).work(work).build()?);
        }

        Ok(match &cfg.name {
            Some(name) => pipeline.with_name(name.clone()),
            None => pipeline,
        })
    }
}
