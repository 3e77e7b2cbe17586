// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

use super::handlers::*;
use crate::errors::ConfigError;
use crate::pipeline::UnitOfWork;

/// Factory for creating local (in-process) handlers as units of work
pub struct LocalHandlerFactory;

impl LocalHandlerFactory {
    /// Create a unit of work from a handler name and its options
    ///
    /// - "constant" -> ConstantHandler (immediate), option `value`
    /// - "delay" -> DelayHandler (deferred), options `millis`, `value`
    /// - "fail" -> FailHandler (immediate), option `message`
    /// - "lookup" -> LookupHandler (immediate), option `key` (required)
    /// - "template" -> TemplateHandler (immediate), option `template` (required)
    pub fn create_unit_of_work(
        assign: &str,
        handler: &str,
        options: &HandlerOptions,
    ) -> Result<UnitOfWork, ConfigError> {
        match handler {
            "constant" => {
                let value = options.get("value").cloned().unwrap_or(Value::Null);
                Ok(UnitOfWork::from_immediate_handler(Arc::new(
                    ConstantHandler::new(value),
                )))
            }
            "delay" => {
                let millis = u64_option(assign, options, "millis")?.unwrap_or(0);
                let value = options.get("value").cloned().unwrap_or(Value::Null);
                Ok(UnitOfWork::from_deferred_handler(Arc::new(DelayHandler::new(
                    Duration::from_millis(millis),
                    value,
                ))))
            }
            "fail" => {
                let handler = match string_option(assign, options, "message")? {
                    Some(message) => FailHandler::new(message),
                    None => FailHandler::default(),
                };
                Ok(UnitOfWork::from_immediate_handler(Arc::new(handler)))
            }
            "lookup" => {
                let key = required_string_option(assign, options, "key")?;
                Ok(UnitOfWork::from_immediate_handler(Arc::new(
                    LookupHandler::new(key),
                )))
            }
            "template" => {
                let template = required_string_option(assign, options, "template")?;
                let handler =
                    TemplateHandler::parse(&template).map_err(|reason| ConfigError::InvalidOption {
                        assign: assign.to_string(),
                        option: "template".to_string(),
                        reason,
                    })?;
                Ok(UnitOfWork::from_immediate_handler(Arc::new(handler)))
            }
            _ => Err(ConfigError::UnknownHandler {
                assign: assign.to_string(),
                handler: handler.to_string(),
            }),
        }
    }

    /// List all available local handler names
    pub fn list_available_handlers() -> Vec<&'static str> {
        vec!["constant", "delay", "fail", "lookup", "template"]
    }

    /// Check if a handler is available
    pub fn is_handler_available(handler: &str) -> bool {
        Self::list_available_handlers().contains(&handler)
    }
}
