// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::Value;

use crate::errors::{StepError, StepResult};
use crate::pipeline::Accumulator;
use crate::traits::ImmediateHandler;

#[derive(Debug, Clone, PartialEq)]
enum Segment {
    Literal(String),
    Key(String),
}

/// Template handler - fills `{key}` placeholders from earlier results
///
/// String results are inserted verbatim, other JSON values compactly, and
/// failed entries as `<error: message>`. `{{` and `}}` produce literal braces.
pub struct TemplateHandler {
    segments: Vec<Segment>,
}

impl TemplateHandler {
    /// Parse `template`; fails on an unterminated, nested or empty placeholder.
    pub fn parse(template: &str) -> Result<Self, String> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = template.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    literal.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    literal.push('}');
                }
                '{' => {
                    let mut key = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some('{') => return Err(format!("nested '{{' in placeholder '{{{}'", key)),
                            Some(k) => key.push(k),
                            None => return Err(format!("unterminated placeholder '{{{}'", key)),
                        }
                    }
                    let key = key.trim().to_string();
                    if key.is_empty() {
                        return Err("empty placeholder '{}'".to_string());
                    }
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Key(key));
                }
                '}' => return Err("unmatched '}'".to_string()),
                other => literal.push(other),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }
        Ok(Self { segments })
    }
}

impl ImmediateHandler for TemplateHandler {
    fn handle(&self, acc: &Accumulator) -> StepResult {
        let mut rendered = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => rendered.push_str(text),
                Segment::Key(key) => match acc.get(key) {
                    Some(Ok(Value::String(text))) => rendered.push_str(text),
                    Some(Ok(value)) => rendered.push_str(&value.to_string()),
                    Some(Err(error)) => rendered.push_str(&format!("<error: {}>", error)),
                    None => {
                        return Err(StepError::failed(format!(
                            "template placeholder '{{{}}}' has no result",
                            key
                        )))
                    }
                },
            }
        }
        Ok(Value::String(rendered))
    }

    fn name(&self) -> &'static str {
        "template"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_renders_strings_values_and_errors() {
        let handler = TemplateHandler::parse("{greeting}, {user}! count={count} {broken}").unwrap();
        let acc = Accumulator::new()
            .merge("greeting", Ok(json!("hello")))
            .merge("user", Ok(json!({"id": 1})))
            .merge("count", Ok(json!(3)))
            .merge("broken", Err(StepError::failed("boom")));

        assert_eq!(
            handler.handle(&acc),
            Ok(json!(r#"hello, {"id":1}! count=3 <error: boom>"#))
        );
    }

    #[test]
    fn test_missing_placeholder_fails_step() {
        let handler = TemplateHandler::parse("hi {who}").unwrap();
        let outcome = handler.handle(&Accumulator::new());
        assert_eq!(
            outcome,
            Err(StepError::failed("template placeholder '{who}' has no result"))
        );
    }

    #[test]
    fn test_escaped_braces() {
        let handler = TemplateHandler::parse("{{literal}} {x}").unwrap();
        let acc = Accumulator::new().merge("x", Ok(json!("X")));
        assert_eq!(handler.handle(&acc), Ok(json!("{literal} X")));
    }

    #[test]
    fn test_parse_errors() {
        assert!(TemplateHandler::parse("open {never").is_err());
        assert!(TemplateHandler::parse("empty {}").is_err());
        assert!(TemplateHandler::parse("stray } brace").is_err());
    }

    #[test]
    fn test_nested_open_brace_rejected() {
        assert_eq!(
            TemplateHandler::parse("{a{b}").err(),
            Some("nested '{' in placeholder '{a'".to_string())
        );
        assert!(TemplateHandler::parse("{outer {inner}}").is_err());
    }
}
