//! JSON beautify, minify, validate and query handlers

use std::process::ExitCode;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

use crate::cli::args::{JsonBeautifyArgs, JsonMinifyArgs, JsonQueryArgs, JsonValidateArgs};
use crate::error::{OpskitError, Result};
use crate::input;
use crate::output;

pub fn run_beautify(args: JsonBeautifyArgs) -> Result<ExitCode> {
    let raw = input::resolve(args.data.as_deref(), args.file.as_deref())?.into_text()?;
    let value = parse_json(&raw)?;
    let pretty = render_pretty(&value, args.indent, args.sort_keys)?;
    output::emit_text(args.output.as_deref(), &pretty, "Beautified JSON")?;
    Ok(ExitCode::SUCCESS)
}

pub fn run_minify(args: JsonMinifyArgs) -> Result<ExitCode> {
    let raw = input::resolve(args.data.as_deref(), args.file.as_deref())?.into_text()?;
    let value = parse_json(&raw)?;
    let compact = serde_json::to_string(&value)
        .map_err(|e| OpskitError::parse(format!("could not render JSON: {}", e)))?;
    output::emit_text(args.output.as_deref(), &compact, "Minified JSON")?;
    Ok(ExitCode::SUCCESS)
}

pub fn run_validate(args: JsonValidateArgs) -> Result<ExitCode> {
    let raw = input::resolve(args.data.as_deref(), args.file.as_deref())?.into_text()?;
    match serde_json::from_str::<Value>(&raw) {
        Ok(value) => {
            output::print_success(&format!("Valid JSON ({})", describe_value(&value)));
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            output::print_error(&format!("Invalid JSON: {}", e));
            Ok(ExitCode::from(1))
        }
    }
}

pub fn run_query(args: JsonQueryArgs) -> Result<ExitCode> {
    let raw = input::resolve(args.data.as_deref(), args.file.as_deref())?.into_text()?;
    let data = jmespath::Variable::from_json(&raw)
        .map_err(|e| OpskitError::parse(format!("invalid JSON: {}", e)))?;

    let expression = jmespath::compile(&args.expression)
        .map_err(|e| OpskitError::parse(format!("invalid query expression: {}", e)))?;
    let result = expression
        .search(data)
        .map_err(|e| OpskitError::parse(format!("query failed: {}", e)))?;

    let rendered = serde_json::to_string_pretty(&*result)
        .map_err(|e| OpskitError::parse(format!("could not render result: {}", e)))?;
    println!("{}", rendered);
    Ok(ExitCode::SUCCESS)
}

pub(crate) fn parse_json(raw: &str) -> Result<Value> {
    serde_json::from_str(raw).map_err(|e| OpskitError::parse(format!("invalid JSON: {}", e)))
}

/// Serialize with a configurable indent width, optionally with sorted keys
pub(crate) fn render_pretty(value: &Value, indent: usize, sort_keys: bool) -> Result<String> {
    let value = if sort_keys {
        sort_value(value)
    } else {
        value.clone()
    };
    let indent_text = " ".repeat(indent);
    let formatter = PrettyFormatter::with_indent(indent_text.as_bytes());

    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| OpskitError::parse(format!("could not render JSON: {}", e)))?;
    String::from_utf8(buffer).map_err(|_| OpskitError::parse("rendered JSON is not valid UTF-8"))
}

/// Rebuild the value with object keys in lexical order, recursively
fn sort_value(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            let mut sorted = serde_json::Map::new();
            for (key, inner) in entries {
                sorted.insert(key.clone(), sort_value(inner));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_value).collect()),
        other => other.clone(),
    }
}

fn describe_value(value: &Value) -> String {
    match value {
        Value::Object(map) => format!("{} keys", map.len()),
        Value::Array(items) => format!("{} items", items.len()),
        Value::String(_) => "string".to_string(),
        Value::Number(_) => "number".to_string(),
        Value::Bool(_) => "boolean".to_string(),
        Value::Null => "null".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sorts_keys_recursively() {
        let value = json!({"b": {"z": 1, "a": 2}, "a": 3});
        let rendered = render_pretty(&value, 2, true).unwrap();
        let a = rendered.find("\"a\"").unwrap();
        let b = rendered.find("\"b\"").unwrap();
        assert!(a < b);
        let inner_a = rendered.rfind("\"a\"").unwrap();
        let inner_z = rendered.find("\"z\"").unwrap();
        assert!(inner_a < inner_z);
    }

    #[test]
    fn preserves_key_order_without_sorting() {
        let value: Value = serde_json::from_str(r#"{"zebra": 1, "apple": 2}"#).unwrap();
        let rendered = render_pretty(&value, 2, false).unwrap();
        assert!(rendered.find("zebra").unwrap() < rendered.find("apple").unwrap());
    }

    #[test]
    fn indent_width_is_respected() {
        let value = json!({"key": "value"});
        let rendered = render_pretty(&value, 4, false).unwrap();
        assert!(rendered.contains("\n    \"key\""));
    }

    #[test]
    fn describes_container_sizes() {
        assert_eq!(describe_value(&json!({"a": 1, "b": 2})), "2 keys");
        assert_eq!(describe_value(&json!([1, 2, 3])), "3 items");
        assert_eq!(describe_value(&json!("hi")), "string");
        assert_eq!(describe_value(&json!(null)), "null");
    }
}
