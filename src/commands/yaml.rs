//! YAML lint, validate and conversion handlers

use std::process::ExitCode;

use console::style;
use serde::Deserialize;

use crate::cli::args::{YamlLintArgs, YamlToJsonArgs, YamlToYamlArgs, YamlValidateArgs};
use crate::commands::json::{parse_json, render_pretty};
use crate::error::{OpskitError, Result};
use crate::input;
use crate::output;

pub fn run_lint(args: YamlLintArgs) -> Result<ExitCode> {
    let content = input::read_file(&args.file)?.into_text()?;
    let name = args.file.display().to_string();

    let (documents, errors) = parse_documents(&content);

    if !errors.is_empty() {
        output::print_error(&format!("{}: {} error(s)", name, errors.len()));
        for error in &errors {
            eprintln!("    {}", style(error).red());
        }
        return Ok(ExitCode::from(1));
    }

    // Style findings only matter in strict mode; a plain lint of valid
    // YAML passes quietly
    if args.strict {
        let warnings = style_warnings(&content);
        if !warnings.is_empty() {
            output::print_warning(&format!(
                "{}: valid with {} warning(s)",
                name,
                warnings.len()
            ));
            for warning in &warnings {
                eprintln!("    {}", style(warning).yellow());
            }
            return Ok(ExitCode::from(1));
        }
    }

    output::print_success(&format!("{}: valid YAML ({} document(s))", name, documents));
    Ok(ExitCode::SUCCESS)
}

pub fn run_validate(args: YamlValidateArgs) -> Result<ExitCode> {
    let raw = input::resolve(args.data.as_deref(), args.file.as_deref())?.into_text()?;
    match serde_yaml::from_str::<serde_yaml::Value>(&raw) {
        Ok(value) => {
            output::print_success(&format!("Valid YAML ({})", describe_value(&value)));
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            output::print_error(&format!("Invalid YAML: {}", yaml_error_line(&e)));
            Ok(ExitCode::from(1))
        }
    }
}

pub fn run_to_json(args: YamlToJsonArgs) -> Result<ExitCode> {
    let raw = input::resolve(args.data.as_deref(), args.file.as_deref())?.into_text()?;
    let value: serde_json::Value = serde_yaml::from_str(&raw).map_err(|e| {
        OpskitError::parse(format!(
            "YAML cannot be represented as JSON: {}",
            yaml_error_line(&e)
        ))
    })?;
    let rendered = render_pretty(&value, args.indent, false)?;
    output::emit_text(args.output.as_deref(), &rendered, "Converted JSON")?;
    Ok(ExitCode::SUCCESS)
}

pub fn run_to_yaml(args: YamlToYamlArgs) -> Result<ExitCode> {
    let raw = input::resolve(args.data.as_deref(), args.file.as_deref())?.into_text()?;
    let value = parse_json(&raw)?;
    let rendered = serde_yaml::to_string(&value)
        .map_err(|e| OpskitError::parse(format!("could not render YAML: {}", e)))?;
    output::emit_text(args.output.as_deref(), rendered.trim_end(), "Converted YAML")?;
    Ok(ExitCode::SUCCESS)
}

/// Parse every document in the stream, collecting parse errors
fn parse_documents(content: &str) -> (usize, Vec<String>) {
    let mut documents = 0;
    let mut errors = Vec::new();
    for document in serde_yaml::Deserializer::from_str(content) {
        match serde_yaml::Value::deserialize(document) {
            Ok(_) => documents += 1,
            Err(e) => {
                errors.push(yaml_error_line(&e));
                // The stream is unreliable past the first syntax error
                break;
            }
        }
    }
    (documents, errors)
}

/// Style findings that are legal YAML but asking for trouble
fn style_warnings(content: &str) -> Vec<String> {
    let mut warnings = Vec::new();
    for (index, line) in content.lines().enumerate() {
        let number = index + 1;
        if line.contains('\t') {
            warnings.push(format!("Line {}: tab character (use spaces)", number));
        }
        if line.trim_end() != line && !line.trim().is_empty() {
            warnings.push(format!("Line {}: trailing whitespace", number));
        }
    }
    warnings
}

fn yaml_error_line(e: &serde_yaml::Error) -> String {
    match e.location() {
        Some(location) => format!("line {}, column {}: {}", location.line(), location.column(), e),
        None => e.to_string(),
    }
}

fn describe_value(value: &serde_yaml::Value) -> String {
    match value {
        serde_yaml::Value::Mapping(map) => format!("mapping, {} keys", map.len()),
        serde_yaml::Value::Sequence(items) => format!("sequence, {} items", items.len()),
        serde_yaml::Value::String(_) => "string".to_string(),
        serde_yaml::Value::Number(_) => "number".to_string(),
        serde_yaml::Value::Bool(_) => "boolean".to_string(),
        serde_yaml::Value::Null => "null".to_string(),
        serde_yaml::Value::Tagged(_) => "tagged value".to_string(),
    }
}
