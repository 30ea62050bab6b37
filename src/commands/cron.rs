//! Cron explain, generate and presets handlers

use std::process::ExitCode;

use chrono::Utc;
use console::style;

use crate::cli::args::{CronExplainArgs, CronGenerateArgs};
use crate::cron::{presets, schedule, CronSchedule, FIELD_NAMES, FIELD_RANGES};
use crate::error::{OpskitError, Result};
use crate::output;

pub fn run_explain(args: CronExplainArgs) -> Result<ExitCode> {
    let expression = args.expression.trim();

    if expression.starts_with('@') {
        return explain_special(expression, args.next);
    }

    let parsed = CronSchedule::parse(expression)?;

    output::print_header(&format!("Cron: {}", expression));
    let rows: Vec<Vec<String>> = parsed
        .parts()
        .iter()
        .zip(FIELD_NAMES.iter().zip(FIELD_RANGES.iter()))
        .map(|(value, (name, range))| {
            vec![
                name.to_string(),
                value.clone(),
                range.to_string(),
                schedule::field_meaning(value, name),
            ]
        })
        .collect();
    output::print_table(&["Field", "Value", "Range", "Meaning"], &rows);

    println!();
    println!(
        "    {} {}",
        style("Summary:").green().bold(),
        parsed.describe()
    );

    if let Some(count) = args.next {
        print_fire_times(&parsed, count);
    }
    Ok(ExitCode::SUCCESS)
}

pub fn run_generate(args: CronGenerateArgs) -> Result<ExitCode> {
    if let Some(name) = &args.preset {
        if args.minute.is_some()
            || args.hour.is_some()
            || args.day.is_some()
            || args.month.is_some()
            || args.weekday.is_some()
        {
            return Err(OpskitError::input(
                "a preset cannot be combined with field flags",
            ));
        }
        let (expression, description) = presets::find(name).ok_or_else(|| {
            OpskitError::UnknownPreset { name: name.clone() }
        })?;
        output::print_panel(
            &format!("Preset: {}", name),
            &format!("{}\n{}", expression, description),
        );
        return Ok(ExitCode::SUCCESS);
    }

    let expression = format!(
        "{} {} {} {} {}",
        args.minute.as_deref().unwrap_or("*"),
        args.hour.as_deref().unwrap_or("*"),
        args.day.as_deref().unwrap_or("*"),
        args.month.as_deref().unwrap_or("*"),
        args.weekday.as_deref().unwrap_or("*"),
    );
    // Reject impossible field values instead of echoing them back
    let parsed = CronSchedule::parse(&expression)?;

    output::print_panel("Generated Expression", &expression);
    println!("    {}", style(parsed.describe()).dim());
    Ok(ExitCode::SUCCESS)
}

pub fn run_presets() -> Result<ExitCode> {
    output::print_header("Cron Presets");
    let rows: Vec<Vec<String>> = presets::PRESETS
        .iter()
        .map(|(name, expression, description)| {
            vec![
                name.to_string(),
                expression.to_string(),
                description.to_string(),
            ]
        })
        .collect();
    output::print_table(&["Name", "Expression", "Description"], &rows);
    println!();
    println!(
        "    {}",
        style("Expand one with: opskit cron generate <preset>").dim()
    );
    Ok(ExitCode::SUCCESS)
}

fn explain_special(expression: &str, next: Option<usize>) -> Result<ExitCode> {
    let description = schedule::describe_special(expression).ok_or_else(|| {
        OpskitError::parse(format!("unknown special expression '{}'", expression))
    })?;
    output::print_panel(&format!("Cron: {}", expression), description);

    if let Some(count) = next {
        match schedule::special_equivalent(expression) {
            Some(equivalent) => {
                let parsed = CronSchedule::parse(equivalent)?;
                print_fire_times(&parsed, count);
            }
            None => output::print_warning("@reboot runs at boot, it has no fire times"),
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn print_fire_times(parsed: &CronSchedule, count: usize) {
    let fires = parsed.upcoming(Utc::now(), count);
    if fires.is_empty() {
        output::print_warning("no matching fire times within the next five years");
        return;
    }
    println!();
    println!("    {}", style("Next fire times (UTC):").cyan().bold());
    for fire in fires {
        println!("      {}", fire.format("%Y-%m-%d %H:%M"));
    }
}
