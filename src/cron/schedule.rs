//! Cron expression parsing, validation, and description
//!
//! Standard 5-field expressions with `*`, steps, ranges, and lists.
//! Each field is validated against its domain at parse time, and the
//! day-of-month/day-of-week fields follow the classic OR rule: when
//! both are restricted, a date matching either one fires.

use crate::error::{OpskitError, Result};
use chrono::{DateTime, Datelike, Duration, Timelike, Utc};
use std::collections::BTreeSet;

pub const FIELD_NAMES: [&str; 5] = ["Minute", "Hour", "Day (Month)", "Month", "Day (Week)"];
pub const FIELD_RANGES: [&str; 5] = ["0-59", "0-23", "1-31", "1-12", "0-7 (0,7=Sun)"];

/// A parsed, validated 5-field cron expression
#[derive(Debug, Clone)]
pub struct CronSchedule {
    parts: [String; 5],
    minutes: Vec<u8>,
    hours: Vec<u8>,
    days_of_month: Vec<u8>,
    months: Vec<u8>,
    /// Normalized to 0-6, 0 = Sunday
    days_of_week: Vec<u8>,
    dom_restricted: bool,
    dow_restricted: bool,
}

impl CronSchedule {
    pub fn parse(expression: &str) -> Result<Self> {
        let fields: Vec<&str> = expression.split_whitespace().collect();
        if fields.len() != 5 {
            return Err(OpskitError::parse(format!(
                "invalid cron expression: expected 5 fields, got {}",
                fields.len()
            )));
        }

        let minutes = parse_field(fields[0], 0, 59, "minute")?;
        let hours = parse_field(fields[1], 0, 23, "hour")?;
        let days_of_month = parse_field(fields[2], 1, 31, "day-of-month")?;
        let months = parse_field(fields[3], 1, 12, "month")?;
        let raw_dow = parse_field(fields[4], 0, 7, "day-of-week")?;

        // 0 and 7 both mean Sunday
        let days_of_week: Vec<u8> = raw_dow
            .into_iter()
            .map(|d| if d == 7 { 0 } else { d })
            .collect::<BTreeSet<u8>>()
            .into_iter()
            .collect();

        // A field counts as restricted unless it starts with '*', matching
        // the day-field handling in Vixie cron
        let dom_restricted = !fields[2].starts_with('*');
        let dow_restricted = !fields[4].starts_with('*');

        Ok(CronSchedule {
            parts: [
                fields[0].to_string(),
                fields[1].to_string(),
                fields[2].to_string(),
                fields[3].to_string(),
                fields[4].to_string(),
            ],
            minutes,
            hours,
            days_of_month,
            months,
            days_of_week,
            dom_restricted,
            dow_restricted,
        })
    }

    /// The original field texts, in expression order
    pub fn parts(&self) -> &[String; 5] {
        &self.parts
    }

    /// Whether the schedule fires at the given instant (second ignored)
    pub fn matches(&self, t: DateTime<Utc>) -> bool {
        if !self.minutes.contains(&(t.minute() as u8))
            || !self.hours.contains(&(t.hour() as u8))
            || !self.months.contains(&(t.month() as u8))
        {
            return false;
        }

        let dom_ok = self.days_of_month.contains(&(t.day() as u8));
        let dow_ok = self
            .days_of_week
            .contains(&(t.weekday().num_days_from_sunday() as u8));

        if self.dom_restricted && self.dow_restricted {
            dom_ok || dow_ok
        } else {
            dom_ok && dow_ok
        }
    }

    /// Enumerate the next `count` fire times strictly after `from`
    ///
    /// Search is capped at five years so impossible dates (February 30)
    /// terminate instead of spinning forever.
    pub fn upcoming(&self, from: DateTime<Utc>, count: usize) -> Vec<DateTime<Utc>> {
        let mut fires = Vec::with_capacity(count);
        let start = match from.with_second(0).and_then(|t| t.with_nanosecond(0)) {
            Some(t) => t,
            None => return fires,
        };

        let mut cursor = start + Duration::minutes(1);
        let limit = cursor + Duration::days(365 * 5);
        while fires.len() < count && cursor < limit {
            if self.matches(cursor) {
                fires.push(cursor);
            }
            cursor += Duration::minutes(1);
        }
        fires
    }

    /// One-line human summary of the schedule
    pub fn describe(&self) -> String {
        let [minute, hour, dom, month, dow] = &self.parts;
        let mut pieces: Vec<String> = Vec::new();

        if minute == "*" && hour == "*" {
            pieces.push("Every minute".to_string());
        } else if let Some(step) = minute.strip_prefix("*/") {
            pieces.push(format!("Every {} minutes", step));
            if hour != "*" {
                pieces.push(describe_hours(hour));
            }
        } else if minute == "*" {
            pieces.push("Every minute".to_string());
            pieces.push(describe_hours(hour));
        } else if hour == "*" {
            pieces.push(format!("At minute {} of every hour", minute));
        } else if is_plain_number(minute) && is_plain_number(hour) {
            pieces.push(format!("At {}:{:0>2}", hour, minute));
        } else {
            pieces.push(format!("At minute {}", minute));
            pieces.push(describe_hours(hour));
        }

        if dom != "*" {
            pieces.push(format!("on day {} of the month", dom));
        }
        if month != "*" {
            pieces.push(format!("in month(s) {}", month));
        }
        if dow != "*" {
            if let Some((start, end)) = dow.split_once('-') {
                pieces.push(format!("on {} through {}", day_name(start), day_name(end)));
            } else if dow.contains(',') {
                let days: Vec<String> = dow.split(',').map(day_name).collect();
                pieces.push(format!("on {}", days.join(", ")));
            } else {
                pieces.push(format!("on {}", day_name(dow)));
            }
        }

        pieces.join(" ")
    }
}

/// Table meaning for a single field value
pub fn field_meaning(value: &str, field_name: &str) -> String {
    let lower = field_name.to_lowercase();
    if value == "*" {
        format!("Every {}", lower)
    } else if let Some(step) = value.strip_prefix("*/") {
        format!("Every {} {}(s)", step, lower)
    } else if value.contains(',') {
        format!("At {} {}", lower, value)
    } else if let Some((start, end)) = value.split_once('-') {
        format!("From {} to {}", start, end)
    } else {
        format!("At {} {}", lower, value)
    }
}

/// Description of an @-shortcut, as documented in crontab(5)
pub fn describe_special(expression: &str) -> Option<&'static str> {
    match expression {
        "@reboot" => Some("Run once at system startup"),
        "@yearly" | "@annually" => Some("Run once a year (0 0 1 1 *)"),
        "@monthly" => Some("Run once a month (0 0 1 * *)"),
        "@weekly" => Some("Run once a week (0 0 * * 0)"),
        "@daily" | "@midnight" => Some("Run once a day (0 0 * * *)"),
        "@hourly" => Some("Run once an hour (0 * * * *)"),
        _ => None,
    }
}

/// 5-field equivalent of an @-shortcut, where one exists
pub fn special_equivalent(expression: &str) -> Option<&'static str> {
    match expression {
        "@yearly" | "@annually" => Some("0 0 1 1 *"),
        "@monthly" => Some("0 0 1 * *"),
        "@weekly" => Some("0 0 * * 0"),
        "@daily" | "@midnight" => Some("0 0 * * *"),
        "@hourly" => Some("0 * * * *"),
        _ => None,
    }
}

fn parse_field(text: &str, min: u8, max: u8, name: &str) -> Result<Vec<u8>> {
    if text.is_empty() {
        return Err(OpskitError::parse(format!("{} field is empty", name)));
    }

    let mut values: BTreeSet<u8> = BTreeSet::new();
    for part in text.split(',') {
        let (range_text, step) = match part.split_once('/') {
            Some((range_text, step_text)) => {
                let step: u8 = step_text.parse().map_err(|_| {
                    OpskitError::parse(format!("{} field: invalid step in '{}'", name, part))
                })?;
                if step == 0 {
                    return Err(OpskitError::parse(format!(
                        "{} field: step cannot be zero in '{}'",
                        name, part
                    )));
                }
                (range_text, step)
            }
            None => (part, 1),
        };

        let (start, end) = if range_text == "*" {
            (min, max)
        } else if let Some((start_text, end_text)) = range_text.split_once('-') {
            let start = parse_value(start_text, min, max, name)?;
            let end = parse_value(end_text, min, max, name)?;
            if start > end {
                return Err(OpskitError::parse(format!(
                    "{} field: reversed range '{}'",
                    name, part
                )));
            }
            (start, end)
        } else {
            let value = parse_value(range_text, min, max, name)?;
            (value, value)
        };

        let mut v = u16::from(start);
        while v <= u16::from(end) {
            values.insert(v as u8);
            v += u16::from(step);
        }
    }

    Ok(values.into_iter().collect())
}

fn parse_value(text: &str, min: u8, max: u8, name: &str) -> Result<u8> {
    let value: u8 = text.trim().parse().map_err(|_| {
        OpskitError::parse(format!("{} field: invalid value '{}'", name, text))
    })?;
    if value < min || value > max {
        return Err(OpskitError::parse(format!(
            "{} field: {} is outside {}-{}",
            name, value, min, max
        )));
    }
    Ok(value)
}

fn describe_hours(hour: &str) -> String {
    if let Some(step) = hour.strip_prefix("*/") {
        format!("every {} hours", step)
    } else if let Some((start, end)) = hour.split_once('-') {
        format!("during hours {} through {}", start, end)
    } else if hour.contains(',') {
        format!("during hours {}", hour)
    } else {
        format!("during hour {}", hour)
    }
}

fn day_name(d: &str) -> String {
    match d.trim() {
        "0" | "7" => "Sunday",
        "1" => "Monday",
        "2" => "Tuesday",
        "3" => "Wednesday",
        "4" => "Thursday",
        "5" => "Friday",
        "6" => "Saturday",
        other => return other.to_string(),
    }
    .to_string()
}

fn is_plain_number(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}
