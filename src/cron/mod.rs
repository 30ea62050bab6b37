//! Cron expression tooling

pub mod presets;
pub mod schedule;

pub use schedule::{CronSchedule, FIELD_NAMES, FIELD_RANGES};
