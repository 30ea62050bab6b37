//! Named cron presets for common scheduling needs

/// (name, expression, description)
pub const PRESETS: [(&str, &str, &str); 24] = [
    ("every-minute", "* * * * *", "Every minute"),
    ("every-5min", "*/5 * * * *", "Every 5 minutes"),
    ("every-15min", "*/15 * * * *", "Every 15 minutes"),
    ("every-30min", "*/30 * * * *", "Every 30 minutes"),
    ("hourly", "0 * * * *", "Every hour at minute 0"),
    ("every-2h", "0 */2 * * *", "Every 2 hours"),
    ("every-6h", "0 */6 * * *", "Every 6 hours"),
    ("daily", "0 0 * * *", "Every day at midnight"),
    ("daily-9am", "0 9 * * *", "Every day at 9:00 AM"),
    ("daily-6pm", "0 18 * * *", "Every day at 6:00 PM"),
    ("weekly", "0 0 * * 0", "Every Sunday at midnight"),
    ("weekdays", "0 9 * * 1-5", "Weekdays at 9:00 AM"),
    ("weekends", "0 10 * * 6,0", "Weekends at 10:00 AM"),
    ("monthly", "0 0 1 * *", "First day of month at midnight"),
    ("quarterly", "0 0 1 1,4,7,10 *", "First day of each quarter"),
    ("yearly", "0 0 1 1 *", "January 1st at midnight"),
    ("reboot", "@reboot", "On system reboot"),
    ("midnight", "0 0 * * *", "At midnight daily"),
    ("business-hours", "*/15 9-17 * * 1-5", "Every 15min during business hours"),
    ("backup-nightly", "0 2 * * *", "Daily at 2:00 AM (backup window)"),
    ("cleanup-weekly", "0 3 * * 0", "Sunday at 3:00 AM (cleanup window)"),
    ("health-check", "*/5 * * * *", "Every 5 minutes (health check)"),
    ("log-rotation", "0 0 * * *", "Daily at midnight (log rotation)"),
    ("cert-renewal", "0 0 1,15 * *", "1st and 15th of month (cert check)"),
];

/// Look up a preset by name, returning its expression and description
pub fn find(name: &str) -> Option<(&'static str, &'static str)> {
    PRESETS
        .iter()
        .find(|(preset, _, _)| *preset == name)
        .map(|(_, expression, description)| (*expression, *description))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cron::CronSchedule;

    #[test]
    fn known_preset_resolves() {
        let (expression, description) = find("daily").unwrap();
        assert_eq!(expression, "0 0 * * *");
        assert_eq!(description, "Every day at midnight");
    }

    #[test]
    fn unknown_preset_is_none() {
        assert!(find("fortnightly").is_none());
    }

    #[test]
    fn every_preset_expression_parses() {
        for (name, expression, _) in PRESETS {
            if expression.starts_with('@') {
                continue;
            }
            assert!(
                CronSchedule::parse(expression).is_ok(),
                "preset '{}' has an invalid expression",
                name
            );
        }
    }
}
