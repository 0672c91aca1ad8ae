//! Human readable "time ago" text for comment timestamps.

use chrono::{DateTime, Datelike, Utc};

pub trait RelativeTimeFormatter {
    fn format(&self, at: &DateTime<Utc>) -> String;
}

/// Formats timestamps relative to a fixed `now`.
///
/// Within a month the output is elapsed time ("3 hours ago", "yesterday");
/// older timestamps fall back to an absolute date ("on Mar 5").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ago {
    now: DateTime<Utc>,
}

impl Ago {
    #[must_use]
    pub const fn at(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    #[must_use]
    pub fn now() -> Self {
        Self::at(Utc::now())
    }
}

impl RelativeTimeFormatter for Ago {
    fn format(&self, at: &DateTime<Utc>) -> String {
        let elapsed = self.now.signed_duration_since(*at);

        let minutes = elapsed.num_minutes();
        if minutes < 1 {
            // also covers timestamps slightly ahead of our clock
            return "just now".to_string();
        }
        if minutes < 60 {
            return plural(minutes, "minute");
        }

        let hours = elapsed.num_hours();
        if hours < 24 {
            return plural(hours, "hour");
        }

        match elapsed.num_days() {
            1 => "yesterday".to_string(),
            days @ 2..30 => format!("{days} days ago"),
            _ if at.year() == self.now.year() => format!("on {}", at.format("%b %-d")),
            _ => format!("on {}", at.format("%b %-d, %Y")),
        }
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

/// Full timestamp used for the hover title, e.g. `Jan 15, 2024, 10:30 AM UTC`.
#[must_use]
pub fn format_title(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y, %-I:%M %p UTC").to_string()
}
