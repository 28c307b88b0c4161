use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

/// Source of "now", swappable in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn system_clock() -> Arc<dyn Clock> {
    Arc::new(SystemClock)
}

#[cfg_attr(not(test), allow(dead_code))]
pub fn fixed_clock(timestamp: i64) -> Arc<dyn Clock> {
    let now = Utc
        .timestamp_opt(timestamp, 0)
        .single()
        .unwrap_or_else(Utc::now);
    Arc::new(FixedClock(now))
}

/// Formats a unix timestamp relative to `now`, e.g. "5m ago".
pub fn format_relative(timestamp: u64, now: DateTime<Utc>) -> String {
    let now_ts = now.timestamp().max(0) as u64;
    let secs = now_ts.saturating_sub(timestamp);
    match secs {
        0..60 => "just now".to_string(),
        60..3600 => format!("{}m ago", secs / 60),
        3600..86400 => format!("{}h ago", secs / 3600),
        _ => format!("{}d ago", secs / 86400),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_092_800;

    fn now() -> DateTime<Utc> {
        fixed_clock(NOW).now()
    }

    #[test]
    fn recent_is_just_now() {
        assert_eq!(format_relative(NOW as u64 - 5, now()), "just now");
    }

    #[test]
    fn minutes_hours_days() {
        assert_eq!(format_relative(NOW as u64 - 300, now()), "5m ago");
        assert_eq!(format_relative(NOW as u64 - 7200, now()), "2h ago");
        assert_eq!(format_relative(NOW as u64 - 86400 * 3, now()), "3d ago");
    }

    #[test]
    fn future_timestamps_clamp_to_just_now() {
        assert_eq!(format_relative(NOW as u64 + 100, now()), "just now");
    }
}
