use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{LocalResult, TimeZone, Utc};
use foundation::time::Time;
use runtime::clock::WallClock;

/// Wall clock backed by the system time, in Unix seconds.
#[derive(Debug, Copy, Clone, Default)]
pub struct SystemClock;

impl WallClock for SystemClock {
    fn now(&self) -> Time {
        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.0);
        Time(since_epoch)
    }
}

/// Formats the simulated timestamp for the on-screen clock label.
pub fn format_clock(t: Time) -> String {
    match Utc.timestamp_opt(t.0 as i64, 0) {
        LocalResult::Single(dt) => dt.format("%a %b %e %H:%M:%S %Y").to_string(),
        _ => format!("{:.0}s", t.0),
    }
}

#[cfg(test)]
mod tests {
    use super::format_clock;
    use foundation::time::Time;

    #[test]
    fn formats_unix_seconds_as_utc() {
        // 2018-03-18 06:26:58 UTC.
        assert_eq!(format_clock(Time(1521354418.0)), "Sun Mar 18 06:26:58 2018");
    }

    #[test]
    fn out_of_range_time_falls_back_to_seconds() {
        assert_eq!(format_clock(Time(1e18)), "1000000000000000000s");
    }
}
