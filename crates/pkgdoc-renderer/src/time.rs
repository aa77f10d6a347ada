//! Coarse relative time formatting.

use chrono::{DateTime, TimeDelta, Utc};

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a fixed instant.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Describe how long before `now` the instant `t` was.
///
/// Each bucket is closed on its lower bound and open on its upper bound.
/// Counts are truncated, so 119 seconds is still "one minute ago" and
/// exactly two minutes is "2 minutes ago". Instants in the future read as
/// "just now".
#[must_use]
pub fn relative_time(t: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let d = now.signed_duration_since(t);
    let second = TimeDelta::seconds(1);
    let minute = TimeDelta::minutes(1);
    let hour = TimeDelta::hours(1);
    let day = TimeDelta::days(1);

    if d < second {
        "just now".to_owned()
    } else if d < second * 2 {
        "one second ago".to_owned()
    } else if d < minute {
        format!("{} seconds ago", d.num_seconds())
    } else if d < minute * 2 {
        "one minute ago".to_owned()
    } else if d < hour {
        format!("{} minutes ago", d.num_minutes())
    } else if d < hour * 2 {
        "one hour ago".to_owned()
    } else if d < day {
        format!("{} hours ago", d.num_hours())
    } else if d < day * 2 {
        "one day ago".to_owned()
    } else {
        format!("{} days ago", d.num_days())
    }
}
