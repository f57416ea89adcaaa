//! Countdown to an upcoming event.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::watch;

use super::scope::ViewScope;

/// Time remaining, broken into display units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    /// True once the target has been reached.
    pub fn is_elapsed(&self) -> bool {
        *self == Countdown::default()
    }
}

/// Time from `now` until `target`, zero if the target has passed.
pub fn time_until(now: DateTime<Utc>, target: DateTime<Utc>) -> Countdown {
    let total = (target - now).num_seconds().max(0);
    Countdown {
        days: total / 86_400,
        hours: total % 86_400 / 3_600,
        minutes: total % 3_600 / 60,
        seconds: total % 60,
    }
}

/// Recompute the countdown every second for as long as `scope` is active.
///
/// The returned receiver always holds the latest value.
pub fn spawn_ticker(scope: &ViewScope, target: DateTime<Utc>) -> watch::Receiver<Countdown> {
    let (tx, rx) = watch::channel(time_until(Utc::now(), target));
    scope.spawn_interval(Duration::from_secs(1), move || {
        tx.send_replace(time_until(Utc::now(), target));
    });
    rx
}
