//! View-scoped timers.
//!
//! Timers belong to the view that started them. A [`ViewScope`] is created
//! when a view activates; every task spawned through it stops when the
//! scope is deactivated or dropped, so no callback can fire into a view
//! that is gone.
//!
//! Spawning requires a running Tokio runtime.

use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{debug, warn};

/// Owner of all timers started by one mounted view.
#[derive(Debug)]
pub struct ViewScope {
    name: String,
    token: CancellationToken,
    tracker: TaskTracker,
}

impl ViewScope {
    /// Open a scope for the view called `name`.
    pub fn activate(name: impl Into<String>) -> Self {
        let name = name.into();
        debug!(view = %name, "view activated");
        Self {
            name,
            token: CancellationToken::new(),
            tracker: TaskTracker::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_active(&self) -> bool {
        !self.token.is_cancelled()
    }

    /// Token cancelled together with this scope, for work spawned elsewhere.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.child_token()
    }

    /// Tasks still running.
    pub fn task_count(&self) -> usize {
        self.tracker.len()
    }

    fn ensure_active(&self, what: &str) -> bool {
        if self.is_active() {
            return true;
        }
        warn!(view = %self.name, timer = what, "ignoring timer on deactivated view");
        false
    }

    /// Call `on_tick` every `period`, starting immediately.
    pub fn spawn_interval<F>(&self, period: Duration, mut on_tick: F)
    where
        F: FnMut() + Send + 'static,
    {
        if !self.ensure_active("interval") {
            return;
        }
        // tokio rejects zero periods
        let period = period.max(Duration::from_millis(1));
        let token = self.token.clone();

        self.tracker.spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = interval.tick() => on_tick(),
                }
            }
        });
    }

    /// Call `f` once after `delay`, unless the scope closes first.
    pub fn spawn_after<F>(&self, delay: Duration, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if !self.ensure_active("delay") {
            return;
        }
        let token = self.token.clone();

        self.tracker.spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(delay) => f(),
            }
        });
    }

    /// Staggered starts: call `f(i)` for `i` in `0..count`, the i-th call
    /// `i * step` after the first. Used for entrance animations.
    pub fn stagger<F>(&self, count: usize, step: Duration, mut f: F)
    where
        F: FnMut(usize) + Send + 'static,
    {
        if count == 0 || !self.ensure_active("stagger") {
            return;
        }
        let token = self.token.clone();

        self.tracker.spawn(async move {
            for i in 0..count {
                if i > 0 {
                    tokio::select! {
                        _ = token.cancelled() => return,
                        _ = tokio::time::sleep(step) => {}
                    }
                }
                if token.is_cancelled() {
                    return;
                }
                f(i);
            }
        });
    }

    /// Stop every timer of this view. Idempotent.
    pub fn deactivate(&self) {
        if self.is_active() {
            debug!(view = %self.name, tasks = self.tracker.len(), "view deactivated");
        }
        self.token.cancel();
        self.tracker.close();
    }

    /// Deactivate and wait until every task has exited.
    pub async fn shutdown(self) {
        self.deactivate();
        self.tracker.wait().await;
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        self.token.cancel();
        self.tracker.close();
    }
}
