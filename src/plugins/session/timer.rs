//! Cancellable one-shot timers.

use std::time::Duration;

use bevy::prelude::*;

/// At most one pending countdown. Starting a new one drops the old one.
#[derive(Debug, Clone, Default)]
pub struct PendingTimer {
    timer: Option<Timer>,
}

impl PendingTimer {
    pub fn start(&mut self, secs: f32) {
        self.timer = Some(Timer::from_seconds(secs.max(0.0), TimerMode::Once));
    }

    #[inline]
    pub fn cancel(&mut self) {
        self.timer = None;
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.timer.is_some()
    }

    /// Returns `true` exactly once, on the tick the timer elapses.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let Some(timer) = self.timer.as_mut() else {
            return false;
        };
        if timer.tick(dt).is_finished() {
            self.timer = None;
            return true;
        }
        false
    }
}
