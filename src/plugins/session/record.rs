use bevy::prelude::*;

/// Per-round counters. Only the session's message handlers write these.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreRecord {
    pub total_score: i32,
    pub shots_fired: u32,
    pub targets_hit: u32,
}

impl ScoreRecord {
    /// Hit percentage, rounded half-to-even. Zero when nothing was fired.
    pub fn accuracy(&self) -> u32 {
        if self.shots_fired == 0 {
            return 0;
        }
        let pct = f64::from(self.targets_hit) / f64::from(self.shots_fired) * 100.0;
        pct.round_ties_even() as u32
    }

    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn snapshot(&self) -> ResultsSnapshot {
        ResultsSnapshot {
            final_score: self.total_score,
            shots_fired: self.shots_fired,
            targets_hit: self.targets_hit,
            accuracy: self.accuracy(),
        }
    }
}

/// Frozen copy of the record taken when the round ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResultsSnapshot {
    pub final_score: i32,
    pub shots_fired: u32,
    pub targets_hit: u32,
    pub accuracy: u32,
}

/// Round timer.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct RoundClock {
    pub remaining: f32,
    pub active: bool,
}

impl RoundClock {
    pub fn start(&mut self, duration_secs: f32) {
        self.remaining = duration_secs;
        self.active = true;
    }

    /// Advance an active round. Returns `true` on the tick that crosses zero;
    /// the clock is inactive afterwards, so it can only fire once per round.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.active {
            return false;
        }
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.remaining = 0.0;
            self.active = false;
            return true;
        }
        false
    }
}
