use bevy::prelude::*;

/// Time a launched ball stays live before returning to its pool.
#[derive(Component, Debug, Clone)]
pub struct Lifetime(pub Timer);

impl Lifetime {
    /// Negative or NaN lengths become an immediately expiring timer.
    pub fn new(secs: f32) -> Self {
        let secs = if secs.is_finite() { secs.max(0.0) } else { 0.0 };
        Self(Timer::from_seconds(secs, TimerMode::Once))
    }

    #[inline]
    pub fn restart(&mut self) {
        self.0.reset();
    }
}

/// Damage dealt on contact.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Damaging {
    pub amount: f32,
}
