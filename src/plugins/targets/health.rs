use bevy::prelude::*;

/// Anything that can take damage and die exactly once per life.
pub trait Damageable {
    /// Apply `amount`. Returns `true` only on the hit that crosses zero.
    fn take_damage(&mut self, amount: f32) -> bool;

    fn is_dead(&self) -> bool;
}

#[derive(Component, Debug, Clone, PartialEq)]
pub struct Health {
    pub current: f32,
    pub max: f32,
    dead: bool,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self {
            current: max,
            max,
            dead: false,
        }
    }

    /// Back to full for a new activation.
    #[inline]
    pub fn reset(&mut self) {
        self.current = self.max;
        self.dead = false;
    }
}

impl Damageable for Health {
    fn take_damage(&mut self, amount: f32) -> bool {
        // Already handled: further hits must not re-trigger death.
        if self.dead {
            return false;
        }
        self.current -= amount;
        if self.current <= 0.0 {
            self.dead = true;
            return true;
        }
        false
    }

    #[inline]
    fn is_dead(&self) -> bool {
        self.dead
    }
}
