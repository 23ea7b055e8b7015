//! Target-side messages.
//!
//! The death pipeline is a producer → queue → consumer chain:
//! damage writes `Died`, the lifecycle consumer turns it into
//! `Scored` + `TargetHit`, a pool release, and finally `TargetDestroyed`.

use bevy::prelude::*;

use crate::plugins::pool::SlotId;

/// Monotonic wave counter. Bindings carry the wave they were made for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct WaveId(pub u32);

impl WaveId {
    #[inline]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Ask the spawner for a wave.
#[derive(Message, Clone, Copy, Debug)]
pub struct SpawnWaveRequest {
    pub wave: WaveId,
}

/// The live set produced for a request.
#[derive(Message, Clone, Debug)]
pub struct WaveSpawned {
    pub wave: WaveId,
    pub members: Vec<SlotId>,
}

/// A damageable target's health crossed zero.
#[derive(Message, Clone, Copy, Debug)]
pub struct Died {
    pub entity: Entity,
}

#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scored {
    pub points: i32,
}

#[derive(Message, Clone, Copy, Debug, Default)]
pub struct TargetHit;

#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TargetDestroyed {
    pub slot: SlotId,
    pub wave: WaveId,
}
