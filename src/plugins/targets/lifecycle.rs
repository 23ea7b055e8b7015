//! Per-target death pipeline.
//!
//! On death, in this order:
//! 1. `Scored` (the target's point value) and `TargetHit`
//! 2. release the slot back to the target pool
//! 3. `TargetDestroyed` for wave bookkeeping
//!
//! A binding is consumed by the first death it sees, so a pooled target
//! delivers exactly one destruction notice per activation no matter how often
//! it is reused or how many `Died` messages arrive.

use bevy::prelude::*;

use crate::plugins::pool::SlotId;

use super::messages::{Died, Scored, TargetDestroyed, TargetHit, WaveId};
use super::{Target, TargetPool};

/// Fixed point value of a target.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scorable {
    pub points: i32,
}

#[derive(Component, Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetLifecycle {
    binding: Option<WaveId>,
}

impl TargetLifecycle {
    /// Bind to `wave`, dropping any previous binding first.
    #[inline]
    pub fn bind(&mut self, wave: WaveId) {
        self.binding = Some(wave);
    }

    #[inline]
    pub fn binding(&self) -> Option<WaveId> {
        self.binding
    }

    /// Consume the binding. `None` means the death was already handled.
    #[inline]
    pub fn take_binding(&mut self) -> Option<WaveId> {
        self.binding.take()
    }
}

pub fn run_death_pipeline(
    mut died: MessageReader<Died>,
    pool: Option<ResMut<TargetPool>>,
    mut q: Query<(&SlotId, &Scorable, &mut TargetLifecycle), With<Target>>,
    mut scored: MessageWriter<Scored>,
    mut hits: MessageWriter<TargetHit>,
    mut destroyed: MessageWriter<TargetDestroyed>,
) {
    if died.is_empty() {
        return;
    }

    let Some(mut pool) = pool else {
        error!("Target died but the target pool is missing; skipping");
        died.clear();
        return;
    };

    for ev in died.read() {
        let Ok((&slot, scorable, mut lifecycle)) = q.get_mut(ev.entity) else {
            continue;
        };
        let Some(wave) = lifecycle.take_binding() else {
            debug!("Ignoring repeated death of slot {}", slot.0);
            continue;
        };

        scored.write(Scored {
            points: scorable.points,
        });
        hits.write(TargetHit);
        pool.release(slot);
        destroyed.write(TargetDestroyed { slot, wave });
    }
}
