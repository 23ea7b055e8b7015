//! Wave bookkeeping: which slots of the current wave are still standing,
//! the one-time clear bonus, and the next-frame wave request.

use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::hud::HudCommand;
use crate::plugins::pool::SlotId;
use crate::plugins::targets::messages::{SpawnWaveRequest, TargetDestroyed, WaveId, WaveSpawned};

use super::record::{RoundClock, ScoreRecord};

/// Members of the wave being played that have not been destroyed yet.
#[derive(Resource, Debug, Default)]
pub struct CurrentWave {
    id: Option<WaveId>,
    remaining: HashSet<SlotId>,
    cleared: bool,
}

/// What one destruction notice did to the wave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveProgress {
    /// Unknown wave or slot already counted.
    Ignored,
    Remaining(usize),
    /// Last member gone. Reported once per wave.
    Cleared,
}

impl CurrentWave {
    pub fn track(&mut self, wave: WaveId, members: &[SlotId]) {
        self.id = Some(wave);
        self.remaining = members.iter().copied().collect();
        self.cleared = false;
    }

    #[inline]
    pub fn id(&self) -> Option<WaveId> {
        self.id
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    pub fn destroyed(&mut self, wave: WaveId, slot: SlotId) -> WaveProgress {
        if self.id != Some(wave) || self.cleared || !self.remaining.remove(&slot) {
            return WaveProgress::Ignored;
        }
        if self.remaining.is_empty() {
            self.cleared = true;
            WaveProgress::Cleared
        } else {
            WaveProgress::Remaining(self.remaining.len())
        }
    }
}

/// Issues wave ids and holds a request armed for the next frame.
#[derive(Resource, Debug, Default)]
pub struct NextWave {
    last_issued: WaveId,
    armed: bool,
}

impl NextWave {
    pub fn issue(&mut self) -> WaveId {
        self.last_issued = self.last_issued.next();
        self.last_issued
    }

    #[inline]
    pub fn arm(&mut self) {
        self.armed = true;
    }

    #[inline]
    pub fn disarm(&mut self) {
        self.armed = false;
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.armed
    }
}

/// Startup: put an idle wave up behind the title screen.
pub fn request_backdrop_wave(
    mut next: ResMut<NextWave>,
    mut requests: MessageWriter<SpawnWaveRequest>,
) {
    requests.write(SpawnWaveRequest { wave: next.issue() });
}

/// Runs in `GameSet::DeferredSpawn`, ahead of the set that arms it, so an
/// armed request always waits for the following frame.
pub fn release_deferred_wave(
    mut next: ResMut<NextWave>,
    clock: Res<RoundClock>,
    mut requests: MessageWriter<SpawnWaveRequest>,
) {
    if !next.is_armed() {
        return;
    }
    next.disarm();

    if !clock.active {
        debug!("Round over; dropping deferred wave");
        return;
    }

    let wave = next.issue();
    debug!("Requesting deferred wave {}", wave.0);
    requests.write(SpawnWaveRequest { wave });
}

pub fn track_spawned_waves(
    mut spawned: MessageReader<WaveSpawned>,
    mut current: ResMut<CurrentWave>,
) {
    for ev in spawned.read() {
        current.track(ev.wave, &ev.members);
        debug!("Tracking wave {} with {} targets", ev.wave.0, ev.members.len());
    }
}

pub fn on_target_destroyed(
    mut destroyed: MessageReader<TargetDestroyed>,
    mut current: ResMut<CurrentWave>,
    mut next: ResMut<NextWave>,
    mut record: ResMut<ScoreRecord>,
    clock: Res<RoundClock>,
    tunables: Res<Tunables>,
    mut hud: MessageWriter<HudCommand>,
) {
    for ev in destroyed.read() {
        match current.destroyed(ev.wave, ev.slot) {
            WaveProgress::Cleared if clock.active => {
                record.total_score += tunables.wave_cleared_bonus;
                hud.write(HudCommand::Score(record.total_score));
                next.arm();
                debug!(
                    "Wave {} cleared; bonus {}",
                    ev.wave.0, tunables.wave_cleared_bonus
                );
            }
            WaveProgress::Cleared => debug!("Wave {} cleared outside a round", ev.wave.0),
            WaveProgress::Remaining(n) => trace!("Wave {}: {n} left", ev.wave.0),
            WaveProgress::Ignored => {}
        }
    }
}
