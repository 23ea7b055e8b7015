//! Wave spawner: pool + placer → groups of simultaneously live targets.

use bevy::prelude::*;
use rand::Rng;

use crate::common::tunables::Tunables;
use crate::plugins::pool::{Pool, SlotId};

use super::health::Health;
use super::lifecycle::TargetLifecycle;
use super::messages::{SpawnWaveRequest, WaveSpawned};
use super::placement::{PlacementRng, SpacedPlacer};
use super::{Spin, Target, TargetPool};

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct WaveSpawner {
    pub placer: SpacedPlacer,
    pub min_spacing: f32,
    pub max_attempts: u32,
}

/// Result of one `respawn` call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Respawn {
    /// Every live slot after the call, in slot order.
    pub live: Vec<SlotId>,
    /// Slots (re)activated by this call with their new positions.
    /// Empty when a wave was already in progress.
    pub placed: Vec<(SlotId, Vec3)>,
}

impl Respawn {
    #[inline]
    pub fn is_fresh(&self) -> bool {
        !self.placed.is_empty()
    }
}

impl WaveSpawner {
    pub fn from_tunables(t: &Tunables) -> Self {
        Self {
            placer: SpacedPlacer::new(t.spawn_anchor(), t.spawn_half_extents()),
            min_spacing: t.min_target_spacing,
            max_attempts: t.max_placement_attempts,
        }
    }

    /// Bring every slot live at spaced positions, unless a wave is already live.
    ///
    /// - empty pool: nothing happens
    /// - any live slot: no-op, the current live set is returned
    /// - all parked: every slot is placed and activated
    pub fn respawn<R: Rng + ?Sized>(&self, pool: &mut Pool<Target>, rng: &mut R) -> Respawn {
        if pool.is_empty() {
            return Respawn::default();
        }

        if pool.any_active() {
            return Respawn {
                live: pool.active_slots().collect(),
                placed: Vec::new(),
            };
        }

        let mut positions: Vec<Vec3> = Vec::with_capacity(pool.len());
        let mut placed = Vec::with_capacity(pool.len());
        let ids: Vec<SlotId> = pool.slots().map(|(id, _)| id).collect();

        for id in ids {
            let placement = self
                .placer
                .place(rng, &positions, self.min_spacing, self.max_attempts);
            if !placement.spaced {
                debug!(
                    "Slot {} placed without spacing after {} attempts",
                    id.0, placement.attempts
                );
            }
            positions.push(placement.position);
            pool.activate(id);
            placed.push((id, placement.position));
        }

        Respawn {
            live: pool.active_slots().collect(),
            placed,
        }
    }

    /// Park every target without respawning.
    pub fn reset_targets(&self, pool: &mut Pool<Target>) {
        pool.reset_all();
    }
}

/// Consumer: serve `SpawnWaveRequest`s.
///
/// Newly placed targets get their transform, health and spin reset. Every live
/// target is (re)bound to the requested wave, replacing any older binding.
pub fn spawn_requested_waves(
    mut requests: MessageReader<SpawnWaveRequest>,
    spawner: Option<Res<WaveSpawner>>,
    pool: Option<ResMut<TargetPool>>,
    mut rng: ResMut<PlacementRng>,
    tunables: Res<Tunables>,
    mut q: Query<(&mut Transform, &mut Health, &mut TargetLifecycle, &mut Spin), With<Target>>,
    mut spawned: MessageWriter<WaveSpawned>,
) {
    if requests.is_empty() {
        return;
    }

    let (Some(spawner), Some(mut pool)) = (spawner, pool) else {
        error!("Wave requested but WaveSpawner or target pool is missing; skipping");
        requests.clear();
        return;
    };

    for req in requests.read() {
        let respawn = spawner.respawn(&mut pool, &mut rng.0);

        for &(id, position) in &respawn.placed {
            let Some(e) = pool.entity(id) else { continue };
            let Ok((mut tf, mut health, _, mut spin)) = q.get_mut(e) else { continue };

            tf.translation = position;
            tf.rotation = Spin::random_orientation(&mut rng.0);
            health.reset();
            *spin = Spin::random(&mut rng.0, tunables.target_spin_degrees_per_sec);
        }

        for &id in &respawn.live {
            let Some(e) = pool.entity(id) else { continue };
            let Ok((_, _, mut lifecycle, _)) = q.get_mut(e) else { continue };
            lifecycle.bind(req.wave);
        }

        debug!(
            "Wave {} ready: {} live, {} placed",
            req.wave.0,
            respawn.live.len(),
            respawn.placed.len()
        );

        spawned.write(WaveSpawned {
            wave: req.wave,
            members: respawn.live,
        });
    }
}
