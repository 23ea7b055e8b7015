//! Targets plugin: pooled targets, wave spawning, and the death pipeline.
//!
//! # Data flow
//! ```text
//!  SpawnWaveRequest ──► spawn_requested_waves ──► WaveSpawned
//!                          │  WaveSpawner::respawn (pool + SpacedPlacer)
//!                          ▼
//!                   Transform / Health / Spin / TargetLifecycle::bind
//!
//!  Died ──► run_death_pipeline ──► Scored + TargetHit
//!                 │                 pool.release(slot)
//!                 └───────────────► TargetDestroyed
//! ```
//!
//! Targets are never despawned. `commit_pool_activation::<Target>` hides parked
//! targets and clears their collision filters.

pub mod health;
pub mod lifecycle;
pub mod messages;
pub mod placement;
pub mod spawner;

use avian3d::prelude::*;
use bevy::prelude::*;
use rand::Rng;

use crate::common::layers::Layer;
use crate::common::schedule::GameSet;
use crate::common::tunables::Tunables;
use crate::plugins::pool::{commit_pool_activation, Pool, PoolKind, SlotId};

use health::Health;
use lifecycle::{Scorable, TargetLifecycle};
use placement::PlacementRng;
use spawner::WaveSpawner;

/// Marker for pooled target entities.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Target;

impl PoolKind for Target {
    const NAME: &'static str = "Target";

    fn active_layers() -> CollisionLayers {
        CollisionLayers::new(Layer::Target, [Layer::Cannonball])
    }

    fn inactive_layers() -> CollisionLayers {
        CollisionLayers::new(Layer::Target, [] as [Layer; 0])
    }
}

pub type TargetPool = Pool<Target>;

/// Half the edge length of a target cube.
pub const TARGET_HALF_SIZE: f32 = 0.4;

/// Constant rotation about a fixed axis.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    pub axis: Vec3,
    pub degrees_per_sec: f32,
}

impl Default for Spin {
    fn default() -> Self {
        Self {
            axis: Vec3::Y,
            degrees_per_sec: 0.0,
        }
    }
}

impl Spin {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, degrees_per_sec: f32) -> Self {
        Self {
            axis: random_unit_vector(rng),
            degrees_per_sec,
        }
    }

    pub fn random_orientation<R: Rng + ?Sized>(rng: &mut R) -> Quat {
        let axis = random_unit_vector(rng);
        Quat::from_axis_angle(axis, rng.gen_range(0.0..std::f32::consts::TAU))
    }
}

fn random_unit_vector<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    Vec3::new(
        rng.gen_range(-1.0..=1.0),
        rng.gen_range(-1.0..=1.0),
        rng.gen_range(-1.0..=1.0),
    )
    .normalize_or(Vec3::Y)
}

pub fn plugin(app: &mut App) {
    let tunables = app.world().resource::<Tunables>().clone();

    app.insert_resource(TargetPool::new(tunables.target_pool_size))
        .insert_resource(WaveSpawner::from_tunables(&tunables))
        .insert_resource(PlacementRng::from_optional_seed(tunables.rng_seed))
        .add_message::<messages::SpawnWaveRequest>()
        .add_message::<messages::WaveSpawned>()
        .add_message::<messages::Died>()
        .add_message::<messages::Scored>()
        .add_message::<messages::TargetHit>()
        .add_message::<messages::TargetDestroyed>()
        .add_systems(Startup, init_target_pool);

    app.add_systems(Update, spawner::spawn_requested_waves.in_set(GameSet::Spawn))
        .add_systems(Update, lifecycle::run_death_pipeline.in_set(GameSet::Lifecycle))
        .add_systems(Update, spin_targets.in_set(GameSet::Combat))
        .add_systems(Update, commit_pool_activation::<Target>.in_set(GameSet::Commit));
}

/// Pre-spawn pooled targets (parked).
pub fn init_target_pool(
    mut commands: Commands,
    mut pool: ResMut<TargetPool>,
    tunables: Res<Tunables>,
) {
    if !pool.is_empty() {
        return;
    }

    for i in 0..pool.capacity() {
        let e = commands
            .spawn((
                Name::new(format!("Target{i}")),
                Target,
                SlotId(i),
                Scorable {
                    points: tunables.target_points,
                },
                Health::new(tunables.target_max_health),
                TargetLifecycle::default(),
                Spin::default(),
                Transform::from_translation(tunables.spawn_anchor()),
                Visibility::Hidden,
                RigidBody::Kinematic,
                Collider::cuboid(
                    TARGET_HALF_SIZE * 2.0,
                    TARGET_HALF_SIZE * 2.0,
                    TARGET_HALF_SIZE * 2.0,
                ),
                Sensor,
                Target::inactive_layers(),
            ))
            .id();
        pool.push_slot(e);
    }

    debug!("{} pool initialised with {} slots", Target::NAME, pool.len());
}

fn spin_targets(time: Res<Time>, mut q: Query<(&Spin, &Visibility, &mut Transform), With<Target>>) {
    let dt = time.delta_secs();
    for (spin, vis, mut tf) in &mut q {
        if *vis == Visibility::Hidden || spin.degrees_per_sec == 0.0 {
            continue;
        }
        tf.rotate(Quat::from_axis_angle(
            spin.axis,
            spin.degrees_per_sec.to_radians() * dt,
        ));
    }
}
