//! Projectiles plugin: pooled cannonballs, firing, contact damage.
//!
//! # Data flow
//! ```text
//!   Update
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │ (A) Producer: input maps a click to FireRequest (Gameplay only)      │
//! │                                                                      │
//! │ (B) Consumer: fire_from_pool                                         │
//! │     - reads: FireRequest, Cannon + Transform                         │
//! │     - mutates: CannonballPool (acquire), Transform, LinearVelocity,  │
//! │                Lifetime                                              │
//! │     - writes: ShotFired                                              │
//! │                                                                      │
//! │ (C) expire_cannonballs: Lifetime elapsed → pool.release              │
//! │                                                                      │
//! │ (D) Commit: commit_pool_activation + park_released_cannonballs       │
//! └──────────────────────────────────────────────────────────────────────┘
//!                │
//!                v
//!   FixedPostUpdate
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │ (E) Physics emits CollisionStart (avian3d)                           │
//! │                                                                      │
//! │ (F) process_cannonball_collisions                                    │
//! │     - Health::take_damage → Died on the crossing                     │
//! │     - pool.release(ball)                                             │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The allocator is the only system that acquires from the pool. Releases
//! come from expiry and contacts; both only flip the slot, and the commit
//! systems derive everything else from it.

pub mod allocator;
pub mod collision;
pub mod commit;
pub mod components;
pub mod messages;

use avian3d::collision::narrow_phase::CollisionEventSystems;
use avian3d::prelude::*;
use bevy::prelude::*;

use crate::common::layers::Layer;
use crate::common::schedule::GameSet;
use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::pool::{commit_pool_activation, Pool, PoolKind, SlotId};

use components::{Damaging, Lifetime};

/// Marker for pooled cannonball entities.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Cannonball;

impl PoolKind for Cannonball {
    const NAME: &'static str = "Cannonball";

    fn active_layers() -> CollisionLayers {
        CollisionLayers::new(Layer::Cannonball, [Layer::Target])
    }

    fn inactive_layers() -> CollisionLayers {
        CollisionLayers::new(Layer::Cannonball, [] as [Layer; 0])
    }
}

pub type CannonballPool = Pool<Cannonball>;

pub const CANNONBALL_RADIUS: f32 = 0.15;

pub struct ProjectilesPlugin;

impl Plugin for ProjectilesPlugin {
    fn build(&self, app: &mut App) {
        let capacity = app.world().resource::<Tunables>().cannonball_pool_size;

        app.insert_resource(CannonballPool::new(capacity))
            .add_message::<messages::FireRequest>()
            .add_message::<messages::ShotFired>()
            .add_systems(Startup, init_cannonball_pool);

        app.add_systems(
            Update,
            allocator::fire_from_pool
                .in_set(GameSet::Spawn)
                .run_if(in_state(GameState::Gameplay)),
        )
        .add_systems(Update, commit::expire_cannonballs.in_set(GameSet::Combat))
        .add_systems(
            Update,
            (
                commit_pool_activation::<Cannonball>,
                commit::park_released_cannonballs,
            )
                .in_set(GameSet::Commit),
        );

        app.add_systems(
            FixedPostUpdate,
            collision::process_cannonball_collisions
                .after(CollisionEventSystems)
                .run_if(in_state(GameState::Gameplay)),
        );
    }
}

/// Pre-spawn pooled cannonballs (parked).
pub fn init_cannonball_pool(
    mut commands: Commands,
    mut pool: ResMut<CannonballPool>,
    tunables: Res<Tunables>,
) {
    if !pool.is_empty() {
        return;
    }

    for i in 0..pool.capacity() {
        let e = commands
            .spawn((
                Name::new(format!("Cannonball{i}")),
                Cannonball,
                SlotId(i),
                Damaging {
                    amount: tunables.cannonball_damage,
                },
                Lifetime::new(tunables.cannonball_lifetime_secs),
                Transform::default(),
                Visibility::Hidden,
                RigidBody::Dynamic,
                Collider::sphere(CANNONBALL_RADIUS),
                CollisionEventsEnabled,
                LinearVelocity::ZERO,
                Cannonball::inactive_layers(),
            ))
            .id();
        pool.push_slot(e);
    }

    debug!("{} pool initialised with {} slots", Cannonball::NAME, pool.len());
}
