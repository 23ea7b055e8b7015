//! Cannonball expiry and the inactive invariants.
//!
//! Invariant: a parked ball is
//! - hidden with empty collision filters (`commit_pool_activation`)
//! - at rest
//!
//! `park_released_cannonballs` owns the second write so no other system has
//! to remember it on release.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::plugins::pool::SlotId;

use super::components::Lifetime;
use super::{Cannonball, CannonballPool};

pub fn expire_cannonballs(
    time: Res<Time>,
    pool: Option<ResMut<CannonballPool>>,
    mut q: Query<(&SlotId, &mut Lifetime), With<Cannonball>>,
) {
    let Some(mut pool) = pool else {
        return;
    };

    for (&slot, mut life) in &mut q {
        if !pool.is_active(slot) {
            continue;
        }
        if life.0.tick(time.delta()).is_finished() {
            pool.release(slot);
        }
    }
}

pub fn park_released_cannonballs(
    pool: Option<Res<CannonballPool>>,
    mut q: Query<(&SlotId, &mut LinearVelocity), With<Cannonball>>,
) {
    let Some(pool) = pool else {
        return;
    };
    if !pool.is_changed() {
        return;
    }

    for (&slot, mut vel) in &mut q {
        if !pool.is_active(slot) && vel.0 != Vec3::ZERO {
            vel.0 = Vec3::ZERO;
        }
    }
}
