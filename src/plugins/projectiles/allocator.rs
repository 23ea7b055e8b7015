//! Fire consumer: launch cannonballs from the pool.
//!
//! Exhaustion and a disabled cannon both drop the request. Neither is an error.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::cannon::Cannon;

use super::components::Lifetime;
use super::messages::{FireRequest, ShotFired};
use super::{Cannonball, CannonballPool};

pub fn fire_from_pool(
    mut requests: MessageReader<FireRequest>,
    pool: Option<ResMut<CannonballPool>>,
    tunables: Res<Tunables>,
    q_cannon: Query<(&Cannon, &Transform), Without<Cannonball>>,
    mut q_balls: Query<(&mut Transform, &mut LinearVelocity, &mut Lifetime), With<Cannonball>>,
    mut fired: MessageWriter<ShotFired>,
) {
    if requests.is_empty() {
        return;
    }

    let Some(mut pool) = pool else {
        error!("Fire requested but the cannonball pool is missing; skipping");
        requests.clear();
        return;
    };

    let (cannon, cannon_tf) = match q_cannon.single() {
        Ok(v) => v,
        Err(e) => {
            debug!("No single Cannon: {e:?}");
            requests.clear();
            return;
        }
    };

    if !cannon.enabled {
        requests.clear();
        return;
    }

    let (origin, dir) = Cannon::muzzle(cannon_tf);

    for _ in requests.read() {
        let Some(slot) = pool.acquire() else {
            debug!("Cannonball pool exhausted; shot dropped");
            continue;
        };
        let Some(e) = pool.entity(slot) else { continue };
        let Ok((mut tf, mut vel, mut life)) = q_balls.get_mut(e) else {
            // A slot that can't be launched must not stay live.
            pool.release(slot);
            continue;
        };

        tf.translation = origin;
        vel.0 = dir * tunables.cannonball_speed;
        life.restart();
        fired.write(ShotFired);
        trace!("Cannonball {} launched", slot.0);
    }
}
