use avian3d::prelude::*;
use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use crate::plugins::pool::SlotId;
use crate::plugins::targets::health::{Damageable, Health};
use crate::plugins::targets::messages::Died;
use crate::plugins::targets::{Target, TargetPool};

use super::components::Damaging;
use super::{Cannonball, CannonballPool};

#[derive(Clone, Copy, Debug)]
struct CollisionSide {
    collider: Entity,
    body: Option<Entity>,
}

impl CollisionSide {
    #[inline]
    fn gameplay_owner(self) -> Entity {
        self.body.unwrap_or(self.collider)
    }
}

#[inline]
fn sides(ev: &CollisionStart) -> (CollisionSide, CollisionSide) {
    (
        CollisionSide {
            collider: ev.collider1,
            body: ev.body1,
        },
        CollisionSide {
            collider: ev.collider2,
            body: ev.body2,
        },
    )
}

/// Ball vs target contact: damage the target, release the ball.
///
/// A ball resolves at most one contact per frame. Parked entities on either
/// side are ignored even if the physics step still reports them.
pub fn process_cannonball_collisions(
    mut started: MessageReader<CollisionStart>,
    ball_pool: Option<ResMut<CannonballPool>>,
    target_pool: Option<Res<TargetPool>>,
    q_balls: Query<(&SlotId, &Damaging), With<Cannonball>>,
    mut q_targets: Query<(&SlotId, &mut Health), (With<Target>, Without<Cannonball>)>,
    mut died: MessageWriter<Died>,
    mut seen: Local<HashSet<Entity>>,
) {
    seen.clear();

    if started.is_empty() {
        return;
    }

    let (Some(mut ball_pool), Some(target_pool)) = (ball_pool, target_pool) else {
        error!("Collision resolve needs both pools; skipping");
        started.clear();
        return;
    };

    for ev in started.read() {
        let (s1, s2) = sides(ev);

        let b1 = q_balls.contains(s1.collider);
        let b2 = q_balls.contains(s2.collider);
        if !(b1 ^ b2) {
            continue;
        }
        let (ball_side, other_side) = if b1 { (s1, s2) } else { (s2, s1) };

        if !seen.insert(ball_side.collider) {
            continue;
        }

        let Ok((&ball_slot, damaging)) = q_balls.get(ball_side.collider) else {
            continue;
        };
        if !ball_pool.is_active(ball_slot) {
            continue;
        }

        let target = other_side.gameplay_owner();
        let Ok((&target_slot, mut health)) = q_targets.get_mut(target) else {
            continue;
        };
        if !target_pool.is_active(target_slot) {
            continue;
        }

        if health.take_damage(damaging.amount) {
            died.write(Died { entity: target });
        }
        ball_pool.release(ball_slot);
    }
}
