//! Player cannon.
//!
//! A single `Cannon` entity spawned at startup. The session enables it when a
//! round starts and disables it when the round ends; the projectile allocator
//! ignores fire requests while it is disabled.

use bevy::prelude::*;

use crate::common::tunables::Tunables;

/// Distance in front of the cannon origin where balls appear.
pub const MUZZLE_OFFSET: f32 = 1.0;

#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cannon {
    pub enabled: bool,
}

impl Cannon {
    /// Spawn point and unit direction for a shot from `tf`.
    pub fn muzzle(tf: &Transform) -> (Vec3, Vec3) {
        let dir = tf.forward().as_vec3();
        (tf.translation + dir * MUZZLE_OFFSET, dir)
    }
}

pub fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_cannon);
}

fn spawn_cannon(mut commands: Commands, tunables: Res<Tunables>, q: Query<(), With<Cannon>>) {
    if !q.is_empty() {
        return;
    }

    let anchor = tunables.spawn_anchor();
    let origin = Vec3::new(anchor.x, anchor.y, 0.0);

    commands.spawn((
        Name::new("Cannon"),
        Cannon::default(),
        Transform::from_translation(origin).looking_at(anchor, Vec3::Y),
    ));
}

/// Flip every cannon to `enabled`. Returns how many were found.
pub fn set_enabled(cannons: &mut Query<&mut Cannon>, enabled: bool) -> usize {
    let mut n = 0;
    for mut cannon in cannons.iter_mut() {
        cannon.set_if_neq(Cannon { enabled });
        n += 1;
    }
    n
}
