//! Camera plugin (render-only).
//!
//! One fixed 3D camera behind the cannon, looking at the spawn volume.

use bevy::prelude::*;

use crate::common::tunables::Tunables;

#[derive(Component)]
pub struct MainCamera;

pub fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_camera);
}

fn spawn_camera(mut commands: Commands, tunables: Res<Tunables>) {
    let anchor = tunables.spawn_anchor();

    commands.spawn((
        Name::new("MainCamera"),
        MainCamera,
        Camera3d::default(),
        Transform::from_xyz(anchor.x, anchor.y + 1.0, 3.0).looking_at(anchor, Vec3::Y),
    ));
}
