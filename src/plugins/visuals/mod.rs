//! Visuals plugin (render-only).
//!
//! Pooled entities are spawned without meshes so the headless app never needs
//! asset storage. This plugin dresses them up once they exist.

use bevy::prelude::*;

use crate::plugins::projectiles::{Cannonball, CANNONBALL_RADIUS};
use crate::plugins::targets::{Target, TARGET_HALF_SIZE};

#[derive(Resource)]
struct VisualAssets {
    target_mesh: Handle<Mesh>,
    target_material: Handle<StandardMaterial>,
    ball_mesh: Handle<Mesh>,
    ball_material: Handle<StandardMaterial>,
}

pub fn plugin(app: &mut App) {
    app.add_systems(Startup, load_assets)
        .add_systems(PostUpdate, (dress_targets, dress_cannonballs));
}

fn load_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(VisualAssets {
        target_mesh: meshes.add(Cuboid::from_size(Vec3::splat(TARGET_HALF_SIZE * 2.0))),
        target_material: materials.add(Color::srgb(0.9, 0.3, 0.2)),
        ball_mesh: meshes.add(Sphere::new(CANNONBALL_RADIUS)),
        ball_material: materials.add(Color::srgb(0.15, 0.15, 0.18)),
    });
}

fn dress_targets(
    mut commands: Commands,
    assets: Option<Res<VisualAssets>>,
    q: Query<Entity, (With<Target>, Without<Mesh3d>)>,
) {
    let Some(assets) = assets else { return };
    for e in &q {
        commands.entity(e).insert((
            Mesh3d(assets.target_mesh.clone()),
            MeshMaterial3d(assets.target_material.clone()),
        ));
    }
}

fn dress_cannonballs(
    mut commands: Commands,
    assets: Option<Res<VisualAssets>>,
    q: Query<Entity, (With<Cannonball>, Without<Mesh3d>)>,
) {
    let Some(assets) = assets else { return };
    for e in &q {
        commands.entity(e).insert((
            Mesh3d(assets.ball_mesh.clone()),
            MeshMaterial3d(assets.ball_material.clone()),
        ));
    }
}
