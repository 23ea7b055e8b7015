//! Feature plugins.

use bevy::prelude::*;

use crate::plugins::projectiles::ProjectilesPlugin;

pub mod cannon;
pub mod core;
pub mod hud;
pub mod input;
pub mod physics;
pub mod pool;
pub mod projectiles;
pub mod session;
pub mod targets;

// Render-only
pub mod camera;
pub mod lighting;
pub mod visuals;

/// Register gameplay plugins that work in headless tests.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    physics::plugin(app);
    input::plugin(app);
    hud::plugin(app);
    cannon::plugin(app);
    targets::plugin(app);
    app.add_plugins(ProjectilesPlugin);
    session::plugin(app);
}

/// Register render-only plugins (requires DefaultPlugins / render infra).
pub fn register_render(app: &mut App) {
    lighting::plugin(app);
    camera::plugin(app);
    visuals::plugin(app);
    hud::render::plugin(app);
}
