use avian3d::prelude::*;
use bevy::prelude::*;

pub fn plugin(app: &mut App) {
    app.add_plugins(PhysicsPlugins::default());
    // Cannonballs fly straight; only contacts matter.
    app.insert_resource(Gravity(Vec3::ZERO));
}
