//! Core plugin: shared resources, global settings, frame ordering.

use bevy::prelude::*;

use crate::common::schedule;
use crate::common::tunables::Tunables;

pub fn plugin(app: &mut App) {
    // The composition root (or a test) may already have loaded tunables.
    if !app.world().contains_resource::<Tunables>() {
        app.insert_resource(Tunables::default());
    }
    app.insert_resource(ClearColor(Color::srgb(0.05, 0.05, 0.07)));
    schedule::configure(app);
}

#[cfg(test)]
mod tests;
