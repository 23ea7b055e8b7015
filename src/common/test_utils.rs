//! Test helpers.

use bevy::ecs::system::{IntoSystem, RunSystemOnce};
use bevy::prelude::*;

/// Run a system once on the given world and apply its queued commands.
pub fn run_system_once<T, Out, Marker>(world: &mut World, system: T) -> Out
where
    T: IntoSystem<(), Out, Marker>,
{
    let out = world.run_system_once(system).expect("system run failed");
    world.flush();
    out
}

/// Drain every message of type `M` currently readable in the world.
pub fn drain_messages<M: Message>(world: &mut World) -> Vec<M> {
    let mut messages = world.resource_mut::<Messages<M>>();
    messages.drain().collect()
}
