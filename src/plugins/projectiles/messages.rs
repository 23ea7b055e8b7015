//! Firing messages.
//!
//! Producers never touch the cannonball pool: input writes `FireRequest`, and
//! the allocator is the single consumer that mutates the pool. A request that
//! actually launched a ball is echoed as `ShotFired`.

use bevy::prelude::*;

/// Intent: launch one cannonball from the cannon.
#[derive(Message, Clone, Copy, Debug, Default)]
pub struct FireRequest;

/// A ball left the muzzle. Counted by the session as a shot.
#[derive(Message, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShotFired;
