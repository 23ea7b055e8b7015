//! Frame ordering.
//!
//! Every gameplay system lives in one of these sets, chained in `Update`:
//!
//! ```text
//! Input → DeferredSpawn → Spawn → Combat → Lifecycle → Scoring → Clock → Commit
//! ```
//!
//! `DeferredSpawn` runs before `Lifecycle`, so a wave armed by the last
//! destruction of frame N can only be requested in frame N+1.

use bevy::prelude::*;

#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameSet {
    /// Pointer input → intent messages.
    Input,
    /// Release a wave armed on a previous frame.
    DeferredSpawn,
    /// Serve wave and fire requests from the pools.
    Spawn,
    /// Contacts, damage, projectile expiry.
    Combat,
    /// Death pipeline.
    Lifecycle,
    /// Session counters and wave bookkeeping.
    Scoring,
    /// Round clock, countdown, results reveal.
    Clock,
    /// Derive presentation from pool state.
    Commit,
}

pub fn configure(app: &mut App) {
    app.configure_sets(
        Update,
        (
            GameSet::Input,
            GameSet::DeferredSpawn,
            GameSet::Spawn,
            GameSet::Combat,
            GameSet::Lifecycle,
            GameSet::Scoring,
            GameSet::Clock,
            GameSet::Commit,
        )
            .chain(),
    );
}
