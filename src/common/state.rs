//! Global state machine.
//!
//! ```text
//! Title --click--> PreGame --countdown--> Gameplay --timer<=0--> GameOver
//!                     ^                                             |
//!                     +------------- click after reveal ------------+
//! ```

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    Title,
    PreGame,
    Gameplay,
    GameOver,
}
