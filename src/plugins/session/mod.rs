//! Session plugin: the round state machine.
//!
//! Owns the score record, the round clock, wave bookkeeping and the screen
//! flow. Talks to the rest of the game only through messages and a few
//! resources:
//!
//! ```text
//!  ShotFired ─┐
//!  Scored ────┼──► ScoreRecord ──► HudCommand::Score
//!  TargetHit ─┘
//!  WaveSpawned ──────► CurrentWave
//!  TargetDestroyed ──► CurrentWave ──(cleared)──► bonus + NextWave::arm
//!                                                     │ next frame
//!                                                     ▼
//!                                     DeferredSpawn: SpawnWaveRequest
//! ```
//!
//! Every reader has its own cursor, so a handler can never be subscribed
//! twice. Counters only move while `RoundClock::active`.

pub mod flow;
pub mod record;
pub mod round;
pub mod timer;
pub mod waves;

use bevy::prelude::*;

use crate::common::schedule::GameSet;
use crate::common::state::GameState;

use flow::{Countdown, RestartWait, ResultsReveal};
use record::{RoundClock, ScoreRecord};
use waves::{CurrentWave, NextWave};

pub fn plugin(app: &mut App) {
    app.init_resource::<ScoreRecord>()
        .init_resource::<RoundClock>()
        .init_resource::<CurrentWave>()
        .init_resource::<NextWave>()
        .init_resource::<Countdown>()
        .init_resource::<ResultsReveal>()
        .init_resource::<RestartWait>();

    app.add_systems(Startup, waves::request_backdrop_wave)
        .add_systems(OnEnter(GameState::PreGame), flow::begin_countdown)
        .add_systems(OnEnter(GameState::Gameplay), round::start_game);

    app.add_systems(
        Update,
        flow::handle_click
            .in_set(GameSet::Input)
            .after(crate::plugins::input::map_pointer_input),
    )
    .add_systems(Update, waves::release_deferred_wave.in_set(GameSet::DeferredSpawn))
    .add_systems(
        Update,
        (
            waves::track_spawned_waves,
            round::count_shots,
            round::add_score,
            round::count_hits,
            waves::on_target_destroyed,
        )
            .chain()
            .in_set(GameSet::Scoring),
    )
    .add_systems(
        Update,
        (
            flow::tick_countdown.run_if(in_state(GameState::PreGame)),
            round::tick_round_clock,
            flow::tick_results_reveal,
            flow::await_restart,
        )
            .chain()
            .in_set(GameSet::Clock),
    );
}
