//! Round start, counters, round end.

use bevy::prelude::*;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::cannon::{self, Cannon};
use crate::plugins::hud::HudCommand;
use crate::plugins::projectiles::messages::ShotFired;
use crate::plugins::targets::messages::{Scored, SpawnWaveRequest, TargetHit};
use crate::plugins::targets::spawner::WaveSpawner;
use crate::plugins::targets::TargetPool;

use super::flow::{Countdown, ResultsReveal};
use super::record::{RoundClock, ScoreRecord};
use super::waves::NextWave;

/// `OnEnter(Gameplay)`: zero everything, then park the pool and request a
/// fresh wave. Safe to run any number of times.
#[allow(clippy::too_many_arguments)]
pub fn start_game(
    mut record: ResMut<ScoreRecord>,
    mut clock: ResMut<RoundClock>,
    mut next: ResMut<NextWave>,
    mut countdown: ResMut<Countdown>,
    tunables: Res<Tunables>,
    spawner: Option<Res<WaveSpawner>>,
    pool: Option<ResMut<TargetPool>>,
    mut cannons: Query<&mut Cannon>,
    mut requests: MessageWriter<SpawnWaveRequest>,
    mut hud: MessageWriter<HudCommand>,
) {
    record.reset();
    clock.start(tunables.round_duration_secs);
    next.disarm();
    countdown.cancel();

    hud.write(HudCommand::SetState(GameState::Gameplay));
    hud.write(HudCommand::Score(0));
    hud.write(HudCommand::Time(clock.remaining));

    match (spawner, pool) {
        (Some(spawner), Some(mut pool)) => {
            spawner.reset_targets(&mut pool);
            requests.write(SpawnWaveRequest { wave: next.issue() });
        }
        _ => error!("StartGame: WaveSpawner or target pool missing; no wave requested"),
    }

    if cannon::set_enabled(&mut cannons, true) == 0 {
        error!("StartGame: no Cannon to enable");
    }

    info!("Round started ({}s)", tunables.round_duration_secs);
}

pub fn count_shots(
    mut fired: MessageReader<ShotFired>,
    clock: Res<RoundClock>,
    mut record: ResMut<ScoreRecord>,
) {
    let n = fired.read().count() as u32;
    if n > 0 && clock.active {
        record.shots_fired += n;
    }
}

pub fn add_score(
    mut scored: MessageReader<Scored>,
    clock: Res<RoundClock>,
    mut record: ResMut<ScoreRecord>,
    mut hud: MessageWriter<HudCommand>,
) {
    let mut changed = false;
    for ev in scored.read() {
        if clock.active {
            record.total_score += ev.points;
            changed = true;
        }
    }
    if changed {
        hud.write(HudCommand::Score(record.total_score));
    }
}

pub fn count_hits(
    mut hits: MessageReader<TargetHit>,
    clock: Res<RoundClock>,
    mut record: ResMut<ScoreRecord>,
) {
    let n = hits.read().count() as u32;
    if n > 0 && clock.active {
        record.targets_hit += n;
    }
}

/// Per-frame clock. Crossing zero ends the round right here, once.
#[allow(clippy::too_many_arguments)]
pub fn tick_round_clock(
    time: Res<Time>,
    mut clock: ResMut<RoundClock>,
    record: Res<ScoreRecord>,
    tunables: Res<Tunables>,
    mut reveal: ResMut<ResultsReveal>,
    mut next_state: ResMut<NextState<GameState>>,
    mut cannons: Query<&mut Cannon>,
    mut hud: MessageWriter<HudCommand>,
) {
    if !clock.active {
        return;
    }

    let expired = clock.tick(time.delta_secs());
    hud.write(HudCommand::Time(clock.remaining));

    if expired {
        end_game(&record, &tunables, &mut reveal, &mut next_state, &mut cannons, &mut hud);
    }
}

/// Snapshot the record, leave Gameplay, and start the results reveal.
fn end_game(
    record: &ScoreRecord,
    tunables: &Tunables,
    reveal: &mut ResultsReveal,
    next_state: &mut NextState<GameState>,
    cannons: &mut Query<&mut Cannon>,
    hud: &mut MessageWriter<HudCommand>,
) {
    cannon::set_enabled(cannons, false);

    let snapshot = record.snapshot();
    next_state.set(GameState::GameOver);

    hud.write(HudCommand::SetState(GameState::GameOver));
    hud.write(HudCommand::ClearResults);
    reveal.begin(snapshot, tunables.reveal_step_delay_secs);

    info!(
        "Round over: score {}, shots {}, hits {}, accuracy {}%",
        snapshot.final_score, snapshot.shots_fired, snapshot.targets_hit, snapshot.accuracy
    );
}
