//! Screen flow around the round: pre-game countdown, results reveal,
//! restart wait.
//!
//! ```text
//! Title ──PointerClick──► PreGame: "3" ─1s─ "2" ─1s─ "1" ─1s─ "" ──► Gameplay
//!
//! EndGame ──► reveal: ─d─ score ─d─ shots ─d─ hits ─d─ accuracy ─d─ prompt
//!                                                                    │
//!                      PreGame ◄── RestartGame ◄── PointerClick ◄────┘
//! ```

use bevy::prelude::*;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::hud::{HudCommand, ResultsField};
use crate::plugins::input::PointerClick;

use super::record::ResultsSnapshot;
use super::timer::PendingTimer;

pub const COUNTDOWN_STEP_SECS: f32 = 1.0;

// -----------------------------------------------------------------------------
// Countdown
// -----------------------------------------------------------------------------

#[derive(Resource, Debug, Default)]
pub struct Countdown {
    remaining: u32,
    timer: PendingTimer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountdownTick {
    Idle,
    Digit(String),
    Done,
}

impl Countdown {
    /// Restart from `secs`. Returns the first digit, or `None` for a zero count.
    pub fn begin(&mut self, secs: u32) -> Option<String> {
        self.remaining = secs;
        if secs == 0 {
            self.timer.cancel();
            return None;
        }
        self.timer.start(COUNTDOWN_STEP_SECS);
        Some(secs.to_string())
    }

    pub fn cancel(&mut self) {
        self.remaining = 0;
        self.timer.cancel();
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.timer.is_pending()
    }

    pub fn tick(&mut self, dt: std::time::Duration) -> CountdownTick {
        if !self.timer.tick(dt) {
            return CountdownTick::Idle;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            return CountdownTick::Done;
        }
        self.timer.start(COUNTDOWN_STEP_SECS);
        CountdownTick::Digit(self.remaining.to_string())
    }
}

// -----------------------------------------------------------------------------
// Results reveal
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStep {
    FinalScore,
    ShotsFired,
    TargetsHit,
    Accuracy,
    RestartPrompt,
}

impl RevealStep {
    pub const ORDER: [RevealStep; 5] = [
        RevealStep::FinalScore,
        RevealStep::ShotsFired,
        RevealStep::TargetsHit,
        RevealStep::Accuracy,
        RevealStep::RestartPrompt,
    ];

    /// HUD commands for this step, rendered from the frozen snapshot.
    pub fn commands(self, s: &ResultsSnapshot) -> Vec<HudCommand> {
        let line = |field, text: String| HudCommand::ResultsStep { field, text };
        match self {
            RevealStep::FinalScore => {
                vec![line(ResultsField::FinalScore, s.final_score.to_string())]
            }
            RevealStep::ShotsFired => {
                vec![line(ResultsField::ShotsFired, s.shots_fired.to_string())]
            }
            RevealStep::TargetsHit => {
                vec![line(ResultsField::TargetsHit, s.targets_hit.to_string())]
            }
            RevealStep::Accuracy => {
                vec![line(ResultsField::Accuracy, format!("{}%", s.accuracy))]
            }
            RevealStep::RestartPrompt => {
                vec![HudCommand::RestartPrompt(true), HudCommand::UnlockCursor]
            }
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct ResultsReveal {
    snapshot: Option<ResultsSnapshot>,
    next: usize,
    delay: f32,
    timer: PendingTimer,
}

impl ResultsReveal {
    /// Start over with `snapshot`; a reveal already in progress is dropped.
    pub fn begin(&mut self, snapshot: ResultsSnapshot, delay_secs: f32) {
        self.snapshot = Some(snapshot);
        self.next = 0;
        self.delay = delay_secs;
        self.timer.start(delay_secs);
    }

    pub fn cancel(&mut self) {
        self.snapshot = None;
        self.next = 0;
        self.timer.cancel();
    }

    #[inline]
    pub fn snapshot(&self) -> Option<&ResultsSnapshot> {
        self.snapshot.as_ref()
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.timer.is_pending()
    }

    /// At most one step per call.
    pub fn tick(&mut self, dt: std::time::Duration) -> Option<RevealStep> {
        if !self.timer.tick(dt) {
            return None;
        }
        let step = *RevealStep::ORDER.get(self.next)?;
        self.next += 1;
        if self.next < RevealStep::ORDER.len() {
            self.timer.start(self.delay);
        }
        Some(step)
    }
}

/// Set by a click on the game-over screen once the prompt is up.
#[derive(Resource, Debug, Default, PartialEq, Eq)]
pub struct RestartWait {
    pub waiting: bool,
    pub requested: bool,
}

impl RestartWait {
    pub fn begin(&mut self) {
        self.waiting = true;
        self.requested = false;
    }
}

// -----------------------------------------------------------------------------
// Systems
// -----------------------------------------------------------------------------

pub fn handle_click(
    mut clicks: MessageReader<PointerClick>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
    mut wait: ResMut<RestartWait>,
) {
    if clicks.is_empty() {
        return;
    }
    clicks.clear();

    match state.get() {
        GameState::Title => next_state.set(GameState::PreGame),
        GameState::GameOver if wait.waiting => wait.requested = true,
        _ => {}
    }
}

/// `OnEnter(PreGame)`.
pub fn begin_countdown(
    mut countdown: ResMut<Countdown>,
    tunables: Res<Tunables>,
    mut next_state: ResMut<NextState<GameState>>,
    mut hud: MessageWriter<HudCommand>,
) {
    hud.write(HudCommand::SetState(GameState::PreGame));

    let Some(digit) = countdown.begin(tunables.countdown_secs) else {
        hud.write(HudCommand::CountdownDigit(String::new()));
        next_state.set(GameState::Gameplay);
        return;
    };
    hud.write(HudCommand::CountdownDigit(digit));

    debug!("Countdown from {}", tunables.countdown_secs);
}

pub fn tick_countdown(
    time: Res<Time>,
    mut countdown: ResMut<Countdown>,
    mut next_state: ResMut<NextState<GameState>>,
    mut hud: MessageWriter<HudCommand>,
) {
    match countdown.tick(time.delta()) {
        CountdownTick::Idle => {}
        CountdownTick::Digit(d) => {
            hud.write(HudCommand::CountdownDigit(d));
        }
        CountdownTick::Done => {
            hud.write(HudCommand::CountdownDigit(String::new()));
            next_state.set(GameState::Gameplay);
        }
    }
}

pub fn tick_results_reveal(
    time: Res<Time>,
    mut reveal: ResMut<ResultsReveal>,
    mut wait: ResMut<RestartWait>,
    mut hud: MessageWriter<HudCommand>,
) {
    let Some(step) = reveal.tick(time.delta()) else {
        return;
    };
    let Some(snapshot) = reveal.snapshot().copied() else {
        return;
    };

    hud.write_batch(step.commands(&snapshot));

    if step == RevealStep::RestartPrompt {
        wait.begin();
        debug!("Waiting for restart click");
    }
}

/// Polls the restart flag; a no-op until the reveal has finished.
pub fn await_restart(
    mut wait: ResMut<RestartWait>,
    mut countdown: ResMut<Countdown>,
    mut reveal: ResMut<ResultsReveal>,
    mut next_state: ResMut<NextState<GameState>>,
    mut hud: MessageWriter<HudCommand>,
) {
    if !(wait.waiting && wait.requested) {
        return;
    }
    *wait = RestartWait::default();

    restart_game(&mut countdown, &mut reveal, &mut next_state, &mut hud);
}

/// Back to the countdown, never to the title.
fn restart_game(
    countdown: &mut Countdown,
    reveal: &mut ResultsReveal,
    next_state: &mut NextState<GameState>,
    hud: &mut MessageWriter<HudCommand>,
) {
    countdown.cancel();
    reveal.cancel();
    hud.write(HudCommand::RestartPrompt(false));
    hud.write(HudCommand::LockCursor);
    next_state.set(GameState::PreGame);

    info!("Restarting");
}
