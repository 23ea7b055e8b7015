//! HUD plugin.
//!
//! The session never touches UI entities. It writes `HudCommand`s; this plugin
//! folds them into `HudState`, and the render-only half mirrors that state
//! onto text nodes and the primary window's cursor.
//!
//! ```text
//!   session ──HudCommand──► apply_hud_commands ──► HudState ──► (render) text + cursor
//! ```

pub mod render;

use bevy::prelude::*;

use crate::common::schedule::GameSet;
use crate::common::state::GameState;

/// One results line on the game-over screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResultsField {
    FinalScore,
    ShotsFired,
    TargetsHit,
    Accuracy,
}

#[derive(Message, Clone, Debug, PartialEq)]
pub enum HudCommand {
    SetState(GameState),
    Score(i32),
    Time(f32),
    /// Empty string clears the digit.
    CountdownDigit(String),
    ClearResults,
    ResultsStep { field: ResultsField, text: String },
    RestartPrompt(bool),
    LockCursor,
    UnlockCursor,
}

/// Everything the HUD currently shows, as text.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct HudState {
    pub screen: GameState,
    pub score: String,
    pub time: String,
    pub countdown: String,
    pub final_score: String,
    pub shots_fired: String,
    pub targets_hit: String,
    pub accuracy: String,
    pub restart_prompt: bool,
    pub cursor_locked: bool,
}

impl Default for HudState {
    fn default() -> Self {
        Self {
            screen: GameState::Title,
            score: format_score(0),
            time: String::new(),
            countdown: String::new(),
            final_score: String::new(),
            shots_fired: String::new(),
            targets_hit: String::new(),
            accuracy: String::new(),
            restart_prompt: false,
            cursor_locked: false,
        }
    }
}

impl HudState {
    pub fn apply(&mut self, cmd: &HudCommand) {
        match cmd {
            HudCommand::SetState(s) => {
                self.screen = *s;
                if *s == GameState::Gameplay {
                    self.cursor_locked = true;
                }
            }
            HudCommand::Score(v) => self.score = format_score(*v),
            HudCommand::Time(t) => self.time = format_time(*t),
            HudCommand::CountdownDigit(d) => self.countdown.clone_from(d),
            HudCommand::ClearResults => {
                self.final_score.clear();
                self.shots_fired.clear();
                self.targets_hit.clear();
                self.accuracy.clear();
                self.restart_prompt = false;
            }
            HudCommand::ResultsStep { field, text } => {
                self.results_field_mut(*field).clone_from(text);
            }
            HudCommand::RestartPrompt(on) => self.restart_prompt = *on,
            HudCommand::LockCursor => self.cursor_locked = true,
            HudCommand::UnlockCursor => self.cursor_locked = false,
        }
    }

    fn results_field_mut(&mut self, field: ResultsField) -> &mut String {
        match field {
            ResultsField::FinalScore => &mut self.final_score,
            ResultsField::ShotsFired => &mut self.shots_fired,
            ResultsField::TargetsHit => &mut self.targets_hit,
            ResultsField::Accuracy => &mut self.accuracy,
        }
    }
}

/// Zero-padded to four digits; negative values keep their sign.
pub fn format_score(score: i32) -> String {
    if score < 0 {
        format!("-{:04}", score.unsigned_abs())
    } else {
        format!("{score:04}")
    }
}

pub fn format_time(secs: f32) -> String {
    format!("{secs:.1}")
}

pub fn plugin(app: &mut App) {
    app.init_resource::<HudState>()
        .add_message::<HudCommand>()
        .add_systems(
            Update,
            apply_hud_commands
                .after(GameSet::Clock)
                .before(GameSet::Commit),
        );
}

pub fn apply_hud_commands(mut reader: MessageReader<HudCommand>, mut hud: ResMut<HudState>) {
    for cmd in reader.read() {
        hud.apply(cmd);
    }
}

#[cfg(test)]
mod tests;
