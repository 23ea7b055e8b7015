//! Render-only HUD: text nodes and cursor grab. Needs the UI and window plugins.

use bevy::prelude::*;
use bevy::window::{CursorGrabMode, CursorOptions, PrimaryWindow};

use crate::common::state::GameState;

use super::HudState;

/// Which piece of `HudState` a text node mirrors.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub enum HudText {
    Title,
    Countdown,
    Score,
    Time,
    FinalScore,
    ShotsFired,
    TargetsHit,
    Accuracy,
    RestartPrompt,
}

impl HudText {
    fn text(self, hud: &HudState) -> String {
        match self {
            HudText::Title => "Click to start".to_string(),
            HudText::Countdown => hud.countdown.clone(),
            HudText::Score => format!("Score {}", hud.score),
            HudText::Time => format!("Time {}", hud.time),
            HudText::FinalScore => labelled("Final score", &hud.final_score),
            HudText::ShotsFired => labelled("Shots fired", &hud.shots_fired),
            HudText::TargetsHit => labelled("Targets hit", &hud.targets_hit),
            HudText::Accuracy => labelled("Accuracy", &hud.accuracy),
            HudText::RestartPrompt => "Click to play again".to_string(),
        }
    }

    fn visible(self, hud: &HudState) -> bool {
        match self {
            HudText::Title => hud.screen == GameState::Title,
            HudText::Countdown => hud.screen == GameState::PreGame,
            HudText::Score | HudText::Time => hud.screen == GameState::Gameplay,
            HudText::FinalScore => hud.screen == GameState::GameOver && !hud.final_score.is_empty(),
            HudText::ShotsFired => hud.screen == GameState::GameOver && !hud.shots_fired.is_empty(),
            HudText::TargetsHit => hud.screen == GameState::GameOver && !hud.targets_hit.is_empty(),
            HudText::Accuracy => hud.screen == GameState::GameOver && !hud.accuracy.is_empty(),
            HudText::RestartPrompt => hud.screen == GameState::GameOver && hud.restart_prompt,
        }
    }
}

fn labelled(label: &str, value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        format!("{label}: {value}")
    }
}

pub fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_hud)
        .add_systems(PostUpdate, (sync_hud_text, apply_cursor_grab));
}

fn spawn_hud(mut commands: Commands) {
    commands
        .spawn((
            Name::new("Hud"),
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                row_gap: Val::Px(8.0),
                ..default()
            },
        ))
        .with_children(|root| {
            for (kind, size) in [
                (HudText::Title, 48.0),
                (HudText::Countdown, 96.0),
                (HudText::Score, 28.0),
                (HudText::Time, 28.0),
                (HudText::FinalScore, 32.0),
                (HudText::ShotsFired, 32.0),
                (HudText::TargetsHit, 32.0),
                (HudText::Accuracy, 32.0),
                (HudText::RestartPrompt, 24.0),
            ] {
                root.spawn((
                    kind,
                    Text::new(""),
                    TextFont {
                        font_size: size,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                    Visibility::Hidden,
                ));
            }
        });
}

fn sync_hud_text(hud: Res<HudState>, mut q: Query<(&HudText, &mut Text, &mut Visibility)>) {
    if !hud.is_changed() {
        return;
    }
    for (kind, mut text, mut vis) in &mut q {
        let want = kind.text(&hud);
        if text.0 != want {
            text.0 = want;
        }
        vis.set_if_neq(if kind.visible(&hud) {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        });
    }
}

fn apply_cursor_grab(hud: Res<HudState>, mut q: Query<&mut CursorOptions, With<PrimaryWindow>>) {
    if !hud.is_changed() {
        return;
    }
    let Ok(mut cursor) = q.single_mut() else {
        return;
    };
    if hud.cursor_locked {
        cursor.grab_mode = CursorGrabMode::Locked;
        cursor.visible = false;
    } else {
        cursor.grab_mode = CursorGrabMode::None;
        cursor.visible = true;
    }
}
