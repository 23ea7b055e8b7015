//! Pointer input mapping.
//!
//! One left click means different things per state: a shot during Gameplay,
//! a UI click everywhere else. Nothing downstream reads the mouse directly.

use bevy::prelude::*;

use crate::common::schedule::GameSet;
use crate::common::state::GameState;
use crate::plugins::projectiles::messages::FireRequest;

/// A click outside Gameplay (start, restart).
#[derive(Message, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointerClick;

pub fn plugin(app: &mut App) {
    app.add_message::<PointerClick>()
        .add_message::<FireRequest>()
        .add_systems(Update, map_pointer_input.in_set(GameSet::Input));
}

pub fn map_pointer_input(
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    state: Option<Res<State<GameState>>>,
    mut fire: MessageWriter<FireRequest>,
    mut click: MessageWriter<PointerClick>,
) {
    let Some(buttons) = buttons else { return };
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    let Some(state) = state else { return };

    if *state.get() == GameState::Gameplay {
        fire.write(FireRequest);
    } else {
        click.write(PointerClick);
    }
}
