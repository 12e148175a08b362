//! Directional input and player movement.
//!
//! Keyboard state is sampled into [`MoveInput`] by [`poll_keyboard_system`]
//! and consumed by [`player_move_system`]. Tests and headless runs write
//! [`MoveInput`] directly and never need a keyboard resource.
use bevy::input::ButtonInput;
use bevy::prelude::*;
use log::trace;

use crate::components::{LocalTranslation, Player};
use crate::constants::MOVE_SPEED;
use crate::vector_math::normalize;

/// Pressed state of the four movement directions for the current tick.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "This struct represents the pressed state of exactly four directional keys."
)]
pub struct MoveInput {
    /// Move towards negative Z (W).
    pub forward: bool,
    /// Move towards positive Z (S).
    pub back: bool,
    /// Move towards negative X (A).
    pub left: bool,
    /// Move towards positive X (D).
    pub right: bool,
}

/// Runtime tuning for player movement.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct MoveSettings {
    /// Movement speed in world units per second.
    pub speed: f32,
}

impl Default for MoveSettings {
    fn default() -> Self {
        Self { speed: MOVE_SPEED }
    }
}

/// Composes the planar direction `(right - left, 0, back - forward)`.
///
/// The result is not normalised: a diagonal yields a vector of length
/// `sqrt(2)` and opposing keys cancel to zero.
///
/// # Examples
///
/// ```
/// use glam::Vec3;
/// use scene_hierarchy::input::{compose_move_direction, MoveInput};
/// let input = MoveInput { right: true, forward: true, ..Default::default() };
/// assert_eq!(compose_move_direction(input), Vec3::new(1.0, 0.0, -1.0));
/// ```
#[must_use]
pub fn compose_move_direction(input: MoveInput) -> Vec3 {
    /// Maps a negative/positive key pair to an axis value.
    const fn axis(negative: bool, positive: bool) -> f32 {
        match (negative, positive) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }

    Vec3::new(
        axis(input.left, input.right),
        0.0,
        axis(input.forward, input.back),
    )
}

/// Refreshes [`MoveInput`] from W/A/S/D when a keyboard resource exists.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn poll_keyboard_system(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    mut input: ResMut<MoveInput>,
) {
    let Some(keyboard) = keyboard else {
        return;
    };

    *input = MoveInput {
        forward: keyboard.pressed(KeyCode::KeyW),
        back: keyboard.pressed(KeyCode::KeyS),
        left: keyboard.pressed(KeyCode::KeyA),
        right: keyboard.pressed(KeyCode::KeyD),
    };
}

/// Moves every player's local translation along the requested direction.
///
/// The displacement is `normalize(direction) * delta * speed`. When no
/// direction is requested (or the keys cancel out) nothing is touched, which
/// keeps the zero vector away from normalisation.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn player_move_system(
    input: Res<MoveInput>,
    time: Res<Time>,
    settings: Res<MoveSettings>,
    mut players: Query<&mut LocalTranslation, With<Player>>,
) {
    let Ok(direction) = normalize(compose_move_direction(*input)) else {
        return;
    };

    let step = direction * time.delta_secs() * settings.speed;
    for mut local in &mut players {
        local.0 += step;
        trace!("player moved by {step:?} to {:?}", local.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::none(MoveInput::default(), Vec3::ZERO)]
    #[case::forward(MoveInput { forward: true, ..Default::default() }, Vec3::NEG_Z)]
    #[case::back(MoveInput { back: true, ..Default::default() }, Vec3::Z)]
    #[case::left(MoveInput { left: true, ..Default::default() }, Vec3::NEG_X)]
    #[case::right(MoveInput { right: true, ..Default::default() }, Vec3::X)]
    #[case::opposed(MoveInput { left: true, right: true, ..Default::default() }, Vec3::ZERO)]
    #[case::all(MoveInput { forward: true, back: true, left: true, right: true }, Vec3::ZERO)]
    fn composed_direction(#[case] input: MoveInput, #[case] expected: Vec3) {
        assert_eq!(compose_move_direction(input), expected);
    }

    #[test]
    fn composed_direction_stays_planar() {
        let input = MoveInput {
            back: true,
            right: true,
            ..Default::default()
        };
        assert!(compose_move_direction(input).y.abs() < f32::EPSILON);
    }

    #[test]
    fn default_speed_matches_constant() {
        assert!((MoveSettings::default().speed - MOVE_SPEED).abs() < f32::EPSILON);
    }

    #[test]
    fn keyboard_polling_maps_wasd() {
        let mut app = App::new();
        app.init_resource::<MoveInput>();
        let mut keyboard = ButtonInput::<KeyCode>::default();
        keyboard.press(KeyCode::KeyW);
        keyboard.press(KeyCode::KeyD);
        app.insert_resource(keyboard);
        app.add_systems(Update, poll_keyboard_system);

        app.update();

        assert_eq!(
            *app.world().resource::<MoveInput>(),
            MoveInput {
                forward: true,
                right: true,
                ..Default::default()
            }
        );
    }

    #[test]
    fn keyboard_polling_without_keyboard_keeps_input() {
        let mut app = App::new();
        let requested = MoveInput {
            left: true,
            ..Default::default()
        };
        app.insert_resource(requested);
        app.add_systems(Update, poll_keyboard_system);

        app.update();

        assert_eq!(*app.world().resource::<MoveInput>(), requested);
    }
}
