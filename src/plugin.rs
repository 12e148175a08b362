//! Bevy plugin wiring the scene phases into the schedule.
use bevy::prelude::*;

use crate::components::{
    Capsule, LocalTranslation, Player, Rotation, Scale, Velocity, WorldTranslation,
};
use crate::draw::{draw_capsules_system, DrawQueue, DrawSettings};
use crate::input::{player_move_system, poll_keyboard_system, MoveInput, MoveSettings};
use crate::phases::{configure_phases, ScenePhase};
use crate::propagation::propagate_world_translation_system;
use crate::scene::spawn_scene_system;
use crate::snapshot::{log_snapshot_system, SnapshotSettings};

/// Installs the scene pipeline.
///
/// # Responsibilities
///
/// - Registers the scene components for reflection.
/// - Initialises [`MoveInput`], [`MoveSettings`], [`DrawSettings`],
///   [`DrawQueue`], [`SnapshotSettings`] and [`Time`] unless already present.
/// - Spawns the player/hat hierarchy in `Startup` when `spawn_scene` is set.
/// - Runs input, propagation and draw in `Update`, ordered by [`ScenePhase`].
///
/// The plugin needs no window or renderer. Insert settings resources before
/// adding it to override their defaults.
///
/// # Examples
///
/// ```
/// use bevy::prelude::*;
/// use scene_hierarchy::HierarchyDemoPlugin;
///
/// let mut app = App::new();
/// app.add_plugins(HierarchyDemoPlugin::default());
/// app.update();
/// ```
#[derive(Debug, Clone)]
pub struct HierarchyDemoPlugin {
    /// Whether to spawn the player/hat scene at startup.
    pub spawn_scene: bool,
}

impl Default for HierarchyDemoPlugin {
    fn default() -> Self {
        Self { spawn_scene: true }
    }
}

impl Plugin for HierarchyDemoPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<LocalTranslation>()
            .register_type::<WorldTranslation>()
            .register_type::<Rotation>()
            .register_type::<Scale>()
            .register_type::<Velocity>()
            .register_type::<Capsule>()
            .register_type::<Player>();

        app.init_resource::<Time>()
            .init_resource::<MoveInput>()
            .init_resource::<MoveSettings>()
            .init_resource::<DrawSettings>()
            .init_resource::<DrawQueue>()
            .init_resource::<SnapshotSettings>();

        configure_phases(app, Update);

        if self.spawn_scene {
            app.add_systems(Startup, spawn_scene_system);
        }
        app.add_systems(
            Update,
            (poll_keyboard_system, player_move_system)
                .chain()
                .in_set(ScenePhase::Input),
        );
        app.add_systems(
            Update,
            propagate_world_translation_system.in_set(ScenePhase::Propagate),
        );
        app.add_systems(
            Update,
            (draw_capsules_system, log_snapshot_system)
                .chain()
                .in_set(ScenePhase::Draw),
        );
    }
}
