//! Scene bootstrap: the player capsule and the hat parented to it.
use bevy::prelude::*;
use log::info;

use crate::components::{Capsule, LocalTranslation, Player, WorldTranslation};
use crate::constants::{HAT_NAME, PLAYER_NAME};

/// Initial local translation of the player.
pub const PLAYER_START: Vec3 = Vec3::new(0.0, 3.0, 0.0);
/// Offset of the hat relative to the player.
pub const HAT_OFFSET: Vec3 = Vec3::new(0.5, 2.0, -0.5);
/// Placeholder world translation given to the hat before the first tick.
const HAT_WORLD_SEED: Vec3 = Vec3::ONE;

/// Spawns the initial hierarchy. Runs once in `Startup`.
///
/// The player is a root entity; the hat is its child. Both receive a
/// [`WorldTranslation`] seed that the first propagation tick overwrites.
pub fn spawn_scene_system(mut commands: Commands) {
    let player = commands
        .spawn((
            Name::new(PLAYER_NAME),
            Player,
            LocalTranslation(PLAYER_START),
            WorldTranslation(Vec3::ZERO),
            Capsule::upright(1.0, 2.0),
        ))
        .id();

    let hat = commands
        .spawn((
            Name::new(HAT_NAME),
            ChildOf(player),
            LocalTranslation(HAT_OFFSET),
            WorldTranslation(HAT_WORLD_SEED),
            Capsule::upright(1.2, 0.5),
        ))
        .id();

    info!("Scene spawned: {PLAYER_NAME} {player:?} with child {HAT_NAME} {hat:?}");
}

/// Looks up the first entity whose [`Name`] equals `name`.
pub fn find_entity_by_name(world: &mut World, name: &str) -> Option<Entity> {
    let mut query = world.query::<(Entity, &Name)>();
    query
        .iter(world)
        .find(|(_, entity_name)| entity_name.as_str() == name)
        .map(|(entity, _)| entity)
}
