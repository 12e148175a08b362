//! Serialisable view of the scene for inspection and diagnostics.
use bevy::prelude::*;
use log::{debug, warn};
use serde::Serialize;

use crate::components::{LocalTranslation, Player, WorldTranslation};

/// Resolved state of one named entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntitySnapshot {
    /// The entity's [`Name`].
    pub name: String,
    /// Name of the parent entity, when it has a named parent.
    pub parent: Option<String>,
    /// Whether the entity carries the [`Player`] marker.
    pub player: bool,
    /// Local translation, if present.
    pub local: Option<Vec3>,
    /// World translation, if present.
    pub world: Option<Vec3>,
}

/// Named entities and their translations, sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SceneSnapshot {
    /// Captured frame index.
    pub frame: u64,
    /// One entry per named entity.
    pub entities: Vec<EntitySnapshot>,
}

type SnapshotRow<'w> = (
    &'w Name,
    Option<&'w ChildOf>,
    Has<Player>,
    Option<&'w LocalTranslation>,
    Option<&'w WorldTranslation>,
);

impl SceneSnapshot {
    /// Captures every named entity in `world`.
    pub fn capture(world: &mut World, frame: u64) -> Self {
        let mut names = world.query::<&Name>();
        let mut rows = world.query::<SnapshotRow<'_>>();
        let view: &World = world;
        let mut entities: Vec<_> = rows
            .iter(view)
            .map(|(name, parent, player, local, world_translation)| EntitySnapshot {
                name: name.as_str().to_owned(),
                parent: parent
                    .and_then(|child_of| names.get(view, child_of.parent()).ok())
                    .map(|parent_name| parent_name.as_str().to_owned()),
                player,
                local: local.map(|translation| translation.0),
                world: world_translation.map(|translation| translation.0),
            })
            .collect();
        entities.sort_by(|a, b| a.name.cmp(&b.name));
        Self { frame, entities }
    }

    /// Returns the entry for `name`, if captured.
    #[must_use]
    pub fn entity(&self, name: &str) -> Option<&EntitySnapshot> {
        self.entities.iter().find(|entry| entry.name == name)
    }

    /// Serialises the snapshot as compact JSON.
    ///
    /// # Errors
    ///
    /// Propagates any [`serde_json::Error`] raised during serialisation.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Controls periodic snapshot logging.
#[derive(Resource, Clone, Debug, Default, PartialEq, Eq)]
pub struct SnapshotSettings {
    /// Log a snapshot every this many frames. Zero disables logging.
    pub log_every_frames: u64,
}

/// Frames seen by [`log_snapshot_system`].
#[derive(Resource, Debug, Default)]
pub struct SnapshotClock {
    frame: u64,
}

/// Logs a JSON snapshot at `debug` level on the configured cadence.
pub fn log_snapshot_system(world: &mut World) {
    let every = world
        .get_resource::<SnapshotSettings>()
        .map_or(0, |settings| settings.log_every_frames);
    let frame = {
        let mut clock = world.get_resource_or_insert_with(SnapshotClock::default);
        clock.frame += 1;
        clock.frame
    };
    if every == 0 || frame % every != 0 {
        return;
    }

    match SceneSnapshot::capture(world, frame).to_json() {
        Ok(json) => debug!("scene snapshot: {json}"),
        Err(err) => warn!("failed to serialise scene snapshot: {err}"),
    }
}
