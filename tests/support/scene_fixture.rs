//! Shared fixture for behavioural tests that tick the scene pipeline.
//!
//! rspec clones the environment for every example, so the fixture keeps its
//! `App` behind a shared mutex. Call [`SceneFixture::reset`] from
//! `before_each` to start each example from a freshly bootstrapped scene.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use bevy::prelude::*;
use scene_hierarchy::{
    find_entity_by_name, Capsule, CapsuleDraw, DrawQueue, HierarchyDemoPlugin, LocalTranslation, MoveInput,
    MoveSettings, WorldTranslation,
};

/// Player speed used by every fixture app.
pub const TEST_SPEED: f32 = 5.0;

#[derive(Resource, Debug, Default)]
struct PluginsFinalized;

/// An `App` that may cross into rspec's `Send + Sync` environment.
#[derive(Debug)]
pub struct SceneApp(App);

impl std::ops::Deref for SceneApp {
    type Target = App;

    fn deref(&self) -> &App {
        &self.0
    }
}

impl std::ops::DerefMut for SceneApp {
    fn deref_mut(&mut self) -> &mut App {
        &mut self.0
    }
}

// SAFETY: suites run through `run_serial`, and the app is only reached via the
// fixture's mutex, so no two threads ever touch it at once.
unsafe impl Send for SceneApp {}
unsafe impl Sync for SceneApp {}

fn build_app() -> App {
    let mut app = App::new();
    app.insert_resource(MoveSettings { speed: TEST_SPEED });
    app.add_plugins(HierarchyDemoPlugin::default());
    app
}

/// A headless scene app shared between rspec examples.
#[derive(Debug, Clone)]
pub struct SceneFixture {
    app: Arc<Mutex<SceneApp>>,
}

impl SceneFixture {
    /// Creates a fixture holding a freshly built scene app.
    #[must_use]
    pub fn bootstrap() -> Self {
        Self {
            app: Arc::new(Mutex::new(SceneApp(build_app()))),
        }
    }

    /// Replaces the app with a freshly built one. Nothing is spawned until
    /// the first [`tick`](Self::tick).
    pub fn reset(&self) {
        let mut app = self.app_guard();
        app.0 = build_app();
    }

    /// Locks the underlying `App` for direct inspection or mutation.
    ///
    /// A poisoned mutex is recovered.
    pub fn app_guard(&self) -> MutexGuard<'_, SceneApp> {
        self.app.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Advances virtual time by `delta` and runs one update.
    ///
    /// The first tick finalizes plugins, then runs `Startup` followed by the
    /// scene phases.
    pub fn tick(&self, delta: Duration) {
        let mut app = self.app_guard();
        if app.world().get_resource::<PluginsFinalized>().is_none() {
            app.finish();
            app.cleanup();
            app.insert_resource(PluginsFinalized);
        }
        app.world_mut().resource_mut::<Time>().advance_by(delta);
        app.update();
    }

    /// Replaces the directional input read by the next tick.
    pub fn set_move_input(&self, input: MoveInput) {
        let mut app = self.app_guard();
        app.world_mut().insert_resource(input);
    }

    /// Returns the entity named `name`.
    ///
    /// # Panics
    ///
    /// Panics if no such entity exists.
    pub fn entity(&self, name: &str) -> Entity {
        let mut app = self.app_guard();
        find_entity_by_name(app.world_mut(), name)
            .unwrap_or_else(|| panic!("entity {name} should exist"))
    }

    /// Returns the local translation of the entity named `name`.
    ///
    /// # Panics
    ///
    /// Panics if the entity or its component is missing.
    pub fn local(&self, name: &str) -> Vec3 {
        let entity = self.entity(name);
        let app = self.app_guard();
        app.world()
            .get::<LocalTranslation>(entity)
            .map(|local| local.0)
            .unwrap_or_else(|| panic!("{name} should have a LocalTranslation"))
    }

    /// Returns the world translation of the entity named `name`.
    ///
    /// # Panics
    ///
    /// Panics if the entity or its component is missing.
    pub fn world_translation(&self, name: &str) -> Vec3 {
        let entity = self.entity(name);
        let app = self.app_guard();
        app.world()
            .get::<WorldTranslation>(entity)
            .map(|world| world.0)
            .unwrap_or_else(|| panic!("{name} should have a WorldTranslation"))
    }

    /// Returns the capsule centre recorded for `name` by the last draw phase.
    pub fn drawn_center(&self, name: &str) -> Option<Vec3> {
        let entity = self.entity(name);
        let app = self.app_guard();
        app.world()
            .resource::<DrawQueue>()
            .capsule_for(entity)
            .map(|draw| (draw.start + draw.end) * 0.5)
    }

    /// Returns the centre stored on the capsule component of `name`.
    pub fn capsule_center(&self, name: &str) -> Option<Vec3> {
        let entity = self.entity(name);
        let app = self.app_guard();
        app.world().get::<Capsule>(entity).map(|capsule| capsule.center)
    }

    /// Returns the draw recorded for `name` by the last draw phase.
    pub fn recorded_draw(&self, name: &str) -> Option<CapsuleDraw> {
        let entity = self.entity(name);
        let app = self.app_guard();
        app.world()
            .resource::<DrawQueue>()
            .capsule_for(entity)
            .copied()
    }

    /// Returns how many capsules the last draw phase recorded.
    pub fn recorded_draw_count(&self) -> usize {
        let app = self.app_guard();
        app.world().resource::<DrawQueue>().capsules().len()
    }
}
