//! Integration tests for world translation propagation through hierarchies
//! deeper than the bundled two-level scene.

use approx::assert_relative_eq;
use bevy::prelude::*;
use rstest::rstest;
use scene_hierarchy::{HierarchyDemoPlugin, LocalTranslation, WorldTranslation};

fn empty_scene() -> App {
    let mut app = App::new();
    app.add_plugins(HierarchyDemoPlugin { spawn_scene: false });
    app
}

fn world_of(app: &App, entity: Entity) -> Vec3 {
    app.world()
        .get::<WorldTranslation>(entity)
        .map(|world| world.0)
        .unwrap_or_else(|| panic!("{entity:?} should have a WorldTranslation"))
}

/// Spawns a chain of `depth` entities, each offset by `step` from its parent.
fn spawn_chain(app: &mut App, depth: usize, step: Vec3) -> Vec<Entity> {
    let mut chain: Vec<Entity> = Vec::with_capacity(depth);
    for _ in 0..depth {
        let mut entity = app
            .world_mut()
            .spawn((LocalTranslation(step), WorldTranslation::default()));
        if let Some(&parent) = chain.last() {
            entity.insert(ChildOf(parent));
        }
        chain.push(entity.id());
    }
    chain
}

#[rstest]
#[case::two_levels(2)]
#[case::five_levels(5)]
#[case::thirty_two_levels(32)]
fn each_level_adds_its_local_offset(#[case] depth: usize) {
    let mut app = empty_scene();
    let step = Vec3::new(1.0, -0.5, 0.25);
    let chain = spawn_chain(&mut app, depth, step);

    app.update();

    for (level, &entity) in chain.iter().enumerate() {
        #[expect(clippy::cast_precision_loss, reason = "test depths are tiny")]
        let expected = step * (level + 1) as f32;
        let actual = world_of(&app, entity);
        assert_relative_eq!(actual.x, expected.x, epsilon = 1e-4);
        assert_relative_eq!(actual.y, expected.y, epsilon = 1e-4);
        assert_relative_eq!(actual.z, expected.z, epsilon = 1e-4);
    }
}

#[rstest]
fn moving_the_root_shifts_every_descendant_in_one_tick() {
    let mut app = empty_scene();
    let chain = spawn_chain(&mut app, 4, Vec3::Y);
    app.update();

    let Some(&root) = chain.first() else {
        panic!("chain should not be empty");
    };
    app.world_mut()
        .entity_mut(root)
        .insert(LocalTranslation(Vec3::new(10.0, 1.0, 0.0)));
    app.update();

    for (level, &entity) in chain.iter().enumerate() {
        #[expect(clippy::cast_precision_loss, reason = "test depths are tiny")]
        let height = (level + 1) as f32;
        assert_eq!(world_of(&app, entity), Vec3::new(10.0, height, 0.0));
    }
}

#[rstest]
fn siblings_resolve_independently() {
    let mut app = empty_scene();
    let parent = app
        .world_mut()
        .spawn((LocalTranslation(Vec3::X), WorldTranslation::default()))
        .id();
    let left = app
        .world_mut()
        .spawn((
            ChildOf(parent),
            LocalTranslation(Vec3::NEG_Z),
            WorldTranslation::default(),
        ))
        .id();
    let right = app
        .world_mut()
        .spawn((
            ChildOf(parent),
            LocalTranslation(Vec3::Z),
            WorldTranslation::default(),
        ))
        .id();

    app.update();

    assert_eq!(world_of(&app, left), Vec3::new(1.0, 0.0, -1.0));
    assert_eq!(world_of(&app, right), Vec3::new(1.0, 0.0, 1.0));
}

#[rstest]
fn repeated_ticks_are_stable() {
    let mut app = empty_scene();
    let chain = spawn_chain(&mut app, 6, Vec3::splat(0.5));
    app.update();
    let first: Vec<Vec3> = chain.iter().map(|&entity| world_of(&app, entity)).collect();
    app.update();
    let second: Vec<Vec3> = chain.iter().map(|&entity| world_of(&app, entity)).collect();
    assert_eq!(first, second);
}
