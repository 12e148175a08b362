//! World-translation propagation down the entity hierarchy.
//!
//! The walk is breadth-first from every root (an entity without [`ChildOf`]),
//! so a parent's [`WorldTranslation`] is always resolved earlier in the same
//! tick than any of its descendants, whatever the depth of the tree.
//!
//! Per entity:
//!
//! - with both [`LocalTranslation`] and [`WorldTranslation`]: the world value
//!   becomes `local + nearest_ancestor_world` (or `local` when no ancestor
//!   offers one), and that result is offered to its children;
//! - with only a [`WorldTranslation`]: left untouched, but its current value
//!   is offered to its children;
//! - with neither: transparent, children see the value offered to it.
//!
//! Entities with a [`LocalTranslation`] and no [`WorldTranslation`] are not
//! resolved at all.
use std::collections::VecDeque;

use bevy::prelude::*;
use log::trace;

use crate::components::{LocalTranslation, WorldTranslation};

/// Combines a local translation with the parent's resolved world translation.
///
/// # Examples
///
/// ```
/// use glam::Vec3;
/// use scene_hierarchy::propagation::resolve_world_translation;
/// let local = Vec3::new(0.5, 2.0, -0.5);
/// assert_eq!(resolve_world_translation(local, None), local);
/// assert_eq!(
///     resolve_world_translation(local, Some(Vec3::new(0.0, 3.0, 0.0))),
///     Vec3::new(0.5, 5.0, -0.5)
/// );
/// ```
#[must_use]
pub fn resolve_world_translation(local: Vec3, parent_world: Option<Vec3>) -> Vec3 {
    parent_world.map_or(local, |parent| local + parent)
}

type HierarchyRoots<'w, 's> = Query<
    'w,
    's,
    Entity,
    (
        Without<ChildOf>,
        Or<(With<WorldTranslation>, With<Children>)>,
    ),
>;

/// Recomputes every [`WorldTranslation`] from local translations, top-down.
///
/// Values are overwritten rather than accumulated, so running the system
/// twice without changing any [`LocalTranslation`] yields identical results.
pub fn propagate_world_translation_system(
    roots: HierarchyRoots<'_, '_>,
    mut nodes: Query<(Option<&LocalTranslation>, Option<&mut WorldTranslation>)>,
    children: Query<&Children>,
) {
    let mut queue: VecDeque<(Entity, Option<Vec3>)> =
        roots.iter().map(|root| (root, None)).collect();
    let mut resolved = 0_usize;

    while let Some((entity, inherited)) = queue.pop_front() {
        let offered = match nodes.get_mut(entity) {
            Ok((Some(local), Some(mut world))) => {
                world.0 = resolve_world_translation(local.0, inherited);
                resolved += 1;
                Some(world.0)
            }
            Ok((None, Some(world))) => Some(world.0),
            _ => inherited,
        };

        if let Ok(kids) = children.get(entity) {
            let kids: &[Entity] = kids;
            queue.extend(kids.iter().map(|&child| (child, offered)));
        }
    }

    trace!("resolved {resolved} world translations");
}
