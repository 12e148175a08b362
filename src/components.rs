//! ECS component types describing the scene.
//!
//! Local and world translations are separate component types so both can sit
//! on one entity. Rotation, scale and velocity are part of the schema but no
//! system consumes them yet.
use bevy::prelude::*;
use serde::Serialize;

use crate::vector_math::UP;

/// Position relative to the parent entity, or to the world origin for roots.
#[derive(
    Component, Reflect, Debug, Default, Clone, Copy, PartialEq, Deref, DerefMut, Serialize,
)]
#[reflect(Component, Default)]
pub struct LocalTranslation(pub Vec3);

/// Absolute position resolved by the propagation phase.
///
/// Only [`crate::propagation::propagate_world_translation_system`] writes this
/// component; any value present at spawn time is a seed that the first tick
/// overwrites.
#[derive(
    Component, Reflect, Debug, Default, Clone, Copy, PartialEq, Deref, DerefMut, Serialize,
)]
#[reflect(Component, Default)]
pub struct WorldTranslation(pub Vec3);

/// Orientation of an entity. Declared, not yet composed by propagation.
#[derive(Component, Reflect, Debug, Default, Clone, Copy, PartialEq, Deref, DerefMut)]
#[reflect(Component, Default)]
pub struct Rotation(pub Quat);

/// Per-axis scale of an entity. Declared, not yet composed by propagation.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq, Deref, DerefMut)]
#[reflect(Component, Default)]
pub struct Scale(pub Vec3);

impl Default for Scale {
    fn default() -> Self {
        Self(Vec3::ONE)
    }
}

/// Linear velocity in world units per second. No system drives it yet.
#[derive(Component, Reflect, Debug, Default, Clone, Copy, PartialEq, Deref, DerefMut)]
#[reflect(Component, Default)]
pub struct Velocity(pub Vec3);

/// Marks the player-controlled entity.
#[derive(Component, Reflect, Default, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component, Default)]
pub struct Player;

/// Drawable capsule: a cylinder of `2 * half_length` capped by hemispheres.
///
/// `center` is derived state. The draw phase overwrites it from the entity's
/// [`WorldTranslation`] every tick, so values supplied at spawn are ignored.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq)]
#[reflect(Component, Default)]
pub struct Capsule {
    /// Midpoint of the capsule's axis segment.
    pub center: Vec3,
    /// Radius of the cylinder and of both caps.
    pub radius: f32,
    /// Distance from `center` to each end of the axis segment.
    pub half_length: f32,
    /// Unit vector along the capsule's axis.
    pub direction: Vec3,
}

impl Default for Capsule {
    fn default() -> Self {
        Self {
            center: Vec3::ZERO,
            radius: 0.5,
            half_length: 0.5,
            direction: UP,
        }
    }
}

impl Capsule {
    /// Creates an upright capsule centred on the origin.
    #[must_use]
    pub const fn upright(radius: f32, half_length: f32) -> Self {
        Self {
            center: Vec3::ZERO,
            radius,
            half_length,
            direction: UP,
        }
    }

    /// Returns the `(start, end)` endpoints of the capsule's axis segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use glam::Vec3;
    /// use scene_hierarchy::components::Capsule;
    /// let mut capsule = Capsule::upright(1.0, 2.0);
    /// capsule.center = Vec3::new(0.0, 3.0, 0.0);
    /// assert_eq!(capsule.segment(), (Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 5.0, 0.0)));
    /// ```
    #[must_use]
    pub fn segment(&self) -> (Vec3, Vec3) {
        let offset = self.direction * self.half_length;
        (self.center - offset, self.center + offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_defaults_to_identity() {
        assert_eq!(Scale::default().0, Vec3::ONE);
    }

    #[test]
    fn rotation_defaults_to_identity() {
        assert_eq!(Rotation::default().0, Quat::IDENTITY);
    }

    #[test]
    fn segment_follows_direction() {
        let capsule = Capsule {
            center: Vec3::new(1.0, 1.0, 1.0),
            radius: 0.25,
            half_length: 0.5,
            direction: Vec3::X,
        };
        let (start, end) = capsule.segment();
        assert_eq!(start, Vec3::new(0.5, 1.0, 1.0));
        assert_eq!(end, Vec3::new(1.5, 1.0, 1.0));
    }

    #[test]
    fn translations_deref_to_vectors() {
        let mut local = LocalTranslation(Vec3::new(1.0, 2.0, 3.0));
        local.x += 1.0;
        assert_eq!(*local, Vec3::new(2.0, 2.0, 3.0));
    }
}
