//! Draw phase: shape positioning and wireframe capsule tessellation.
//!
//! [`draw_capsules_system`] copies each entity's resolved world translation
//! into its [`Capsule`] and records a [`CapsuleDraw`] in the [`DrawQueue`].
//! The queue is plain data, so the phase runs the same with or without a
//! window. The `presentation` module (feature `render`) flushes it to gizmos.
use std::f32::consts::{FRAC_PI_2, TAU};

use bevy::prelude::*;
use bevy_color::palettes::css::{BLUE, RED};
use bevy_color::Color;
use log::trace;

use crate::components::{Capsule, Player, WorldTranslation};
use crate::constants::{CAPSULE_RINGS, CAPSULE_SLICES};
use crate::vector_math::{normalize, UP};

/// Tessellation and colours used when recording capsule draws.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct DrawSettings {
    /// Meridians around the capsule axis.
    pub slices: u32,
    /// Latitude steps per hemispherical cap.
    pub rings: u32,
    /// Colour for entities carrying the [`Player`] marker.
    pub player_color: Color,
    /// Colour for every other entity.
    pub other_color: Color,
}

impl Default for DrawSettings {
    fn default() -> Self {
        Self {
            slices: CAPSULE_SLICES,
            rings: CAPSULE_RINGS,
            player_color: RED.into(),
            other_color: BLUE.into(),
        }
    }
}

/// A single wireframe capsule to render this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapsuleDraw {
    /// The entity the capsule belongs to.
    pub entity: Entity,
    /// First endpoint of the axis segment.
    pub start: Vec3,
    /// Second endpoint of the axis segment.
    pub end: Vec3,
    /// Capsule radius.
    pub radius: f32,
    /// Meridians around the axis.
    pub slices: u32,
    /// Latitude steps per cap.
    pub rings: u32,
    /// Line colour.
    pub color: Color,
}

/// Draw commands recorded by the most recent draw phase.
#[derive(Resource, Debug, Default, Clone)]
pub struct DrawQueue {
    capsules: Vec<CapsuleDraw>,
}

impl DrawQueue {
    /// Returns the recorded capsule draws in recording order.
    #[must_use]
    pub fn capsules(&self) -> &[CapsuleDraw] {
        &self.capsules
    }

    /// Returns the draw recorded for `entity`, if any.
    #[must_use]
    pub fn capsule_for(&self, entity: Entity) -> Option<&CapsuleDraw> {
        self.capsules.iter().find(|draw| draw.entity == entity)
    }

    /// Appends a capsule draw.
    pub fn push(&mut self, draw: CapsuleDraw) {
        self.capsules.push(draw);
    }

    /// Discards every recorded draw.
    pub fn clear(&mut self) {
        self.capsules.clear();
    }
}

/// Positions every capsule at its entity's world translation and records it.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn draw_capsules_system(
    settings: Res<DrawSettings>,
    mut queue: ResMut<DrawQueue>,
    mut shapes: Query<(Entity, &WorldTranslation, &mut Capsule, Has<Player>)>,
) {
    queue.clear();
    for (entity, world, mut capsule, is_player) in &mut shapes {
        capsule.center = world.0;
        let (start, end) = capsule.segment();
        queue.push(CapsuleDraw {
            entity,
            start,
            end,
            radius: capsule.radius,
            slices: settings.slices,
            rings: settings.rings,
            color: if is_player {
                settings.player_color
            } else {
                settings.other_color
            },
        });
    }
    trace!("recorded {} capsule draws", queue.capsules().len());
}

/// Returns two unit vectors perpendicular to `axis` and to each other.
fn orthonormal_basis(axis: Vec3) -> (Vec3, Vec3) {
    let helper = if axis.x.abs() < 0.9 { Vec3::X } else { Vec3::Y };
    let first = axis.cross(helper).normalize();
    (first, axis.cross(first))
}

/// Tessellates a capsule into wireframe line segments.
///
/// The outline consists of `slices` side lines joining the two rims, a circle
/// of `slices` segments at each rim, and for every meridian a half-arc of
/// `rings` segments over each cap. `slices` is clamped to at least 3 and
/// `rings` to at least 1. A zero-length axis draws a sphere oriented along
/// [`UP`].
#[expect(
    clippy::cast_precision_loss,
    reason = "Tessellation counts are small and exactly representable."
)]
#[must_use]
pub fn capsule_wireframe(draw: &CapsuleDraw) -> Vec<(Vec3, Vec3)> {
    let slices = draw.slices.max(3);
    let rings = draw.rings.max(1);
    let axis = normalize(draw.end - draw.start).unwrap_or(UP);
    let (u, v) = orthonormal_basis(axis);
    let radial = |slice: u32| {
        let theta = TAU * slice as f32 / slices as f32;
        (u * theta.cos() + v * theta.sin()) * draw.radius
    };

    let mut lines = Vec::with_capacity((slices * (3 + 2 * rings)) as usize);
    for slice in 0..slices {
        let here = radial(slice);
        let next = radial(slice + 1);
        lines.push((draw.start + here, draw.end + here));
        lines.push((draw.start + here, draw.start + next));
        lines.push((draw.end + here, draw.end + next));

        for (pole, sign) in [(draw.end, 1.0_f32), (draw.start, -1.0_f32)] {
            let arc_point = |ring: u32| {
                let phi = FRAC_PI_2 * ring as f32 / rings as f32;
                pole + here * phi.cos() + axis * (sign * draw.radius * phi.sin())
            };
            for ring in 0..rings {
                lines.push((arc_point(ring), arc_point(ring + 1)));
            }
        }
    }
    lines
}

/// Line segments of a square grid on the XZ plane centred on the origin.
///
/// `cells` cells per side, each `spacing` units wide, giving `cells + 1`
/// lines along each axis.
#[expect(
    clippy::cast_precision_loss,
    reason = "Grid sizes are small and exactly representable."
)]
#[must_use]
pub fn grid_lines(cells: u32, spacing: f32) -> Vec<(Vec3, Vec3)> {
    let half = cells as f32 * spacing / 2.0;
    (0..=cells)
        .flat_map(|step| {
            let offset = step as f32 * spacing - half;
            [
                (Vec3::new(offset, 0.0, -half), Vec3::new(offset, 0.0, half)),
                (Vec3::new(-half, 0.0, offset), Vec3::new(half, 0.0, offset)),
            ]
        })
        .collect()
}
