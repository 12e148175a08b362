//! Per-tick phase graph.
//!
//! Each phase names the phase it must run after and [`configure_phases`]
//! turns those edges into Bevy set ordering. Scene setup is not a member: it
//! runs in `Startup`, which Bevy completes before the first `Update`.
use bevy::ecs::schedule::ScheduleLabel;
use bevy::prelude::*;

/// Ordered stages of a frame tick.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScenePhase {
    /// Reads directional input and moves the player's local translation.
    Input,
    /// Resolves world translations down the hierarchy.
    Propagate,
    /// Positions shapes from world translations and records draw commands.
    Draw,
}

impl ScenePhase {
    /// Every per-tick phase in execution order.
    pub const ALL: [Self; 3] = [Self::Input, Self::Propagate, Self::Draw];

    /// Returns the phase that must complete before this one starts.
    #[must_use]
    pub const fn predecessor(self) -> Option<Self> {
        match self {
            Self::Input => None,
            Self::Propagate => Some(Self::Input),
            Self::Draw => Some(Self::Propagate),
        }
    }
}

/// Orders the phase sets in `schedule` according to their predecessor edges.
pub fn configure_phases(app: &mut App, schedule: impl ScheduleLabel + Clone) {
    for phase in ScenePhase::ALL {
        if let Some(before) = phase.predecessor() {
            app.configure_sets(schedule.clone(), phase.after(before));
        }
    }
}
