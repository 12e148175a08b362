#![cfg_attr(docsrs, feature(doc_cfg))]
//! Library crate for the scene hierarchy demo.
//!
//! A player capsule and a hat parented to it are resolved from local to world
//! translations once per tick, then drawn as wireframes. The pipeline runs in
//! three ordered phases (see [`phases::ScenePhase`]) and needs no window, so
//! every phase can be exercised headlessly.
pub mod components;
pub mod constants;
pub mod draw;
pub mod input;
pub mod logging;
pub mod phases;
pub mod plugin;
#[cfg(feature = "render")]
#[cfg_attr(docsrs, doc(cfg(feature = "render")))]
pub mod presentation;
pub mod propagation;
pub mod scene;
pub mod snapshot;
pub mod vector_math;

pub use components::{
    Capsule, LocalTranslation, Player, Rotation, Scale, Velocity, WorldTranslation,
};
pub use draw::{CapsuleDraw, DrawQueue, DrawSettings};
pub use input::{MoveInput, MoveSettings};
pub use logging::init as init_logging;
pub use phases::ScenePhase;
pub use plugin::HierarchyDemoPlugin;
#[cfg(feature = "render")]
#[cfg_attr(docsrs, doc(cfg(feature = "render")))]
pub use presentation::PresentationPlugin;
pub use propagation::resolve_world_translation;
pub use scene::find_entity_by_name;
pub use snapshot::{SceneSnapshot, SnapshotSettings};
pub use vector_math::VectorError;

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use scene_hierarchy::prelude::*;
    //! ```

    pub use crate::components::{Capsule, LocalTranslation, Player, WorldTranslation};
    pub use crate::HierarchyDemoPlugin;
    pub use crate::MoveInput;
    pub use crate::ScenePhase;
}
