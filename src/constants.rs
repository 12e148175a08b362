//! Scene and frame-loop constants shared across systems.
//!
//! Runtime-adjustable values live in resources seeded from these defaults
//! (see [`crate::input::MoveSettings`] and [`crate::draw::DrawSettings`]).

/// Player movement speed in world units per second.
pub const MOVE_SPEED: f32 = 5.0;

/// Number of meridians used when tessellating a wireframe capsule.
pub const CAPSULE_SLICES: u32 = 10;
/// Number of latitude steps per hemispherical capsule cap.
pub const CAPSULE_RINGS: u32 = 10;

/// Name given to the player entity at bootstrap.
pub const PLAYER_NAME: &str = "Player";
/// Name given to the player's child entity at bootstrap.
pub const HAT_NAME: &str = "Hat";

/// Default window width in logical pixels.
pub const WINDOW_WIDTH: u32 = 800;
/// Default window height in logical pixels.
pub const WINDOW_HEIGHT: u32 = 450;
/// Default frame-rate cap.
pub const TARGET_FPS: u32 = 120;

/// Vertical field of view of the scene camera.
pub const CAMERA_FOV_Y_DEGREES: f32 = 45.0;

/// Number of grid cells along each horizontal axis.
pub const GRID_CELLS: u32 = 10;
/// Edge length of a single grid cell in world units.
pub const GRID_SPACING: f32 = 1.0;
