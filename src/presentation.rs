//! Presentation layer: window, camera and gizmo rendering of the draw queue.
//!
//! `PresentationPlugin` is a passive consumer of simulation state. It never
//! touches translations; it only renders what the draw phase recorded in
//! [`DrawQueue`] and owns the window-side controls (cursor toggle, frame
//! pacing) and the frame-rate readout in the window title.

use std::time::{Duration, Instant};

use bevy::diagnostic::{Diagnostic, DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use bevy::window::{CursorGrabMode, CursorOptions, PrimaryWindow, WindowResolution};
use log::debug;

use crate::constants::{
    CAMERA_FOV_Y_DEGREES, GRID_CELLS, GRID_SPACING, TARGET_FPS, WINDOW_HEIGHT, WINDOW_WIDTH,
};
use crate::draw::{capsule_wireframe, grid_lines, DrawQueue};
use crate::phases::ScenePhase;
use crate::vector_math::UP;

/// Marker component for the scene camera.
#[derive(Component, Reflect, Default, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component, Default)]
pub struct SceneCamera;

/// Window parameters used when building the primary window.
///
/// # Examples
///
/// ```ignore
/// use scene_hierarchy::presentation::WindowConfig;
///
/// let config = WindowConfig { target_fps: 60, ..Default::default() };
/// let window = config.to_window();
/// assert!(window.resizable);
/// ```
#[derive(Resource, Clone, Debug, PartialEq, Eq)]
pub struct WindowConfig {
    /// Initial width in logical pixels.
    pub width: u32,
    /// Initial height in logical pixels.
    pub height: u32,
    /// Window title.
    pub title: String,
    /// Whether the user may resize the window.
    pub resizable: bool,
    /// Frame-rate cap. Zero leaves the frame rate uncapped.
    pub target_fps: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            title: "scene hierarchy".to_owned(),
            resizable: true,
            target_fps: TARGET_FPS,
        }
    }
}

impl WindowConfig {
    /// Builds the Bevy [`Window`] description for this configuration.
    #[must_use]
    pub fn to_window(&self) -> Window {
        Window {
            title: self.title.clone(),
            resolution: WindowResolution::from((self.width, self.height)),
            resizable: self.resizable,
            ..default()
        }
    }
}

/// Perspective camera placement.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct CameraConfig {
    /// Eye position.
    pub position: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
    /// Up vector used to orient the view.
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 5.0, 15.0),
            target: Vec3::new(0.0, 2.0, 0.0),
            up: UP,
            fov_y_degrees: CAMERA_FOV_Y_DEGREES,
        }
    }
}

/// Returns how long to sleep so a frame that took `elapsed` lasts
/// `1 / target_fps` seconds. `None` when no sleep is needed.
#[must_use]
pub fn remaining_frame_time(elapsed: Duration, target_fps: u32) -> Option<Duration> {
    if target_fps == 0 {
        return None;
    }
    let budget = Duration::from_secs_f64(1.0 / f64::from(target_fps));
    budget.checked_sub(elapsed).filter(|rest| !rest.is_zero())
}

/// Seconds between frame-rate readouts.
const FPS_REFRESH_SECS: f32 = 0.5;

/// Returns `base` with the smoothed frame rate appended, when one is known.
///
/// # Examples
///
/// ```ignore
/// use scene_hierarchy::presentation::title_with_fps;
///
/// assert_eq!(title_with_fps("scene", Some(119.6)), "scene | 120 FPS");
/// assert_eq!(title_with_fps("scene", None), "scene");
/// ```
#[must_use]
pub fn title_with_fps(base: &str, fps: Option<f64>) -> String {
    fps.map_or_else(|| base.to_owned(), |fps| format!("{base} | {fps:.0} FPS"))
}

/// Spawns the perspective camera unless a [`SceneCamera`] already exists.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
fn camera_setup(
    mut commands: Commands,
    config: Res<CameraConfig>,
    cameras: Query<(), With<SceneCamera>>,
) {
    if !cameras.is_empty() {
        return;
    }
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: config.fov_y_degrees.to_radians(),
            ..default()
        }),
        Transform::from_translation(config.position).looking_at(config.target, config.up),
        SceneCamera,
        Name::new("SceneCamera"),
    ));
}

/// Renders every recorded capsule as gizmo lines.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
fn flush_draw_queue_system(queue: Res<DrawQueue>, mut gizmos: Gizmos) {
    for draw in queue.capsules() {
        for (start, end) in capsule_wireframe(draw) {
            gizmos.line(start, end, draw.color);
        }
    }
}

/// Draws the ground grid.
fn draw_grid_system(mut gizmos: Gizmos) {
    let color = Color::srgb(0.6, 0.6, 0.6);
    for (start, end) in grid_lines(GRID_CELLS, GRID_SPACING) {
        gizmos.line(start, end, color);
    }
}

/// Toggles cursor visibility and grab when `H` is pressed.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
fn toggle_cursor_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut cursors: Query<&mut CursorOptions, With<PrimaryWindow>>,
) {
    if !keyboard.just_pressed(KeyCode::KeyH) {
        return;
    }
    let Ok(mut cursor) = cursors.single_mut() else {
        return;
    };
    if cursor.visible {
        cursor.visible = false;
        cursor.grab_mode = CursorGrabMode::Locked;
    } else {
        cursor.visible = true;
        cursor.grab_mode = CursorGrabMode::None;
    }
    debug!("cursor visible: {}", cursor.visible);
}

/// Shows the smoothed frame rate in the primary window's title.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
fn fps_title_system(
    time: Res<Time>,
    diagnostics: Res<DiagnosticsStore>,
    config: Res<WindowConfig>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
    mut since_refresh: Local<f32>,
) {
    *since_refresh += time.delta_secs();
    if *since_refresh < FPS_REFRESH_SECS {
        return;
    }
    *since_refresh = 0.0;

    let fps = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(Diagnostic::smoothed);
    let Ok(mut window) = windows.single_mut() else {
        return;
    };
    window.title = title_with_fps(&config.title, fps);
    if let Some(fps) = fps {
        debug!("{fps:.1} FPS");
    }
}

/// Sleeps out the remainder of the frame budget.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
fn frame_pacing_system(config: Res<WindowConfig>, mut frame_start: Local<Option<Instant>>) {
    if let Some(started) = *frame_start {
        if let Some(rest) = remaining_frame_time(started.elapsed(), config.target_fps) {
            std::thread::sleep(rest);
        }
    }
    *frame_start = Some(Instant::now());
}

/// Plugin owning the camera and the on-screen rendering of the scene.
///
/// Expects `DefaultPlugins` (with a primary window) and
/// [`crate::HierarchyDemoPlugin`] to be installed alongside it.
///
/// # Examples
///
/// ```ignore
/// use bevy::prelude::*;
/// use scene_hierarchy::presentation::{PresentationPlugin, WindowConfig};
/// use scene_hierarchy::HierarchyDemoPlugin;
///
/// let config = WindowConfig::default();
/// App::new()
///     .add_plugins(DefaultPlugins.set(WindowPlugin {
///         primary_window: Some(config.to_window()),
///         ..default()
///     }))
///     .insert_resource(config)
///     .add_plugins((HierarchyDemoPlugin::default(), PresentationPlugin))
///     .run();
/// ```
#[derive(Debug)]
pub struct PresentationPlugin;

impl Plugin for PresentationPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<FrameTimeDiagnosticsPlugin>() {
            app.add_plugins(FrameTimeDiagnosticsPlugin::default());
        }
        app.register_type::<SceneCamera>();
        app.init_resource::<WindowConfig>();
        app.init_resource::<CameraConfig>();
        app.insert_resource(ClearColor(Color::srgb(0.96, 0.96, 0.96)));
        app.add_systems(Startup, camera_setup);
        app.add_systems(
            Update,
            (
                toggle_cursor_system,
                fps_title_system,
                (flush_draw_queue_system, draw_grid_system).after(ScenePhase::Draw),
            ),
        );
        app.add_systems(Last, frame_pacing_system);
    }
}
