//! Binary entry point for the scene hierarchy demo.
use std::time::Duration;

use anyhow::Context;
use bevy::prelude::*;
use clap::Parser;
use log::info;
use scene_hierarchy::constants::{MOVE_SPEED, TARGET_FPS, WINDOW_HEIGHT, WINDOW_WIDTH};
use scene_hierarchy::{
    init_logging, HierarchyDemoPlugin, MoveSettings, SceneSnapshot, SnapshotSettings,
};

/// A player capsule wearing a hat, resolved through an entity hierarchy
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = WINDOW_WIDTH)]
    width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    height: u32,

    /// Frame-rate cap (0 for uncapped); also the tick rate of headless runs
    #[arg(long, default_value_t = TARGET_FPS)]
    target_fps: u32,

    /// Player speed in world units per second
    #[arg(long, default_value_t = MOVE_SPEED)]
    speed: f32,

    /// Log a JSON scene snapshot every N frames at debug level (0 disables)
    #[arg(long, default_value_t = 0)]
    snapshot_every: u64,

    /// Run N ticks without a window, then log the final scene snapshot
    #[arg(long)]
    headless_frames: Option<u32>,
}

impl Args {
    fn insert_settings(&self, app: &mut App) {
        app.insert_resource(MoveSettings { speed: self.speed });
        app.insert_resource(SnapshotSettings {
            log_every_frames: self.snapshot_every,
        });
    }
}

fn run_headless(args: &Args, frames: u32) -> anyhow::Result<()> {
    let mut app = App::new();
    args.insert_settings(&mut app);
    app.add_plugins(HierarchyDemoPlugin::default());
    app.finish();
    app.cleanup();

    let step = Duration::from_secs_f64(1.0 / f64::from(args.target_fps.max(1)));
    for _ in 0..frames {
        app.world_mut().resource_mut::<Time>().advance_by(step);
        app.update();
    }

    let snapshot = SceneSnapshot::capture(app.world_mut(), u64::from(frames));
    let json = snapshot
        .to_json()
        .context("failed to serialise final scene snapshot")?;
    info!("final scene after {frames} frames: {json}");
    Ok(())
}

#[cfg(feature = "render")]
fn run_windowed(args: &Args) -> anyhow::Result<()> {
    use scene_hierarchy::presentation::{PresentationPlugin, WindowConfig};

    let config = WindowConfig {
        width: args.width,
        height: args.height,
        target_fps: args.target_fps,
        ..WindowConfig::default()
    };

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(config.to_window()),
        ..default()
    }));
    app.insert_resource(config);
    args.insert_settings(&mut app);
    app.add_plugins((HierarchyDemoPlugin::default(), PresentationPlugin));

    match app.run() {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => anyhow::bail!("application exited with code {code}"),
    }
}

#[cfg(not(feature = "render"))]
fn run_windowed(_args: &Args) -> anyhow::Result<()> {
    anyhow::bail!("built without the `render` feature; rerun with --headless-frames <N>")
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    info!("starting scene hierarchy demo");

    match args.headless_frames {
        Some(frames) => run_headless(&args, frames),
        None => run_windowed(&args),
    }
}
