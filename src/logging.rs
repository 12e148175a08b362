//! Logger setup for the binary and tests.
use env_logger::{Builder, Env};
use log::LevelFilter;

/// Crates whose info-level chatter drowns out the scene's own messages.
const NOISY_MODULES: [&str; 3] = ["wgpu", "naga", "bevy_render"];

/// Initializes the global logger.
///
/// `RUST_LOG` takes precedence. Without it, `verbose` selects debug output and
/// the default is info. Renderer crates are held at warn either way unless
/// `RUST_LOG` names them.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = Builder::new();
    for module in NOISY_MODULES {
        builder.filter_module(module, LevelFilter::Warn);
    }
    builder.filter_level(level);
    builder.parse_env(Env::default());
    builder.format_timestamp_millis();

    // `try_init` only fails if a logger was already set. Ignore that case so
    // tests can call `init` multiple times without panicking.
    let _ = builder.try_init();
}
