//! Log subscriber construction
//!
//! The subscriber is returned as a [`Dispatch`] rather than installed globally, so the
//! caller decides the scope it applies to (see `tracing::dispatcher::with_default`).

use tracing::{Dispatch, debug, warn};
use tracing_subscriber::EnvFilter;

use crate::config::{LevelSource, LogSettings};

/// Builds a stderr logger for the given settings.
///
/// `RUST_LOG` directives are layered on top of the resolved level.
pub fn build_dispatch(settings: &LogSettings) -> Dispatch {
    let filter = EnvFilter::builder()
        .with_default_directive(settings.level.into())
        .from_env_lossy();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .finish();

    Dispatch::new(subscriber)
}

/// Reports how the level was chosen. Call with the dispatch from
/// [`build_dispatch`] active.
pub fn log_settings(settings: &LogSettings) {
    if let Some(name) = &settings.unrecognized {
        warn!("Unknown log level {:?}, using {}", name, settings.level);
    }

    match (settings.source, settings.requested.as_deref()) {
        (LevelSource::DebugFlag, Some(name)) => {
            debug!("--debug enabled, ignoring --log-level={}", name)
        }
        (LevelSource::VerboseFlag, Some(name)) => {
            debug!("--verbose enabled, ignoring --log-level={}", name)
        }
        (LevelSource::LevelFlag, Some(name)) => debug!("--log-level={}", name),
        _ => {}
    }
    debug!("Configured logger: {:?}", settings);
}
