use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Mutex, Once};

use tracing_subscriber::EnvFilter;

static LOGGING_INIT: Once = Once::new();

/// Where log output goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink<'a> {
    /// CLI commands: stderr, next to the normal output
    Stderr,
    /// Append to a file (the TUI owns the terminal)
    File(&'a Path),
    /// Drop everything
    Off,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("itinerary=info"))
}

/// Initialize the global tracing subscriber once. Later calls are ignored.
///
/// `RUST_LOG` overrides the default `itinerary=info` filter.
pub fn init_logging(sink: LogSink<'_>) -> std::io::Result<()> {
    let mut result = Ok(());
    LOGGING_INIT.call_once(|| {
        result = install(sink);
    });
    result
}

fn install(sink: LogSink<'_>) -> std::io::Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter());
    match sink {
        LogSink::Stderr => {
            let _ = builder
                .with_writer(std::io::stderr)
                .without_time()
                .with_target(false)
                .try_init();
        }
        LogSink::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let _ = builder
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init();
        }
        LogSink::Off => {}
    }
    Ok(())
}
