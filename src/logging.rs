// Logging setup for shuttle-agent
// Installs a tracing fmt subscriber writing to stderr, so stdout stays clean for results

use tracing::{warn, Level};

/// Parse a configured level name, case-insensitive
pub fn parse_level(name: &str) -> Option<Level> {
    name.trim().parse::<Level>().ok()
}

/// Initialize the global tracing subscriber
///
/// # Arguments
/// * `level` - Level name from the config file (e.g. "info", "debug")
/// * `debug` - Force DEBUG regardless of config (controlled by --debug flag)
///
/// # Behavior
/// - Unknown level names fall back to INFO with a warning
/// - Calling this twice is harmless; the first subscriber stays installed
///
/// Returns the level that was applied.
pub fn init(level: &str, debug: bool) -> Level {
    let parsed = parse_level(level);
    let max_level = match (debug, parsed) {
        (true, _) => Level::DEBUG,
        (false, Some(level)) => level,
        (false, None) => Level::INFO,
    };

    let _ = tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if parsed.is_none() && !debug {
        warn!(level, "unknown log level in config, using info");
    }

    max_level
}
