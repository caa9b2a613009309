// Diagnostic logging setup

use tracing_subscriber::EnvFilter;

/// Map a `-v` count to a default filter level
pub const fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Diagnostics go to stderr so they never mix with
/// the prompt and narrative on stdout. `RUST_LOG` overrides the verbosity flag.
pub fn init(verbose: u8) {
    let level = level_for_verbosity(verbose);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
