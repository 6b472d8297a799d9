use std::io;

use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr so they never interleave with the game on stdout.
/// Quiet unless `RUST_LOG` asks for more.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}
