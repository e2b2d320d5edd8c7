//! Tracing setup. Logs go to stderr so they stay out of the page output.

use tracing_subscriber::EnvFilter;

/// Honors `RUST_LOG`; otherwise `warn`, or `debug` for this crate when
/// `verbose` is set.
pub fn init(verbose: bool) {
    let default_directive = if verbose { "warn,coldmail_lib=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
