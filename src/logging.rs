use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// Verbosity comes from `RUST_LOG`, falling back to `info,inforadio_feed=debug`.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,inforadio_feed=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
