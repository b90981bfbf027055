use tracing_subscriber::EnvFilter;

/// Line-oriented log on stdout. `RUST_LOG` overrides the default `info`.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stdout)
        .with_target(false)
        .with_ansi(false)
        .init();
}
