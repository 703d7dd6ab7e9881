use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber. Call once from the embedding
/// application; repeated calls are ignored.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
