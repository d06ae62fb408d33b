//! Initialization that needs to be done on startup

/// Installs the logger. `RUST_LOG` overrides the default `warn` filter,
/// e.g. `RUST_LOG=pngsweep=debug` shows every per-file decision.
pub fn init() {
    let env = env_logger::Env::default().default_filter_or("warn");
    // a second call (e.g. from tests) keeps the first logger
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
