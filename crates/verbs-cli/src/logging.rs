use env_logger::Env;

/// Environment variable holding the log filter (`RUST_LOG` syntax).
pub const LOG_ENV: &str = "VERBS_LOG";

/// Initialise the stderr logger. Only warnings are shown unless `VERBS_LOG`
/// says otherwise.
pub fn init() {
    env_logger::Builder::from_env(Env::new().filter_or(LOG_ENV, "warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();
}
