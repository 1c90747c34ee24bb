use log::LevelFilter;

/// Environment variable read for log filter directives.
pub const LOG_ENV: &str = "PYCOL_LOG";

/// Install an `env_logger` logger for host processes embedding this crate.
///
/// Filters come from `PYCOL_LOG`, falling back to `default_filter`
/// (e.g. `"error,pycol_marshal=debug"`). Returns `false` if a logger was
/// already installed.
pub fn init_logging(default_filter: &str) -> bool {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or(LOG_ENV, default_filter))
        .try_init()
        .is_ok()
}
