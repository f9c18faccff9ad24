use log::LevelFilter;

/// Environment variable read by [`init_logging`].
pub const LOG_ENV: &str = "DENSE_LINALG_LOG";

/// Install an `env_logger` backend for the `log` macros used by the engines.
///
/// `default_filter` applies when `DENSE_LINALG_LOG` is unset, e.g.
/// `"error,dense_linalg=debug"`. Returns `false` if a logger was already
/// installed, which makes repeated calls from tests harmless.
pub fn init_logging(default_filter: &str) -> bool {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or(LOG_ENV, default_filter))
        .try_init()
        .is_ok()
}
