//! Logging initialisation
//!
//! Logs go to stderr so command output on stdout stays clean. When `RUST_LOG`
//! is set it replaces the level chosen by `--verbose` entirely.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    filter::Targets, fmt, prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt,
    EnvFilter,
};

/// Crate and binary targets covered by `--verbose`
const TARGETS: [&str; 2] = ["family_ledger", "budget"];

/// Level for the crate's own targets when `RUST_LOG` is not set
pub fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    }
}

pub fn init_logging(verbose: bool) {
    let fmt_layer = fmt::layer().with_writer(std::io::stderr).without_time();
    let registry = tracing_subscriber::registry().with(fmt_layer);

    let _ = match EnvFilter::try_from_default_env() {
        Ok(env_filter) => registry.with(env_filter).try_init(),
        Err(_) => {
            let level = default_level(verbose);
            let app_filter = TARGETS
                .iter()
                .fold(Targets::new(), |targets, target| targets.with_target(*target, level));
            registry.with(app_filter).try_init()
        }
    };
}
