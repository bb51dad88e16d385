// Copyright 2017-2023 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Log setup shared by the `chessvar` binaries.
//!
//! The level given on the command line is the default; directives in `CHESSVAR_LOG` refine or override it.

use tracing_subscriber::{filter::LevelFilter, EnvFilter, FmtSubscriber};

pub const LOG_ENV_VAR: &str = "CHESSVAR_LOG";

/// Builds a filter that enables `default` and below, unless the environment variable `var` says otherwise.
/// Unparseable directives in `var` are skipped.
pub fn env_filter(var: &str, default: LevelFilter) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default.into())
        .with_env_var(var)
        .from_env_lossy()
}

/// Installs a global subscriber that writes to stderr, filtered by `default` and `CHESSVAR_LOG`.
pub fn init(default: LevelFilter) {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter(LOG_ENV_VAR, default))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

#[cfg(test)]
mod tests {
    use tracing::Level;
    use tracing_subscriber::{filter::LevelFilter, FmtSubscriber};

    use super::env_filter;

    /// Which of debug, info, and warn are enabled under the filter built from `var` and `default`.
    fn enabled_levels(var: &str, default: LevelFilter) -> (bool, bool, bool) {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(env_filter(var, default))
            .with_writer(std::io::sink)
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            (
                tracing::enabled!(Level::DEBUG),
                tracing::enabled!(Level::INFO),
                tracing::enabled!(Level::WARN),
            )
        })
    }

    #[test]
    fn default_level_applies_without_env() {
        let var = "CHESSVAR_LOG_TEST_UNSET";
        std::env::remove_var(var);
        assert_eq!((true, true, true), enabled_levels(var, LevelFilter::DEBUG));
        assert_eq!((false, true, true), enabled_levels(var, LevelFilter::INFO));
        assert_eq!((false, false, true), enabled_levels(var, LevelFilter::WARN));
    }

    #[test]
    fn env_overrides_default_level() {
        let var = "CHESSVAR_LOG_TEST_OVERRIDE";
        std::env::set_var(var, "error");
        assert_eq!((false, false, false), enabled_levels(var, LevelFilter::DEBUG));
        std::env::set_var(var, "debug");
        assert_eq!((true, true, true), enabled_levels(var, LevelFilter::WARN));
        std::env::remove_var(var);
    }
}
