//! Logger set-up for the binary and tests.
//!
//! Only this crate's modules log above `warn` by default. At `info` the
//! scene reports its set-up and the autopilot its phase changes. `debug`
//! adds jumps, landings, cursor capture and each dialogue transition.
//! `trace` adds every collision clamp and mouse-look sample.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Default `RUST_LOG`-style directive: `warn` for dependencies and `info`
/// (or `debug` when `verbose`) for `exit_strategy`.
///
/// # Examples
/// ```
/// use exit_strategy::logging::default_filter;
/// assert_eq!(default_filter(true), "warn,exit_strategy=debug");
/// ```
#[must_use]
pub fn default_filter(verbose: bool) -> String {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    format!(
        "warn,{}={}",
        env!("CARGO_CRATE_NAME"),
        level.as_str().to_ascii_lowercase()
    )
}

/// Installs the global logger with [`default_filter`].
///
/// `RUST_LOG` replaces the default directive when set. Calling this again
/// after a logger is installed does nothing.
pub fn init(verbose: bool) {
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_filter(verbose)));
    builder.format_timestamp_millis().format_module_path(true);

    if builder.try_init().is_err() {
        log::debug!("logger already installed");
    }
}
