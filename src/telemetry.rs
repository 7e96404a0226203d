//! Tracing subscriber setup.
//!
//! | `ENV`   | Format          | Default level |
//! |---------|-----------------|---------------|
//! | `local` | text, ANSI      | `debug`       |
//! | `dev`   | JSON            | `debug`       |
//! | `prod`  | JSON            | `info`        |
//!
//! `RUST_LOG`, when set, replaces the default filter.

use tracing_subscriber::EnvFilter;

use crate::config::Environment;

/// Default filter directive for an environment.
pub fn default_directive(env: Environment) -> &'static str {
    match env {
        Environment::Local | Environment::Dev => "alias_shortener=debug,tower_http=debug,info",
        Environment::Prod => "info",
    }
}

/// Installs the global tracing subscriber.
///
/// Must be called once, before the first log line.
pub fn init(env: Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(env)));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match env {
        Environment::Local => builder.with_target(false).init(),
        Environment::Dev | Environment::Prod => builder.json().with_current_span(true).init(),
    }
}
