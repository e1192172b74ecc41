//! Tracing subscriber setup.

use tracing_subscriber::filter::ParseError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::DEFAULT_LOG_FILTER;

/// Parse `filter`, falling back to [`DEFAULT_LOG_FILTER`] and returning the
/// parse error alongside when it is invalid.
fn build_filter(filter: &str) -> (EnvFilter, Option<ParseError>) {
    match EnvFilter::try_new(filter) {
        Ok(env_filter) => (env_filter, None),
        Err(err) => (EnvFilter::new(DEFAULT_LOG_FILTER), Some(err)),
    }
}

/// Install the global subscriber, writing to stderr.
///
/// An invalid `filter` is replaced by [`DEFAULT_LOG_FILTER`] and reported
/// as a warning once the subscriber is live.
pub fn init(filter: &str) {
    let (env_filter, invalid) = build_filter(filter);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Some(err) = invalid {
        tracing::warn!(
            error = %err,
            filter,
            fallback = DEFAULT_LOG_FILTER,
            "invalid log filter, using default"
        );
    }
}
