#![forbid(unsafe_code)]

//! Subscriber setup for binaries embedding tagflow.
//!
//! Libraries only emit through `tracing`; a host that wants the output on
//! stderr calls [`init`] once at startup.
//!
//! The filter is read from `TAGFLOW_LOG`, then `RUST_LOG`, and falls back to
//! [`DEFAULT_FILTER`]. With the `tracing-json` feature every line is a JSON
//! object.

use tracing_subscriber::EnvFilter;

use crate::Error;

/// Environment variable consulted first for the log filter.
pub const ENV_FILTER_VAR: &str = "TAGFLOW_LOG";

/// Filter used when neither `TAGFLOW_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_FILTER: &str = "info";

/// Resolve the log filter from the environment.
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(ENV_FILTER_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber.
///
/// Fails if a global subscriber is already set.
pub fn init() -> Result<(), Error> {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter());

    #[cfg(feature = "tracing-json")]
    let result = builder.json().try_init();
    #[cfg(not(feature = "tracing-json"))]
    let result = builder.try_init();

    result.map_err(|err| Error::Logging(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_reports_error() {
        let _ = init();
        assert!(matches!(init(), Err(Error::Logging(_))));
    }
}
