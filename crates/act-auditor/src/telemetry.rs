//! Tracing setup for the auditor service.

use crate::config::TelemetryConfig;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("invalid log filter '{value}'")]
    Filter {
        value: String,
        #[source]
        source: ParseError,
    },
    #[error("tracing subscriber already installed: {0}")]
    Install(Box<dyn std::error::Error + Send + Sync>),
}

/// Expand a bare level like `info` into a filter that scopes it to the
/// auditor crates and keeps dependencies at `warn`. Anything that already
/// looks like a filter expression passes through untouched.
fn expand_level(log_level: &str) -> String {
    let log_level = log_level.trim();
    if log_level.contains(['=', ',']) {
        log_level.to_string()
    } else {
        format!("warn,act_auditor={log_level},act_auditor_api={log_level}")
    }
}

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let value = expand_level(&config.log_level);
            EnvFilter::try_new(&value)
                .map_err(|source| TelemetryError::Filter { value, source })?
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Install)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_levels_are_scoped_to_the_auditor_crates() {
        assert_eq!(
            expand_level("debug"),
            "warn,act_auditor=debug,act_auditor_api=debug"
        );
    }

    #[test]
    fn filter_expressions_pass_through() {
        assert_eq!(expand_level("info,hyper=off"), "info,hyper=off");
        assert_eq!(expand_level("act_auditor=trace"), "act_auditor=trace");
    }

    #[test]
    fn expanded_filters_parse() {
        EnvFilter::try_new(&expand_level("info")).expect("scoped filter parses");
    }
}
