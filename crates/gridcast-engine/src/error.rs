//! Errors returned by a generation run.

use std::error::Error;
use std::fmt;

use gridcast_core::{ConfigError, QueryError};

/// Why a generation run produced no grid.
///
/// Whatever the variant, nothing was published.
#[derive(Clone, Debug, PartialEq)]
pub enum GenerateError {
    /// The configuration is invalid, or the start pose lies outside the
    /// grid. Not retryable without changing the configuration.
    Config(ConfigError),
    /// The world could not answer a ray query mid-run.
    Query(QueryError),
    /// Another generation is already in flight on this generator.
    Busy,
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "configuration: {e}"),
            Self::Query(e) => write!(f, "world query: {e}"),
            Self::Busy => write!(f, "a map generation is already in progress"),
        }
    }
}

impl Error for GenerateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Query(e) => Some(e),
            Self::Busy => None,
        }
    }
}

impl From<ConfigError> for GenerateError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<QueryError> for GenerateError {
    fn from(e: QueryError) -> Self {
        Self::Query(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_errors_are_sources() {
        let e: GenerateError = QueryError::Unavailable {
            reason: "engine paused".into(),
        }
        .into();
        assert!(e.source().is_some());
        assert!(e.to_string().contains("engine paused"));

        let e: GenerateError = ConfigError::NonFiniteStart.into();
        assert!(matches!(e, GenerateError::Config(_)));
        assert!(e.source().is_some());
    }

    #[test]
    fn busy_has_no_source() {
        assert!(GenerateError::Busy.source().is_none());
    }
}
