use thiserror::Error;

/// A required credential is absent from the process environment.
/// Raised at startup, before any network activity.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Set the {0} env variable")]
    MissingVar(&'static str),
}

/// A forecast carried an icon key outside the closed icon table.
/// Unhandled by the run loop: aborts the whole run.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("no icon registered for forecast key '{0}'")]
pub struct UnknownIcon(pub String);
