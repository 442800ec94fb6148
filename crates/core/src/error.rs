use thiserror::Error;

/// Top-level error type used across the entire application.
#[derive(Debug, Error)]
pub enum MonError {
    #[error("config error: {0}")]
    Config(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A container runtime or other external data source could not answer.
    #[error("{0}")]
    Runtime(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = MonError> = std::result::Result<T, E>;

/// One data source that failed during a sampling pass.
///
/// Unlike [`MonError`] this is cheap to clone and lives inside a
/// [`Snapshot`](crate::state::Snapshot) so the renderer can show it in place
/// of the missing value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{label} error: {reason}")]
pub struct SourceError {
    /// Human-readable name of the section that failed, e.g. `"Docker space"`.
    pub label:  &'static str,
    pub reason: String,
}

impl SourceError {
    pub fn new(label: &'static str, reason: impl Into<String>) -> Self {
        Self {
            label,
            reason: reason.into(),
        }
    }
}
