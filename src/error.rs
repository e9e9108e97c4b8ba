use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for flexpoint.
///
/// Curve analysis itself is infallible; only loading points can fail.
#[derive(Debug, Error)]
pub enum FlexpointError {
    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Errors related to reading point sequences.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("cannot read points from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for results using [`FlexpointError`].
pub type Result<T> = std::result::Result<T, FlexpointError>;
