use std::path::PathBuf;

use thiserror::Error;

/// Errors raised outside the scoring functions themselves.
///
/// Scoring is total over well-formed inputs, however degenerate; only
/// configuration intake and per-script markup intake can fail.
#[derive(Debug, Error)]
pub enum BechdelError {
    /// A name list or the script directory is missing or unreadable.
    /// Fatal: the batch aborts before any scoring.
    #[error("configuration error reading {path:?}: {source}")]
    Configuration {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// One script's markup could not be read or decoded. Batch policy:
    /// log and skip the script, continue with the rest.
    #[error("failed to parse script markup {path:?}: {reason}")]
    MarkupParse { path: PathBuf, reason: String },
}
