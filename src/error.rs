// Error types: configuration problems are reported separately from
// run-time failures because the binary treats them differently (usage
// text and a clean exit vs. an error line and exit status 1).
//
// Messages carry only the step context; the underlying cause is reachable
// through `source()` and printed as part of the chain by `main`.

use std::path::PathBuf;

/// Missing or unusable command line input.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing article id (-k)")]
    MissingArticleId,

    #[error("missing file path (-f)")]
    MissingFilePath,

    /// The path has no final component, or one that is not valid UTF-8,
    /// to use as the attachment name.
    #[error("file path {0} has no file name")]
    InvalidFilePath(PathBuf),
}

/// Failure to complete a single HTTP round trip.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Request construction, network error or body read.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Local I/O while preparing the request body.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Error from one step of a sync run. Every variant aborts the run.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("failed to get list of attachments")]
    List(#[source] TransportError),

    #[error("failed to decode list attachments response")]
    Decode(#[from] serde_json::Error),

    #[error("failed to delete attachment {url}")]
    Delete {
        url: String,
        #[source]
        source: TransportError,
    },

    #[error("failed to open file {}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to upload to {url}")]
    Upload {
        url: String,
        #[source]
        source: TransportError,
    },
}
