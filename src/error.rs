// Error types for the upload workflow. Each variant maps to one distinct
// failure point: reading the local file, sending the request, the HTTP
// status line, decoding the JSON envelope, or an application-level rejection
// reported inside a well-formed envelope.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UploadError {
    /// The local file could not be opened or read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The request never completed: DNS failure, connection refused,
    /// timeout, or a broken connection mid-transfer.
    #[error("request failed: {0}")]
    Network(#[source] reqwest::Error),

    /// The server answered with a non-200 HTTP status. The body is not
    /// inspected in this case.
    #[error("server returned status {0}")]
    ServerStatus(u16),

    /// The response body was not the expected JSON envelope.
    #[error("could not decode server response: {0}")]
    Decode(#[source] reqwest::Error),

    /// The envelope itself reported failure; the message is the server's
    /// `reason` field, shown verbatim.
    #[error("{0}")]
    ServerLogic(String),

    /// The lookup succeeded but the `urls` list was empty, so there is no
    /// public URL to report.
    #[error("no public urls returned for {0}")]
    EmptyUrlList(String),
}
