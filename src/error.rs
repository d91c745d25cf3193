use thiserror::Error;

/// Top-level error type for the overlay pipeline.
///
/// Every fatal failure maps to one kind so the binary can print a single
/// actionable message and exit non-zero. Font resolution is deliberately not
/// represented here: a missing or unreadable font degrades to the embedded
/// fallback face and never aborts a run.
#[derive(Error, Debug)]
pub enum OverlayError {
    /// The server answered with a non-success status.
    #[error("download failed: server returned {status}")]
    Network { status: reqwest::StatusCode },

    /// The fetch exceeded its configured bound.
    #[error("download timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// The request failed before any status was received (DNS, refused
    /// connection, TLS).
    #[error("request failed: {0}")]
    Transport(reqwest::Error),

    /// The downloaded bytes are not a recognizable image container.
    #[error("could not decode image: {0}")]
    Decode(String),

    /// A capture timestamp that does not split into a date and a time.
    #[error("malformed timestamp {value:?}: expected \"YYYY:MM:DD HH:MM:SS\"")]
    Format { value: String },

    /// Writing the output file failed.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
