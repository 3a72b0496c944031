use std::io;

/// Everything an edit can fail with. Not-found, malformed-value, and
/// missing-argument are distinct variants; the CLI flattens all of them to
/// the same exit status.
#[derive(Debug, thiserror::Error)]
pub enum EditError {
    #[error("no metro named {0:?}")]
    MetroNotFound(String),
    #[error("no route {src}-{dst}")]
    RouteNotFound { src: String, dst: String },
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),
    #[error("invalid {field}: {value:?}")]
    Malformed { field: &'static str, value: String },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("invalid document: {0}")]
    Json(#[from] serde_json::Error),
}
