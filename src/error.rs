//! Application error type.
//!
//! Every fallible operation reports through `AppError`. The variants classify
//! the failure by where in the fetch → shape → render flow it occurred, and
//! each class maps to a stable process exit code.

#[derive(Clone, PartialEq, Eq)]
pub enum AppError {
    /// The request never completed (DNS, refused connection, timeout) or the
    /// response body was not parseable as JSON.
    Transport(String),
    /// The exchange completed but the server answered with a non-success
    /// HTTP status. The status code is the only diagnostic payload; the body
    /// is not read.
    Http { status: u16 },
    /// The response parsed as JSON but the document is missing fields or has
    /// the wrong shape for a historical timeline.
    Shape(String),
    /// Reading or writing a local file (exports, saved timelines) failed.
    Io(String),
    /// Terminal/TUI failure.
    Render(String),
}

impl AppError {
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Io(_) => 2,
            AppError::Shape(_) => 3,
            AppError::Transport(_) | AppError::Render(_) => 4,
            AppError::Http { .. } => 5,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Transport(msg) | AppError::Shape(msg) | AppError::Io(msg) | AppError::Render(msg) => {
                write!(f, "{msg}")
            }
            AppError::Http { status } => write!(f, "Server responded with HTTP status {status}."),
        }
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Transport(msg) => f.debug_tuple("Transport").field(msg).finish(),
            AppError::Http { status } => f.debug_struct("Http").field("status", status).finish(),
            AppError::Shape(msg) => f.debug_tuple("Shape").field(msg).finish(),
            AppError::Io(msg) => f.debug_tuple("Io").field(msg).finish(),
            AppError::Render(msg) => f.debug_tuple("Render").field(msg).finish(),
        }
    }
}

impl std::error::Error for AppError {}
