use std::fmt;
use wc::WcError;

/// Errors that can occur during command execution
#[derive(Debug)]
pub enum CommandError {
    /// Error from the underlying client library
    Wc(WcError),
    /// No cookie with the requested name
    CookieNotFound(String),
    /// Some of a batch of group stage loads failed; `report` holds every result
    GroupsFailed { failed: usize, total: usize, report: String },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CommandError::Wc(WcError::UnexpectedStatus { status, detail: Some(detail) }) => {
                write!(f, "Whoops (HTTP {}: {})", status, detail)
            }
            CommandError::Wc(WcError::UnexpectedStatus { status, detail: None }) => {
                write!(f, "Whoops (HTTP {})", status)
            }
            CommandError::Wc(err) => write!(f, "{}", err),
            CommandError::CookieNotFound(name) => {
                write!(f, "Cookie not found: {}", name)
            }
            CommandError::GroupsFailed { failed, total, .. } => {
                write!(f, "{} of {} group stages failed to load", failed, total)
            }
        }
    }
}

impl std::error::Error for CommandError {}

impl From<WcError> for CommandError {
    fn from(err: WcError) -> Self {
        CommandError::Wc(err)
    }
}

/// Result type for command execution; `Ok` carries the text to print
pub type CommandResult = Result<String, CommandError>;
