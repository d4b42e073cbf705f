/// Everything that can go wrong talking to the API or reading ambient state.
#[derive(Debug, thiserror::Error)]
pub enum WcError {
  /// Any response whose status is not exactly 200.
  #[error("Whoops")]
  UnexpectedStatus { status: u16, detail: Option<String> },

  #[error("Network communication error: {0}")]
  Network(String),

  #[error("Timeout occurred during request: {0}")]
  Timeout(String),

  #[error("Failed to decode response body: {0}")]
  Decode(String),

  #[error("Invalid origin: {0}")]
  InvalidOrigin(String),

  #[error("Invalid configuration: {0}")]
  Config(String),

  #[error("Request task failed: {0}")]
  Task(String),
}

impl WcError {
  /// HTTP status of a rejected response, if this error carries one.
  pub fn status(&self) -> Option<u16> {
    match self {
      WcError::UnexpectedStatus { status, .. } => Some(*status),
      _ => None,
    }
  }
}

impl From<reqwest::Error> for WcError {
  fn from(err: reqwest::Error) -> Self {
    if err.is_timeout() {
      WcError::Timeout(err.to_string())
    } else if err.is_decode() {
      WcError::Decode(err.to_string())
    } else {
      WcError::Network(err.to_string())
    }
  }
}

impl From<serde_json::Error> for WcError {
  fn from(err: serde_json::Error) -> Self {
    WcError::Decode(err.to_string())
  }
}

impl From<url::ParseError> for WcError {
  fn from(err: url::ParseError) -> Self {
    WcError::InvalidOrigin(err.to_string())
  }
}

impl From<tokio::task::JoinError> for WcError {
  fn from(err: tokio::task::JoinError) -> Self {
    WcError::Task(err.to_string())
  }
}

pub type Result<T> = std::result::Result<T, WcError>;
