use shared::error::FailureMessages;
use thiserror::Error;

/// Why a request to the dealership API did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The request never produced a usable response.
    #[error("transport failure: {0}")]
    Transport(String),
    /// The server answered outside the 2xx band.
    #[error("request rejected with status {status}")]
    Rejected {
        status: u16,
        message: Option<String>,
    },
}

impl RequestError {
    pub fn transport(err: impl std::fmt::Display) -> Self {
        Self::Transport(err.to_string())
    }

    pub fn rejected(status: u16, message: Option<String>) -> Self {
        Self::Rejected {
            status,
            message: message.filter(|m| !m.is_empty()),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// The fixed message for this failure kind, ignoring any server text.
    pub fn fallback_message(&self, fallbacks: FailureMessages) -> &'static str {
        match self {
            Self::Transport(_) => fallbacks.transport,
            Self::Rejected { .. } => fallbacks.rejected,
        }
    }

    /// Message to show the user: the server-supplied text for a rejection
    /// when there is one, otherwise the per-request fallback.
    pub fn user_message(&self, fallbacks: FailureMessages) -> String {
        match self {
            Self::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            _ => self.fallback_message(fallbacks).to_string(),
        }
    }
}
