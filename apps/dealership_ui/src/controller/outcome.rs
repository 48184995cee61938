use client_core::RequestError;
use shared::error::FailureMessages;

/// Lifecycle of one request kind owned by a controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestOutcome {
    #[default]
    Idle,
    Pending,
    Settled(Settled),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settled {
    Success(Option<String>),
    Failure(String),
}

impl RequestOutcome {
    pub fn succeeded() -> Self {
        Self::Settled(Settled::Success(None))
    }

    pub fn succeeded_with(message: impl Into<String>) -> Self {
        Self::Settled(Settled::Success(Some(message.into())))
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self::Settled(Settled::Failure(message.into()))
    }

    /// Settles a form submission using the per-request message policy.
    pub fn from_submission(
        result: &Result<(), RequestError>,
        success: &str,
        failures: FailureMessages,
    ) -> Self {
        match result {
            Ok(()) => Self::succeeded_with(success),
            Err(err) => Self::failed(err.user_message(failures)),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Settled(Settled::Success(_)))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Settled(Settled::Failure(_)))
    }

    /// Inline message for display. Pending clears any previous message.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Settled(Settled::Success(message)) => message.as_deref(),
            Self::Settled(Settled::Failure(message)) => Some(message),
            Self::Idle | Self::Pending => None,
        }
    }
}
