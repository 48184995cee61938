use client_core::RequestError;
use shared::{
    domain::Credentials,
    error::{LOGIN_FAILURES, LOGIN_SUCCEEDED},
    protocol::HOME_LOCATION,
};
use tracing::{debug, info, warn};

use super::{
    events::{Effect, UiEvent},
    outcome::RequestOutcome,
    Controller,
};
use crate::backend_bridge::commands::BackendCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    UserName,
    Password,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoginEvent {
    FieldChanged(LoginField, String),
    Submit,
    Settled(Result<(), RequestError>),
}

#[derive(Debug, Default)]
pub struct LoginController {
    draft: Credentials,
    outcome: RequestOutcome,
}

impl LoginController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &Credentials {
        &self.draft
    }

    pub fn outcome(&self) -> &RequestOutcome {
        &self.outcome
    }

    pub fn message(&self) -> Option<&str> {
        self.outcome.message()
    }

    /// The sign-in control is disabled while a submission is in flight.
    pub fn submit_enabled(&self) -> bool {
        !self.outcome.is_pending()
    }
}

impl Controller for LoginController {
    type Event = LoginEvent;

    fn update(&mut self, event: LoginEvent) -> Vec<Effect> {
        match event {
            LoginEvent::FieldChanged(field, value) => {
                match field {
                    LoginField::UserName => self.draft.user_name = value,
                    LoginField::Password => self.draft.password = value,
                }
                Vec::new()
            }
            LoginEvent::Submit => {
                if self.outcome.is_pending() || self.outcome.is_success() {
                    debug!("login submit suppressed");
                    return Vec::new();
                }
                self.outcome = RequestOutcome::Pending;
                vec![Effect::Backend(BackendCommand::Login(self.draft.clone()))]
            }
            LoginEvent::Settled(result) => {
                if !self.outcome.is_pending() {
                    warn!("ignoring login response with no submission in flight");
                    return Vec::new();
                }
                self.outcome =
                    RequestOutcome::from_submission(&result, LOGIN_SUCCEEDED, LOGIN_FAILURES);
                match result {
                    Ok(()) => {
                        info!(user = %self.draft.user_name, "login succeeded");
                        vec![Effect::Navigate(HOME_LOCATION)]
                    }
                    Err(err) => {
                        warn!(error = %err, "login failed");
                        Vec::new()
                    }
                }
            }
        }
    }

    fn route(event: UiEvent) -> Option<LoginEvent> {
        match event {
            UiEvent::LoginSettled(result) => Some(LoginEvent::Settled(result)),
            _ => None,
        }
    }

    fn is_pending(&self) -> bool {
        self.outcome.is_pending()
    }
}
