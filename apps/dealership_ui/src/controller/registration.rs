use client_core::RequestError;
use shared::{
    domain::RegistrationProfile,
    error::{REGISTRATION_FAILURES, REGISTRATION_SUCCEEDED},
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
pub enum RegistrationField {
    UserName,
    FirstName,
    LastName,
    Email,
    Password,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RegistrationEvent {
    FieldChanged(RegistrationField, String),
    Submit,
    Settled(Result<(), RequestError>),
}

/// Account sign-up form. Required fields and the password length are
/// checked by the input layer; the draft is forwarded as held.
#[derive(Debug, Default)]
pub struct RegistrationController {
    draft: RegistrationProfile,
    outcome: RequestOutcome,
}

impl RegistrationController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &RegistrationProfile {
        &self.draft
    }

    pub fn outcome(&self) -> &RequestOutcome {
        &self.outcome
    }

    pub fn message(&self) -> Option<&str> {
        self.outcome.message()
    }

    pub fn submit_enabled(&self) -> bool {
        !self.outcome.is_pending()
    }
}

impl Controller for RegistrationController {
    type Event = RegistrationEvent;

    fn update(&mut self, event: RegistrationEvent) -> Vec<Effect> {
        match event {
            RegistrationEvent::FieldChanged(field, value) => {
                let slot = match field {
                    RegistrationField::UserName => &mut self.draft.user_name,
                    RegistrationField::FirstName => &mut self.draft.first_name,
                    RegistrationField::LastName => &mut self.draft.last_name,
                    RegistrationField::Email => &mut self.draft.email,
                    RegistrationField::Password => &mut self.draft.password,
                };
                *slot = value;
                Vec::new()
            }
            RegistrationEvent::Submit => {
                if self.outcome.is_pending() || self.outcome.is_success() {
                    debug!("registration submit suppressed");
                    return Vec::new();
                }
                self.outcome = RequestOutcome::Pending;
                vec![Effect::Backend(BackendCommand::Register(self.draft.clone()))]
            }
            RegistrationEvent::Settled(result) => {
                if !self.outcome.is_pending() {
                    warn!("ignoring registration response with no submission in flight");
                    return Vec::new();
                }
                self.outcome = RequestOutcome::from_submission(
                    &result,
                    REGISTRATION_SUCCEEDED,
                    REGISTRATION_FAILURES,
                );
                match result {
                    Ok(()) => {
                        info!(user = %self.draft.user_name, "registration succeeded");
                        vec![Effect::Navigate(HOME_LOCATION)]
                    }
                    Err(err) => {
                        warn!(error = %err, "registration failed");
                        Vec::new()
                    }
                }
            }
        }
    }

    fn route(event: UiEvent) -> Option<RegistrationEvent> {
        match event {
            UiEvent::RegistrationSettled(result) => Some(RegistrationEvent::Settled(result)),
            _ => None,
        }
    }

    fn is_pending(&self) -> bool {
        self.outcome.is_pending()
    }
}
