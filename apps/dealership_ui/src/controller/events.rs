//! Backend responses delivered to the UI thread, and effects requested by controllers.

use client_core::RequestError;
use shared::domain::{CarCatalogEntry, Dealer};

use crate::backend_bridge::commands::BackendCommand;

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    DealersFetched(Result<Vec<Dealer>, RequestError>),
    CarCatalogFetched(Result<Vec<CarCatalogEntry>, RequestError>),
    LoginSettled(Result<(), RequestError>),
    RegistrationSettled(Result<(), RequestError>),
    ReviewSettled(Result<(), RequestError>),
}

impl UiEvent {
    /// The response a command settles with when it never reached the API.
    pub fn failed(cmd: &BackendCommand, err: RequestError) -> Self {
        match cmd {
            BackendCommand::FetchDealers => UiEvent::DealersFetched(Err(err)),
            BackendCommand::FetchCarCatalog => UiEvent::CarCatalogFetched(Err(err)),
            BackendCommand::Login(_) => UiEvent::LoginSettled(Err(err)),
            BackendCommand::Register(_) => UiEvent::RegistrationSettled(Err(err)),
            BackendCommand::SubmitReview(_) => UiEvent::ReviewSettled(Err(err)),
        }
    }
}

/// Side effect requested by a controller transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Backend(BackendCommand),
    /// Full host navigation to a location such as `/`.
    Navigate(&'static str),
}
