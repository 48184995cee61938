//! Backend commands queued from UI to backend worker.

use shared::domain::{Credentials, RegistrationProfile, ReviewSubmission};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    FetchDealers,
    FetchCarCatalog,
    Login(Credentials),
    Register(RegistrationProfile),
    SubmitReview(ReviewSubmission),
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::FetchDealers => "fetch_dealers",
            BackendCommand::FetchCarCatalog => "fetch_car_catalog",
            BackendCommand::Login(_) => "login",
            BackendCommand::Register(_) => "register",
            BackendCommand::SubmitReview(_) => "submit_review",
        }
    }
}
