//! Review form for one dealership, with optional purchase details drawn
//! from the car catalog.

use std::collections::HashSet;

use client_core::RequestError;
use shared::{
    domain::{CarCatalogEntry, DealerId, ReviewDraft, ReviewSubmission},
    error::{REVIEW_FAILURES, REVIEW_SUCCEEDED},
};
use tracing::{debug, info, warn};

use super::{
    events::{Effect, UiEvent},
    outcome::RequestOutcome,
    Controller,
};
use crate::backend_bridge::commands::BackendCommand;

/// Unique makes in the order they first appear in the catalog.
pub fn distinct_makes(catalog: &[CarCatalogEntry]) -> Vec<&str> {
    let mut seen = HashSet::new();
    catalog
        .iter()
        .map(|entry| entry.car_make.as_str())
        .filter(|make| seen.insert(*make))
        .collect()
}

/// Catalog entries for `make`; empty when no make is chosen.
pub fn models_for_make<'a>(
    catalog: &'a [CarCatalogEntry],
    make: &str,
) -> Vec<&'a CarCatalogEntry> {
    if make.is_empty() {
        return Vec::new();
    }
    catalog
        .iter()
        .filter(|entry| entry.car_make == make)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewField {
    Name,
    Review,
    PurchaseDate,
    CarMake,
    CarModel,
    CarYear,
}

impl ReviewField {
    pub fn is_purchase_detail(self) -> bool {
        matches!(
            self,
            ReviewField::PurchaseDate
                | ReviewField::CarMake
                | ReviewField::CarModel
                | ReviewField::CarYear
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReviewEvent {
    Mounted,
    CatalogFetched(Result<Vec<CarCatalogEntry>, RequestError>),
    FieldChanged(ReviewField, String),
    PurchaseToggled(bool),
    Submit,
    Settled(Result<(), RequestError>),
}

#[derive(Debug)]
pub struct ReviewController {
    dealership: DealerId,
    catalog: Vec<CarCatalogEntry>,
    catalog_fetch: RequestOutcome,
    draft: ReviewDraft,
    outcome: RequestOutcome,
}

impl ReviewController {
    pub fn new(dealership: DealerId) -> Self {
        Self {
            dealership,
            catalog: Vec::new(),
            catalog_fetch: RequestOutcome::Idle,
            draft: ReviewDraft::default(),
            outcome: RequestOutcome::Idle,
        }
    }

    pub fn dealership(&self) -> DealerId {
        self.dealership
    }

    pub fn draft(&self) -> &ReviewDraft {
        &self.draft
    }

    pub fn catalog(&self) -> &[CarCatalogEntry] {
        &self.catalog
    }

    pub fn outcome(&self) -> &RequestOutcome {
        &self.outcome
    }

    pub fn message(&self) -> Option<&str> {
        self.outcome.message()
    }

    pub fn distinct_makes(&self) -> Vec<&str> {
        distinct_makes(&self.catalog)
    }

    pub fn models_for_selected_make(&self) -> Vec<&CarCatalogEntry> {
        models_for_make(&self.catalog, &self.draft.car_make)
    }

    pub fn purchase_details_visible(&self) -> bool {
        self.draft.purchase
    }

    pub fn model_selector_enabled(&self) -> bool {
        !self.draft.car_make.is_empty()
    }

    pub fn submit_enabled(&self) -> bool {
        !self.outcome.is_pending()
    }

    fn accepts(&self, field: ReviewField) -> bool {
        if field.is_purchase_detail() && !self.purchase_details_visible() {
            return false;
        }
        field != ReviewField::CarModel || self.model_selector_enabled()
    }
}

impl Controller for ReviewController {
    type Event = ReviewEvent;

    fn update(&mut self, event: ReviewEvent) -> Vec<Effect> {
        match event {
            ReviewEvent::Mounted => {
                if !self.catalog_fetch.is_idle() {
                    return Vec::new();
                }
                self.catalog_fetch = RequestOutcome::Pending;
                vec![Effect::Backend(BackendCommand::FetchCarCatalog)]
            }
            ReviewEvent::CatalogFetched(result) => {
                if !self.catalog_fetch.is_pending() {
                    warn!("ignoring car catalog response with no fetch in flight");
                    return Vec::new();
                }
                match result {
                    Ok(catalog) => {
                        self.catalog = catalog;
                        self.catalog_fetch = RequestOutcome::succeeded();
                    }
                    // Not shown to the user: the review can be written without purchase details.
                    Err(err) => {
                        warn!(
                            error = %err,
                            "car catalog unavailable; make and model lists stay empty"
                        );
                        self.catalog_fetch = RequestOutcome::failed(err.to_string());
                    }
                }
                Vec::new()
            }
            ReviewEvent::FieldChanged(field, value) => {
                if !self.accepts(field) {
                    debug!(?field, "review field is not editable right now");
                    return Vec::new();
                }
                let slot = match field {
                    ReviewField::Name => &mut self.draft.name,
                    ReviewField::Review => &mut self.draft.review,
                    ReviewField::PurchaseDate => &mut self.draft.purchase_date,
                    ReviewField::CarMake => &mut self.draft.car_make,
                    ReviewField::CarModel => &mut self.draft.car_model,
                    ReviewField::CarYear => &mut self.draft.car_year,
                };
                *slot = value;
                Vec::new()
            }
            ReviewEvent::PurchaseToggled(purchase) => {
                // Sub-fields survive toggling off and are still sent on submit.
                self.draft.purchase = purchase;
                Vec::new()
            }
            ReviewEvent::Submit => {
                if self.outcome.is_pending() {
                    debug!("review submit suppressed while pending");
                    return Vec::new();
                }
                self.outcome = RequestOutcome::Pending;
                vec![Effect::Backend(BackendCommand::SubmitReview(
                    ReviewSubmission {
                        draft: self.draft.clone(),
                        dealership: self.dealership,
                    },
                ))]
            }
            ReviewEvent::Settled(result) => {
                if !self.outcome.is_pending() {
                    warn!("ignoring review response with no submission in flight");
                    return Vec::new();
                }
                self.outcome =
                    RequestOutcome::from_submission(&result, REVIEW_SUCCEEDED, REVIEW_FAILURES);
                match result {
                    Ok(()) => {
                        info!(dealership = self.dealership.0, "review submitted");
                        self.draft = ReviewDraft::default();
                    }
                    Err(err) => warn!(error = %err, "review submission failed"),
                }
                Vec::new()
            }
        }
    }

    fn route(event: UiEvent) -> Option<ReviewEvent> {
        match event {
            UiEvent::CarCatalogFetched(result) => Some(ReviewEvent::CatalogFetched(result)),
            UiEvent::ReviewSettled(result) => Some(ReviewEvent::Settled(result)),
            _ => None,
        }
    }

    fn is_pending(&self) -> bool {
        self.catalog_fetch.is_pending() || self.outcome.is_pending()
    }
}

#[cfg(test)]
#[path = "../tests/review_tests.rs"]
mod tests;
