//! Dealer directory: one fetch per mount, client-side filtering by state.

use client_core::RequestError;
use shared::{
    domain::{state_option, Dealer},
    error::DEALERS_FAILURES,
};
use tracing::{debug, info, warn};

use super::{
    events::{Effect, UiEvent},
    outcome::{RequestOutcome, Settled},
    Controller,
};
use crate::backend_bridge::commands::BackendCommand;

/// Dealers whose `st` equals `state_code`, or all of them for the empty code.
pub fn filter_by_state<'a>(dealers: &'a [Dealer], state_code: &str) -> Vec<&'a Dealer> {
    if state_code.is_empty() {
        return dealers.iter().collect();
    }
    dealers
        .iter()
        .filter(|dealer| dealer.st == state_code)
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub enum DealerListEvent {
    Mounted,
    Fetched(Result<Vec<Dealer>, RequestError>),
    StateSelected(String),
    Retry,
}

#[derive(Debug, PartialEq)]
pub enum DealerListView<'a> {
    Loading,
    /// Fetch failed; `retry` is available.
    Error { message: &'a str },
    NoResults { total: usize },
    Showing {
        dealers: Vec<&'a Dealer>,
        total: usize,
        summary: String,
    },
}

#[derive(Debug, Default)]
pub struct DealerListController {
    dealers: Vec<Dealer>,
    selected_state: String,
    fetch: RequestOutcome,
}

impl DealerListController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_state(&self) -> &str {
        &self.selected_state
    }

    pub fn fetch_outcome(&self) -> &RequestOutcome {
        &self.fetch
    }

    pub fn filtered(&self) -> Vec<&Dealer> {
        filter_by_state(&self.dealers, &self.selected_state)
    }

    pub fn total_count(&self) -> usize {
        self.dealers.len()
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered().len()
    }

    /// "Showing K of N dealerships", naming the state when a known filter is active.
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "Showing {} of {} dealerships",
            self.filtered_count(),
            self.total_count()
        );
        if !self.selected_state.is_empty() {
            if let Some(option) = state_option(&self.selected_state) {
                summary.push_str(" in ");
                summary.push_str(option.name);
            }
        }
        summary
    }

    pub fn view(&self) -> DealerListView<'_> {
        match &self.fetch {
            RequestOutcome::Idle | RequestOutcome::Pending => DealerListView::Loading,
            RequestOutcome::Settled(Settled::Failure(message)) => {
                DealerListView::Error { message }
            }
            RequestOutcome::Settled(Settled::Success(_)) => {
                let dealers = self.filtered();
                if dealers.is_empty() {
                    DealerListView::NoResults {
                        total: self.total_count(),
                    }
                } else {
                    DealerListView::Showing {
                        dealers,
                        total: self.total_count(),
                        summary: self.summary(),
                    }
                }
            }
        }
    }

    fn start_fetch(&mut self) -> Vec<Effect> {
        self.fetch = RequestOutcome::Pending;
        vec![Effect::Backend(BackendCommand::FetchDealers)]
    }
}

impl Controller for DealerListController {
    type Event = DealerListEvent;

    fn update(&mut self, event: DealerListEvent) -> Vec<Effect> {
        match event {
            DealerListEvent::Mounted => {
                if !self.fetch.is_idle() {
                    debug!("dealer list already mounted");
                    return Vec::new();
                }
                self.start_fetch()
            }
            DealerListEvent::Retry => {
                if !self.fetch.is_failure() {
                    debug!("dealer retry ignored outside the error state");
                    return Vec::new();
                }
                info!("retrying dealer fetch");
                self.start_fetch()
            }
            DealerListEvent::Fetched(result) => {
                if !self.fetch.is_pending() {
                    warn!("ignoring dealer response with no fetch in flight");
                    return Vec::new();
                }
                match result {
                    Ok(dealers) => {
                        self.dealers = dealers;
                        self.fetch = RequestOutcome::succeeded();
                    }
                    Err(err) => {
                        warn!(error = %err, "dealer fetch failed");
                        self.fetch = RequestOutcome::failed(err.fallback_message(DEALERS_FAILURES));
                    }
                }
                Vec::new()
            }
            DealerListEvent::StateSelected(code) => {
                self.selected_state = code;
                Vec::new()
            }
        }
    }

    fn route(event: UiEvent) -> Option<DealerListEvent> {
        match event {
            UiEvent::DealersFetched(result) => Some(DealerListEvent::Fetched(result)),
            _ => None,
        }
    }

    fn is_pending(&self) -> bool {
        self.fetch.is_pending()
    }
}
