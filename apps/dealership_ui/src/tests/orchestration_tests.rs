use super::*;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use client_core::DealershipApi;
use crossbeam_channel::bounded;
use shared::domain::{
    CarCatalogEntry, Credentials, Dealer, DealerId, RegistrationProfile, ReviewSubmission,
};

use crate::backend_bridge::runtime;
use crate::controller::{
    dealers::{DealerListController, DealerListEvent, DealerListView},
    login::{LoginController, LoginEvent, LoginField},
    review::{ReviewController, ReviewEvent, ReviewField},
};

#[derive(Default)]
struct FakeApi {
    dealers: Vec<Dealer>,
    catalog: Vec<CarCatalogEntry>,
    login_error: Option<RequestError>,
    failing_dealer_fetches: Mutex<usize>,
    calls: Mutex<Vec<&'static str>>,
    reviews: Mutex<Vec<ReviewSubmission>>,
}

impl FakeApi {
    fn record(&self, call: &'static str) {
        self.calls.lock().expect("calls").push(call);
    }

    fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().expect("calls").clone()
    }
}

#[async_trait]
impl DealershipApi for FakeApi {
    async fn list_dealers(&self) -> Result<Vec<Dealer>, RequestError> {
        self.record("list_dealers");
        let mut failing = self.failing_dealer_fetches.lock().expect("failures");
        if *failing > 0 {
            *failing -= 1;
            return Err(RequestError::transport("connection reset"));
        }
        Ok(self.dealers.clone())
    }

    async fn list_car_catalog(&self) -> Result<Vec<CarCatalogEntry>, RequestError> {
        self.record("list_car_catalog");
        Ok(self.catalog.clone())
    }

    async fn login(&self, _credentials: &Credentials) -> Result<(), RequestError> {
        self.record("login");
        match &self.login_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    async fn register(&self, _profile: &RegistrationProfile) -> Result<(), RequestError> {
        self.record("register");
        Ok(())
    }

    async fn submit_review(&self, submission: &ReviewSubmission) -> Result<(), RequestError> {
        self.record("submit_review");
        self.reviews
            .lock()
            .expect("reviews")
            .push(submission.clone());
        Ok(())
    }
}

fn session<C: Controller>(controller: C, api: &Arc<FakeApi>) -> Session<C> {
    let (cmd_tx, cmd_rx) = bounded(16);
    let (ui_tx, ui_rx) = bounded(16);
    runtime::launch(api.clone(), cmd_rx, ui_tx);
    Session::new(controller, cmd_tx, ui_rx)
}

fn dealer(id: i64, st: &str) -> Dealer {
    Dealer {
        id: DealerId(id),
        full_name: format!("Dealer {id}"),
        address: "1 Main St".into(),
        city: "Springfield".into(),
        st: st.into(),
        zip: "00000".into(),
        state: None,
        short_name: None,
        lat: None,
        long: None,
    }
}

#[test]
fn login_success_navigates_home_exactly_once() {
    let api = Arc::new(FakeApi::default());
    let mut session = session(LoginController::new(), &api);

    session.send(LoginEvent::FieldChanged(LoginField::UserName, "alice".into()));
    session.send(LoginEvent::FieldChanged(LoginField::Password, "secret1".into()));
    session.send(LoginEvent::Submit);
    session.send(LoginEvent::Submit);
    assert_eq!(session.in_flight(), 1);
    session.settle().expect("settle");

    assert_eq!(api.calls(), vec!["login"]);
    assert_eq!(session.navigations(), ["/".to_string()]);
    assert_eq!(session.controller().message(), Some("Login successful!"));
}

#[test]
fn login_rejection_shows_server_message() {
    let api = Arc::new(FakeApi {
        login_error: Some(RequestError::rejected(401, Some("bad credentials".into()))),
        ..FakeApi::default()
    });
    let mut session = session(LoginController::new(), &api);

    session.send(LoginEvent::Submit);
    session.settle().expect("settle");

    assert_eq!(session.controller().message(), Some("bad credentials"));
    assert!(session.navigations().is_empty());
    assert!(session.controller().submit_enabled());
}

#[test]
fn dealer_retry_refetches_and_filtering_stays_local() {
    let api = Arc::new(FakeApi {
        dealers: vec![dealer(1, "CA"), dealer(2, "TX")],
        failing_dealer_fetches: Mutex::new(1),
        ..FakeApi::default()
    });
    let mut session = session(DealerListController::new(), &api);

    session.send(DealerListEvent::Mounted);
    session.settle().expect("settle");
    assert_eq!(
        session.controller().view(),
        DealerListView::Error {
            message: "Network error occurred"
        }
    );

    session.send(DealerListEvent::Retry);
    session.settle().expect("settle");
    session.send(DealerListEvent::StateSelected("CA".into()));
    session.send(DealerListEvent::StateSelected("TX".into()));
    session.settle().expect("settle");

    assert_eq!(api.calls(), vec!["list_dealers", "list_dealers"]);
    assert_eq!(
        session.controller().summary(),
        "Showing 1 of 2 dealerships in Texas"
    );
}

#[test]
fn review_flow_fetches_catalog_then_submits_and_resets() {
    let api = Arc::new(FakeApi {
        catalog: vec![
            CarCatalogEntry::new("Toyota", "Camry"),
            CarCatalogEntry::new("Toyota", "Corolla"),
        ],
        ..FakeApi::default()
    });
    let mut session = session(ReviewController::new(DealerId(7)), &api);

    session.send(ReviewEvent::Mounted);
    session.settle().expect("settle");
    assert_eq!(session.controller().distinct_makes(), vec!["Toyota"]);

    session.send(ReviewEvent::FieldChanged(ReviewField::Name, "Sam".into()));
    session.send(ReviewEvent::FieldChanged(ReviewField::Review, "Fine".into()));
    session.send(ReviewEvent::Submit);
    session.settle().expect("settle");

    let reviews = api.reviews.lock().expect("reviews").clone();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].dealership, DealerId(7));
    assert_eq!(reviews[0].draft.name, "Sam");
    assert_eq!(session.controller().draft().name, "");
    assert_eq!(api.calls(), vec!["list_car_catalog", "submit_review"]);
}

#[test]
fn stopped_worker_settles_submit_as_network_failure() {
    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(1);
    let (_ui_tx, ui_rx) = bounded::<UiEvent>(1);
    drop(cmd_rx);
    let mut session = Session::new(LoginController::new(), cmd_tx, ui_rx);

    session.send(LoginEvent::Submit);

    assert_eq!(session.in_flight(), 0);
    assert_eq!(
        session.controller().message(),
        Some("Network error. Please try again.")
    );
    session.settle().expect("nothing in flight");
}

#[derive(Default)]
struct UnqueuedRequest {
    waiting: bool,
}

impl Controller for UnqueuedRequest {
    type Event = ();

    fn update(&mut self, _event: ()) -> Vec<Effect> {
        self.waiting = true;
        Vec::new()
    }

    fn route(_event: UiEvent) -> Option<()> {
        None
    }

    fn is_pending(&self) -> bool {
        self.waiting
    }
}

#[test]
fn settle_fails_when_view_waits_on_nothing() {
    let (cmd_tx, _cmd_rx) = bounded::<BackendCommand>(1);
    let (_ui_tx, ui_rx) = bounded::<UiEvent>(1);
    let mut session = Session::new(UnqueuedRequest::default(), cmd_tx, ui_rx);
    session.settle().expect("idle view settles");

    session.send(());

    assert_eq!(session.in_flight(), 0);
    assert!(session.settle().is_err());
}

#[test]
fn dispatch_reports_full_queue() {
    let (cmd_tx, _cmd_rx) = bounded::<BackendCommand>(1);
    dispatch_backend_command(&cmd_tx, BackendCommand::FetchDealers).expect("first fits");
    let (cmd, err) = dispatch_backend_command(&cmd_tx, BackendCommand::FetchCarCatalog)
        .expect_err("queue is full");
    assert_eq!(cmd, BackendCommand::FetchCarCatalog);
    assert!(err.is_transport());
}
