//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::DealershipApi;
use crossbeam_channel::{Receiver, Sender};
use tracing::{debug, error, info};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

/// Spawns the backend worker. Commands are executed one at a time in the
/// order they were queued, so responses come back in issue order.
pub fn launch(
    api: Arc<dyn DealershipApi>,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            info!("backend worker ready");
            while let Ok(cmd) = cmd_rx.recv() {
                let command = cmd.name();
                let event = execute(api.as_ref(), cmd).await;
                debug!(command, "backend command settled");
                if ui_tx.send(event).is_err() {
                    debug!("ui event receiver dropped; stopping backend worker");
                    break;
                }
            }
        });
    })
}

pub async fn execute(api: &dyn DealershipApi, cmd: BackendCommand) -> UiEvent {
    match cmd {
        BackendCommand::FetchDealers => UiEvent::DealersFetched(api.list_dealers().await),
        BackendCommand::FetchCarCatalog => {
            UiEvent::CarCatalogFetched(api.list_car_catalog().await)
        }
        BackendCommand::Login(credentials) => UiEvent::LoginSettled(api.login(&credentials).await),
        BackendCommand::Register(profile) => {
            UiEvent::RegistrationSettled(api.register(&profile).await)
        }
        BackendCommand::SubmitReview(submission) => {
            UiEvent::ReviewSettled(api.submit_review(&submission).await)
        }
    }
}
