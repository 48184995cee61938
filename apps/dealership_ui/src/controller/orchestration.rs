//! Command orchestration from controller effects to the backend command queue.

use anyhow::{anyhow, Result};
use client_core::RequestError;
use crossbeam_channel::{Receiver, Sender, TrySendError};
use tracing::{debug, info};

use super::{
    events::{Effect, UiEvent},
    Controller,
};
use crate::backend_bridge::commands::BackendCommand;

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) -> Result<(), (BackendCommand, RequestError)> {
    let cmd_name = cmd.name();
    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(cmd)) => Err((
            cmd,
            RequestError::transport("UI command queue is full; please retry"),
        )),
        Err(TrySendError::Disconnected(cmd)) => Err((
            cmd,
            RequestError::transport("backend command processor disconnected"),
        )),
    }
}

/// One mounted view: owns its controller, applies events, and carries
/// out the effects each transition asks for.
pub struct Session<C: Controller> {
    controller: C,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    in_flight: usize,
    navigations: Vec<String>,
}

impl<C: Controller> Session<C> {
    pub fn new(controller: C, cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            controller,
            cmd_tx,
            ui_rx,
            in_flight: 0,
            navigations: Vec::new(),
        }
    }

    pub fn controller(&self) -> &C {
        &self.controller
    }

    /// Locations the controller asked the host to navigate to, in order.
    pub fn navigations(&self) -> &[String] {
        &self.navigations
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn send(&mut self, event: C::Event) {
        let effects = self.controller.update(event);
        for effect in effects {
            match effect {
                Effect::Backend(cmd) => match dispatch_backend_command(&self.cmd_tx, cmd) {
                    Ok(()) => self.in_flight += 1,
                    Err((cmd, err)) => {
                        if let Some(event) = C::route(UiEvent::failed(&cmd, err)) {
                            self.send(event);
                        }
                    }
                },
                Effect::Navigate(location) => {
                    info!(location, "host navigation requested");
                    self.navigations.push(location.to_string());
                }
            }
        }
    }

    /// Blocks until every dispatched request has come back and been applied.
    /// Fails if the controller still reports a request in flight afterwards.
    pub fn settle(&mut self) -> Result<()> {
        while self.in_flight > 0 {
            let event = self
                .ui_rx
                .recv()
                .map_err(|_| anyhow!("backend worker stopped with requests in flight"))?;
            self.in_flight -= 1;
            match C::route(event) {
                Some(event) => self.send(event),
                None => debug!("dropping backend event not owned by this view"),
            }
        }
        if self.controller.is_pending() {
            return Err(anyhow!("view is waiting on a response that was never queued"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/orchestration_tests.rs"]
mod tests;
