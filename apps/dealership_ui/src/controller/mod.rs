//! Controller layer: view events, reducer-like state transitions, and command orchestration.

pub mod dealers;
pub mod events;
pub mod login;
pub mod orchestration;
pub mod outcome;
pub mod registration;
pub mod review;

use events::{Effect, UiEvent};

/// A view's owned state plus its single state-reducing function.
pub trait Controller {
    type Event;

    fn update(&mut self, event: Self::Event) -> Vec<Effect>;

    /// Claims a backend response for this controller.
    fn route(event: UiEvent) -> Option<Self::Event>;

    /// Whether any request issued by this controller is still in flight.
    fn is_pending(&self) -> bool;
}
