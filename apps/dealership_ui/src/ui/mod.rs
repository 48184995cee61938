//! Terminal presentation: renders controller state and enforces input-control constraints.

pub mod input;
pub mod render;
