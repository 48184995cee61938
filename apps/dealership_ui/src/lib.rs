//! View controllers for the dealership directory and the plumbing that
//! connects them to the dealership API.

pub mod backend_bridge;
pub mod config;
pub mod controller;
pub mod ui;
