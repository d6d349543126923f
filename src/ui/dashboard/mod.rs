//! Modular dashboard implementation
//!
//! Split into logical modules for better maintainability

pub mod components;
pub mod input;
pub mod renderer;
pub mod state;
pub mod updaters;
pub mod utils;

// Re-export main types and functions for external use
pub use input::{InputOutcome, handle_key};
pub use renderer::render_dashboard;
pub use state::DashboardState;
