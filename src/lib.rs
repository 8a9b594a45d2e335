//! Team Registry
//!
//! Authoritative, in-memory player/team membership for multiplayer sessions:
//! - Teams with a single leader and a bounded roster
//! - Bounded FIFO applicant queues
//! - A player index enforcing one team per player
//! - HTTP exposure with numeric result codes

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::team::InMemoryTeamRegistry;

/// Build the application state from configuration
pub fn create_app_state(config: &AppConfig) -> AppState {
    let registry = Arc::new(InMemoryTeamRegistry::new(config.registry.limits()));

    AppState::new(registry).with_default_capacity(config.registry.default_capacity())
}
