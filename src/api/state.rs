//! Application state for shared services

use std::sync::Arc;

use crate::domain::team::{TeamRegistry, FIVE_MEMBER_CAPACITY};
use crate::infrastructure::team::TeamService;

/// Application state shared by the handlers
#[derive(Clone)]
pub struct AppState {
    pub team_service: Arc<TeamService<dyn TeamRegistry>>,
    /// Capacity applied when a create request omits one
    pub default_capacity: usize,
}

impl AppState {
    pub fn new(registry: Arc<dyn TeamRegistry>) -> Self {
        Self {
            team_service: Arc::new(TeamService::new(registry)),
            default_capacity: FIVE_MEMBER_CAPACITY,
        }
    }

    pub fn with_default_capacity(mut self, capacity: usize) -> Self {
        self.default_capacity = capacity;
        self
    }
}
