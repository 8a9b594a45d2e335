//! Team infrastructure implementations

mod in_memory;
mod service;

pub use in_memory::InMemoryTeamRegistry;
pub use service::{PlayerTeamInfo, RegistryStats, TeamService};
