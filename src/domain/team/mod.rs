//! Team domain module
//!
//! Teams are short-lived player groups with a single leader, a bounded
//! roster and a bounded queue of applicants. A player belongs to at most
//! one team at a time.

mod entity;
mod error;
mod index;
mod registry;

pub use entity::{PlayerId, Team, TeamId};
pub use error::{result_code, TeamError, RESULT_OK};
pub use index::PlayerIndex;
pub use registry::{
    ApplicantOverflow, CreateTeamRequest, RegistryLimits, TeamRegistry, DEFAULT_MAX_APPLICANTS,
    DEFAULT_MAX_TEAMS, FIVE_MEMBER_CAPACITY, TEN_MEMBER_CAPACITY,
};

#[cfg(test)]
pub use registry::MockTeamRegistry;
