//! Domain layer - Core rules and entities

pub mod team;

pub use team::{
    result_code, CreateTeamRequest, PlayerId, PlayerIndex, Team, TeamError, TeamId, TeamRegistry,
    RESULT_OK,
};
