//! API types shared by the HTTP handlers

pub mod error;
pub mod json;
pub mod team;

pub use error::{ApiError, ApiErrorResponse, ApiErrorType};
pub use json::Json;
pub use team::{
    AppointLeaderRequest, ApplyRequest, BulkJoinRequest, CreateTeamApiRequest, CreateTeamResponse,
    DisbandRequest, JoinRequest, KickRequest, ListTeamsResponse, OperationResponse,
    PlayerTeamResponse, StatsResponse, TeamResponse,
};
