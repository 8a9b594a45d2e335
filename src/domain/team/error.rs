//! Team result codes

use thiserror::Error;

use super::entity::{PlayerId, TeamId};

/// Numeric code reported for a successful operation
pub const RESULT_OK: u32 = 0;

/// Rejections produced by the team registry
///
/// Every variant is an expected outcome of an invalid or contended request.
/// `code()` gives the stable numeric result code handed to game clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TeamError {
    #[error("Team {team_id} is full")]
    TeamFull { team_id: TeamId },

    #[error("Initial member list of {count} exceeds capacity {capacity}")]
    TooManyInitialMembers { count: usize, capacity: usize },

    #[error("Adding {requested} members to team {team_id} would exceed its capacity")]
    WouldExceedCapacity { team_id: TeamId, requested: usize },

    #[error("Player {player_id} already belongs to a team")]
    AlreadyInTeam { player_id: PlayerId },

    #[error("Player {player_id} is not a member of the team")]
    NotInTeam { player_id: PlayerId },

    #[error("Player {player_id} is already a member of team {team_id}")]
    AlreadyMember { team_id: TeamId, player_id: PlayerId },

    #[error("Player {player_id} is not the leader of team {team_id}")]
    NotLeader { team_id: TeamId, player_id: PlayerId },

    #[error("Leader cannot kick themselves")]
    CannotKickSelf,

    #[error("Player {player_id} is already the leader")]
    CannotAppointSelf { player_id: PlayerId },

    #[error("Team {team_id} not found")]
    NoSuchTeam { team_id: TeamId },

    #[error("Player {player_id} not found")]
    PlayerNotFound { player_id: PlayerId },

    #[error("Team list is full ({max_teams} teams)")]
    TeamListFull { max_teams: usize },

    #[error("Player {player_id} already applied to team {team_id}")]
    AlreadyApplied { team_id: TeamId, player_id: PlayerId },

    #[error("Applicant queue of team {team_id} is full")]
    QueueFull { team_id: TeamId },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl TeamError {
    /// Stable numeric result code
    pub fn code(&self) -> u32 {
        match self {
            Self::AlreadyInTeam { .. } => 5003,
            Self::NotInTeam { .. } => 5004,
            Self::CannotKickSelf => 5005,
            Self::NotLeader { .. } => 5006,
            Self::CannotAppointSelf { .. } => 5007,
            Self::TeamFull { .. } => 5009,
            Self::TeamListFull { .. } => 5012,
            Self::NoSuchTeam { .. } => 5013,
            Self::WouldExceedCapacity { .. } => 5015,
            Self::TooManyInitialMembers { .. } => 5016,
            Self::PlayerNotFound { .. } => 5017,
            Self::AlreadyMember { .. } => 5018,
            Self::AlreadyApplied { .. } => 5020,
            Self::QueueFull { .. } => 5021,
            Self::Internal { .. } => 5099,
        }
    }

    /// Short snake_case label, used for metrics and logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::TeamFull { .. } => "team_full",
            Self::TooManyInitialMembers { .. } => "too_many_initial_members",
            Self::WouldExceedCapacity { .. } => "would_exceed_capacity",
            Self::AlreadyInTeam { .. } => "already_in_team",
            Self::NotInTeam { .. } => "not_in_team",
            Self::AlreadyMember { .. } => "already_member",
            Self::NotLeader { .. } => "not_leader",
            Self::CannotKickSelf => "cannot_kick_self",
            Self::CannotAppointSelf { .. } => "cannot_appoint_self",
            Self::NoSuchTeam { .. } => "no_such_team",
            Self::PlayerNotFound { .. } => "player_not_found",
            Self::TeamListFull { .. } => "team_list_full",
            Self::AlreadyApplied { .. } => "already_applied",
            Self::QueueFull { .. } => "queue_full",
            Self::Internal { .. } => "internal",
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

/// Collapse an operation outcome into its numeric result code
pub fn result_code<T>(result: &Result<T, TeamError>) -> u32 {
    match result {
        Ok(_) => RESULT_OK,
        Err(e) => e.code(),
    }
}
