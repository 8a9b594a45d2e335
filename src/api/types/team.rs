//! Team request and response bodies

use serde::{Deserialize, Serialize};

use crate::domain::team::{PlayerId, Team, TeamId};
use crate::infrastructure::team::{PlayerTeamInfo, RegistryStats};

/// POST /v1/teams
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeamApiRequest {
    pub leader_id: PlayerId,
    #[serde(default)]
    pub members: Vec<PlayerId>,
    /// Falls back to the configured default capacity
    #[serde(default)]
    pub capacity: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTeamResponse {
    pub team_id: TeamId,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JoinRequest {
    pub player_id: PlayerId,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BulkJoinRequest {
    pub player_ids: Vec<PlayerId>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KickRequest {
    pub acting_leader_id: PlayerId,
    pub target_id: PlayerId,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppointLeaderRequest {
    pub acting_leader_id: PlayerId,
    pub new_leader_id: PlayerId,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisbandRequest {
    pub acting_leader_id: PlayerId,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplyRequest {
    pub player_id: PlayerId,
}

/// Generic acknowledgement carrying the numeric result code
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationResponse {
    pub code: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub removed: Option<usize>,
}

impl OperationResponse {
    pub fn ok() -> Self {
        Self {
            code: crate::domain::team::RESULT_OK,
            removed: None,
        }
    }

    pub fn removed(count: usize) -> Self {
        Self {
            removed: Some(count),
            ..Self::ok()
        }
    }
}

/// Team snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamResponse {
    pub id: TeamId,
    pub leader_id: PlayerId,
    pub members: Vec<PlayerId>,
    pub applicants: Vec<PlayerId>,
    pub capacity: usize,
    pub full: bool,
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id(),
            leader_id: team.leader_id(),
            members: team.members().to_vec(),
            applicants: team.applicants().to_vec(),
            capacity: team.capacity(),
            full: team.is_full(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListTeamsResponse {
    pub teams: Vec<TeamResponse>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerTeamResponse {
    pub player_id: PlayerId,
    pub team_id: TeamId,
    pub leader_id: PlayerId,
}

impl From<PlayerTeamInfo> for PlayerTeamResponse {
    fn from(info: PlayerTeamInfo) -> Self {
        Self {
            player_id: info.player_id,
            team_id: info.team_id,
            leader_id: info.leader_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    pub teams: usize,
    pub players: usize,
    pub last_team_id: TeamId,
    pub team_list_full: bool,
}

impl From<RegistryStats> for StatsResponse {
    fn from(stats: RegistryStats) -> Self {
        Self {
            teams: stats.team_count,
            players: stats.player_count,
            last_team_id: stats.last_team_id,
            team_list_full: stats.team_list_full,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_defaults() {
        let request: CreateTeamApiRequest = serde_json::from_str(r#"{"leader_id": 7}"#).unwrap();

        assert_eq!(request.leader_id, PlayerId::new(7));
        assert!(request.members.is_empty());
        assert_eq!(request.capacity, None);
    }

    #[test]
    fn test_operation_response_serialization() {
        let json = serde_json::to_string(&OperationResponse::ok()).unwrap();
        assert_eq!(json, r#"{"code":0}"#);

        let json = serde_json::to_string(&OperationResponse::removed(2)).unwrap();
        assert_eq!(json, r#"{"code":0,"removed":2}"#);
    }
}
