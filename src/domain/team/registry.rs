//! Team registry trait

use serde::{Deserialize, Serialize};

use super::entity::{PlayerId, Team, TeamId};
use super::error::TeamError;

#[cfg(test)]
use mockall::automock;

/// Most teams the registry will hold at once
pub const DEFAULT_MAX_TEAMS: usize = 10_000;

/// Longest applicant queue per team
pub const DEFAULT_MAX_APPLICANTS: usize = 20;

/// Capacity preset for five-player teams
pub const FIVE_MEMBER_CAPACITY: usize = 5;

/// Capacity preset for ten-player teams
pub const TEN_MEMBER_CAPACITY: usize = 10;

/// What happens when a player applies to a team whose queue is full
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicantOverflow {
    /// Drop the oldest applicant to make room
    #[default]
    EvictOldest,
    /// Reject the new application with `QueueFull`
    Reject,
}

/// Registry-wide limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryLimits {
    pub max_teams: usize,
    pub max_applicants: usize,
    pub applicant_overflow: ApplicantOverflow,
}

impl Default for RegistryLimits {
    fn default() -> Self {
        Self {
            max_teams: DEFAULT_MAX_TEAMS,
            max_applicants: DEFAULT_MAX_APPLICANTS,
            applicant_overflow: ApplicantOverflow::default(),
        }
    }
}

impl RegistryLimits {
    /// Replace zero limits with the defaults
    pub fn or_defaults(self) -> Self {
        Self {
            max_teams: non_zero_or(self.max_teams, DEFAULT_MAX_TEAMS),
            max_applicants: non_zero_or(self.max_applicants, DEFAULT_MAX_APPLICANTS),
            applicant_overflow: self.applicant_overflow,
        }
    }
}

fn non_zero_or(value: usize, fallback: usize) -> usize {
    if value == 0 { fallback } else { value }
}

/// Parameters for creating a team
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTeamRequest {
    pub leader_id: PlayerId,
    pub members: Vec<PlayerId>,
    pub capacity: usize,
}

impl CreateTeamRequest {
    /// Five-member team led by `leader_id`
    pub fn new(leader_id: impl Into<PlayerId>, members: impl IntoIterator<Item = PlayerId>) -> Self {
        Self {
            leader_id: leader_id.into(),
            members: members.into_iter().collect(),
            capacity: FIVE_MEMBER_CAPACITY,
        }
    }

    /// Team containing only its leader
    pub fn solo(leader_id: impl Into<PlayerId>) -> Self {
        let leader_id = leader_id.into();
        Self::new(leader_id, [leader_id])
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Member list as it will be stored: duplicates dropped, and the leader
    /// prepended when the caller left them out
    pub fn normalized_members(&self) -> Vec<PlayerId> {
        let mut members = Vec::with_capacity(self.members.len() + 1);

        if !self.members.contains(&self.leader_id) {
            members.push(self.leader_id);
        }

        for member in &self.members {
            if !members.contains(member) {
                members.push(*member);
            }
        }

        members
    }
}

/// Authoritative player/team membership
///
/// Every mutating operation is atomic with respect to the registry
/// invariants. Queries never fail; absent teams or players yield
/// sentinel values.
#[cfg_attr(test, automock)]
pub trait TeamRegistry: Send + Sync {
    /// Create a team and register its members
    fn create_team(&self, request: CreateTeamRequest) -> Result<TeamId, TeamError>;

    /// Admit a single player
    fn join_team(&self, team_id: TeamId, player_id: PlayerId) -> Result<(), TeamError>;

    /// Admit several players. Bulk checks run first; the per-player
    /// admissions that follow are not rolled back if one fails.
    fn join_team_bulk(&self, team_id: TeamId, player_ids: &[PlayerId]) -> Result<(), TeamError>;

    /// Remove a player from their team
    fn leave_team(&self, player_id: PlayerId) -> Result<(), TeamError>;

    fn kick_member(
        &self,
        team_id: TeamId,
        acting_leader_id: PlayerId,
        target_id: PlayerId,
    ) -> Result<(), TeamError>;

    fn appoint_leader(
        &self,
        team_id: TeamId,
        acting_leader_id: PlayerId,
        new_leader_id: PlayerId,
    ) -> Result<(), TeamError>;

    fn disband(&self, team_id: TeamId, acting_leader_id: PlayerId) -> Result<(), TeamError>;

    /// Disband without leader authority
    fn force_disband(&self, team_id: TeamId) -> Result<(), TeamError>;

    fn apply_to_team(&self, team_id: TeamId, player_id: PlayerId) -> Result<(), TeamError>;

    /// Returns whether an application was removed
    fn withdraw_application(&self, team_id: TeamId, player_id: PlayerId) -> Result<bool, TeamError>;

    /// Returns the number of applications dropped
    fn clear_applications(&self, team_id: TeamId) -> Result<usize, TeamError>;

    // Queries

    fn team(&self, team_id: TeamId) -> Option<Team>;

    fn teams(&self) -> Vec<Team>;

    fn team_count(&self) -> usize;

    fn last_team_id(&self) -> TeamId;

    fn is_team_list_full(&self) -> bool;

    fn member_count(&self, team_id: TeamId) -> usize;

    fn applicant_count(&self, team_id: TeamId) -> usize;

    fn applicant_count_for_player(&self, player_id: PlayerId) -> usize;

    fn player_count(&self) -> usize;

    fn team_id_of(&self, player_id: PlayerId) -> TeamId;

    fn leader_of_team(&self, team_id: TeamId) -> PlayerId;

    fn leader_of_player(&self, player_id: PlayerId) -> PlayerId;

    fn first_applicant(&self, team_id: TeamId) -> PlayerId;

    fn is_team_full(&self, team_id: TeamId) -> bool;

    fn has_team(&self, player_id: PlayerId) -> bool;

    fn has_member(&self, team_id: TeamId, player_id: PlayerId) -> bool;

    fn is_applicant(&self, team_id: TeamId, player_id: PlayerId) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u64]) -> Vec<PlayerId> {
        raw.iter().copied().map(PlayerId::new).collect()
    }

    #[test]
    fn test_request_defaults_to_five_members() {
        let request = CreateTeamRequest::solo(1u64);
        assert_eq!(request.capacity, FIVE_MEMBER_CAPACITY);
        assert_eq!(request.normalized_members(), ids(&[1]));
    }

    #[test]
    fn test_normalized_members_prepends_missing_leader() {
        let request = CreateTeamRequest::new(1u64, ids(&[2, 3, 4]));
        assert_eq!(request.normalized_members(), ids(&[1, 2, 3, 4]));
    }

    #[test]
    fn test_normalized_members_keeps_leader_position() {
        let request = CreateTeamRequest::new(3u64, ids(&[2, 3, 2, 4]));
        assert_eq!(request.normalized_members(), ids(&[2, 3, 4]));
    }
}
