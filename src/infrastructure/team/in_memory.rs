//! In-memory team registry
//!
//! The team directory and the player index live in one `RegistryState`
//! behind a single `RwLock`, so every operation observes and mutates both
//! tables as a pair.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::team::{
    ApplicantOverflow, CreateTeamRequest, PlayerId, PlayerIndex, RegistryLimits, Team, TeamError,
    TeamId, TeamRegistry,
};

/// Directory and index guarded together
#[derive(Debug, Default)]
struct RegistryState {
    teams: HashMap<TeamId, Team>,
    players: PlayerIndex,
    last_team_id: TeamId,
}

impl RegistryState {
    fn team_mut(&mut self, team_id: TeamId) -> Result<&mut Team, TeamError> {
        self.teams
            .get_mut(&team_id)
            .ok_or(TeamError::NoSuchTeam { team_id })
    }

    fn team(&self, team_id: TeamId) -> Result<&Team, TeamError> {
        self.teams.get(&team_id).ok_or(TeamError::NoSuchTeam { team_id })
    }

    fn create_team(
        &mut self,
        request: &CreateTeamRequest,
        limits: &RegistryLimits,
    ) -> Result<TeamId, TeamError> {
        if self.teams.len() >= limits.max_teams {
            return Err(TeamError::TeamListFull {
                max_teams: limits.max_teams,
            });
        }

        let leader_id = request.leader_id;
        ensure_valid_player(leader_id)?;

        if self.players.contains(leader_id) {
            return Err(TeamError::AlreadyInTeam { player_id: leader_id });
        }

        let members = request.normalized_members();

        if members.len() > request.capacity {
            return Err(TeamError::TooManyInitialMembers {
                count: members.len(),
                capacity: request.capacity,
            });
        }

        if let Some(&player_id) = members.iter().find(|m| !m.is_valid()) {
            return Err(TeamError::PlayerNotFound { player_id });
        }

        if let Some(player_id) = self.players.first_assigned(&members) {
            return Err(TeamError::AlreadyInTeam { player_id });
        }

        let team_id = self.last_team_id.next();
        self.last_team_id = team_id;

        for member in &members {
            self.players.assign(*member, team_id);
        }

        self.teams
            .insert(team_id, Team::new(team_id, leader_id, members, request.capacity));

        Ok(team_id)
    }

    fn join_team(&mut self, team_id: TeamId, player_id: PlayerId) -> Result<(), TeamError> {
        ensure_valid_player(player_id)?;

        if !self.teams.contains_key(&team_id) {
            return Err(TeamError::NoSuchTeam { team_id });
        }

        if self.players.contains(player_id) {
            return Err(TeamError::AlreadyInTeam { player_id });
        }

        let team = self.team_mut(team_id)?;

        if team.is_full() {
            return Err(TeamError::TeamFull { team_id });
        }

        team.push_member(player_id);
        self.players.assign(player_id, team_id);

        Ok(())
    }

    fn join_team_bulk(&mut self, team_id: TeamId, player_ids: &[PlayerId]) -> Result<(), TeamError> {
        if let Some(&player_id) = player_ids.iter().find(|p| !p.is_valid()) {
            return Err(TeamError::PlayerNotFound { player_id });
        }

        let team = self.team(team_id)?;

        if player_ids.len() > team.headroom() {
            return Err(TeamError::WouldExceedCapacity {
                team_id,
                requested: player_ids.len(),
            });
        }

        if let Some(player_id) = self.players.first_assigned(player_ids) {
            return Err(TeamError::AlreadyInTeam { player_id });
        }

        // Admissions made before a failure stay in effect.
        for player_id in player_ids {
            self.join_team(team_id, *player_id)?;
        }

        Ok(())
    }

    fn leave_team(&mut self, player_id: PlayerId) -> Result<(), TeamError> {
        let team_id = self
            .players
            .team_of(player_id)
            .ok_or(TeamError::NotInTeam { player_id })?;

        let team = self
            .teams
            .get_mut(&team_id)
            .ok_or(TeamError::NotInTeam { player_id })?;

        if !team.remove_member(player_id) {
            return Err(TeamError::NotInTeam { player_id });
        }

        let now_empty = team.is_empty();
        self.players.release(player_id);

        if now_empty {
            self.erase_team(team_id);
        }

        Ok(())
    }

    fn kick_member(
        &mut self,
        team_id: TeamId,
        acting_leader_id: PlayerId,
        target_id: PlayerId,
    ) -> Result<(), TeamError> {
        let team = self.team_mut(team_id)?;

        if !team.is_leader(acting_leader_id) {
            return Err(TeamError::NotLeader {
                team_id,
                player_id: acting_leader_id,
            });
        }

        if team.is_leader(target_id) || acting_leader_id == target_id {
            return Err(TeamError::CannotKickSelf);
        }

        if !team.remove_member(target_id) {
            return Err(TeamError::NotInTeam { player_id: target_id });
        }

        self.players.release(target_id);

        Ok(())
    }

    fn appoint_leader(
        &mut self,
        team_id: TeamId,
        acting_leader_id: PlayerId,
        new_leader_id: PlayerId,
    ) -> Result<(), TeamError> {
        let team = self.team_mut(team_id)?;

        if team.is_leader(new_leader_id) {
            return Err(TeamError::CannotAppointSelf {
                player_id: new_leader_id,
            });
        }

        if !team.is_leader(acting_leader_id) {
            return Err(TeamError::NotLeader {
                team_id,
                player_id: acting_leader_id,
            });
        }

        if !team.has_member(new_leader_id) {
            return Err(TeamError::NotInTeam {
                player_id: new_leader_id,
            });
        }

        team.set_leader(new_leader_id);

        Ok(())
    }

    fn disband(&mut self, team_id: TeamId, acting_leader_id: Option<PlayerId>) -> Result<(), TeamError> {
        let team = self.team(team_id)?;

        if let Some(acting_leader_id) = acting_leader_id {
            if !team.is_leader(acting_leader_id) {
                return Err(TeamError::NotLeader {
                    team_id,
                    player_id: acting_leader_id,
                });
            }
        }

        self.erase_team(team_id);

        Ok(())
    }

    fn apply_to_team(
        &mut self,
        team_id: TeamId,
        player_id: PlayerId,
        limits: &RegistryLimits,
    ) -> Result<(), TeamError> {
        ensure_valid_player(player_id)?;

        let in_any_team = self.players.contains(player_id);
        let team = self.team_mut(team_id)?;

        if in_any_team {
            return Err(TeamError::AlreadyInTeam { player_id });
        }

        if team.has_member(player_id) {
            return Err(TeamError::AlreadyMember { team_id, player_id });
        }

        if team.is_full() {
            return Err(TeamError::TeamFull { team_id });
        }

        if team.is_applicant(player_id) {
            return Err(TeamError::AlreadyApplied { team_id, player_id });
        }

        if limits.applicant_overflow == ApplicantOverflow::Reject
            && team.applicants().len() >= limits.max_applicants
        {
            return Err(TeamError::QueueFull { team_id });
        }

        team.push_applicant(player_id, limits.max_applicants);

        Ok(())
    }

    /// Remove a team and every index entry pointing at it
    fn erase_team(&mut self, team_id: TeamId) {
        if let Some(team) = self.teams.remove(&team_id) {
            for member in team.members() {
                self.players.release(*member);
            }
        }
    }
}

fn ensure_valid_player(player_id: PlayerId) -> Result<(), TeamError> {
    if player_id.is_valid() {
        Ok(())
    } else {
        Err(TeamError::PlayerNotFound { player_id })
    }
}

/// In-memory team registry
#[derive(Debug)]
pub struct InMemoryTeamRegistry {
    state: RwLock<RegistryState>,
    limits: RegistryLimits,
}

impl InMemoryTeamRegistry {
    /// Create an empty registry; zero limits fall back to the defaults
    pub fn new(limits: RegistryLimits) -> Self {
        Self {
            state: RwLock::new(RegistryState::default()),
            limits: limits.or_defaults(),
        }
    }

    pub fn limits(&self) -> &RegistryLimits {
        &self.limits
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, RegistryState>, TeamError> {
        self.state
            .write()
            .map_err(|e| TeamError::internal(format!("Failed to acquire write lock: {}", e)))
    }

    /// Read access for queries; a poisoned lock reads as "nothing there"
    fn read(&self) -> Option<RwLockReadGuard<'_, RegistryState>> {
        self.state.read().ok()
    }

    fn query<T: Default>(&self, f: impl FnOnce(&RegistryState) -> T) -> T {
        self.read().map(|state| f(&state)).unwrap_or_default()
    }
}

impl Default for InMemoryTeamRegistry {
    fn default() -> Self {
        Self::new(RegistryLimits::default())
    }
}

impl TeamRegistry for InMemoryTeamRegistry {
    fn create_team(&self, request: CreateTeamRequest) -> Result<TeamId, TeamError> {
        self.write()?.create_team(&request, &self.limits)
    }

    fn join_team(&self, team_id: TeamId, player_id: PlayerId) -> Result<(), TeamError> {
        self.write()?.join_team(team_id, player_id)
    }

    fn join_team_bulk(&self, team_id: TeamId, player_ids: &[PlayerId]) -> Result<(), TeamError> {
        self.write()?.join_team_bulk(team_id, player_ids)
    }

    fn leave_team(&self, player_id: PlayerId) -> Result<(), TeamError> {
        self.write()?.leave_team(player_id)
    }

    fn kick_member(
        &self,
        team_id: TeamId,
        acting_leader_id: PlayerId,
        target_id: PlayerId,
    ) -> Result<(), TeamError> {
        self.write()?.kick_member(team_id, acting_leader_id, target_id)
    }

    fn appoint_leader(
        &self,
        team_id: TeamId,
        acting_leader_id: PlayerId,
        new_leader_id: PlayerId,
    ) -> Result<(), TeamError> {
        self.write()?
            .appoint_leader(team_id, acting_leader_id, new_leader_id)
    }

    fn disband(&self, team_id: TeamId, acting_leader_id: PlayerId) -> Result<(), TeamError> {
        self.write()?.disband(team_id, Some(acting_leader_id))
    }

    fn force_disband(&self, team_id: TeamId) -> Result<(), TeamError> {
        self.write()?.disband(team_id, None)
    }

    fn apply_to_team(&self, team_id: TeamId, player_id: PlayerId) -> Result<(), TeamError> {
        self.write()?.apply_to_team(team_id, player_id, &self.limits)
    }

    fn withdraw_application(&self, team_id: TeamId, player_id: PlayerId) -> Result<bool, TeamError> {
        let mut state = self.write()?;
        Ok(state.team_mut(team_id)?.remove_applicant(player_id))
    }

    fn clear_applications(&self, team_id: TeamId) -> Result<usize, TeamError> {
        let mut state = self.write()?;
        Ok(state.team_mut(team_id)?.clear_applicants())
    }

    fn team(&self, team_id: TeamId) -> Option<Team> {
        self.query(|s| s.teams.get(&team_id).cloned())
    }

    fn teams(&self) -> Vec<Team> {
        self.query(|s| {
            let mut teams: Vec<Team> = s.teams.values().cloned().collect();
            teams.sort_by_key(Team::id);
            teams
        })
    }

    fn team_count(&self) -> usize {
        self.query(|s| s.teams.len())
    }

    fn last_team_id(&self) -> TeamId {
        self.read()
            .map(|s| s.last_team_id)
            .unwrap_or(TeamId::INVALID)
    }

    fn is_team_list_full(&self) -> bool {
        self.query(|s| s.teams.len() >= self.limits.max_teams)
    }

    fn member_count(&self, team_id: TeamId) -> usize {
        self.query(|s| s.teams.get(&team_id).map_or(0, Team::member_count))
    }

    fn applicant_count(&self, team_id: TeamId) -> usize {
        self.query(|s| s.teams.get(&team_id).map_or(0, |t| t.applicants().len()))
    }

    fn applicant_count_for_player(&self, player_id: PlayerId) -> usize {
        self.query(|s| {
            s.players
                .team_of(player_id)
                .and_then(|team_id| s.teams.get(&team_id))
                .map_or(0, |t| t.applicants().len())
        })
    }

    fn player_count(&self) -> usize {
        self.query(|s| s.players.len())
    }

    fn team_id_of(&self, player_id: PlayerId) -> TeamId {
        self.read()
            .and_then(|s| s.players.team_of(player_id))
            .unwrap_or(TeamId::INVALID)
    }

    fn leader_of_team(&self, team_id: TeamId) -> PlayerId {
        self.read()
            .and_then(|s| s.teams.get(&team_id).map(Team::leader_id))
            .unwrap_or(PlayerId::INVALID)
    }

    fn leader_of_player(&self, player_id: PlayerId) -> PlayerId {
        self.read()
            .and_then(|s| {
                s.players
                    .team_of(player_id)
                    .and_then(|team_id| s.teams.get(&team_id))
                    .map(Team::leader_id)
            })
            .unwrap_or(PlayerId::INVALID)
    }

    fn first_applicant(&self, team_id: TeamId) -> PlayerId {
        self.read()
            .and_then(|s| s.teams.get(&team_id).and_then(Team::first_applicant))
            .unwrap_or(PlayerId::INVALID)
    }

    fn is_team_full(&self, team_id: TeamId) -> bool {
        self.query(|s| s.teams.get(&team_id).is_some_and(Team::is_full))
    }

    fn has_team(&self, player_id: PlayerId) -> bool {
        self.query(|s| s.players.contains(player_id))
    }

    fn has_member(&self, team_id: TeamId, player_id: PlayerId) -> bool {
        self.query(|s| s.teams.get(&team_id).is_some_and(|t| t.has_member(player_id)))
    }

    fn is_applicant(&self, team_id: TeamId, player_id: PlayerId) -> bool {
        self.query(|s| s.teams.get(&team_id).is_some_and(|t| t.is_applicant(player_id)))
    }
}
