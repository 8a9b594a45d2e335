//! Team service for player-facing team actions

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::team::{CreateTeamRequest, PlayerId, Team, TeamError, TeamId, TeamRegistry};
use crate::infrastructure::observability::{record_team_count, record_team_operation};

/// Registry-wide counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryStats {
    pub team_count: usize,
    pub player_count: usize,
    pub last_team_id: TeamId,
    pub team_list_full: bool,
}

/// Where a player currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerTeamInfo {
    pub player_id: PlayerId,
    pub team_id: TeamId,
    pub leader_id: PlayerId,
}

/// Team service wrapping a registry with logging and metrics
#[derive(Debug)]
pub struct TeamService<R: TeamRegistry + ?Sized> {
    registry: Arc<R>,
}

impl<R: TeamRegistry + ?Sized> TeamService<R> {
    /// Create a new team service
    pub fn new(registry: Arc<R>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Arc<R> {
        &self.registry
    }

    /// Create a team
    pub fn create_team(&self, request: CreateTeamRequest) -> Result<TeamId, TeamError> {
        let leader_id = request.leader_id;
        let result = self.registry.create_team(request);

        if let Ok(team_id) = &result {
            info!(team_id = %team_id, leader_id = %leader_id, "Team created");
        }

        self.finish("create_team", result)
    }

    pub fn join_team(&self, team_id: TeamId, player_id: PlayerId) -> Result<(), TeamError> {
        let result = self.registry.join_team(team_id, player_id);

        if result.is_ok() {
            info!(team_id = %team_id, player_id = %player_id, "Player joined team");
        }

        self.finish("join_team", result)
    }

    /// Admit several players; see `TeamRegistry::join_team_bulk` for the
    /// partial-failure behaviour
    pub fn join_team_bulk(&self, team_id: TeamId, player_ids: &[PlayerId]) -> Result<(), TeamError> {
        let result = self.registry.join_team_bulk(team_id, player_ids);

        match &result {
            Ok(()) => info!(team_id = %team_id, count = player_ids.len(), "Players joined team"),
            Err(e) => debug!(
                team_id = %team_id,
                members = self.registry.member_count(team_id),
                error = %e,
                "Bulk join stopped"
            ),
        }

        self.finish("join_team_bulk", result)
    }

    pub fn leave_team(&self, player_id: PlayerId) -> Result<(), TeamError> {
        let team_id = self.registry.team_id_of(player_id);
        let result = self.registry.leave_team(player_id);

        if result.is_ok() {
            info!(team_id = %team_id, player_id = %player_id, "Player left team");
        }

        self.finish("leave_team", result)
    }

    pub fn kick_member(
        &self,
        team_id: TeamId,
        acting_leader_id: PlayerId,
        target_id: PlayerId,
    ) -> Result<(), TeamError> {
        let result = self.registry.kick_member(team_id, acting_leader_id, target_id);

        if result.is_ok() {
            info!(team_id = %team_id, player_id = %target_id, "Member kicked");
        }

        self.finish("kick_member", result)
    }

    pub fn appoint_leader(
        &self,
        team_id: TeamId,
        acting_leader_id: PlayerId,
        new_leader_id: PlayerId,
    ) -> Result<(), TeamError> {
        let result = self
            .registry
            .appoint_leader(team_id, acting_leader_id, new_leader_id);

        if result.is_ok() {
            info!(team_id = %team_id, leader_id = %new_leader_id, "Leader appointed");
        }

        self.finish("appoint_leader", result)
    }

    pub fn disband(&self, team_id: TeamId, acting_leader_id: PlayerId) -> Result<(), TeamError> {
        let result = self.registry.disband(team_id, acting_leader_id);

        if result.is_ok() {
            info!(team_id = %team_id, "Team disbanded");
        }

        self.finish("disband", result)
    }

    pub fn force_disband(&self, team_id: TeamId) -> Result<(), TeamError> {
        let result = self.registry.force_disband(team_id);

        if result.is_ok() {
            info!(team_id = %team_id, "Team force-disbanded");
        }

        self.finish("force_disband", result)
    }

    pub fn apply_to_team(&self, team_id: TeamId, player_id: PlayerId) -> Result<(), TeamError> {
        let result = self.registry.apply_to_team(team_id, player_id);

        if result.is_ok() {
            debug!(team_id = %team_id, player_id = %player_id, "Application queued");
        }

        self.finish("apply_to_team", result)
    }

    pub fn withdraw_application(&self, team_id: TeamId, player_id: PlayerId) -> Result<bool, TeamError> {
        let result = self.registry.withdraw_application(team_id, player_id);
        self.finish("withdraw_application", result)
    }

    pub fn clear_applications(&self, team_id: TeamId) -> Result<usize, TeamError> {
        let result = self.registry.clear_applications(team_id);

        if let Ok(cleared) = &result {
            debug!(team_id = %team_id, cleared = cleared, "Applicant queue cleared");
        }

        self.finish("clear_applications", result)
    }

    /// Snapshot of a single team
    pub fn get(&self, team_id: TeamId) -> Option<Team> {
        self.registry.team(team_id)
    }

    /// Snapshots of all teams, ordered by id
    pub fn list(&self) -> Vec<Team> {
        self.registry.teams()
    }

    /// Team and leader for a player, if they are in a team
    pub fn player_info(&self, player_id: PlayerId) -> Option<PlayerTeamInfo> {
        let team_id = self.registry.team_id_of(player_id);

        if !team_id.is_valid() {
            return None;
        }

        Some(PlayerTeamInfo {
            player_id,
            team_id,
            leader_id: self.registry.leader_of_team(team_id),
        })
    }

    pub fn stats(&self) -> RegistryStats {
        RegistryStats {
            team_count: self.registry.team_count(),
            player_count: self.registry.player_count(),
            last_team_id: self.registry.last_team_id(),
            team_list_full: self.registry.is_team_list_full(),
        }
    }

    fn finish<T>(&self, operation: &'static str, result: Result<T, TeamError>) -> Result<T, TeamError> {
        match &result {
            Ok(_) => {
                record_team_operation(operation, "ok");
                record_team_count(self.registry.team_count());
            }
            Err(e) => {
                debug!(operation, code = e.code(), error = %e, "Team operation rejected");
                record_team_operation(operation, e.kind());
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::team::MockTeamRegistry;
    use mockall::predicate::eq;

    fn service(mock: MockTeamRegistry) -> TeamService<MockTeamRegistry> {
        TeamService::new(Arc::new(mock))
    }

    #[test]
    fn test_create_team_delegates() {
        let mut mock = MockTeamRegistry::new();
        mock.expect_create_team()
            .withf(|request| request.leader_id == PlayerId::new(1))
            .times(1)
            .returning(|_| Ok(TeamId::new(1)));
        mock.expect_team_count().returning(|| 1);

        let service = service(mock);
        let team_id = service.create_team(CreateTeamRequest::solo(1u64)).unwrap();

        assert_eq!(team_id, TeamId::new(1));
    }

    #[test]
    fn test_rejection_is_returned_unchanged() {
        let mut mock = MockTeamRegistry::new();
        mock.expect_join_team()
            .with(eq(TeamId::new(3)), eq(PlayerId::new(9)))
            .returning(|team_id, _| Err(TeamError::TeamFull { team_id }));

        let service = service(mock);
        let err = service.join_team(TeamId::new(3), PlayerId::new(9)).unwrap_err();

        assert_eq!(err, TeamError::TeamFull { team_id: TeamId::new(3) });
        assert_eq!(err.code(), 5009);
    }

    #[test]
    fn test_player_info() {
        let mut mock = MockTeamRegistry::new();
        mock.expect_team_id_of()
            .with(eq(PlayerId::new(2)))
            .returning(|_| TeamId::new(7));
        mock.expect_team_id_of()
            .with(eq(PlayerId::new(3)))
            .returning(|_| TeamId::INVALID);
        mock.expect_leader_of_team().returning(|_| PlayerId::new(1));

        let service = service(mock);

        assert_eq!(
            service.player_info(PlayerId::new(2)),
            Some(PlayerTeamInfo {
                player_id: PlayerId::new(2),
                team_id: TeamId::new(7),
                leader_id: PlayerId::new(1),
            })
        );
        assert_eq!(service.player_info(PlayerId::new(3)), None);
    }

    #[test]
    fn test_stats() {
        let mut mock = MockTeamRegistry::new();
        mock.expect_team_count().returning(|| 2);
        mock.expect_player_count().returning(|| 6);
        mock.expect_last_team_id().returning(|| TeamId::new(4));
        mock.expect_is_team_list_full().returning(|| false);

        let stats = service(mock).stats();

        assert_eq!(stats.team_count, 2);
        assert_eq!(stats.player_count, 6);
        assert_eq!(stats.last_team_id, TeamId::new(4));
        assert!(!stats.team_list_full);
    }
}
