//! Team endpoints

use axum::extract::{Path, State};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{
    ApiError, AppointLeaderRequest, ApplyRequest, BulkJoinRequest, CreateTeamApiRequest,
    CreateTeamResponse, DisbandRequest, JoinRequest, Json, KickRequest, ListTeamsResponse,
    OperationResponse, StatsResponse, TeamResponse,
};
use crate::domain::team::{CreateTeamRequest, PlayerId, TeamError, TeamId};

/// POST /v1/teams
pub async fn create_team(
    State(state): State<AppState>,
    Json(request): Json<CreateTeamApiRequest>,
) -> Result<Json<CreateTeamResponse>, ApiError> {
    debug!(leader_id = %request.leader_id, "Creating team");

    let capacity = request.capacity.unwrap_or(state.default_capacity);
    if capacity == 0 {
        return Err(ApiError::bad_request("Team capacity must be at least 1"));
    }

    let create = CreateTeamRequest::new(request.leader_id, request.members).with_capacity(capacity);
    let team_id = state.team_service.create_team(create)?;

    Ok(Json(CreateTeamResponse { team_id }))
}

/// GET /v1/teams
pub async fn list_teams(State(state): State<AppState>) -> Json<ListTeamsResponse> {
    let teams: Vec<TeamResponse> = state
        .team_service
        .list()
        .iter()
        .map(TeamResponse::from)
        .collect();
    let total = teams.len();

    Json(ListTeamsResponse { teams, total })
}

/// GET /v1/teams/{team_id}
pub async fn get_team(
    State(state): State<AppState>,
    Path(team_id): Path<u64>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team_id = TeamId::new(team_id);
    let team = state
        .team_service
        .get(team_id)
        .ok_or(TeamError::NoSuchTeam { team_id })?;

    Ok(Json(TeamResponse::from(&team)))
}

/// POST /v1/teams/{team_id}/members
pub async fn join_team(
    State(state): State<AppState>,
    Path(team_id): Path<u64>,
    Json(request): Json<JoinRequest>,
) -> Result<Json<OperationResponse>, ApiError> {
    state
        .team_service
        .join_team(TeamId::new(team_id), request.player_id)?;

    Ok(Json(OperationResponse::ok()))
}

/// POST /v1/teams/{team_id}/members/bulk
pub async fn join_team_bulk(
    State(state): State<AppState>,
    Path(team_id): Path<u64>,
    Json(request): Json<BulkJoinRequest>,
) -> Result<Json<OperationResponse>, ApiError> {
    state
        .team_service
        .join_team_bulk(TeamId::new(team_id), &request.player_ids)?;

    Ok(Json(OperationResponse::ok()))
}

/// POST /v1/teams/{team_id}/kick
pub async fn kick_member(
    State(state): State<AppState>,
    Path(team_id): Path<u64>,
    Json(request): Json<KickRequest>,
) -> Result<Json<OperationResponse>, ApiError> {
    state.team_service.kick_member(
        TeamId::new(team_id),
        request.acting_leader_id,
        request.target_id,
    )?;

    Ok(Json(OperationResponse::ok()))
}

/// POST /v1/teams/{team_id}/leader
pub async fn appoint_leader(
    State(state): State<AppState>,
    Path(team_id): Path<u64>,
    Json(request): Json<AppointLeaderRequest>,
) -> Result<Json<OperationResponse>, ApiError> {
    state.team_service.appoint_leader(
        TeamId::new(team_id),
        request.acting_leader_id,
        request.new_leader_id,
    )?;

    Ok(Json(OperationResponse::ok()))
}

/// POST /v1/teams/{team_id}/disband
pub async fn disband_team(
    State(state): State<AppState>,
    Path(team_id): Path<u64>,
    Json(request): Json<DisbandRequest>,
) -> Result<Json<OperationResponse>, ApiError> {
    state
        .team_service
        .disband(TeamId::new(team_id), request.acting_leader_id)?;

    Ok(Json(OperationResponse::ok()))
}

/// POST /v1/teams/{team_id}/applications
pub async fn apply_to_team(
    State(state): State<AppState>,
    Path(team_id): Path<u64>,
    Json(request): Json<ApplyRequest>,
) -> Result<Json<OperationResponse>, ApiError> {
    state
        .team_service
        .apply_to_team(TeamId::new(team_id), request.player_id)?;

    Ok(Json(OperationResponse::ok()))
}

/// DELETE /v1/teams/{team_id}/applications/{player_id}
pub async fn withdraw_application(
    State(state): State<AppState>,
    Path((team_id, player_id)): Path<(u64, u64)>,
) -> Result<Json<OperationResponse>, ApiError> {
    let removed = state
        .team_service
        .withdraw_application(TeamId::new(team_id), PlayerId::new(player_id))?;

    Ok(Json(OperationResponse::removed(usize::from(removed))))
}

/// DELETE /v1/teams/{team_id}/applications
pub async fn clear_applications(
    State(state): State<AppState>,
    Path(team_id): Path<u64>,
) -> Result<Json<OperationResponse>, ApiError> {
    let cleared = state
        .team_service
        .clear_applications(TeamId::new(team_id))?;

    Ok(Json(OperationResponse::removed(cleared)))
}

/// GET /v1/stats
pub async fn stats(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.team_service.stats()))
}
