//! Player endpoints

use axum::extract::{Path, State};

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, OperationResponse, PlayerTeamResponse};
use crate::domain::team::{PlayerId, TeamError};

/// GET /v1/players/{player_id}
pub async fn get_player_team(
    State(state): State<AppState>,
    Path(player_id): Path<u64>,
) -> Result<Json<PlayerTeamResponse>, ApiError> {
    let info = state
        .team_service
        .player_info(PlayerId::new(player_id))
        .ok_or_else(|| {
            let err = TeamError::NotInTeam {
                player_id: PlayerId::new(player_id),
            };
            ApiError::not_found(err.to_string()).with_code(err.code())
        })?;

    Ok(Json(PlayerTeamResponse::from(info)))
}

/// POST /v1/players/{player_id}/leave
pub async fn leave_team(
    State(state): State<AppState>,
    Path(player_id): Path<u64>,
) -> Result<Json<OperationResponse>, ApiError> {
    state.team_service.leave_team(PlayerId::new(player_id))?;

    Ok(Json(OperationResponse::ok()))
}
