//! v1 API endpoints

pub mod players;
pub mod teams;

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/teams", get(teams::list_teams).post(teams::create_team))
        .route("/teams/{team_id}", get(teams::get_team))
        .route("/teams/{team_id}/members", post(teams::join_team))
        .route("/teams/{team_id}/members/bulk", post(teams::join_team_bulk))
        .route("/teams/{team_id}/kick", post(teams::kick_member))
        .route("/teams/{team_id}/leader", post(teams::appoint_leader))
        .route("/teams/{team_id}/disband", post(teams::disband_team))
        .route(
            "/teams/{team_id}/applications",
            post(teams::apply_to_team).delete(teams::clear_applications),
        )
        .route(
            "/teams/{team_id}/applications/{player_id}",
            delete(teams::withdraw_application),
        )
        .route("/players/{player_id}", get(players::get_player_team))
        .route("/players/{player_id}/leave", post(players::leave_team))
        .route("/stats", get(teams::stats))
}
