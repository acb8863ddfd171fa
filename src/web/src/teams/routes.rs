use crate::GameAppData;
use axum::Router;
use axum::routing::get;

pub fn routes() -> Router<GameAppData> {
    Router::new()
        .route("/getTeams", get(super::teams_action))
        .route("/getTeamsWithLeagueName", get(super::teams_by_league_action))
        .route("/getTeamsWithPlayer", get(super::teams_with_players_action))
}
