use crate::GameAppData;
use axum::Router;
use axum::routing::post;

pub fn routes() -> Router<GameAppData> {
    Router::new().route("/create-league", post(super::league_create_action))
}
