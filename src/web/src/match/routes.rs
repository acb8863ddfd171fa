use crate::GameAppData;
use axum::Router;
use axum::routing::post;

pub fn routes() -> Router<GameAppData> {
    Router::new().route("/match", post(super::match_create_action))
}
