use crate::GameAppData;
use axum::Router;
use axum::routing::post;

pub fn routes() -> Router<GameAppData> {
    Router::new().route("/squad", post(super::squad_create_action))
}
