use crate::leagues::league_routes;
use crate::r#match::match_routes;
use crate::squad::squad_routes;
use crate::teams::team_routes;
use crate::{ApiError, GameAppData};
use axum::Router;
use axum::http::Uri;

async fn not_found_handler(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}

pub struct ServerRoutes;

impl ServerRoutes {
    pub fn create() -> Router<GameAppData> {
        let api = Router::<GameAppData>::new()
            .merge(team_routes())
            .merge(squad_routes())
            .merge(match_routes())
            .merge(league_routes());

        Router::<GameAppData>::new()
            .nest("/api", api)
            .fallback(not_found_handler)
    }
}
