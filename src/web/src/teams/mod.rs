pub mod routes;

use crate::{ApiError, ApiResult, GameAppData};
use axum::Json;
use axum::Router;
use axum::extract::{Query, State};
use database::TeamRatingEntity;
use serde::{Deserialize, Serialize};

pub fn team_routes() -> Router<GameAppData> {
    routes::routes()
}

#[derive(Debug, Serialize)]
pub struct TeamsResponse {
    pub length: usize,
    pub teams: Vec<String>,
}

impl From<Vec<String>> for TeamsResponse {
    fn from(teams: Vec<String>) -> Self {
        TeamsResponse {
            length: teams.len(),
            teams,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamsByLeagueQuery {
    pub league_name: Option<String>,
}

pub async fn teams_action(State(state): State<GameAppData>) -> Json<TeamsResponse> {
    Json(state.database.team_names().into())
}

pub async fn teams_by_league_action(
    State(state): State<GameAppData>,
    Query(query): Query<TeamsByLeagueQuery>,
) -> ApiResult<Json<TeamsResponse>> {
    let league_name = query
        .league_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ApiError::BadRequest("leagueName is required".to_string()))?;

    Ok(Json(state.database.team_names_by_league(league_name).into()))
}

pub async fn teams_with_players_action(State(state): State<GameAppData>) -> Json<Vec<TeamRatingEntity>> {
    Json(state.database.team_ratings.clone())
}
