pub mod routes;

use crate::{ApiError, ApiResult, GameAppData};
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::{Json, Router};
use engine::{League, LeagueBuilder, Player};
use log::info;
use serde::{Deserialize, Serialize};

pub fn league_routes() -> Router<GameAppData> {
    routes::routes()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueCreateRequest {
    pub team_id: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct LeagueCreateResponse {
    pub message: String,
    pub league: League,
}

/// Builds a league out of the selected team and its league mates.
pub async fn league_create_action(
    State(state): State<GameAppData>,
    payload: Result<Json<LeagueCreateRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<LeagueCreateResponse>)> {
    let Json(request) = payload?;

    let team_id = request
        .team_id
        .ok_or_else(|| ApiError::BadRequest("teamId is required".to_string()))?;

    let team = state
        .database
        .team(team_id)
        .ok_or_else(|| ApiError::NotFound(format!("team {} not found", team_id)))?;

    let league_name = team
        .league_name
        .as_deref()
        .ok_or_else(|| ApiError::NotFound(format!("league of team {} not found", team.label)))?;

    let teams = state.database.league_teams(league_name);

    if teams.is_empty() {
        return Err(ApiError::NotFound(format!("no teams found in {}", league_name)));
    }

    let pool: Vec<Player> = state.database.players().cloned().collect();
    let name = format!("{} League", team.label);

    let league = tokio::task::spawn_blocking(move || LeagueBuilder::create(&name, &teams, &pool)).await?;

    state.store.store_league(&league).await?;

    info!("league '{}' stored with {} teams", league.name, league.teams.len());

    Ok((
        StatusCode::CREATED,
        Json(LeagueCreateResponse {
            message: "league created".to_string(),
            league,
        }),
    ))
}
