pub mod routes;

use crate::{ApiError, ApiResult, GameAppData};
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::{Json, Router};
use engine::{Formation, Squad, SquadSelector};
use log::info;
use serde::{Deserialize, Serialize};

pub fn squad_routes() -> Router<GameAppData> {
    routes::routes()
}

#[derive(Debug, Deserialize)]
pub struct SquadRequest {
    #[serde(default)]
    pub team: String,
}

#[derive(Debug, Serialize)]
pub struct SquadResponse {
    pub team: String,
    pub squad: Squad,
}

pub async fn squad_create_action(
    State(state): State<GameAppData>,
    payload: Result<Json<SquadRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<SquadResponse>)> {
    let Json(request) = payload?;

    let team = request.team.trim();

    if team.is_empty() {
        return Err(ApiError::BadRequest("team is required".to_string()));
    }

    let players = state
        .database
        .team_players(team)
        .ok_or_else(|| ApiError::NotFound(format!("team '{}' not found", team)))?;

    let squad = SquadSelector::select(team, &Formation::standard(), &players)?;

    state.store.store_squad(team, &squad).await?;

    info!(
        "squad for {} selected: {} starters, {} substitutes",
        team,
        squad.starting.len(),
        squad.bench.len()
    );

    Ok((
        StatusCode::CREATED,
        Json(SquadResponse {
            team: team.to_string(),
            squad,
        }),
    ))
}
