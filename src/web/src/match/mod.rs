pub mod routes;

use crate::{ApiError, ApiResult, GameAppData};
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::{Json, Router};
use engine::{GoalScorer, MatchEngine, MatchRequest, MatchResult, TeamSheet};
use log::info;
use serde::{Deserialize, Serialize};

pub fn match_routes() -> Router<GameAppData> {
    routes::routes()
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchCreateRequest {
    pub team1: String,
    pub team2: String,
    pub home_team: Option<String>,
    pub coach1: String,
    pub coach2: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    #[serde(flatten)]
    pub result: MatchResult,
    pub goal_scorers: Vec<GoalScorer>,
}

pub async fn match_create_action(
    State(state): State<GameAppData>,
    payload: Result<Json<MatchCreateRequest>, JsonRejection>,
) -> ApiResult<Json<MatchResponse>> {
    let Json(request) = payload?;

    let team1 = request.team1.trim();
    let team2 = request.team2.trim();

    if team1.is_empty() || team2.is_empty() {
        return Err(ApiError::BadRequest("two team names are required".to_string()));
    }

    if request.coach1.trim().is_empty() || request.coach2.trim().is_empty() {
        return Err(ApiError::BadRequest("two coach names are required".to_string()));
    }

    let players1 = state
        .database
        .team_players(team1)
        .ok_or_else(|| ApiError::NotFound(format!("team '{}' not found", team1)))?;

    let players2 = state
        .database
        .team_players(team2)
        .ok_or_else(|| ApiError::NotFound(format!("team '{}' not found", team2)))?;

    let home_team = request
        .home_team
        .as_deref()
        .map(str::trim)
        .filter(|home| !home.is_empty())
        .unwrap_or(team1)
        .to_string();

    let match_request = MatchRequest::new(
        TeamSheet::new(team1, request.coach1.trim(), players1),
        TeamSheet::new(team2, request.coach2.trim(), players2),
        Some(home_team),
    );

    let result = tokio::task::spawn_blocking(move || MatchEngine::new().simulate(&match_request)).await??;

    state.store.store_match(&result).await?;

    info!(
        "match played: {} {} - {} {}",
        result.team1, result.score1, result.score2, result.team2
    );

    Ok(Json(MatchResponse {
        goal_scorers: result.goal_scorers(),
        result,
    }))
}

#[cfg(test)]
mod tests {
    use crate::testing::TestApp;
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    fn request(team1: &str, team2: &str) -> Value {
        json!({
            "team1": team1,
            "team2": team2,
            "coach1": "Okan Buruk",
            "coach2": "Mikel Arteta",
        })
    }

    fn surviving_goals(body: &Value, team: &str) -> usize {
        body["events"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|event| event["event"] == "goal" && event["team"] == team)
            .count()
    }

    #[tokio::test]
    async fn test_match_played_and_stored() {
        let app = TestApp::new();

        let (status, body) = app.post("/api/match", request("Galatasaray", "Arsenal")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["team1"], "Galatasaray");
        assert_eq!(body["team2"], "Arsenal");

        assert_eq!(body["score1"].as_u64().unwrap() as usize, surviving_goals(&body, "Galatasaray"));
        assert_eq!(body["score2"].as_u64().unwrap() as usize, surviving_goals(&body, "Arsenal"));

        let possession1 = body["stats"]["Galatasaray"]["possession"].as_i64().unwrap();
        let possession2 = body["stats"]["Arsenal"]["possession"].as_i64().unwrap();
        assert_eq!(possession1 + possession2, 100);

        let scorers = body["goalScorers"].as_array().unwrap();
        assert_eq!(
            scorers.len() as u64,
            body["score1"].as_u64().unwrap() + body["score2"].as_u64().unwrap()
        );

        assert!(body["coachComments"]["Okan Buruk"].is_string());
        assert!(body["coachComments"]["Mikel Arteta"].is_string());
        assert!(body["date"].is_string());

        assert_eq!(app.stored_files("matches"), 1);
    }

    #[tokio::test]
    async fn test_missing_team_is_bad_request() {
        let app = TestApp::new();

        let (status, body) = app
            .post("/api/match", json!({ "team1": "Galatasaray", "coach1": "A", "coach2": "B" }))
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "two team names are required");
    }

    #[tokio::test]
    async fn test_missing_coach_is_bad_request() {
        let app = TestApp::new();

        let (status, body) = app
            .post("/api/match", json!({ "team1": "Galatasaray", "team2": "Arsenal", "coach1": "A" }))
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "two coach names are required");
    }

    #[tokio::test]
    async fn test_same_coach_is_bad_request() {
        let app = TestApp::new();

        let body = json!({
            "team1": "Galatasaray",
            "team2": "Arsenal",
            "coach1": "Same Coach",
            "coach2": "Same Coach",
        });
        let (status, body) = app.post("/api/match", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid input: the two coaches must be different");
        assert_eq!(app.stored_files("matches"), 0);
    }

    #[tokio::test]
    async fn test_wrongly_typed_body_is_bad_request() {
        let app = TestApp::new();

        let body = json!({ "team1": 5, "team2": "Arsenal", "coach1": "A", "coach2": "B" });
        let (status, body) = app.post("/api/match", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("team1"));
    }

    #[tokio::test]
    async fn test_body_without_content_type_is_bad_request() {
        let app = TestApp::new();

        let (status, body) = app
            .post_plain("/api/match", &request("Galatasaray", "Arsenal").to_string())
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_unknown_team_is_not_found() {
        let app = TestApp::new();

        let (status, _) = app.post("/api/match", request("Galatasaray", "Atlantis FC")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(app.stored_files("matches"), 0);
    }

    #[tokio::test]
    async fn test_team_against_itself_is_bad_request() {
        let app = TestApp::new();

        let (status, _) = app.post("/api/match", request("Chelsea", "Chelsea")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
