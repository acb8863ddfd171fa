use crate::{DatabaseEntity, DatabaseError, DatabaseResult};
use engine::Player;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

const STATIC_TEAM_RATINGS_JSON: &str = include_str!("../data/team_ratings.json");

/// One rating document: a team id and its rated players.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamRatingEntity {
    pub team: u32,
    pub data: TeamRatingDataEntity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamRatingDataEntity {
    pub items: Vec<Player>,
}

pub struct DatabaseLoader;

impl DatabaseLoader {
    /// Ratings bundled with the binary.
    pub fn load() -> DatabaseResult<DatabaseEntity> {
        Self::from_json(STATIC_TEAM_RATINGS_JSON)
    }

    pub fn load_from_path(path: &Path) -> DatabaseResult<DatabaseEntity> {
        let json = std::fs::read_to_string(path).map_err(|source| DatabaseError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        info!("loading team ratings from {}", path.display());

        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> DatabaseResult<DatabaseEntity> {
        let team_ratings: Vec<TeamRatingEntity> = serde_json::from_str(json)?;

        Ok(DatabaseEntity::new(team_ratings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_embedded_ratings_load() {
        let database = DatabaseLoader::load().unwrap();

        assert!(!database.team_ratings.is_empty());
        assert!(database.players().count() > 0);
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"team": 5, "data": {{"items": [{{
                "id": 1, "overallRating": 70, "firstName": "Test", "lastName": "Keeper",
                "skillMoves": 1, "weakFootAbility": 3,
                "team": {{"id": 5, "label": "Test FC"}},
                "position": {{"label": "Goalkeeper"}}
            }}]}}}}]"#
        )
        .unwrap();

        let database = DatabaseLoader::load_from_path(file.path()).unwrap();

        assert_eq!(database.team_names(), vec!["Test FC".to_string()]);
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = DatabaseLoader::load_from_path(Path::new("/definitely/not/here.json"));

        assert!(matches!(result, Err(DatabaseError::Io { .. })));
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        assert!(matches!(
            DatabaseLoader::from_json("{ not json"),
            Err(DatabaseError::Json(_))
        ));
    }
}
