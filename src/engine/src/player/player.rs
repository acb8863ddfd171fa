use crate::player::builder::PlayerBuilder;
use crate::shared::FullName;
use serde::{Deserialize, Serialize};

/// A rated player as stored in the ratings repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: u32,
    #[serde(flatten)]
    pub full_name: FullName,
    pub overall_rating: i32,
    pub skill_moves: i32,
    pub weak_foot_ability: i32,
    pub position: PlayerPosition,
    #[serde(default)]
    pub alternate_positions: Vec<PlayerPosition>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub league_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<PlayerTeam>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPosition {
    pub label: String,
}

impl PlayerPosition {
    pub fn new(label: impl Into<String>) -> Self {
        PlayerPosition {
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerTeam {
    pub id: u32,
    pub label: String,
}

impl Player {
    pub fn builder() -> PlayerBuilder {
        PlayerBuilder::new()
    }

    /// True when the primary or any alternate position carries `label`.
    pub fn plays(&self, label: &str) -> bool {
        self.position.label == label
            || self
                .alternate_positions
                .iter()
                .any(|position| position.label == label)
    }

    pub fn team_label(&self) -> Option<&str> {
        self.team.as_ref().map(|team| team.label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plays_primary_and_alternate_positions() {
        let player = Player::builder()
            .id(1)
            .full_name(FullName::new("Kerem", "Aktürkoğlu"))
            .position("Left Winger")
            .alternate_positions(&["Striker"])
            .overall_rating(79)
            .build()
            .unwrap();

        assert!(player.plays("Left Winger"));
        assert!(player.plays("Striker"));
        assert!(!player.plays("Goalkeeper"));
    }

    #[test]
    fn test_deserializes_rating_document_item() {
        let json = r#"{
            "id": 7,
            "rank": 3,
            "overallRating": 84,
            "firstName": "Hakan",
            "lastName": "Çalhanoğlu",
            "skillMoves": 3,
            "weakFootAbility": 4,
            "leagueName": "Serie A",
            "team": { "id": 44, "label": "Inter" },
            "position": { "label": "Central Midfielder" },
            "alternatePositions": [{ "label": "Defensive Midfielder" }]
        }"#;

        let player: Player = serde_json::from_str(json).unwrap();

        assert_eq!(player.id, 7);
        assert_eq!(player.full_name.to_string(), "Hakan Çalhanoğlu");
        assert_eq!(player.overall_rating, 84);
        assert_eq!(player.team_label(), Some("Inter"));
        assert!(player.plays("Defensive Midfielder"));
    }
}
