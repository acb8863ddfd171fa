use crate::TeamRatingEntity;
use engine::{LeagueTeamInput, Player};
use itertools::Itertools;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummary {
    pub id: u32,
    pub label: String,
    pub league_name: Option<String>,
}

/// In-memory ratings repository.
pub struct DatabaseEntity {
    pub team_ratings: Vec<TeamRatingEntity>,
}

impl DatabaseEntity {
    pub fn new(team_ratings: Vec<TeamRatingEntity>) -> Self {
        DatabaseEntity { team_ratings }
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.team_ratings
            .iter()
            .flat_map(|rating| rating.data.items.iter())
    }

    /// Distinct teams found on the players, sorted by label.
    pub fn teams(&self) -> Vec<TeamSummary> {
        self.players()
            .filter_map(|player| {
                player.team.as_ref().map(|team| TeamSummary {
                    id: team.id,
                    label: team.label.clone(),
                    league_name: player.league_name.clone(),
                })
            })
            .unique_by(|team| team.id)
            .sorted_by(|a, b| a.label.cmp(&b.label))
            .collect()
    }

    pub fn team_names(&self) -> Vec<String> {
        self.players()
            .filter_map(|player| player.team_label())
            .unique()
            .sorted()
            .map(str::to_string)
            .collect()
    }

    pub fn team_names_by_league(&self, league_name: &str) -> Vec<String> {
        self.players()
            .filter(|player| player.league_name.as_deref() == Some(league_name))
            .filter_map(|player| player.team_label())
            .unique()
            .sorted()
            .map(str::to_string)
            .collect()
    }

    pub fn team(&self, team_id: u32) -> Option<TeamSummary> {
        self.teams().into_iter().find(|team| team.id == team_id)
    }

    /// Players of the team with `label`, `None` when no player belongs to it.
    pub fn team_players(&self, label: &str) -> Option<Vec<Player>> {
        let players: Vec<Player> = self
            .players()
            .filter(|player| player.team_label() == Some(label))
            .cloned()
            .collect();

        if players.is_empty() { None } else { Some(players) }
    }

    pub fn league_teams(&self, league_name: &str) -> Vec<LeagueTeamInput> {
        self.teams()
            .into_iter()
            .filter(|team| team.league_name.as_deref() == Some(league_name))
            .map(|team| LeagueTeamInput {
                players: self.team_players(&team.label).unwrap_or_default(),
                team_id: team.id,
                team_label: team.label,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TeamRatingDataEntity;
    use engine::FullName;

    fn player(id: u32, team_id: u32, team: &str, league: &str) -> Player {
        Player::builder()
            .id(id)
            .full_name(FullName::new("P", id.to_string()))
            .position("Striker")
            .overall_rating(70)
            .team(team_id, team)
            .league_name(league)
            .build()
            .unwrap()
    }

    fn database() -> DatabaseEntity {
        DatabaseEntity::new(vec![
            TeamRatingEntity {
                team: 2,
                data: TeamRatingDataEntity {
                    items: vec![player(1, 2, "Zeta", "League A"), player(2, 2, "Zeta", "League A")],
                },
            },
            TeamRatingEntity {
                team: 1,
                data: TeamRatingDataEntity {
                    items: vec![player(3, 1, "Alpha", "League A")],
                },
            },
            TeamRatingEntity {
                team: 3,
                data: TeamRatingDataEntity {
                    items: vec![player(4, 3, "Mid", "League B")],
                },
            },
        ])
    }

    #[test]
    fn test_team_names_are_unique_and_sorted() {
        assert_eq!(database().team_names(), vec!["Alpha", "Mid", "Zeta"]);
    }

    #[test]
    fn test_team_names_by_league() {
        assert_eq!(database().team_names_by_league("League A"), vec!["Alpha", "Zeta"]);
        assert!(database().team_names_by_league("Unknown").is_empty());
    }

    #[test]
    fn test_team_players_lookup() {
        let db = database();

        assert_eq!(db.team_players("Zeta").map(|p| p.len()), Some(2));
        assert_eq!(db.team_players("Nobody"), None);
    }

    #[test]
    fn test_team_by_id() {
        let team = database().team(3).unwrap();

        assert_eq!(team.label, "Mid");
        assert_eq!(team.league_name.as_deref(), Some("League B"));
        assert!(database().team(99).is_none());
    }

    #[test]
    fn test_league_teams_carry_players() {
        let teams = database().league_teams("League A");

        let labels: Vec<&str> = teams.iter().map(|t| t.team_label.as_str()).collect();
        assert_eq!(labels, vec!["Alpha", "Zeta"]);
        assert_eq!(teams[1].players.len(), 2);
    }
}
