use crate::player::Player;
use crate::squad::{Formation, Squad, SquadSelector};
use crate::transfers::{TransferListBuilder, TransferListing};
use log::{info, warn};
use rand::RngExt;
use rayon::prelude::*;
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct LeagueTeamInput {
    pub team_id: u32,
    pub team_label: String,
    pub players: Vec<Player>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueTeam {
    pub team_id: u32,
    pub team_label: String,
    pub squad: Squad,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct League {
    pub name: String,
    pub is_active: bool,
    pub teams: Vec<LeagueTeam>,
    pub transfer_list: Vec<TransferListing>,
}

pub struct LeagueBuilder;

impl LeagueBuilder {
    pub fn create(name: &str, teams: &[LeagueTeamInput], pool: &[Player]) -> League {
        Self::build(name, teams, pool, &mut rand::rng())
    }

    /// Squads for every team with the standard formation, plus a transfer list drawn from `pool`.
    pub fn build<R: RngExt>(name: &str, teams: &[LeagueTeamInput], pool: &[Player], rng: &mut R) -> League {
        let formation = Formation::standard();

        let league_teams: Vec<LeagueTeam> = teams
            .par_iter()
            .filter_map(|team| {
                match SquadSelector::select(&team.team_label, &formation, &team.players) {
                    Ok(squad) => Some(LeagueTeam {
                        team_id: team.team_id,
                        team_label: team.team_label.clone(),
                        squad,
                    }),
                    Err(err) => {
                        warn!("skipping team {}: {}", team.team_label, err);
                        None
                    }
                }
            })
            .collect();

        let transfer_list = TransferListBuilder::build(&formation, pool, rng);

        info!(
            "league '{}' created: {} teams, {} transfer listings",
            name,
            league_teams.len(),
            transfer_list.len()
        );

        League {
            name: name.to_string(),
            is_active: true,
            teams: league_teams,
            transfer_list,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::FullName;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn team(team_id: u32, label: &str, size: u32) -> LeagueTeamInput {
        let formation = Formation::standard();
        let positions: Vec<&str> = formation.positions().collect();

        let players = (0..size)
            .map(|n| {
                Player::builder()
                    .id(team_id * 100 + n)
                    .full_name(FullName::new(label, n.to_string()))
                    .position(positions[n as usize % positions.len()])
                    .overall_rating(55 + (n as i32 * 3) % 35)
                    .team(team_id, label)
                    .build()
                    .unwrap()
            })
            .collect();

        LeagueTeamInput {
            team_id,
            team_label: label.to_string(),
            players,
        }
    }

    #[test]
    fn test_builds_squads_in_team_order() {
        let teams = vec![team(1, "Alpha", 20), team(2, "Beta", 18), team(3, "Gamma", 16)];
        let pool: Vec<Player> = teams.iter().flat_map(|t| t.players.clone()).collect();
        let mut rng = StdRng::seed_from_u64(10);

        let league = LeagueBuilder::build("Test League", &teams, &pool, &mut rng);

        let labels: Vec<&str> = league.teams.iter().map(|t| t.team_label.as_str()).collect();
        assert_eq!(labels, vec!["Alpha", "Beta", "Gamma"]);
        assert!(league.is_active);
        assert!(league.teams.iter().all(|t| t.squad.bench.len() <= 7));
        assert!(!league.transfer_list.is_empty());
    }

    #[test]
    fn test_team_without_players_is_skipped() {
        let teams = vec![team(1, "Alpha", 20), team(2, "Ghost", 0)];
        let mut rng = StdRng::seed_from_u64(10);

        let league = LeagueBuilder::build("Test League", &teams, &teams[0].players, &mut rng);

        assert_eq!(league.teams.len(), 1);
        assert_eq!(league.teams[0].team_label, "Alpha");
    }
}
