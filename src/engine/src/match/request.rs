use crate::error::{EngineError, EngineResult};
use crate::player::Player;
use crate::r#match::MatchSide;

#[derive(Debug, Clone)]
pub struct TeamSheet {
    pub name: String,
    pub coach: String,
    pub players: Vec<Player>,
}

impl TeamSheet {
    pub fn new(name: impl Into<String>, coach: impl Into<String>, players: Vec<Player>) -> Self {
        TeamSheet {
            name: name.into(),
            coach: coach.into(),
            players,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchRequest {
    pub team1: TeamSheet,
    pub team2: TeamSheet,
    /// Label of the home team, `team1` plays at home when absent.
    pub home_team: Option<String>,
}

impl MatchRequest {
    pub fn new(team1: TeamSheet, team2: TeamSheet, home_team: Option<String>) -> Self {
        MatchRequest {
            team1,
            team2,
            home_team,
        }
    }

    pub fn team(&self, side: MatchSide) -> &TeamSheet {
        side.pick(&self.team1, &self.team2)
    }

    /// Side that gets the home bonus. A label matching neither team gives no bonus.
    pub fn home_side(&self) -> Option<MatchSide> {
        match self.home_team.as_deref() {
            None => Some(MatchSide::First),
            Some(home) if home == self.team1.name => Some(MatchSide::First),
            Some(home) if home == self.team2.name => Some(MatchSide::Second),
            Some(_) => None,
        }
    }

    pub fn validate(&self) -> EngineResult<()> {
        if self.team1.name.trim().is_empty() || self.team2.name.trim().is_empty() {
            return Err(EngineError::invalid_input("two team names are required"));
        }

        if self.team1.coach.trim().is_empty() || self.team2.coach.trim().is_empty() {
            return Err(EngineError::invalid_input("two coach names are required"));
        }

        if self.team1.name == self.team2.name {
            return Err(EngineError::invalid_input("a team cannot play against itself"));
        }

        if self.team1.coach.trim() == self.team2.coach.trim() {
            return Err(EngineError::invalid_input("the two coaches must be different"));
        }

        for team in [&self.team1, &self.team2] {
            if team.players.is_empty() {
                return Err(EngineError::empty_roster(&team.name));
            }
        }

        Ok(())
    }
}
