use crate::player::{Player, PlayerPosition, PlayerTeam};
use crate::shared::FullName;

const DEFAULT_SKILL_MOVES: i32 = 2;
const DEFAULT_WEAK_FOOT: i32 = 3;

// Builder for Player
#[derive(Default)]
pub struct PlayerBuilder {
    id: Option<u32>,
    full_name: Option<FullName>,
    overall_rating: Option<i32>,
    skill_moves: Option<i32>,
    weak_foot_ability: Option<i32>,
    position: Option<PlayerPosition>,
    alternate_positions: Vec<PlayerPosition>,
    rank: Option<u32>,
    league_name: Option<String>,
    team: Option<PlayerTeam>,
}

impl PlayerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn full_name(mut self, full_name: FullName) -> Self {
        self.full_name = Some(full_name);
        self
    }

    pub fn overall_rating(mut self, overall_rating: i32) -> Self {
        self.overall_rating = Some(overall_rating);
        self
    }

    pub fn skill_moves(mut self, skill_moves: i32) -> Self {
        self.skill_moves = Some(skill_moves);
        self
    }

    pub fn weak_foot_ability(mut self, weak_foot_ability: i32) -> Self {
        self.weak_foot_ability = Some(weak_foot_ability);
        self
    }

    pub fn position(mut self, label: &str) -> Self {
        self.position = Some(PlayerPosition::new(label));
        self
    }

    pub fn alternate_positions(mut self, labels: &[&str]) -> Self {
        self.alternate_positions = labels.iter().map(|label| PlayerPosition::new(*label)).collect();
        self
    }

    pub fn rank(mut self, rank: u32) -> Self {
        self.rank = Some(rank);
        self
    }

    pub fn league_name(mut self, league_name: &str) -> Self {
        self.league_name = Some(league_name.to_string());
        self
    }

    pub fn team(mut self, id: u32, label: &str) -> Self {
        self.team = Some(PlayerTeam {
            id,
            label: label.to_string(),
        });
        self
    }

    pub fn build(self) -> Result<Player, String> {
        Ok(Player {
            id: self.id.ok_or("id is required")?,
            full_name: self.full_name.ok_or("full_name is required")?,
            overall_rating: self.overall_rating.ok_or("overall_rating is required")?,
            skill_moves: self.skill_moves.unwrap_or(DEFAULT_SKILL_MOVES),
            weak_foot_ability: self.weak_foot_ability.unwrap_or(DEFAULT_WEAK_FOOT),
            position: self.position.ok_or("position is required")?,
            alternate_positions: self.alternate_positions,
            rank: self.rank,
            league_name: self.league_name,
            team: self.team,
        })
    }
}
