use crate::error::{EngineError, EngineResult};
use crate::player::Player;

/// Weak foot ability every player is measured against.
const WEAK_FOOT_BASELINE: i32 = 5;
const SKILL_MOVES_WEIGHT: i32 = 3;

pub struct PlayerStrength;

impl PlayerStrength {
    pub fn contribution(player: &Player) -> i32 {
        player.overall_rating + player.skill_moves * SKILL_MOVES_WEIGHT
            - (WEAK_FOOT_BASELINE - player.weak_foot_ability)
    }
}

pub struct TeamStrength;

impl TeamStrength {
    /// Rounded mean of the players' contributions.
    pub fn calculate(team: &str, players: &[Player]) -> EngineResult<i32> {
        if players.is_empty() {
            return Err(EngineError::empty_roster(team));
        }

        let total: i32 = players.iter().map(PlayerStrength::contribution).sum();

        Ok((total as f64 / players.len() as f64).round() as i32)
    }
}
