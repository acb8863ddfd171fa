use crate::player::Player;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SquadSlot {
    Starter,
    Substitute,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SquadPlayer {
    #[serde(flatten)]
    pub player: Player,
    pub slot: SquadSlot,
    /// Formation position a starter was picked for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_position: Option<String>,
}

impl SquadPlayer {
    pub fn starter(player: Player, position: &str) -> Self {
        SquadPlayer {
            player,
            slot: SquadSlot::Starter,
            selected_position: Some(position.to_string()),
        }
    }

    pub fn substitute(player: Player) -> Self {
        SquadPlayer {
            player,
            slot: SquadSlot::Substitute,
            selected_position: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Squad {
    pub starting: Vec<SquadPlayer>,
    pub bench: Vec<SquadPlayer>,
}

impl Squad {
    pub fn players(&self) -> impl Iterator<Item = &SquadPlayer> {
        self.starting.iter().chain(self.bench.iter())
    }

    pub fn is_full(&self) -> bool {
        self.starting.len() == crate::squad::STARTING_PLAYERS
    }
}
