use serde::{Deserialize, Serialize};

pub const GOALKEEPER: &str = "Goalkeeper";
pub const CENTRE_BACK: &str = "Centre-Back";
pub const RIGHT_BACK: &str = "Right-Back";
pub const LEFT_BACK: &str = "Left-Back";
pub const DEFENSIVE_MIDFIELDER: &str = "Defensive Midfielder";
pub const CENTRAL_MIDFIELDER: &str = "Central Midfielder";
pub const RIGHT_WINGER: &str = "Right Winger";
pub const LEFT_WINGER: &str = "Left Winger";
pub const STRIKER: &str = "Striker";

pub const STARTING_PLAYERS: usize = 11;

const STANDARD_FORMATION: [(&str, usize); 9] = [
    (GOALKEEPER, 1),
    (CENTRE_BACK, 2),
    (RIGHT_BACK, 1),
    (LEFT_BACK, 1),
    (DEFENSIVE_MIDFIELDER, 1),
    (CENTRAL_MIDFIELDER, 2),
    (RIGHT_WINGER, 1),
    (LEFT_WINGER, 1),
    (STRIKER, 1),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormationSlot {
    pub position: String,
    pub count: usize,
}

/// Ordered position -> headcount table. Slots are filled in this order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formation {
    slots: Vec<FormationSlot>,
}

impl Formation {
    pub fn new(slots: &[(&str, usize)]) -> Self {
        Formation {
            slots: slots
                .iter()
                .map(|&(position, count)| FormationSlot {
                    position: position.to_string(),
                    count,
                })
                .collect(),
        }
    }

    /// 4-1-2-3 used for every generated squad.
    pub fn standard() -> Self {
        Formation::new(&STANDARD_FORMATION)
    }

    pub fn slots(&self) -> &[FormationSlot] {
        &self.slots
    }

    pub fn positions(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(|slot| slot.position.as_str())
    }

    pub fn total_players(&self) -> usize {
        self.slots.iter().map(|slot| slot.count).sum()
    }

    pub fn is_complete(&self) -> bool {
        self.total_players() == STARTING_PLAYERS
    }
}

impl Default for Formation {
    fn default() -> Self {
        Formation::standard()
    }
}

pub struct PositionAlternatives;

impl PositionAlternatives {
    /// Positions tried, in order, when nobody can play `position`.
    pub fn for_position(position: &str) -> &'static [&'static str] {
        match position {
            RIGHT_WINGER => &[RIGHT_BACK],
            LEFT_WINGER => &[LEFT_BACK],
            _ => &[],
        }
    }
}
