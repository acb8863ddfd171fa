use crate::player::Player;
use serde::{Serialize, Serializer};

pub const FIRST_MINUTE: u8 = 1;
pub const LAST_MINUTE: u8 = 90;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchSide {
    First,
    Second,
}

impl MatchSide {
    pub fn pick<T>(self, first: T, second: T) -> T {
        match self {
            MatchSide::First => first,
            MatchSide::Second => second,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarDecision {
    NotReviewed,
    Confirmed,
    Overturned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchEventKind {
    Goal(VarDecision),
    YellowCard,
    RedCard,
    Generic,
}

impl MatchEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchEventKind::Goal(VarDecision::Overturned) => "goal_disallowed",
            MatchEventKind::Goal(_) => "goal",
            MatchEventKind::YellowCard => "yellow_card",
            MatchEventKind::RedCard => "red_card",
            MatchEventKind::Generic => "generic",
        }
    }

    /// Goal that survived (or skipped) the VAR check.
    pub fn is_goal(&self) -> bool {
        matches!(
            self,
            MatchEventKind::Goal(VarDecision::NotReviewed | VarDecision::Confirmed)
        )
    }
}

impl Serialize for MatchEventKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchEvent {
    pub minute: u8,
    #[serde(rename = "event")]
    pub kind: MatchEventKind,
    pub description: String,
    pub team: String,
    pub player: String,
    #[serde(skip)]
    pub side: MatchSide,
    #[serde(skip)]
    pub player_id: u32,
}

impl MatchEvent {
    pub fn new(
        minute: u8,
        kind: MatchEventKind,
        side: MatchSide,
        team: &str,
        player: &Player,
        description: String,
    ) -> Self {
        MatchEvent {
            minute,
            kind,
            description,
            team: team.to_string(),
            player: player.full_name.to_string(),
            side,
            player_id: player.id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::FullName;

    #[test]
    fn test_kind_names() {
        assert_eq!(MatchEventKind::Goal(VarDecision::NotReviewed).as_str(), "goal");
        assert_eq!(MatchEventKind::Goal(VarDecision::Confirmed).as_str(), "goal");
        assert_eq!(MatchEventKind::Goal(VarDecision::Overturned).as_str(), "goal_disallowed");
        assert_eq!(MatchEventKind::RedCard.as_str(), "red_card");
    }

    #[test]
    fn test_overturned_goal_does_not_count() {
        assert!(MatchEventKind::Goal(VarDecision::Confirmed).is_goal());
        assert!(!MatchEventKind::Goal(VarDecision::Overturned).is_goal());
        assert!(!MatchEventKind::Generic.is_goal());
    }

    #[test]
    fn test_event_serializes_wire_shape() {
        let player = Player::builder()
            .id(9)
            .full_name(FullName::new("Mauro", "Icardi"))
            .position("Striker")
            .overall_rating(82)
            .build()
            .unwrap();
        let event = MatchEvent::new(
            17,
            MatchEventKind::YellowCard,
            MatchSide::Second,
            "Galatasaray",
            &player,
            "booked".to_string(),
        );

        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "minute": 17,
                "event": "yellow_card",
                "description": "booked",
                "team": "Galatasaray",
                "player": "Mauro Icardi"
            })
        );
    }
}
