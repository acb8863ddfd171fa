use crate::r#match::{CoachComments, Commentary, MatchEvent, MatchSide, MatchStats};
use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub team1: String,
    pub team2: String,
    pub score1: u32,
    pub score2: u32,
    pub team_strengths: TeamStrengths,
    pub events: Vec<MatchEvent>,
    pub stats: MatchStats,
    pub man_of_the_match: Option<String>,
    pub commentary: Vec<Commentary>,
    pub coach_comments: CoachComments,
    pub date: DateTime<Utc>,
}

/// Team strengths before the home bonus, serialized as a map keyed by team name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamStrengths {
    pub team1: String,
    pub strength1: i32,
    pub team2: String,
    pub strength2: i32,
}

impl TeamStrengths {
    pub fn get(&self, side: MatchSide) -> i32 {
        side.pick(self.strength1, self.strength2)
    }
}

impl Serialize for TeamStrengths {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(&self.team1, &self.strength1)?;
        map.serialize_entry(&self.team2, &self.strength2)?;
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoalScorer {
    pub minute: u8,
    pub team: String,
    pub player: String,
}

impl MatchResult {
    pub fn score(&self, side: MatchSide) -> u32 {
        side.pick(self.score1, self.score2)
    }

    pub fn winner(&self) -> Option<MatchSide> {
        match self.score1.cmp(&self.score2) {
            std::cmp::Ordering::Greater => Some(MatchSide::First),
            std::cmp::Ordering::Less => Some(MatchSide::Second),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Goals that stood, in timeline order.
    pub fn goal_scorers(&self) -> Vec<GoalScorer> {
        self.events
            .iter()
            .filter(|event| event.kind.is_goal())
            .map(|event| GoalScorer {
                minute: event.minute,
                team: event.team.clone(),
                player: event.player.clone(),
            })
            .collect()
    }
}
