use crate::r#match::{MatchEvent, MatchEventKind, MatchSide};
use crate::utils::RandomUtils;
use rand::RngExt;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

const FIRST_TEAM_BASE_SHOTS: f64 = 10.0;
const SECOND_TEAM_BASE_SHOTS: f64 = 8.0;
const SHOTS_PER_GOAL: f64 = 2.0;
const SHOTS_STD_DEV: f64 = 2.0;

const THROW_INS_MEAN: f64 = 15.0;
const THROW_INS_STD_DEV: f64 = 3.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStats {
    #[serde(skip)]
    pub team: String,
    pub shots: u32,
    pub possession: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
    pub throw_ins: u32,
}

/// Stats of both teams, serialized as a map keyed by team name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchStats {
    pub team1: TeamStats,
    pub team2: TeamStats,
}

impl MatchStats {
    pub fn get(&self, side: MatchSide) -> &TeamStats {
        side.pick(&self.team1, &self.team2)
    }
}

impl Serialize for MatchStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(&self.team1.team, &self.team1)?;
        map.serialize_entry(&self.team2.team, &self.team2)?;
        map.end()
    }
}

pub struct StatsAggregator;

impl StatsAggregator {
    /// Shot bases depend on argument order, not on which team won.
    pub fn aggregate<R: RngExt>(
        rng: &mut R,
        teams: (&str, &str),
        score: (u32, u32),
        events: &[MatchEvent],
    ) -> MatchStats {
        let (goals1, goals2) = score;

        let shots1 = Self::shots(rng, FIRST_TEAM_BASE_SHOTS, goals1);
        let shots2 = Self::shots(rng, SECOND_TEAM_BASE_SHOTS, goals2);

        let possession1 = Self::possession(goals1, goals2);
        let possession2 = 100 - possession1;

        let throw_ins1 = Self::throw_ins(rng);
        let throw_ins2 = Self::throw_ins(rng);

        let (yellow1, red1) = Self::cards(events, MatchSide::First);
        let (yellow2, red2) = Self::cards(events, MatchSide::Second);

        MatchStats {
            team1: TeamStats {
                team: teams.0.to_string(),
                shots: shots1,
                possession: possession1,
                yellow_cards: yellow1,
                red_cards: red1,
                throw_ins: throw_ins1,
            },
            team2: TeamStats {
                team: teams.1.to_string(),
                shots: shots2,
                possession: possession2,
                yellow_cards: yellow2,
                red_cards: red2,
                throw_ins: throw_ins2,
            },
        }
    }

    pub fn possession(goals1: u32, goals2: u32) -> u32 {
        let difference = goals1 as f64 - goals2 as f64;
        let total = (goals1 + goals2 + 1) as f64;

        (50.0 + (difference / total) * 10.0).round() as u32
    }

    fn shots<R: RngExt>(rng: &mut R, base: f64, goals: u32) -> u32 {
        RandomUtils::rounded_normal(rng, base + SHOTS_PER_GOAL * goals as f64, SHOTS_STD_DEV, 0) as u32
    }

    fn throw_ins<R: RngExt>(rng: &mut R) -> u32 {
        RandomUtils::rounded_normal(rng, THROW_INS_MEAN, THROW_INS_STD_DEV, 0) as u32
    }

    fn cards(events: &[MatchEvent], side: MatchSide) -> (u32, u32) {
        events
            .iter()
            .filter(|event| event.side == side)
            .fold((0, 0), |(yellow, red), event| match event.kind {
                MatchEventKind::YellowCard => (yellow + 1, red),
                MatchEventKind::RedCard => (yellow, red + 1),
                MatchEventKind::Goal(_) | MatchEventKind::Generic => (yellow, red),
            })
    }
}
