use crate::player::Player;
use crate::r#match::{
    FIRST_MINUTE, LAST_MINUTE, MatchEvent, MatchEventKind, MatchSide, NarrativeGenerator,
    TeamSheet, VarDecision,
};
use crate::utils::RandomUtils;
use log::debug;
use rand::RngExt;
use std::collections::HashSet;

const HOME_ADVANTAGE: i32 = 3;

const VAR_REVIEW_CHANCE: f64 = 0.1;
const VAR_OVERTURN_CHANCE: f64 = 0.3;

const YELLOW_CARDS_MEAN: f64 = 5.0;
const YELLOW_CARDS_STD_DEV: f64 = 1.0;
const RED_CARDS_MEAN: f64 = 0.5;
const RED_CARDS_STD_DEV: f64 = 0.5;

const FILLER_EVENTS: usize = 20;

const MINUTES_IN_MATCH: usize = LAST_MINUTE as usize;

#[derive(Debug, Clone)]
pub struct GeneratedEvents {
    pub events: Vec<MatchEvent>,
    pub score1: u32,
    pub score2: u32,
}

pub struct MatchEventGenerator<'n, 'p> {
    narrative: &'n NarrativeGenerator<'p>,
}

impl<'n, 'p> MatchEventGenerator<'n, 'p> {
    pub fn new(narrative: &'n NarrativeGenerator<'p>) -> Self {
        MatchEventGenerator { narrative }
    }

    pub fn generate<R: RngExt>(
        &self,
        rng: &mut R,
        team1: &TeamSheet,
        team2: &TeamSheet,
        strengths: (i32, i32),
        home: Option<MatchSide>,
    ) -> GeneratedEvents {
        let (strength1, strength2) = Self::apply_home_advantage(strengths, home);
        let (goals1, goals2) = Self::sample_goal_counts(rng, strength1, strength2);

        debug!(
            "{} ({}) vs {} ({}): sampled goals {}-{}",
            team1.name, strength1, team2.name, strength2, goals1, goals2
        );

        let mut events = Vec::new();

        events.extend(self.goal_events(rng, MatchSide::First, team1, goals1));
        events.extend(self.goal_events(rng, MatchSide::Second, team2, goals2));
        events.extend(self.card_events(rng, team1, team2));

        let used_minutes: HashSet<u8> = events.iter().map(|event| event.minute).collect();
        events.extend(self.filler_events(rng, team1, team2, used_minutes));

        // Stable: goals, then cards, then filler on equal minutes
        events.sort_by_key(|event| event.minute);

        let score1 = Self::count_goals(&events, MatchSide::First);
        let score2 = Self::count_goals(&events, MatchSide::Second);

        GeneratedEvents {
            events,
            score1,
            score2,
        }
    }

    fn apply_home_advantage((strength1, strength2): (i32, i32), home: Option<MatchSide>) -> (i32, i32) {
        match home {
            Some(MatchSide::First) => (strength1 + HOME_ADVANTAGE, strength2),
            Some(MatchSide::Second) => (strength1, strength2 + HOME_ADVANTAGE),
            None => (strength1, strength2),
        }
    }

    /// The stronger side scores at least once, an even match favours the second side.
    pub fn sample_goal_counts<R: RngExt>(rng: &mut R, strength1: i32, strength2: i32) -> (usize, usize) {
        let difference = (strength1 - strength2) as f64;

        let (goals1, goals2) = if difference > 0.0 {
            let goals1 = RandomUtils::rounded_normal(rng, 2.0 + difference / 10.0, 1.0, 1);
            let goals2 = RandomUtils::rounded_normal(rng, 1.0, 1.0, 0);
            (goals1, goals2)
        } else {
            let goals1 = RandomUtils::rounded_normal(rng, 1.0, 1.0, 0);
            let goals2 = RandomUtils::rounded_normal(rng, 2.0 - difference / 10.0, 1.0, 1);
            (goals1, goals2)
        };

        (
            (goals1 as usize).min(MINUTES_IN_MATCH),
            (goals2 as usize).min(MINUTES_IN_MATCH),
        )
    }

    fn goal_events<R: RngExt>(
        &self,
        rng: &mut R,
        side: MatchSide,
        team: &TeamSheet,
        goals: usize,
    ) -> Vec<MatchEvent> {
        // Only this team's own goal minutes are kept distinct
        let minutes = Self::distinct_minutes(rng, goals);

        minutes
            .into_iter()
            .map(|minute| {
                let scorer = RandomUtils::choose(rng, &team.players);
                let decision = Self::var_review(rng);

                if decision != VarDecision::NotReviewed {
                    debug!("{}' VAR review for {}: {:?}", minute, scorer.full_name, decision);
                }

                self.event(rng, minute, MatchEventKind::Goal(decision), side, team, scorer)
            })
            .collect()
    }

    fn var_review<R: RngExt>(rng: &mut R) -> VarDecision {
        if !RandomUtils::chance(rng, VAR_REVIEW_CHANCE) {
            return VarDecision::NotReviewed;
        }

        if RandomUtils::chance(rng, VAR_OVERTURN_CHANCE) {
            VarDecision::Overturned
        } else {
            VarDecision::Confirmed
        }
    }

    fn card_events<R: RngExt>(&self, rng: &mut R, team1: &TeamSheet, team2: &TeamSheet) -> Vec<MatchEvent> {
        let yellow_cards = RandomUtils::rounded_normal(rng, YELLOW_CARDS_MEAN, YELLOW_CARDS_STD_DEV, 0) as usize;
        let red_cards = RandomUtils::rounded_normal(rng, RED_CARDS_MEAN, RED_CARDS_STD_DEV, 0) as usize;

        let red_cards = red_cards.min(MINUTES_IN_MATCH);
        let yellow_cards = yellow_cards.min(MINUTES_IN_MATCH - red_cards);

        // Goal minutes are not excluded here
        let minutes = Self::distinct_minutes(rng, yellow_cards + red_cards);

        minutes
            .into_iter()
            .enumerate()
            .map(|(index, minute)| {
                let kind = if index < red_cards {
                    MatchEventKind::RedCard
                } else {
                    MatchEventKind::YellowCard
                };

                let (side, team, player) = Self::random_player(rng, team1, team2);

                self.event(rng, minute, kind, side, team, player)
            })
            .collect()
    }

    fn filler_events<R: RngExt>(
        &self,
        rng: &mut R,
        team1: &TeamSheet,
        team2: &TeamSheet,
        used_minutes: HashSet<u8>,
    ) -> Vec<MatchEvent> {
        let free_minutes = MINUTES_IN_MATCH - used_minutes.len();
        let count = FILLER_EVENTS.min(free_minutes);

        let mut used_minutes = used_minutes;
        let mut events = Vec::with_capacity(count);

        while events.len() < count {
            let minute = Self::random_minute(rng);
            if !used_minutes.insert(minute) {
                continue;
            }

            let (side, team, player) = Self::random_player(rng, team1, team2);

            events.push(self.event(rng, minute, MatchEventKind::Generic, side, team, player));
        }

        events
    }

    fn event<R: RngExt>(
        &self,
        rng: &mut R,
        minute: u8,
        kind: MatchEventKind,
        side: MatchSide,
        team: &TeamSheet,
        player: &Player,
    ) -> MatchEvent {
        let description =
            self.narrative
                .describe(rng, kind, minute, &player.full_name.to_string(), &team.name);

        MatchEvent::new(minute, kind, side, &team.name, player, description)
    }

    fn random_player<'t, R: RngExt>(
        rng: &mut R,
        team1: &'t TeamSheet,
        team2: &'t TeamSheet,
    ) -> (MatchSide, &'t TeamSheet, &'t Player) {
        let side = if RandomUtils::chance(rng, 0.5) {
            MatchSide::First
        } else {
            MatchSide::Second
        };

        let team = side.pick(team1, team2);

        (side, team, RandomUtils::choose(rng, &team.players))
    }

    /// `count` distinct minutes in ascending order, redrawn on collision.
    fn distinct_minutes<R: RngExt>(rng: &mut R, count: usize) -> Vec<u8> {
        let count = count.min(MINUTES_IN_MATCH);

        let mut minutes: Vec<u8> = Vec::with_capacity(count);

        while minutes.len() < count {
            let minute = Self::random_minute(rng);
            if !minutes.contains(&minute) {
                minutes.push(minute);
            }
        }

        minutes.sort_unstable();
        minutes
    }

    fn random_minute<R: RngExt>(rng: &mut R) -> u8 {
        rng.random_range(FIRST_MINUTE..=LAST_MINUTE)
    }

    fn count_goals(events: &[MatchEvent], side: MatchSide) -> u32 {
        events
            .iter()
            .filter(|event| event.side == side && event.kind.is_goal())
            .count() as u32
    }
}
