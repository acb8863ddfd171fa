use crate::r#match::{MatchEvent, MatchEventKind, MatchSide, VarDecision};
use crate::utils::RandomUtils;
use rand::RngExt;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;

/// Fixed phrase tables used to render events and post-match remarks.
#[derive(Debug)]
pub struct PhraseBook {
    pub actions: &'static [&'static str],
    pub reactions: &'static [&'static str],
    pub coach_win: &'static [&'static str],
    pub coach_lose: &'static [&'static str],
    pub coach_draw: &'static [&'static str],
}

impl PhraseBook {
    pub const STANDARD: PhraseBook = PhraseBook {
        actions: &[
            "fired in a stunning shot",
            "sent in a cross",
            "brought the ball under control",
            "dribbled past the defence",
            "hit a powerful shot",
            "burst forward at pace",
            "broke into the box",
            "played a pass",
            "tried a bicycle kick",
            "struck a volley",
            "slalomed through the defenders",
            "tried a shot from distance",
        ],
        reactions: &[
            "the keeper stood tall",
            "it came back off the post",
            "the fans are on their feet",
            "what a chance that was",
            "the ball went out of play",
            "the defence stepped in at the last moment",
            "the linesman raised the offside flag",
            "a quick counter-attack is on",
            "it was cleared off the line",
            "the crowd applauded",
        ],
        coach_win: &[
            "I am very pleased with my team's performance.",
            "I congratulate my players, they played brilliantly.",
            "We did everything we wanted on the pitch today.",
            "This win is for our supporters.",
            "We are happy to stay at the top.",
        ],
        coach_lose: &[
            "Unfortunately we could not show the game we wanted.",
            "We will learn from our mistakes.",
            "The result hurts, but we look ahead.",
            "I congratulate our opponents, they played better.",
            "This defeat must be a lesson for us.",
        ],
        coach_draw: &[
            "It was a tough match, both teams fought well.",
            "We were close to winning, but it did not happen.",
            "A draw was a fair result.",
            "I am pleased with my players' performance.",
            "I thank our supporters for backing us.",
        ],
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Commentary {
    pub minute: u8,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoachComment {
    pub coach: String,
    pub comment: String,
}

/// Post-match remarks of both coaches, serialized as a map keyed by coach name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoachComments {
    pub first: CoachComment,
    pub second: CoachComment,
}

impl CoachComments {
    pub fn get(&self, side: MatchSide) -> &CoachComment {
        side.pick(&self.first, &self.second)
    }
}

impl Serialize for CoachComments {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(&self.first.coach, &self.first.comment)?;
        map.serialize_entry(&self.second.coach, &self.second.comment)?;
        map.end()
    }
}

pub struct NarrativeGenerator<'p> {
    phrases: &'p PhraseBook,
}

impl<'p> NarrativeGenerator<'p> {
    pub fn new(phrases: &'p PhraseBook) -> Self {
        NarrativeGenerator { phrases }
    }

    /// Filler events get a random action line, everything else a fixed template.
    pub fn describe<R: RngExt>(
        &self,
        rng: &mut R,
        kind: MatchEventKind,
        minute: u8,
        player: &str,
        team: &str,
    ) -> String {
        match kind {
            MatchEventKind::Goal(VarDecision::NotReviewed) => {
                format!("{}' GOAL! {} ({}) scores!", minute, player, team)
            }
            MatchEventKind::Goal(VarDecision::Confirmed) => format!(
                "{}' GOAL! {} ({}) scores and the goal stands after a VAR check!",
                minute, player, team
            ),
            MatchEventKind::Goal(VarDecision::Overturned) => format!(
                "{}' {} ({}) puts the ball in the net, but the goal is disallowed after a VAR review!",
                minute, player, team
            ),
            MatchEventKind::YellowCard => {
                format!("{}' {} ({}) is shown a yellow card!", minute, player, team)
            }
            MatchEventKind::RedCard => {
                format!("{}' {} ({}) is sent off with a red card!", minute, player, team)
            }
            MatchEventKind::Generic => self.describe_action(rng, minute, player, team),
        }
    }

    /// Filler line built from a random action and a random reaction.
    fn describe_action<R: RngExt>(&self, rng: &mut R, minute: u8, player: &str, team: &str) -> String {
        let action = RandomUtils::choose(rng, self.phrases.actions);
        let reaction = RandomUtils::choose(rng, self.phrases.reactions);

        format!("{}' {} ({}) {}, {}!", minute, player, team, action, reaction)
    }

    /// Every event except filler, in timeline order.
    pub fn commentary(&self, events: &[MatchEvent]) -> Vec<Commentary> {
        events
            .iter()
            .filter(|event| match event.kind {
                MatchEventKind::Generic => false,
                MatchEventKind::Goal(_) | MatchEventKind::YellowCard | MatchEventKind::RedCard => true,
            })
            .map(|event| Commentary {
                minute: event.minute,
                text: event.description.clone(),
            })
            .collect()
    }

    pub fn coach_comments<R: RngExt>(
        &self,
        rng: &mut R,
        coach1: &str,
        coach2: &str,
        score1: u32,
        score2: u32,
    ) -> CoachComments {
        let (pool1, pool2) = match score1.cmp(&score2) {
            Ordering::Greater => (self.phrases.coach_win, self.phrases.coach_lose),
            Ordering::Less => (self.phrases.coach_lose, self.phrases.coach_win),
            Ordering::Equal => (self.phrases.coach_draw, self.phrases.coach_draw),
        };

        let comment1 = RandomUtils::choose(rng, pool1).to_string();
        let comment2 = RandomUtils::choose(rng, pool2).to_string();

        CoachComments {
            first: CoachComment {
                coach: coach1.to_string(),
                comment: comment1,
            },
            second: CoachComment {
                coach: coach2.to_string(),
                comment: comment2,
            },
        }
    }
}

impl Default for NarrativeGenerator<'static> {
    fn default() -> Self {
        NarrativeGenerator::new(&PhraseBook::STANDARD)
    }
}
