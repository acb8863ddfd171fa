use crate::error::EngineResult;
use crate::player::TeamStrength;
use crate::r#match::{
    MatchEventGenerator, MatchRequest, MatchResult, ManOfTheMatchSelector, NarrativeGenerator,
    PhraseBook, StatsAggregator, TeamStrengths,
};
use chrono::Utc;
use log::debug;
use rand::RngExt;

/// Runs a whole match: strengths, timeline, stats, man of the match and narrative.
pub struct MatchEngine<'p> {
    narrative: NarrativeGenerator<'p>,
}

impl MatchEngine<'static> {
    pub fn new() -> Self {
        MatchEngine::with_phrases(&PhraseBook::STANDARD)
    }
}

impl Default for MatchEngine<'static> {
    fn default() -> Self {
        MatchEngine::new()
    }
}

impl<'p> MatchEngine<'p> {
    pub fn with_phrases(phrases: &'p PhraseBook) -> Self {
        MatchEngine {
            narrative: NarrativeGenerator::new(phrases),
        }
    }

    pub fn simulate(&self, request: &MatchRequest) -> EngineResult<MatchResult> {
        self.play(request, &mut rand::rng())
    }

    pub fn play<R: RngExt>(&self, request: &MatchRequest, rng: &mut R) -> EngineResult<MatchResult> {
        request.validate()?;

        let (team1, team2) = (&request.team1, &request.team2);

        let strength1 = TeamStrength::calculate(&team1.name, &team1.players)?;
        let strength2 = TeamStrength::calculate(&team2.name, &team2.players)?;

        let generated = MatchEventGenerator::new(&self.narrative).generate(
            rng,
            team1,
            team2,
            (strength1, strength2),
            request.home_side(),
        );

        let (score1, score2) = (generated.score1, generated.score2);
        let events = generated.events;

        let stats = StatsAggregator::aggregate(
            rng,
            (team1.name.as_str(), team2.name.as_str()),
            (score1, score2),
            &events,
        );
        let man_of_the_match = ManOfTheMatchSelector::select(&events);
        let commentary = self.narrative.commentary(&events);
        let coach_comments =
            self.narrative
                .coach_comments(rng, &team1.coach, &team2.coach, score1, score2);

        debug!(
            "match finished: {} {} - {} {}, {} events, man of the match: {:?}",
            team1.name,
            score1,
            score2,
            team2.name,
            events.len(),
            man_of_the_match
        );

        Ok(MatchResult {
            team1: team1.name.clone(),
            team2: team2.name.clone(),
            score1,
            score2,
            team_strengths: TeamStrengths {
                team1: team1.name.clone(),
                strength1,
                team2: team2.name.clone(),
                strength2,
            },
            events,
            stats,
            man_of_the_match,
            commentary,
            coach_comments,
            date: Utc::now(),
        })
    }
}
