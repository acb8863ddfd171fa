pub mod error;
pub mod league;
pub mod r#match;
pub mod player;
pub mod shared;
pub mod squad;
pub mod transfers;
pub mod utils;

pub use error::{EngineError, EngineResult};
pub use league::{League, LeagueBuilder, LeagueTeam, LeagueTeamInput};
pub use r#match::{
    CoachComment, CoachComments, Commentary, GeneratedEvents, GoalScorer, ManOfTheMatchSelector,
    MatchEngine, MatchEvent, MatchEventGenerator, MatchEventKind, MatchRequest, MatchResult,
    MatchSide, MatchStats, NarrativeGenerator, PhraseBook, StatsAggregator, TeamSheet, TeamStats,
    TeamStrengths, VarDecision,
};
pub use player::{Player, PlayerBuilder, PlayerPosition, PlayerStrength, PlayerTeam, TeamStrength};
pub use shared::FullName;
pub use squad::{
    Formation, FormationSlot, PositionAlternatives, Squad, SquadPlayer, SquadSelector, SquadSlot,
};
pub use transfers::{TransferListBuilder, TransferListing, TransferTier};
pub use utils::{RandomUtils, TimeEstimation};
