use crate::r#match::{MatchEvent, MatchEventKind, MatchSide, VarDecision};

const GOAL_POINTS: u32 = 5;
const ACTION_POINTS: u32 = 1;

struct Contribution<'e> {
    side: MatchSide,
    player_id: u32,
    player: &'e str,
    points: u32,
}

pub struct ManOfTheMatchSelector;

impl ManOfTheMatchSelector {
    /// Highest contribution wins, the first player to reach it keeps it on ties.
    pub fn select(events: &[MatchEvent]) -> Option<String> {
        let mut contributions: Vec<Contribution> = Vec::new();

        for event in events {
            let points = Self::points(event.kind);
            if points == 0 {
                continue;
            }

            match contributions
                .iter_mut()
                .find(|c| c.side == event.side && c.player_id == event.player_id)
            {
                Some(contribution) => contribution.points += points,
                None => contributions.push(Contribution {
                    side: event.side,
                    player_id: event.player_id,
                    player: &event.player,
                    points,
                }),
            }
        }

        let mut best: Option<&Contribution> = None;
        let mut max_points = 0;

        for contribution in &contributions {
            if contribution.points > max_points {
                max_points = contribution.points;
                best = Some(contribution);
            }
        }

        best.map(|contribution| contribution.player.to_string())
    }

    fn points(kind: MatchEventKind) -> u32 {
        match kind {
            MatchEventKind::Goal(VarDecision::NotReviewed | VarDecision::Confirmed) => GOAL_POINTS,
            MatchEventKind::Generic => ACTION_POINTS,
            MatchEventKind::Goal(VarDecision::Overturned)
            | MatchEventKind::YellowCard
            | MatchEventKind::RedCard => 0,
        }
    }
}
