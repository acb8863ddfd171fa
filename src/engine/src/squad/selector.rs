use crate::error::{EngineError, EngineResult};
use crate::player::Player;
use crate::squad::{Formation, PositionAlternatives, Squad, SquadPlayer, STARTING_PLAYERS};
use log::{debug, warn};

pub struct SquadSelector;

const DEFAULT_BENCH_SIZE: usize = 7;

impl SquadSelector {
    /// Picks the starting lineup slot by slot and fills the bench with whoever is left.
    pub fn select(team: &str, formation: &Formation, players: &[Player]) -> EngineResult<Squad> {
        if players.is_empty() {
            return Err(EngineError::empty_roster(team));
        }

        let mut selected = vec![false; players.len()];
        let mut starting = Vec::with_capacity(STARTING_PLAYERS);

        for slot in formation.slots() {
            let candidates = Self::candidates_for_position(&slot.position, players, &selected);

            if candidates.len() < slot.count {
                warn!(
                    "{}: only {} of {} players found for position {}",
                    team,
                    candidates.len(),
                    slot.count,
                    slot.position
                );
            }

            for index in candidates.into_iter().take(slot.count) {
                selected[index] = true;

                debug!(
                    "{}: selected {} ({}) for {}",
                    team, players[index].full_name, players[index].overall_rating, slot.position
                );

                starting.push(SquadPlayer::starter(players[index].clone(), &slot.position));
            }
        }

        // Bench keeps the pool order, it is not rating sorted
        let bench: Vec<SquadPlayer> = players
            .iter()
            .zip(selected.iter())
            .filter(|(_, is_selected)| !**is_selected)
            .map(|(player, _)| SquadPlayer::substitute(player.clone()))
            .take(DEFAULT_BENCH_SIZE)
            .collect();

        debug!(
            "{}: squad selected - Main: {}, Subs: {}",
            team,
            starting.len(),
            bench.len()
        );

        Ok(Squad { starting, bench })
    }

    /// Indices of unselected players for `position`, best rated first.
    fn candidates_for_position(position: &str, players: &[Player], selected: &[bool]) -> Vec<usize> {
        let mut candidates = Self::eligible(position, players, selected);

        if candidates.is_empty() {
            for alternative in PositionAlternatives::for_position(position) {
                candidates = Self::eligible(alternative, players, selected);

                if !candidates.is_empty() {
                    debug!("position {} covered by {} players", position, alternative);
                    break;
                }
            }
        }

        // sort_by is stable, equal ratings keep pool order
        candidates.sort_by(|&a, &b| players[b].overall_rating.cmp(&players[a].overall_rating));
        candidates
    }

    fn eligible(position: &str, players: &[Player], selected: &[bool]) -> Vec<usize> {
        players
            .iter()
            .enumerate()
            .filter(|(index, player)| !selected[*index] && player.plays(position))
            .map(|(index, _)| index)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::FullName;
    use crate::squad::{GOALKEEPER, LEFT_BACK, LEFT_WINGER, STRIKER, SquadSlot};
    use std::collections::HashSet;

    fn player(id: u32, position: &str, rating: i32) -> Player {
        Player::builder()
            .id(id)
            .full_name(FullName::new("Player", id.to_string()))
            .position(position)
            .overall_rating(rating)
            .build()
            .unwrap()
    }

    fn full_team() -> Vec<Player> {
        let mut players = Vec::new();
        let mut id = 1;

        for slot in Formation::standard().slots() {
            for n in 0..=slot.count {
                players.push(player(id, &slot.position, 60 + (id as i32 % 7) + n as i32));
                id += 1;
            }
        }

        players
    }

    #[test]
    fn test_squad_selection_respects_formation() {
        let players = full_team();

        let squad = SquadSelector::select("Test", &Formation::standard(), &players).unwrap();

        assert_eq!(squad.starting.len(), 11);
        assert!(squad.is_full());
        assert!(squad.bench.len() <= DEFAULT_BENCH_SIZE);
        assert!(squad.starting.iter().all(|p| p.slot == SquadSlot::Starter));
        assert!(squad.bench.iter().all(|p| p.slot == SquadSlot::Substitute));
    }

    #[test]
    fn test_best_goalkeeper_starts() {
        let players = vec![player(1, GOALKEEPER, 60), player(2, GOALKEEPER, 80)];
        let formation = Formation::new(&[(GOALKEEPER, 1)]);

        let squad = SquadSelector::select("Test", &formation, &players).unwrap();

        assert_eq!(squad.starting.len(), 1);
        assert_eq!(squad.starting[0].player.overall_rating, 80);
        assert_eq!(squad.starting[0].selected_position.as_deref(), Some(GOALKEEPER));
        assert_eq!(squad.bench.len(), 1);
        assert_eq!(squad.bench[0].player.overall_rating, 60);
    }

    #[test]
    fn test_missing_position_leaves_slot_unfilled() {
        let players = vec![player(1, GOALKEEPER, 70), player(2, LEFT_BACK, 70)];
        let formation = Formation::new(&[(GOALKEEPER, 1), (STRIKER, 1)]);

        let squad = SquadSelector::select("Test", &formation, &players).unwrap();

        assert_eq!(squad.starting.len(), 1);
        assert_eq!(squad.starting[0].player.id, 1);
        assert_eq!(squad.bench.len(), 1);
    }

    #[test]
    fn test_winger_falls_back_to_full_back() {
        let players = vec![player(1, LEFT_BACK, 65), player(2, LEFT_BACK, 75)];
        let formation = Formation::new(&[(LEFT_WINGER, 1)]);

        let squad = SquadSelector::select("Test", &formation, &players).unwrap();

        assert_eq!(squad.starting.len(), 1);
        assert_eq!(squad.starting[0].player.id, 2);
        assert_eq!(squad.starting[0].selected_position.as_deref(), Some(LEFT_WINGER));
    }

    #[test]
    fn test_player_is_not_selected_twice() {
        let striker = Player::builder()
            .id(1)
            .full_name(FullName::new("Two", "Positions"))
            .position(STRIKER)
            .alternate_positions(&[LEFT_WINGER])
            .overall_rating(85)
            .build()
            .unwrap();
        let players = vec![striker, player(2, LEFT_WINGER, 70)];
        let formation = Formation::new(&[(STRIKER, 1), (LEFT_WINGER, 1)]);

        let squad = SquadSelector::select("Test", &formation, &players).unwrap();

        let ids: Vec<u32> = squad.starting.iter().map(|p| p.player.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert!(squad.bench.is_empty());
    }

    #[test]
    fn test_equal_ratings_keep_pool_order() {
        let players = vec![
            player(1, STRIKER, 70),
            player(2, STRIKER, 75),
            player(3, STRIKER, 70),
        ];
        let formation = Formation::new(&[(STRIKER, 2)]);

        let squad = SquadSelector::select("Test", &formation, &players).unwrap();

        let ids: Vec<u32> = squad.starting.iter().map(|p| p.player.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_bench_keeps_pool_order_and_size() {
        let mut players = vec![player(100, GOALKEEPER, 90)];
        players.extend((1..=10).map(|id| player(id, STRIKER, 50 + id as i32)));
        let formation = Formation::new(&[(GOALKEEPER, 1)]);

        let squad = SquadSelector::select("Test", &formation, &players).unwrap();

        let bench_ids: Vec<u32> = squad.bench.iter().map(|p| p.player.id).collect();
        assert_eq!(bench_ids, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_no_player_appears_twice() {
        let players = full_team();

        let squad = SquadSelector::select("Test", &Formation::standard(), &players).unwrap();

        let mut seen = HashSet::new();
        assert!(squad.players().all(|p| seen.insert(p.player.id)));
    }

    #[test]
    fn test_empty_pool_is_an_error() {
        let result = SquadSelector::select("Nobody FC", &Formation::standard(), &[]);

        assert_eq!(result, Err(EngineError::empty_roster("Nobody FC")));
    }
}
