use crate::player::Player;
use crate::squad::Formation;
use log::debug;
use rand::RngExt;
use serde::Serialize;
use std::ops::RangeInclusive;

/// Prices are drawn in whole millions.
const PRICE_UNIT: u64 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferTier {
    Low,
    Mid,
    High,
}

impl TransferTier {
    pub const ALL: [TransferTier; 3] = [TransferTier::Low, TransferTier::Mid, TransferTier::High];

    pub fn for_rating(overall_rating: i32) -> Self {
        match overall_rating {
            r if r < 65 => TransferTier::Low,
            r if r < 80 => TransferTier::Mid,
            _ => TransferTier::High,
        }
    }

    /// Players listed per position from this tier.
    pub fn quota(&self) -> usize {
        match self {
            TransferTier::Low => 2,
            TransferTier::Mid => 5,
            TransferTier::High => 3,
        }
    }

    /// Price range in millions.
    pub fn price_range(&self) -> RangeInclusive<u64> {
        match self {
            TransferTier::Low => 1..=5,
            TransferTier::Mid => 5..=15,
            TransferTier::High => 15..=30,
        }
    }

    pub fn random_price<R: RngExt>(&self, rng: &mut R) -> u64 {
        rng.random_range(self.price_range()) * PRICE_UNIT
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferListing {
    pub player_id: u32,
    pub player_name: String,
    pub position: String,
    pub overall_rating: i32,
    pub price: u64,
}

pub struct TransferListBuilder;

impl TransferListBuilder {
    /// Lists a fixed number of players per tier for every formation position.
    /// Prices are drawn again on every call.
    pub fn build<R: RngExt>(formation: &Formation, players: &[Player], rng: &mut R) -> Vec<TransferListing> {
        let mut listings = Vec::new();

        for position in formation.positions() {
            let eligible: Vec<&Player> = players.iter().filter(|p| p.plays(position)).collect();

            for tier in TransferTier::ALL {
                let tier_players = eligible
                    .iter()
                    .filter(|p| TransferTier::for_rating(p.overall_rating) == tier)
                    .take(tier.quota());

                for player in tier_players {
                    listings.push(TransferListing {
                        player_id: player.id,
                        player_name: player.full_name.to_string(),
                        position: position.to_string(),
                        overall_rating: player.overall_rating,
                        price: tier.random_price(rng),
                    });
                }
            }
        }

        debug!("transfer list built: {} listings", listings.len());

        listings
    }
}
