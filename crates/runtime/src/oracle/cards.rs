//! Card oracle implementing [`game_core::CardOracle`].

use std::collections::HashMap;

use game_content::League;
use game_core::{Card, CardKind, CardOracle, PlayerId};

/// Oracle holding every rostered player's batter or pitcher card.
pub struct CardOracleImpl {
    cards: HashMap<(PlayerId, CardKind), Card>,
}

impl CardOracleImpl {
    /// Create an empty oracle.
    pub fn new() -> Self {
        Self {
            cards: HashMap::new(),
        }
    }

    /// Expands every profile of `league` into a card.
    pub fn from_league(league: &League) -> Self {
        let mut oracle = Self::new();
        for (player, kind, card) in league.cards() {
            oracle.add(player, kind, card);
        }
        oracle
    }

    /// Add (or replace) a card.
    pub fn add(&mut self, player: PlayerId, kind: CardKind, card: Card) {
        self.cards.insert((player, kind), card);
    }

    /// Cards with at least one empty cell, as `(player, kind)` pairs.
    pub fn incomplete(&self) -> Vec<(PlayerId, CardKind)> {
        let mut incomplete: Vec<_> = self
            .cards
            .iter()
            .filter(|(_, card)| !card.is_complete())
            .map(|((player, kind), _)| (player.clone(), *kind))
            .collect();
        incomplete.sort_by(|a, b| a.0.cmp(&b.0));
        incomplete
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for CardOracleImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl CardOracle for CardOracleImpl {
    fn card(&self, player: &PlayerId, kind: CardKind) -> Option<Card> {
        self.cards.get(&(player.clone(), kind)).cloned()
    }
}
