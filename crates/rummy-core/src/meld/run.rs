use crate::meld::joker::effective_rank;
use crate::model::{ACE_LOW, Card, Color, Rank, Suit};

/// Read-only view of a run-typed card sequence.
///
/// Built on demand from the slot's cards; nothing here is cached between
/// mutations. Boundary ranks are effective ranks, so an opening ace reads as
/// 1 and a closing ace as 14.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    suit: Option<Suit>,
    color: Option<Color>,
    ranks: Vec<Option<i32>>,
}

impl Run {
    pub fn new(cards: &[Card]) -> Self {
        let suit = cards.iter().find_map(|card| card.suit());
        let color = suit
            .map(Suit::color)
            .or_else(|| cards.first().map(|card| card.color()));
        let ranks = (0..cards.len())
            .map(|index| effective_rank(cards, index).ok())
            .collect();
        Self { suit, color, ranks }
    }

    pub fn suit(&self) -> Option<Suit> {
        self.suit
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Effective rank of every position; `None` for unresolvable jokers.
    pub fn effective_ranks(&self) -> &[Option<i32>] {
        &self.ranks
    }

    pub fn highest(&self) -> Option<i32> {
        self.ranks.last().copied().flatten()
    }

    pub fn lowest(&self) -> Option<i32> {
        self.ranks.first().copied().flatten()
    }

    pub fn highest_rank(&self) -> Option<Rank> {
        self.highest().and_then(Rank::from_effective)
    }

    pub fn lowest_rank(&self) -> Option<Rank> {
        self.lowest().and_then(Rank::from_effective)
    }

    /// Opens with a low ace and closes with a high one; nothing can extend it.
    pub fn is_ace_bounded(&self) -> bool {
        self.lowest() == Some(ACE_LOW) && self.highest() == Some(Rank::Ace.effective())
    }

    /// Sum of effective ranks. Unresolved positions contribute nothing.
    pub fn value(&self) -> u32 {
        self.ranks
            .iter()
            .flatten()
            .map(|&rank| u32::try_from(rank).unwrap_or(0))
            .sum()
    }
}
