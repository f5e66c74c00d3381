use crate::model::{Card, Color, Rank};

/// Read-only view of a set-typed card sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Set {
    rank: Option<Rank>,
    len: usize,
    black: usize,
    red: usize,
    joker: Option<Card>,
}

impl Set {
    pub fn new(cards: &[Card]) -> Self {
        let rank = cards.iter().find_map(|card| card.rank());
        let black = cards.iter().filter(|card| card.is_black()).count();
        Self {
            rank,
            len: cards.len(),
            black,
            red: cards.len() - black,
            joker: cards.iter().copied().find(|card| card.is_joker()),
        }
    }

    pub fn rank(&self) -> Option<Rank> {
        self.rank
    }

    /// First joker in the set, if any.
    pub fn joker(&self) -> Option<Card> {
        self.joker
    }

    /// Two black cards already present; a joker counts by its own color.
    pub fn has_two_black_cards(&self) -> bool {
        self.black >= 2
    }

    pub fn has_two_red_cards(&self) -> bool {
        self.red >= 2
    }

    pub fn has_two_of(&self, color: Color) -> bool {
        match color {
            Color::Black => self.has_two_black_cards(),
            Color::Red => self.has_two_red_cards(),
        }
    }

    /// Every card, joker included, scores the face value of the set rank.
    pub fn value(&self) -> u32 {
        self.rank
            .map(|rank| rank.points() * self.len as u32)
            .unwrap_or(0)
    }
}
