use crate::error::MeldError;
use crate::model::{ACE_LOW, Card, Rank};

/// Placeholder rank for a joker that cannot be resolved. Sorts above an ace.
pub const UNRESOLVED_RANK: i32 = Rank::Ace.effective() + 1;

/// Infers the rank the joker at `index` stands for.
///
/// The nearest non-joker below wins; an ace in the first position counts as
/// low. Without one, the nearest non-joker above is used.
pub fn resolve_joker_rank(cards: &[Card], index: usize) -> Result<i32, MeldError> {
    if let Some(below) = nearest_below(cards, index) {
        return Ok(anchor_rank(cards, below) + (index - below) as i32);
    }
    if let Some(above) = nearest_above(cards, index) {
        return Ok(anchor_rank(cards, above) - (above - index) as i32);
    }
    Err(MeldError::UnresolvedJokerRank {
        index,
        len: cards.len(),
    })
}

/// Rank a position contributes to a run: its own rank, an ace in the first
/// position as 1, or a joker's resolved rank.
pub fn effective_rank(cards: &[Card], index: usize) -> Result<i32, MeldError> {
    match cards[index].rank() {
        Some(_) => Ok(anchor_rank(cards, index)),
        None => resolve_joker_rank(cards, index),
    }
}

/// Same arithmetic as [`resolve_joker_rank`], but prefers the anchor above.
pub(crate) fn represented_rank(cards: &[Card], index: usize) -> Result<i32, MeldError> {
    if let Some(above) = nearest_above(cards, index) {
        return Ok(anchor_rank(cards, above) - (above - index) as i32);
    }
    if let Some(below) = nearest_below(cards, index) {
        return Ok(anchor_rank(cards, below) + (index - below) as i32);
    }
    Err(MeldError::UnresolvedJokerRank {
        index,
        len: cards.len(),
    })
}

/// True when an effective run rank is the slot a card of `rank` would take.
pub fn stands_for(effective: i32, rank: Rank) -> bool {
    effective == rank.effective() || (rank == Rank::Ace && effective == ACE_LOW)
}

pub(crate) fn nearest_below(cards: &[Card], index: usize) -> Option<usize> {
    (0..index.min(cards.len())).rev().find(|&i| !cards[i].is_joker())
}

pub(crate) fn nearest_above(cards: &[Card], index: usize) -> Option<usize> {
    (index + 1..cards.len()).find(|&i| !cards[i].is_joker())
}

fn anchor_rank(cards: &[Card], index: usize) -> i32 {
    match cards[index].rank() {
        Some(Rank::Ace) if index == 0 => ACE_LOW,
        Some(rank) => rank.effective(),
        None => UNRESOLVED_RANK,
    }
}
