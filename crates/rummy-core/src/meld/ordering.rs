use crate::diagnostics::Reporter;
use crate::meld::joker::{UNRESOLVED_RANK, effective_rank};
use crate::model::{ACE_LOW, Card, Rank};

/// Position at which `card` joins a run-typed sequence.
///
/// Aces go in front unless the run already tops out at a king. Jokers go at
/// the end unless the run already ends on a high ace. Any other card lands in
/// front of the first position whose effective rank is greater than its own.
///
/// A joker whose rank cannot be resolved is reported and sorted as if it
/// outranked everything, so the new card is placed before it.
pub fn insertion_index(cards: &[Card], card: Card, reporter: Reporter<'_>) -> usize {
    if cards.is_empty() {
        return 0;
    }

    let highest = effective_rank(cards, cards.len() - 1).ok();

    if card.is_ace() && highest != Some(Rank::King.effective()) {
        return 0;
    }

    let Some(rank) = card.rank() else {
        return if highest == Some(Rank::Ace.effective()) {
            0
        } else {
            cards.len()
        };
    };

    for (index, existing) in cards.iter().enumerate() {
        let position_rank = if existing.is_joker() {
            // A lone joker being laid down: whatever comes next goes after it.
            if cards.len() == 1 {
                return 1;
            }
            match effective_rank(cards, index) {
                Ok(resolved) => resolved,
                Err(err) => {
                    reporter.error(err);
                    UNRESOLVED_RANK
                }
            }
        } else if index == 0 && existing.is_ace() {
            ACE_LOW
        } else {
            existing.rank().map(Rank::effective).unwrap_or(UNRESOLVED_RANK)
        };

        if position_rank > rank.effective() {
            return index;
        }
    }

    cards.len()
}

#[cfg(test)]
mod tests {
    use super::insertion_index;
    use crate::diagnostics::{CapturedLog, Reporter, Severity};
    use crate::error::MeldError;
    use crate::model::{Card, CardId, Color, Rank, Suit};

    fn diamonds(id: u32, rank: Rank) -> Card {
        Card::standard(CardId(id), rank, Suit::Diamonds)
    }

    fn joker(id: u32) -> Card {
        Card::joker(CardId(id), Color::Red)
    }

    fn index_for(cards: &[Card], card: Card) -> usize {
        let log = CapturedLog::new();
        let index = insertion_index(cards, card, Reporter::new("test", &log));
        assert!(log.is_empty(), "unexpected diagnostics: {:?}", log.diagnostics());
        index
    }

    #[test]
    fn first_card_goes_at_zero() {
        assert_eq!(index_for(&[], diamonds(1, Rank::Nine)), 0);
    }

    #[test]
    fn cards_slot_between_lower_and_higher_ranks() {
        let cards = [diamonds(1, Rank::Four), diamonds(2, Rank::Six)];
        assert_eq!(index_for(&cards, diamonds(3, Rank::Five)), 1);
        assert_eq!(index_for(&cards, diamonds(4, Rank::Three)), 0);
        assert_eq!(index_for(&cards, diamonds(5, Rank::Seven)), 2);
    }

    #[test]
    fn ace_goes_low_unless_run_tops_at_king() {
        let low = [
            diamonds(1, Rank::Two),
            diamonds(2, Rank::Three),
            diamonds(3, Rank::Four),
        ];
        assert_eq!(index_for(&low, diamonds(4, Rank::Ace)), 0);

        let high = [
            diamonds(1, Rank::Ten),
            diamonds(2, Rank::Jack),
            diamonds(3, Rank::Queen),
            diamonds(4, Rank::King),
        ];
        assert_eq!(index_for(&high, diamonds(5, Rank::Ace)), 4);
    }

    #[test]
    fn joker_appends_unless_run_ends_on_high_ace() {
        let plain = [diamonds(1, Rank::Six), diamonds(2, Rank::Seven)];
        assert_eq!(index_for(&plain, joker(3)), 2);

        let topped = [
            diamonds(1, Rank::Queen),
            diamonds(2, Rank::King),
            diamonds(3, Rank::Ace),
        ];
        assert_eq!(index_for(&topped, joker(4)), 0);
    }

    #[test]
    fn resolved_joker_orders_like_the_rank_it_fills() {
        let cards = [diamonds(1, Rank::Five), joker(2), diamonds(3, Rank::Seven)];
        assert_eq!(index_for(&cards, diamonds(4, Rank::Eight)), 3);
        assert_eq!(index_for(&cards, diamonds(5, Rank::Four)), 0);

        let leading = [joker(1), diamonds(2, Rank::Nine)];
        assert_eq!(index_for(&leading, diamonds(3, Rank::Ten)), 2);
        assert_eq!(index_for(&leading, diamonds(4, Rank::Seven)), 0);
    }

    #[test]
    fn lone_joker_is_followed_by_the_next_card() {
        assert_eq!(index_for(&[joker(1)], diamonds(2, Rank::Two)), 1);
    }

    #[test]
    fn opening_ace_counts_as_one() {
        let cards = [diamonds(1, Rank::Ace), diamonds(2, Rank::Two)];
        assert_eq!(index_for(&cards, diamonds(3, Rank::Three)), 2);
    }

    #[test]
    fn unresolved_jokers_are_reported_and_sorted_last() {
        let log = CapturedLog::new();
        let cards = [joker(1), joker(2)];
        let index = insertion_index(&cards, diamonds(3, Rank::Five), Reporter::new("s", &log));
        assert_eq!(index, 0);

        let entries = log.diagnostics();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].severity, Severity::Error);
        assert_eq!(
            entries[0].error,
            MeldError::UnresolvedJokerRank { index: 0, len: 2 }
        );
    }
}
